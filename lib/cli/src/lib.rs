//! The hostcall reference driver.
//!
//! Each subcommand exercises one service of the emulation core through a
//! fresh [`hostcall::HostEnv`] and prints a stable, line-oriented result.

#![deny(
    missing_docs,
    dead_code,
    nonstandard_style,
    unused_mut,
    unused_variables,
    unused_unsafe,
    unreachable_patterns
)]

pub mod commands;
pub mod logging;

/// Version number of this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Logging for the reference driver.

use std::io::IsTerminal;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs a subscriber filtered by `$RUST_LOG`; nothing is logged when it
/// is unset.
///
/// Events go to stderr, leaving stdout to command output. Each syscall's
/// `ret` event already carries its outcome, so span lifecycle events and
/// timestamps are left out.
pub fn set_up_logging() {
    let fmt_layer = fmt::layer()
        .without_time()
        .with_ansi(should_emit_colors())
        .with_writer(std::io::stderr)
        .compact();

    tracing_subscriber::registry()
        .with(EnvFilter::builder().from_env_lossy())
        .with(fmt_layer)
        .init();
}

fn should_emit_colors() -> bool {
    std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none()
}

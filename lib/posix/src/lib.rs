//! Host-side emulation of a small POSIX surface for sandboxed guests.
//!
//! A dispatcher decodes guest requests and calls the functions in
//! [`syscalls`] against a [`HostEnv`], one per host session. Every call
//! returns either its value or a single [`HostError`] whose [`Errno`] the
//! guest can branch on.
//!
//! ```no_run
//! use hostcall::{syscalls, Errno, HostEnv};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let env = HostEnv::builder().root(".").build()?;
//! match syscalls::dir_open(&env, "notes.txt".as_ref()) {
//!     Ok(fd) => {
//!         while let Some(entry) = syscalls::dir_next(&env, fd)? {
//!             println!("./{}", entry.name_lossy());
//!         }
//!         syscalls::dir_close(&env, fd)?;
//!     }
//!     Err(err) if err.errno() == Errno::Notdir => println!("ENOTDIR"),
//!     Err(err) => println!("{err}"),
//! }
//! # Ok(())
//! # }
//! ```

pub mod counter;
mod error;
pub mod fs;
pub mod poll;
pub mod runtime;
mod state;
pub mod syscalls;

pub use hostcall_types::{
    Errno, Fd, Filetype, ROOT_FILENO, STDERR_FILENO, STDIN_FILENO, STDOUT_FILENO,
};

pub use crate::{
    counter::SharedCounter,
    error::{classify, HostError, HostResult},
    fs::{DirEntry, OpenOptions, OpenOptionsConfig, Pipe, VirtualFile},
    poll::PollTimeout,
    runtime::{TokioTaskManager, VirtualTaskManager},
    state::{HostEnv, HostEnvBuilder, HostEnvCreationError, DEFAULT_POLL_INTERVAL},
};

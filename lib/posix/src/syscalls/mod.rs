//! The emulated calls, one per module.
//!
//! Every call takes the session it acts on and returns exactly one outcome:
//! the value on success or a [`HostError`](crate::HostError) carrying the
//! result code.

mod counter_increment;
mod counter_read;
mod dir_close;
mod dir_next;
mod dir_open;
mod dir_rewind;
mod dir_seek;
mod dir_tell;
mod fd_close;
mod fd_filetype;
mod fd_isatty;
mod fd_open;
mod fd_read;
mod fd_write;
mod poll_readable;
mod thread_sleep;

pub(crate) use std::{path::Path, time::Duration};

pub(crate) use hostcall_types::{Errno, Fd, Filetype};
pub(crate) use tracing::instrument;

pub use self::{
    counter_increment::*, counter_read::*, dir_close::*, dir_next::*, dir_open::*,
    dir_rewind::*, dir_seek::*, dir_tell::*, fd_close::*, fd_filetype::*, fd_isatty::*,
    fd_open::*, fd_read::*, fd_write::*, poll_readable::*, thread_sleep::*,
};
pub(crate) use crate::{
    fs::{DirEntry, DirStream, FdEntry, HostFile, OpenOptionsConfig},
    poll::PollTimeout,
    runtime::VirtualTaskManagerExt,
    HostEnv, HostResult,
};

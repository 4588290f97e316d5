//! Normalization of host failures into [`Errno`] result codes.

use std::io;

use hostcall_types::Errno;
use thiserror::Error;

/// The outcome of a failed emulated call: exactly one result code, plus the
/// text a caller should show for it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct HostError {
    errno: Errno,
    message: String,
}

pub type HostResult<T> = Result<T, HostError>;

impl HostError {
    pub fn new(errno: Errno, message: impl Into<String>) -> Self {
        Self {
            errno,
            message: message.into(),
        }
    }

    pub fn errno(&self) -> Errno {
        self.errno
    }

    /// Host-native description when the failure came from the host,
    /// otherwise the generic text of the code.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<Errno> for HostError {
    fn from(errno: Errno) -> Self {
        Self::new(errno, errno.message())
    }
}

impl From<io::Error> for HostError {
    fn from(err: io::Error) -> Self {
        classify(&err)
    }
}

impl From<HostError> for Errno {
    fn from(err: HostError) -> Self {
        err.errno
    }
}

/// Maps a host error onto a result code.
///
/// Conditions without a dedicated code become [`Errno::Io`]; the host's own
/// description is kept in every case.
pub fn classify(err: &io::Error) -> HostError {
    let errno = err
        .raw_os_error()
        .and_then(errno_from_raw)
        .unwrap_or_else(|| errno_from_kind(err.kind()));
    HostError::new(errno, host_message(err))
}

#[cfg(unix)]
fn errno_from_raw(code: i32) -> Option<Errno> {
    let errno = match code {
        libc::ENOTDIR => Errno::Notdir,
        libc::ENOENT => Errno::Noent,
        libc::EACCES => Errno::Access,
        libc::EPERM => Errno::Perm,
        libc::EBADF => Errno::Badf,
        libc::EISDIR => Errno::Isdir,
        libc::EINTR => Errno::Intr,
        libc::EEXIST => Errno::Exist,
        libc::EINVAL => Errno::Inval,
        libc::ENOTEMPTY => Errno::Notempty,
        libc::ELOOP => Errno::Loop,
        libc::ENAMETOOLONG => Errno::Nametoolong,
        libc::EROFS => Errno::Rofs,
        libc::ENOSPC => Errno::Nospc,
        libc::EMFILE => Errno::Mfile,
        libc::EPIPE => Errno::Pipe,
        libc::EAGAIN => Errno::Again,
        libc::ENOTTY => Errno::Notty,
        libc::ESPIPE => Errno::Spipe,
        _ => return None,
    };
    Some(errno)
}

#[cfg(not(unix))]
fn errno_from_raw(_code: i32) -> Option<Errno> {
    None
}

fn errno_from_kind(kind: io::ErrorKind) -> Errno {
    use io::ErrorKind;

    match kind {
        ErrorKind::NotFound => Errno::Noent,
        ErrorKind::PermissionDenied => Errno::Access,
        ErrorKind::AlreadyExists => Errno::Exist,
        ErrorKind::Interrupted => Errno::Intr,
        ErrorKind::InvalidInput => Errno::Inval,
        ErrorKind::NotADirectory => Errno::Notdir,
        ErrorKind::IsADirectory => Errno::Isdir,
        ErrorKind::DirectoryNotEmpty => Errno::Notempty,
        ErrorKind::ReadOnlyFilesystem => Errno::Rofs,
        ErrorKind::StorageFull => Errno::Nospc,
        ErrorKind::WouldBlock => Errno::Again,
        ErrorKind::BrokenPipe => Errno::Pipe,
        ErrorKind::TimedOut => Errno::Timedout,
        ErrorKind::Unsupported => Errno::Notsup,
        ErrorKind::OutOfMemory => Errno::Nomem,
        _ => Errno::Io,
    }
}

/// The std rendering of an OS error is `"<strerror text> (os error N)"`;
/// callers want just the text.
fn host_message(err: &io::Error) -> String {
    let text = err.to_string();
    match text.rsplit_once(" (os error ") {
        Some((message, _)) if err.raw_os_error().is_some() => message.to_string(),
        _ => text,
    }
}

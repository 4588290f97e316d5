use num_enum::{IntoPrimitive, TryFromPrimitive};
#[cfg(feature = "enable-serde")]
use serde::{Deserialize, Serialize};

/// Error codes returned by the emulated calls.
///
/// The numbering follows WASI preview1 so that a dispatcher can hand the
/// value straight back to a guest. Only the codes the emulation layer can
/// actually produce are listed.
#[repr(u16)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, IntoPrimitive, TryFromPrimitive)]
#[cfg_attr(feature = "enable-serde", derive(Serialize, Deserialize))]
pub enum Errno {
    /// No error occurred. System call completed successfully.
    Success = 0,
    /// Permission denied.
    Access = 2,
    /// Resource unavailable, or operation would block.
    Again = 6,
    /// Bad file descriptor.
    Badf = 8,
    /// File exists.
    Exist = 20,
    /// Interrupted function.
    Intr = 27,
    /// Invalid argument.
    Inval = 28,
    /// I/O error.
    Io = 29,
    /// Is a directory.
    Isdir = 31,
    /// Too many levels of symbolic links.
    Loop = 32,
    /// File descriptor value too large.
    Mfile = 33,
    /// Filename too long.
    Nametoolong = 37,
    /// No such file or directory.
    Noent = 44,
    /// Not enough space.
    Nomem = 48,
    /// No space left on device.
    Nospc = 51,
    /// Function not supported.
    Nosys = 52,
    /// Not a directory or a symbolic link to a directory.
    Notdir = 54,
    /// Directory not empty.
    Notempty = 55,
    /// Not supported, or operation not supported on socket.
    Notsup = 58,
    /// Inappropriate I/O control operation.
    Notty = 59,
    /// Operation not permitted.
    Perm = 63,
    /// Broken pipe.
    Pipe = 64,
    /// Read-only file system.
    Rofs = 69,
    /// Invalid seek.
    Spipe = 70,
    /// Connection timed out.
    Timedout = 73,
    /// Extension: Capabilities insufficient.
    Notcapable = 76,
}

impl Errno {
    /// The symbolic POSIX name, e.g. `ENOTDIR`.
    pub fn name(&self) -> &'static str {
        match self {
            Errno::Success => "ESUCCESS",
            Errno::Access => "EACCES",
            Errno::Again => "EAGAIN",
            Errno::Badf => "EBADF",
            Errno::Exist => "EEXIST",
            Errno::Intr => "EINTR",
            Errno::Inval => "EINVAL",
            Errno::Io => "EIO",
            Errno::Isdir => "EISDIR",
            Errno::Loop => "ELOOP",
            Errno::Mfile => "EMFILE",
            Errno::Nametoolong => "ENAMETOOLONG",
            Errno::Noent => "ENOENT",
            Errno::Nomem => "ENOMEM",
            Errno::Nospc => "ENOSPC",
            Errno::Nosys => "ENOSYS",
            Errno::Notdir => "ENOTDIR",
            Errno::Notempty => "ENOTEMPTY",
            Errno::Notsup => "ENOTSUP",
            Errno::Notty => "ENOTTY",
            Errno::Perm => "EPERM",
            Errno::Pipe => "EPIPE",
            Errno::Rofs => "EROFS",
            Errno::Spipe => "ESPIPE",
            Errno::Timedout => "ETIMEDOUT",
            Errno::Notcapable => "ENOTCAPABLE",
        }
    }

    /// The `strerror`-style description of this code.
    pub fn message(&self) -> &'static str {
        match self {
            Errno::Success => "Success",
            Errno::Access => "Permission denied",
            Errno::Again => "Resource temporarily unavailable",
            Errno::Badf => "Bad file descriptor",
            Errno::Exist => "File exists",
            Errno::Intr => "Interrupted system call",
            Errno::Inval => "Invalid argument",
            Errno::Io => "Input/output error",
            Errno::Isdir => "Is a directory",
            Errno::Loop => "Too many levels of symbolic links",
            Errno::Mfile => "Too many open files",
            Errno::Nametoolong => "File name too long",
            Errno::Noent => "No such file or directory",
            Errno::Nomem => "Cannot allocate memory",
            Errno::Nospc => "No space left on device",
            Errno::Nosys => "Function not implemented",
            Errno::Notdir => "Not a directory",
            Errno::Notempty => "Directory not empty",
            Errno::Notsup => "Operation not supported",
            Errno::Notty => "Inappropriate ioctl for device",
            Errno::Perm => "Operation not permitted",
            Errno::Pipe => "Broken pipe",
            Errno::Rofs => "Read-only file system",
            Errno::Spipe => "Illegal seek",
            Errno::Timedout => "Connection timed out",
            Errno::Notcapable => "Capabilities insufficient",
        }
    }

    pub fn is_success(&self) -> bool {
        *self == Errno::Success
    }
}

impl core::fmt::Display for Errno {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} (error {})", self.name(), *self as u16)
    }
}

impl std::error::Error for Errno {}

use std::path::{Path, PathBuf};

use hostcall_types::Errno;
use parking_lot::Mutex;

use super::{DirStream, VirtualFile};
use crate::HostResult;

/// The resource behind a descriptor.
///
/// I/O on a resource never holds the descriptor table. Files lock
/// internally per transfer; directory streams carry their own lock.
#[derive(Debug)]
pub enum Kind {
    File {
        handle: Box<dyn VirtualFile>,
    },
    Dir {
        /// Host directory the stream lists.
        host_path: PathBuf,
        /// Captured when the stream is opened. Preopened directories capture
        /// on first enumeration instead.
        stream: Mutex<Option<DirStream>>,
    },
}

#[derive(Debug)]
pub struct FdEntry {
    pub kind: Kind,
    /// Flags that determine how the [`FdEntry`] can be used.
    pub open_flags: u16,
    /// Guest path the descriptor was opened with.
    pub path: PathBuf,
    /// Stdio and the root directory. `close` leaves these bound.
    pub is_preopen: bool,
}

impl FdEntry {
    /// This [`FdEntry`] can be used with read system calls.
    pub const READ: u16 = 1;
    /// This [`FdEntry`] can be used with write system calls.
    pub const WRITE: u16 = 2;
    /// This [`FdEntry`] can append in write system calls. Note that the append
    /// permission implies the write permission.
    pub const APPEND: u16 = 4;
    /// This [`FdEntry`] deleted everything before its first write.
    pub const TRUNCATE: u16 = 8;
    /// This [`FdEntry`] may have created its file.
    pub const CREATE: u16 = 16;

    pub fn file(handle: Box<dyn VirtualFile>, open_flags: u16, path: impl Into<PathBuf>) -> Self {
        Self {
            kind: Kind::File { handle },
            open_flags,
            path: path.into(),
            is_preopen: false,
        }
    }

    pub fn dir(host_path: PathBuf, stream: Option<DirStream>, path: impl Into<PathBuf>) -> Self {
        Self {
            kind: Kind::Dir {
                host_path,
                stream: Mutex::new(stream),
            },
            open_flags: Self::READ,
            path: path.into(),
            is_preopen: false,
        }
    }

    pub fn preopened(mut self) -> Self {
        self.is_preopen = true;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_dir(&self) -> bool {
        matches!(self.kind, Kind::Dir { .. })
    }

    pub fn can_read(&self) -> bool {
        self.open_flags & Self::READ != 0
    }

    pub fn can_write(&self) -> bool {
        self.open_flags & (Self::WRITE | Self::APPEND) != 0
    }

    /// Runs `f` against the file handle, or fails with `Errno::Isdir` for
    /// directories.
    pub fn with_file<T>(
        &self,
        f: impl FnOnce(&dyn VirtualFile) -> HostResult<T>,
    ) -> HostResult<T> {
        match &self.kind {
            Kind::File { handle } => f(handle.as_ref()),
            Kind::Dir { .. } => Err(Errno::Isdir.into()),
        }
    }

    /// Runs `f` against the directory stream, capturing it first if this is a
    /// preopen that has not been listed yet. Files fail with `Errno::Notdir`.
    pub fn with_dir_stream<T>(
        &self,
        include_dots: bool,
        f: impl FnOnce(&mut DirStream) -> HostResult<T>,
    ) -> HostResult<T> {
        match &self.kind {
            Kind::Dir { host_path, stream } => {
                let mut guard = stream.lock();
                let stream = match guard.take() {
                    Some(stream) => stream,
                    None => DirStream::capture(host_path, include_dots)?,
                };
                f(guard.insert(stream))
            }
            Kind::File { .. } => Err(Errno::Notdir.into()),
        }
    }
}

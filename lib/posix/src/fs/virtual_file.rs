use std::{fmt, io};

use hostcall_types::Filetype;

use crate::HostResult;

/// A resource a descriptor can be bound to.
///
/// Every call takes `&self`. Implementations synchronise internally and only
/// for as long as the transfer itself, so a reader blocked on one context
/// never holds up readiness or terminal checks from another.
///
/// This trait relies on the resource closing when it goes out of scope via
/// `Drop`.
pub trait VirtualFile: fmt::Debug + Send + Sync + 'static {
    /// Reads into `buf`, returning `Ok(0)` at end of file.
    fn read(&self, buf: &mut [u8]) -> io::Result<usize>;

    fn write(&self, buf: &[u8]) -> io::Result<usize>;

    fn flush(&self) -> io::Result<()> {
        Ok(())
    }

    /// Number of bytes that can be read without blocking.
    ///
    /// `None` means the answer is unknown, in which case pollers either ask
    /// the host through [`VirtualFile::get_raw_fd`] or treat the file as
    /// ready. This function must not block.
    fn bytes_available_read(&self) -> HostResult<Option<usize>> {
        Ok(None)
    }

    /// Used for polling. Default returns `None` because this method cannot
    /// be implemented for most types.
    /// Returns the underlying host fd.
    fn get_raw_fd(&self) -> Option<i32> {
        None
    }

    /// Whether the resource is an interactive terminal.
    fn is_terminal(&self) -> bool {
        false
    }

    fn filetype(&self) -> Filetype {
        if self.is_terminal() {
            Filetype::CharacterDevice
        } else {
            Filetype::Unknown
        }
    }
}

//! Host standard streams, bound to descriptors 0, 1 and 2 unless a session
//! overrides them.

use std::io::{self, IsTerminal, Write};
#[cfg(unix)]
use std::os::fd::{AsRawFd, OwnedFd};

use hostcall_types::{STDERR_FILENO, STDIN_FILENO, STDOUT_FILENO};

use super::VirtualFile;

/// Input read straight from a host descriptor, the process's fd 0 unless
/// built from another one.
///
/// Nothing is buffered in user space: whatever `poll(2)` reports about the
/// descriptor is exactly what the next read sees.
#[derive(Debug)]
pub struct Stdin {
    raw_fd: i32,
    #[cfg(unix)]
    _owned: Option<OwnedFd>,
}

impl Default for Stdin {
    fn default() -> Self {
        Self {
            raw_fd: STDIN_FILENO as i32,
            #[cfg(unix)]
            _owned: None,
        }
    }
}

impl Stdin {
    /// Reads from `fd` instead of the process's stdin. The descriptor is
    /// closed with the stream.
    #[cfg(unix)]
    pub fn from_owned_fd(fd: OwnedFd) -> Self {
        Self {
            raw_fd: fd.as_raw_fd(),
            _owned: Some(fd),
        }
    }
}

impl VirtualFile for Stdin {
    #[cfg(unix)]
    fn read(&self, buf: &mut [u8]) -> io::Result<usize> {
        let read = unsafe { libc::read(self.raw_fd, buf.as_mut_ptr().cast(), buf.len()) };
        if read < 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(read as usize)
    }

    #[cfg(not(unix))]
    fn read(&self, buf: &mut [u8]) -> io::Result<usize> {
        io::Read::read(&mut io::stdin(), buf)
    }

    fn write(&self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::other("can not write to stdin"))
    }

    fn flush(&self) -> io::Result<()> {
        Err(io::Error::other("can not flush stdin"))
    }

    fn get_raw_fd(&self) -> Option<i32> {
        Some(self.raw_fd)
    }

    #[cfg(unix)]
    fn is_terminal(&self) -> bool {
        unsafe { libc::isatty(self.raw_fd) == 1 }
    }

    #[cfg(not(unix))]
    fn is_terminal(&self) -> bool {
        io::stdin().is_terminal()
    }
}

#[derive(Debug, Default)]
pub struct Stdout;

impl VirtualFile for Stdout {
    fn read(&self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::other("can not read from stdout"))
    }

    fn write(&self, buf: &[u8]) -> io::Result<usize> {
        io::stdout().write(buf)
    }

    fn flush(&self) -> io::Result<()> {
        io::stdout().flush()
    }

    fn get_raw_fd(&self) -> Option<i32> {
        Some(STDOUT_FILENO as i32)
    }

    fn is_terminal(&self) -> bool {
        io::stdout().is_terminal()
    }
}

#[derive(Debug, Default)]
pub struct Stderr;

impl VirtualFile for Stderr {
    fn read(&self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::other("can not read from stderr"))
    }

    fn write(&self, buf: &[u8]) -> io::Result<usize> {
        io::stderr().write(buf)
    }

    fn flush(&self) -> io::Result<()> {
        io::stderr().flush()
    }

    fn get_raw_fd(&self) -> Option<i32> {
        Some(STDERR_FILENO as i32)
    }

    fn is_terminal(&self) -> bool {
        io::stderr().is_terminal()
    }
}

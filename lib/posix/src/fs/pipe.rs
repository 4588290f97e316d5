use std::{
    collections::VecDeque,
    io::{self, Write},
    sync::Arc,
};

use parking_lot::Mutex;

use super::VirtualFile;
use crate::HostResult;

/// For piping stdio. Stores all output / input in a byte-vector.
///
/// Clones share the same buffer, so a test can keep one end and hand the
/// other to a session.
#[derive(Debug, Clone, Default)]
pub struct Pipe {
    buffer: Arc<Mutex<VecDeque<u8>>>,
}

impl Pipe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(data: impl AsRef<[u8]>) -> Self {
        let pipe = Self::new();
        pipe.buffer.lock().extend(data.as_ref());
        pipe
    }

    /// Drains everything written so far.
    pub fn take(&self) -> Vec<u8> {
        self.buffer.lock().drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.buffer.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Lets a test feed a pipe it handed to a session.
impl Write for Pipe {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        VirtualFile::write(&*self, buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl VirtualFile for Pipe {
    fn read(&self, buf: &mut [u8]) -> io::Result<usize> {
        let mut buffer = self.buffer.lock();
        let amt = std::cmp::min(buf.len(), buffer.len());
        for (i, byte) in buffer.drain(..amt).enumerate() {
            buf[i] = byte;
        }
        Ok(amt)
    }

    fn write(&self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().extend(buf);
        Ok(buf.len())
    }

    fn bytes_available_read(&self) -> HostResult<Option<usize>> {
        Ok(Some(self.buffer.lock().len()))
    }
}

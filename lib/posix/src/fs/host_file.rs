use std::{
    fs,
    io::{self, IsTerminal, Read, Write},
    path::{Path, PathBuf},
};

use hostcall_types::Filetype;

use super::{OpenOptionsConfig, VirtualFile};

/// A file on the host filesystem.
#[derive(Debug)]
pub struct HostFile {
    inner: fs::File,
    host_path: PathBuf,
    filetype: Filetype,
}

impl HostFile {
    pub fn open(host_path: &Path, conf: &OpenOptionsConfig) -> io::Result<Self> {
        let inner = fs::OpenOptions::new()
            .read(conf.read())
            .write(conf.write())
            .append(conf.append())
            .truncate(conf.truncate())
            .create(conf.create())
            .create_new(conf.create_new())
            .open(host_path)?;
        let file_type = inner.metadata()?.file_type();
        let filetype = if file_type.is_dir() {
            Filetype::Directory
        } else if file_type.is_file() {
            Filetype::RegularFile
        } else {
            Filetype::Unknown
        };

        Ok(Self {
            inner,
            host_path: host_path.to_path_buf(),
            filetype,
        })
    }

    pub fn host_path(&self) -> &Path {
        &self.host_path
    }
}

// `&File` does its own I/O, so no lock is needed around the handle.
impl VirtualFile for HostFile {
    fn read(&self, buf: &mut [u8]) -> io::Result<usize> {
        (&self.inner).read(buf)
    }

    fn write(&self, buf: &[u8]) -> io::Result<usize> {
        (&self.inner).write(buf)
    }

    fn flush(&self) -> io::Result<()> {
        (&self.inner).flush()
    }

    #[cfg(unix)]
    fn get_raw_fd(&self) -> Option<i32> {
        use std::os::unix::io::AsRawFd;
        Some(self.inner.as_raw_fd())
    }

    fn is_terminal(&self) -> bool {
        self.inner.is_terminal()
    }

    fn filetype(&self) -> Filetype {
        if self.is_terminal() {
            Filetype::CharacterDevice
        } else {
            self.filetype
        }
    }
}

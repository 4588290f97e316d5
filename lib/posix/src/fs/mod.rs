mod dir_stream;
mod fd;
mod fd_table;
mod host_file;
mod path;
mod pipe;
mod stdio;
mod virtual_file;

use std::path::Path;

use hostcall_types::Fd;

pub use self::{
    dir_stream::{DirEntry, DirStream},
    fd::{FdEntry, Kind},
    fd_table::FdTable,
    host_file::HostFile,
    path::resolve_under_root,
    pipe::Pipe,
    stdio::{Stderr, Stdin, Stdout},
    virtual_file::VirtualFile,
};
use crate::{HostEnv, HostResult};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OpenOptionsConfig {
    read: bool,
    write: bool,
    create_new: bool,
    create: bool,
    append: bool,
    truncate: bool,
}

impl OpenOptionsConfig {
    pub const fn read(&self) -> bool {
        self.read
    }

    pub const fn write(&self) -> bool {
        self.write
    }

    pub const fn create_new(&self) -> bool {
        self.create_new
    }

    pub const fn create(&self) -> bool {
        self.create
    }

    pub const fn append(&self) -> bool {
        self.append
    }

    pub const fn truncate(&self) -> bool {
        self.truncate
    }

    /// Whether the descriptor will accept writes.
    pub const fn would_mutate(&self) -> bool {
        self.write || self.append || self.truncate || self.create || self.create_new
    }

    /// The [`FdEntry`] flags matching this configuration.
    pub fn open_flags(&self) -> u16 {
        let mut flags = 0;
        if self.read {
            flags |= FdEntry::READ;
        }
        if self.write {
            flags |= FdEntry::WRITE;
        }
        if self.append {
            flags |= FdEntry::APPEND;
        }
        if self.truncate {
            flags |= FdEntry::TRUNCATE;
        }
        if self.create || self.create_new {
            flags |= FdEntry::CREATE;
        }
        flags
    }
}

/// Builder for [`fd_open`](crate::syscalls::fd_open), in the manner of
/// [`std::fs::OpenOptions`].
#[derive(Debug)]
pub struct OpenOptions<'a> {
    env: &'a HostEnv,
    conf: OpenOptionsConfig,
}

impl<'a> OpenOptions<'a> {
    pub fn new(env: &'a HostEnv) -> Self {
        Self {
            env,
            conf: OpenOptionsConfig::default(),
        }
    }

    pub fn get_config(&self) -> OpenOptionsConfig {
        self.conf
    }

    pub fn read(&mut self, read: bool) -> &mut Self {
        self.conf.read = read;
        self
    }

    pub fn write(&mut self, write: bool) -> &mut Self {
        self.conf.write = write;
        self
    }

    pub fn append(&mut self, append: bool) -> &mut Self {
        self.conf.append = append;
        self
    }

    pub fn truncate(&mut self, truncate: bool) -> &mut Self {
        self.conf.truncate = truncate;
        self
    }

    pub fn create(&mut self, create: bool) -> &mut Self {
        self.conf.create = create;
        self
    }

    pub fn create_new(&mut self, create_new: bool) -> &mut Self {
        self.conf.create_new = create_new;
        self
    }

    pub fn open<P: AsRef<Path>>(&mut self, path: P) -> HostResult<Fd> {
        crate::syscalls::fd_open(self.env, path.as_ref(), &self.conf)
    }
}

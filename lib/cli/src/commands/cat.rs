use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use hostcall::{syscalls, Fd, HostEnv, STDOUT_FILENO};

const CHUNK_SIZE: usize = 4096;

#[derive(Debug, Parser)]
/// The options for the `hostcall cat` subcommand
pub struct Cat {
    /// Files to concatenate, in order
    #[clap(required = true)]
    files: Vec<PathBuf>,
}

impl Cat {
    /// Execute `hostcall cat`
    ///
    /// Stops at the first file that cannot be opened or read.
    pub fn execute(&self, env: &HostEnv) -> Result<()> {
        for path in &self.files {
            let fd = env
                .new_open_options()
                .read(true)
                .open(path)
                .with_context(|| format!("unable to open \"{}\"", path.display()))?;

            let copied = copy_to_stdout(env, fd, path);
            syscalls::fd_close(env, fd)?;
            copied?;
        }

        Ok(())
    }
}

fn copy_to_stdout(env: &HostEnv, fd: Fd, path: &Path) -> Result<()> {
    let mut buf = [0u8; CHUNK_SIZE];
    loop {
        let read = syscalls::fd_read(env, fd, &mut buf)
            .with_context(|| format!("unable to read \"{}\"", path.display()))?;
        if read == 0 {
            return Ok(());
        }

        let mut pending = &buf[..read];
        while !pending.is_empty() {
            let written = syscalls::fd_write(env, STDOUT_FILENO, pending)?;
            pending = &pending[written..];
        }
    }
}

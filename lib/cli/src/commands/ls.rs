use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use hostcall::{syscalls, Errno, Fd, HostEnv};

#[derive(Debug, Parser)]
/// The options for the `hostcall ls` subcommand
pub struct Ls {
    /// Directory to list, relative to the root
    dir: PathBuf,

    /// Rewind the stream and list the directory a second time
    #[clap(value_parser = ["repeat"])]
    repeat: Option<String>,
}

impl Ls {
    /// Execute `hostcall ls`
    pub fn execute(&self, env: &HostEnv) -> Result<()> {
        let fd = match syscalls::dir_open(env, &self.dir) {
            Ok(fd) => fd,
            Err(err) if err.errno() == Errno::Notdir => {
                println!("{}", Errno::Notdir.name());
                return Ok(());
            }
            Err(err) => {
                println!("{err}");
                return Ok(());
            }
        };

        print_entries(env, fd)?;
        if self.repeat.is_some() {
            syscalls::dir_rewind(env, fd)?;
            print_entries(env, fd)?;
        }
        syscalls::dir_close(env, fd)?;

        Ok(())
    }
}

fn print_entries(env: &HostEnv, fd: Fd) -> Result<()> {
    while let Some(entry) = syscalls::dir_next(env, fd)? {
        println!("./{}", entry.name_lossy());
    }
    Ok(())
}

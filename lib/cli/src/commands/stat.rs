use anyhow::Result;
use clap::Parser;
use hostcall::{syscalls, Fd, HostEnv, ROOT_FILENO, STDERR_FILENO, STDIN_FILENO, STDOUT_FILENO};

const PROBED: [(Fd, &str); 4] = [
    (STDIN_FILENO, "stdin"),
    (STDOUT_FILENO, "stdout"),
    (STDERR_FILENO, "stderr"),
    (ROOT_FILENO, "/"),
];

#[derive(Debug, Parser)]
/// The options for the `hostcall stat` subcommand
pub struct Stat {}

impl Stat {
    /// Execute `hostcall stat`
    pub fn execute(&self, env: &HostEnv) -> Result<()> {
        for (fd, label) in PROBED {
            let is_tty = syscalls::fd_isatty(env, fd).unwrap_or_else(|err| {
                tracing::debug!(fd, %err, "treating unknown descriptor as no terminal");
                false
            });
            println!("{label} isatty: {is_tty}");
        }
        Ok(())
    }
}

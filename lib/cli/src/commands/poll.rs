use anyhow::Result;
use clap::Parser;
use hostcall::{syscalls, HostEnv, PollTimeout, STDIN_FILENO};

#[derive(Debug, Parser)]
/// The options for the `hostcall poll` subcommand
pub struct Poll {
    /// Whole seconds to wait for input
    #[clap(default_value_t = 0)]
    secs: u64,

    /// Additional microseconds to wait, below one second
    #[clap(default_value_t = 0)]
    micros: u32,
}

impl Poll {
    /// Execute `hostcall poll`
    pub fn execute(&self, env: &HostEnv) -> Result<()> {
        let timeout = PollTimeout::new(self.secs, self.micros);
        let ready = syscalls::poll_readable(env, &[STDIN_FILENO], timeout)?;

        if ready.contains(&STDIN_FILENO) {
            println!("STDIN");
        } else {
            println!("NOINPUT");
        }
        Ok(())
    }
}

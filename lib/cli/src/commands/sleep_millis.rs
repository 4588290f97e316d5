use anyhow::Result;
use clap::Parser;
use hostcall::{syscalls, HostEnv};

#[derive(Debug, Parser)]
/// The options for the `hostcall sleepmillis` subcommand
pub struct SleepMillis {
    /// How long to sleep
    #[clap(allow_negative_numbers = true)]
    millis: i64,
}

impl SleepMillis {
    /// Execute `hostcall sleepmillis`
    pub fn execute(&self, env: &HostEnv) -> Result<()> {
        match syscalls::thread_sleep(env, self.millis) {
            Ok(()) => println!("OK"),
            Err(err) => {
                tracing::debug!(millis = self.millis, %err, "sleep failed");
                println!("ERR");
            }
        }
        Ok(())
    }
}

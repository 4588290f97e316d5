//! The commands available in the hostcall driver.
mod cat;
mod ls;
mod mutex;
mod poll;
mod sleep_millis;
mod stat;

use std::{io::Write, path::PathBuf};

use clap::Parser;
use hostcall::HostEnv;

pub use self::{cat::Cat, ls::Ls, mutex::Mutex, poll::Poll, sleep_millis::SleepMillis, stat::Stat};

/// Command-line arguments for the hostcall driver.
#[derive(clap::Parser, Debug)]
#[clap(author, version)]
#[clap(
    name = "hostcall",
    about = concat!("hostcall ", env!("CARGO_PKG_VERSION")),
)]
pub struct HostcallCmd {
    /// Host directory exposed to every command as `/`
    #[clap(long, global = true, default_value = ".", env = "HOSTCALL_ROOT")]
    root: PathBuf,
    #[clap(subcommand)]
    cmd: Cmd,
}

impl HostcallCmd {
    fn execute(self) -> Result<(), anyhow::Error> {
        let HostcallCmd { root, cmd } = self;

        crate::logging::set_up_logging();

        let env = HostEnv::builder().root(&root).build()?;

        match cmd {
            Cmd::Ls(ls) => ls.execute(&env),
            Cmd::Cat(cat) => cat.execute(&env),
            Cmd::Stat(stat) => stat.execute(&env),
            Cmd::Poll(poll) => poll.execute(&env),
            Cmd::SleepMillis(sleep) => sleep.execute(&env),
            Cmd::Mutex(mutex) => mutex.execute(&env),
        }
    }

    /// The main function for the hostcall driver.
    pub fn run() {
        let code = match HostcallCmd::try_parse() {
            Ok(args) => match args.execute() {
                Ok(()) => 0,
                Err(e) => {
                    eprintln!("error: {e:#}");
                    1
                }
            },
            Err(e) => {
                // `--help` and `--version` are reported through the same path.
                let code = if e.use_stderr() { 1 } else { 0 };
                let _ = e.print();
                code
            }
        };

        let _ = std::io::stdout().flush();
        std::process::exit(code);
    }
}

#[derive(clap::Parser, Debug)]
/// The operations the hostcall driver can exercise
enum Cmd {
    /// List a directory, optionally rewinding and listing it again
    Ls(Ls),

    /// Concatenate files to stdout
    Cat(Cat),

    /// Report whether descriptors 0 to 3 refer to a terminal
    Stat(Stat),

    /// Wait for stdin to become readable
    Poll(Poll),

    /// Sleep for a number of milliseconds
    #[clap(name = "sleepmillis")]
    SleepMillis(SleepMillis),

    /// Increment the shared counter from several threads at once
    Mutex(Mutex),
}

use anyhow::{anyhow, Result};
use clap::Parser;
use hostcall::{syscalls, HostEnv, HostResult};

#[derive(Debug, Parser)]
/// The options for the `hostcall mutex` subcommand
pub struct Mutex {
    /// Number of threads incrementing the counter
    #[clap(default_value_t = 50)]
    threads: usize,

    /// Increments performed by each thread
    #[clap(default_value_t = 1000)]
    iterations: u64,
}

impl Mutex {
    /// Execute `hostcall mutex`
    pub fn execute(&self, env: &HostEnv) -> Result<()> {
        std::thread::scope(|scope| {
            let workers = (0..self.threads)
                .map(|_| {
                    scope.spawn(|| -> HostResult<()> {
                        for _ in 0..self.iterations {
                            syscalls::counter_increment(env)?;
                        }
                        Ok(())
                    })
                })
                .collect::<Vec<_>>();

            workers.into_iter().try_for_each(|worker| {
                worker
                    .join()
                    .map_err(|_| anyhow!("a counter thread panicked"))?
                    .map_err(anyhow::Error::from)
            })
        })?;

        println!("{}", syscalls::counter_read(env));
        Ok(())
    }
}

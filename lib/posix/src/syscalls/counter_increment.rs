use super::*;

/// ### `counter_increment()`
/// Adds one to the session's shared counter inside its critical section
#[instrument(level = "trace", skip_all, ret)]
pub fn counter_increment(env: &HostEnv) -> HostResult<()> {
    env.counter.increment();
    Ok(())
}

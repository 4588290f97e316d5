use super::*;

/// ### `thread_sleep()`
/// Sleeps for at least the given number of milliseconds
///
/// A zero duration still yields once to the scheduler.
/// Errors:
/// - `Errno::Inval`
///     If `millis` is negative
/// - `Errno::Io`
///     If the wait failed; it is not retried
#[instrument(level = "trace", skip_all, fields(%millis), ret)]
pub fn thread_sleep(env: &HostEnv, millis: i64) -> HostResult<()> {
    let millis = u64::try_from(millis).map_err(|_| Errno::Inval)?;
    let duration = Duration::from_millis(millis);

    env.tasks.block_on(env.tasks.sleep_now(duration))?;
    Ok(())
}

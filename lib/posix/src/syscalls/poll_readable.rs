use super::*;

/// ### `poll_readable()`
/// Wait for any of a set of descriptors to become readable
/// Inputs:
/// - `&[Fd] fds`
///     Descriptors to watch
/// - `PollTimeout timeout`
///     Upper bound on the wait. `(0, 0)` checks once without waiting.
/// Output:
/// - `Vec<Fd>`
///     The readable subset, empty if the timeout elapsed
/// Errors:
/// - `Errno::Badf`
///     If any of `fds` is not open
/// - `Errno::Inval`
///     If the microsecond part of `timeout` is a second or more
/// - `Errno::Intr`
///     If the host wait was interrupted
#[instrument(level = "debug", skip_all, fields(?fds, secs = timeout.secs, micros = timeout.micros), ret)]
pub fn poll_readable(env: &HostEnv, fds: &[Fd], timeout: PollTimeout) -> HostResult<Vec<Fd>> {
    crate::poll::poll_readable(env, fds, timeout)
}

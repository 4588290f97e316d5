use super::*;

/// ### `fd_close()`
/// Close an open file descriptor
/// Inputs:
/// - `Fd fd`
///     A file descriptor mapping to an open file or directory to close
/// Errors:
/// - `Errno::Badf`
///     If `fd` is invalid or not open
#[instrument(level = "debug", skip_all, fields(%fd), ret)]
pub fn fd_close(env: &HostEnv, fd: Fd) -> HostResult<()> {
    let entry = env.fs.resolve(fd)?;

    // Stdio and the root stay bound for the whole session. Programs that
    // blindly close every low descriptor must not lose them.
    if entry.is_preopen {
        tracing::debug!("Skipping fd_close({fd})");
        return Ok(());
    }

    env.fs.release(fd)?;
    Ok(())
}

use super::*;

/// ### `dir_close()`
/// Close a directory stream
/// Errors:
/// - `Errno::Badf`
///     If `fd` is not open
/// - `Errno::Notdir`
///     If `fd` is not a directory stream
#[instrument(level = "debug", skip_all, fields(%fd), ret)]
pub fn dir_close(env: &HostEnv, fd: Fd) -> HostResult<()> {
    let entry = env.fs.resolve(fd)?;
    if !entry.is_dir() {
        return Err(Errno::Notdir.into());
    }
    if entry.is_preopen {
        tracing::debug!("Skipping dir_close({fd})");
        return Ok(());
    }

    env.fs.release(fd)?;
    Ok(())
}

use super::*;

/// ### `dir_rewind()`
/// Restart a directory stream from its first entry
#[instrument(level = "debug", skip_all, fields(%fd), ret)]
pub fn dir_rewind(env: &HostEnv, fd: Fd) -> HostResult<()> {
    let entry = env.fs.resolve(fd)?;
    entry.with_dir_stream(env.include_dot_entries, |stream| {
        stream.rewind();
        Ok(())
    })
}

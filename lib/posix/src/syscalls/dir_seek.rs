use super::*;

/// ### `dir_seek()`
/// Move a directory stream to a position returned by [`dir_tell`]
/// Errors:
/// - `Errno::Inval`
///     If `position` is past the end of the stream
#[instrument(level = "debug", skip_all, fields(%fd, %position), ret)]
pub fn dir_seek(env: &HostEnv, fd: Fd, position: u64) -> HostResult<()> {
    let entry = env.fs.resolve(fd)?;
    entry.with_dir_stream(env.include_dot_entries, |stream| stream.seek(position))
}

use super::*;

/// ### `dir_tell()`
/// Current position of a directory stream, usable with [`dir_seek`]
#[instrument(level = "trace", skip_all, fields(%fd), ret)]
pub fn dir_tell(env: &HostEnv, fd: Fd) -> HostResult<u64> {
    let entry = env.fs.resolve(fd)?;
    entry.with_dir_stream(env.include_dot_entries, |stream| Ok(stream.tell()))
}

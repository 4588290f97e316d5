use super::*;

/// ### `dir_next()`
/// Read the next entry of a directory stream
/// Output:
/// - `Option<DirEntry>`
///     The entry, or `None` at the end of the stream
/// Errors:
/// - `Errno::Badf`
///     If `fd` is not open
/// - `Errno::Notdir`
///     If `fd` is not a directory
#[instrument(level = "trace", skip_all, fields(%fd), ret)]
pub fn dir_next(env: &HostEnv, fd: Fd) -> HostResult<Option<DirEntry>> {
    let entry = env.fs.resolve(fd)?;
    entry.with_dir_stream(env.include_dot_entries, |stream| Ok(stream.next_entry()))
}

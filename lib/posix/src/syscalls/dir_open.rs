use super::*;

/// ### `dir_open()`
/// Open a directory stream
///
/// The listing is captured here, once; later calls replay it.
/// Inputs:
/// - `&Path path`
///     Guest path of the directory
/// Output:
/// - `Fd`
///     Descriptor of the stream
/// Errors:
/// - `Errno::Notdir`
///     If `path` exists but is not a directory
/// - `Errno::Noent`
///     If `path` does not exist
#[instrument(level = "debug", skip_all, fields(path = %path.display()), ret)]
pub fn dir_open(env: &HostEnv, path: &Path) -> HostResult<Fd> {
    let host_path = env.host_path(path)?;
    let metadata = std::fs::metadata(&host_path)?;
    if !metadata.is_dir() {
        return Err(Errno::Notdir.into());
    }

    let stream = DirStream::capture(&host_path, env.include_dot_entries)?;
    tracing::trace!(entries = stream.len(), "captured directory listing");
    env.fs.allocate(FdEntry::dir(host_path, Some(stream), path))
}

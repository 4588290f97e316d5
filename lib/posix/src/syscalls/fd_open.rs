use super::*;

/// ### `fd_open()`
/// Open a file and bind it to the lowest free descriptor
/// Inputs:
/// - `&Path path`
///     Guest path of the file, resolved beneath the session root if any
/// - `&OpenOptionsConfig conf`
///     Access mode and creation flags
/// Output:
/// - `Fd`
///     The new descriptor
/// Errors:
/// - `Errno::Inval`
///     If `conf` allows neither reading nor writing
/// - `Errno::Isdir`
///     If `path` is a directory and `conf` would modify it
/// - `Errno::Notcapable`
///     If `path` climbs above the session root
///
/// A failed open never allocates a descriptor. Opening a directory read-only
/// yields a descriptor that can be listed but not read; its listing is
/// captured here, as with [`dir_open`].
#[instrument(level = "debug", skip_all, fields(path = %path.display()), ret)]
pub fn fd_open(env: &HostEnv, path: &Path, conf: &OpenOptionsConfig) -> HostResult<Fd> {
    if !(conf.read() || conf.write() || conf.append()) {
        return Err(Errno::Inval.into());
    }
    let host_path = env.host_path(path)?;

    if host_path.is_dir() {
        if conf.would_mutate() {
            return Err(Errno::Isdir.into());
        }
        let stream = DirStream::capture(&host_path, env.include_dot_entries)?;
        return env.fs.allocate(FdEntry::dir(host_path, Some(stream), path));
    }

    let file = HostFile::open(&host_path, conf)?;
    env.fs
        .allocate(FdEntry::file(Box::new(file), conf.open_flags(), path))
}

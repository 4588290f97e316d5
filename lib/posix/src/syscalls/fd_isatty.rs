use super::*;

/// ### `fd_isatty()`
/// Whether a descriptor refers to a terminal
///
/// Directories, regular files and in-memory streams are never terminals.
/// Errors:
/// - `Errno::Badf`
///     If `fd` is not open
#[instrument(level = "debug", skip_all, fields(%fd), ret)]
pub fn fd_isatty(env: &HostEnv, fd: Fd) -> HostResult<bool> {
    let entry = env.fs.resolve(fd)?;
    if entry.is_dir() {
        return Ok(false);
    }
    entry.with_file(|file| Ok(file.is_terminal()))
}

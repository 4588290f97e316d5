use super::*;

/// ### `fd_write()`
/// Write data to the file descriptor
/// Inputs:
/// - `Fd fd`
///     File descriptor to write to
/// - `&[u8] data`
///     Bytes to write
/// Output:
/// - `usize`
///     Number of bytes written
/// Errors:
/// - `Errno::Badf`
///     If `fd` is not open, or not open for writing
/// - `Errno::Isdir`
///     If `fd` is a directory
#[instrument(level = "trace", skip_all, fields(%fd, nbytes = data.len()), ret)]
pub fn fd_write(env: &HostEnv, fd: Fd, data: &[u8]) -> HostResult<usize> {
    let entry = env.fs.resolve(fd)?;
    if entry.is_dir() {
        return Err(Errno::Isdir.into());
    }
    if !entry.can_write() {
        return Err(Errno::Badf.into());
    }

    entry.with_file(|file| {
        let written = file.write(data)?;
        // stdio is shared with the host process; keep it in order.
        if entry.is_preopen {
            file.flush()?;
        }
        Ok(written)
    })
}

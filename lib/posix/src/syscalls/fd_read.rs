use super::*;

/// ### `fd_read()`
/// Read data from a file descriptor
/// Inputs:
/// - `Fd fd`
///     File descriptor from which data will be read
/// - `&mut [u8] buf`
///     Buffer the data is written into; its length is the maximum read
/// Output:
/// - `usize`
///     Number of bytes read. Zero means end of file.
/// Errors:
/// - `Errno::Badf`
///     If `fd` is not open, or not open for reading
/// - `Errno::Isdir`
///     If `fd` is a directory
#[instrument(level = "trace", skip_all, fields(%fd, max_bytes = buf.len()), ret)]
pub fn fd_read(env: &HostEnv, fd: Fd, buf: &mut [u8]) -> HostResult<usize> {
    let entry = env.fs.resolve(fd)?;
    if entry.is_dir() {
        return Err(Errno::Isdir.into());
    }
    if !entry.can_read() {
        return Err(Errno::Badf.into());
    }

    entry.with_file(|file| Ok(file.read(buf)?))
}

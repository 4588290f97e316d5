use super::*;

/// ### `fd_filetype()`
/// The file type a descriptor refers to, as `fdstat` reports it
#[instrument(level = "debug", skip_all, fields(%fd), ret)]
pub fn fd_filetype(env: &HostEnv, fd: Fd) -> HostResult<Filetype> {
    let entry = env.fs.resolve(fd)?;
    if entry.is_dir() {
        return Ok(Filetype::Directory);
    }
    entry.with_file(|file| Ok(file.filetype()))
}

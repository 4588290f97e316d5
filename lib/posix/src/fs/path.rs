use std::path::{Component, Path, PathBuf};

use hostcall_types::Errno;

use crate::HostResult;

/// Resolves a guest path beneath the host directory mapped as `/`.
///
/// Absolute and relative guest paths are both taken relative to the root.
/// Resolution is lexical; a `..` that would climb above the root fails with
/// `Errno::Notcapable`.
pub fn resolve_under_root(root: &Path, guest_path: &Path) -> HostResult<PathBuf> {
    let mut parts: Vec<&std::ffi::OsStr> = Vec::new();
    for component in guest_path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir | Component::CurDir => {}
            Component::ParentDir => {
                if parts.pop().is_none() {
                    tracing::debug!(path = %guest_path.display(), "path escapes the root");
                    return Err(Errno::Notcapable.into());
                }
            }
            Component::Normal(part) => parts.push(part),
        }
    }

    let mut host_path = root.to_path_buf();
    host_path.extend(parts);
    Ok(host_path)
}

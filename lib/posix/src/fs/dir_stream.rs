use std::{fs, io, path::Path, sync::Arc};

use hostcall_types::{Errno, Filetype};

use crate::HostResult;

/// One entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    name: Vec<u8>,
    filetype: Filetype,
}

impl DirEntry {
    pub fn new(name: impl Into<Vec<u8>>, filetype: Filetype) -> Self {
        Self {
            name: name.into(),
            filetype,
        }
    }

    /// The raw name bytes. Names are opaque to the emulation layer.
    pub fn name(&self) -> &[u8] {
        &self.name
    }

    pub fn name_lossy(&self) -> String {
        String::from_utf8_lossy(&self.name).into_owned()
    }

    pub fn filetype(&self) -> Filetype {
        self.filetype
    }
}

/// A directory listing taken once, plus a cursor into it.
///
/// Rewinding replays the captured entries, never a fresh scan, so every pass
/// sees the same sequence even if the directory changes underneath.
#[derive(Debug, Clone)]
pub struct DirStream {
    entries: Arc<[DirEntry]>,
    cursor: usize,
}

impl DirStream {
    pub fn capture(host_path: &Path, include_dots: bool) -> io::Result<Self> {
        let mut entries = fs::read_dir(host_path)?
            .map(|entry| {
                let entry = entry?;
                // A failed file_type() should not fail the whole listing.
                let filetype = entry
                    .file_type()
                    .map(filetype_of)
                    .unwrap_or(Filetype::Unknown);
                Ok(DirEntry::new(os_str_bytes(&entry.file_name()), filetype))
            })
            .collect::<io::Result<Vec<_>>>()?;
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        if include_dots {
            entries.insert(0, DirEntry::new("..", Filetype::Directory));
            entries.insert(0, DirEntry::new(".", Filetype::Directory));
        }

        Ok(Self::from_entries(entries))
    }

    pub fn from_entries(entries: Vec<DirEntry>) -> Self {
        Self {
            entries: entries.into(),
            cursor: 0,
        }
    }

    /// Returns the next entry, or `None` once the stream is exhausted.
    pub fn next_entry(&mut self) -> Option<DirEntry> {
        let entry = self.entries.get(self.cursor)?.clone();
        self.cursor += 1;
        Some(entry)
    }

    pub fn rewind(&mut self) {
        self.cursor = 0;
    }

    pub fn tell(&self) -> u64 {
        self.cursor as u64
    }

    pub fn seek(&mut self, position: u64) -> HostResult<()> {
        let position = usize::try_from(position).map_err(|_| Errno::Inval)?;
        if position > self.entries.len() {
            return Err(Errno::Inval.into());
        }
        self.cursor = position;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn filetype_of(file_type: fs::FileType) -> Filetype {
    if file_type.is_dir() {
        Filetype::Directory
    } else if file_type.is_symlink() {
        Filetype::SymbolicLink
    } else if file_type.is_file() {
        Filetype::RegularFile
    } else {
        Filetype::Unknown
    }
}

#[cfg(unix)]
fn os_str_bytes(name: &std::ffi::OsStr) -> Vec<u8> {
    use std::os::unix::ffi::OsStrExt;
    name.as_bytes().to_vec()
}

#[cfg(not(unix))]
fn os_str_bytes(name: &std::ffi::OsStr) -> Vec<u8> {
    name.to_string_lossy().into_owned().into_bytes()
}

use std::{collections::BTreeMap, sync::Arc};

use hostcall_types::{Errno, Fd};
use parking_lot::RwLock;

use super::FdEntry;
use crate::HostResult;

/// Maps guest descriptors onto open resources.
///
/// The lock only guards the map itself; callers receive an `Arc` to the
/// entry and do their I/O after it has been released.
#[derive(Debug, Default)]
pub struct FdTable {
    fd_map: RwLock<BTreeMap<Fd, Arc<FdEntry>>>,
}

impl FdTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `entry` to the lowest descriptor not currently in use.
    pub fn allocate(&self, entry: FdEntry) -> HostResult<Fd> {
        let mut fd_map = self.fd_map.write();
        let fd = lowest_free(&fd_map)?;
        fd_map.insert(fd, Arc::new(entry));
        tracing::trace!(fd, "allocated descriptor");
        Ok(fd)
    }

    /// Binds `entry` to a specific descriptor. Only used while a session is
    /// being set up.
    pub(crate) fn insert_at(&self, fd: Fd, entry: FdEntry) -> HostResult<()> {
        let mut fd_map = self.fd_map.write();
        if fd_map.contains_key(&fd) {
            return Err(Errno::Exist.into());
        }
        fd_map.insert(fd, Arc::new(entry));
        Ok(())
    }

    pub fn resolve(&self, fd: Fd) -> HostResult<Arc<FdEntry>> {
        self.fd_map
            .read()
            .get(&fd)
            .cloned()
            .ok_or_else(|| Errno::Badf.into())
    }

    pub fn release(&self, fd: Fd) -> HostResult<Arc<FdEntry>> {
        let entry = self
            .fd_map
            .write()
            .remove(&fd)
            .ok_or(Errno::Badf)?;
        tracing::trace!(fd, "released descriptor");
        Ok(entry)
    }

    pub fn contains(&self, fd: Fd) -> bool {
        self.fd_map.read().contains_key(&fd)
    }

    pub fn len(&self) -> usize {
        self.fd_map.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn lowest_free(fd_map: &BTreeMap<Fd, Arc<FdEntry>>) -> HostResult<Fd> {
    let mut candidate: Fd = 0;
    for &fd in fd_map.keys() {
        if fd != candidate {
            break;
        }
        candidate = candidate.checked_add(1).ok_or(Errno::Mfile)?;
    }
    Ok(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::Pipe;
    use pretty_assertions::assert_eq;

    fn pipe_entry() -> FdEntry {
        FdEntry::file(Box::new(Pipe::new()), FdEntry::READ, "pipe")
    }

    #[test]
    fn allocates_the_lowest_free_id() {
        let table = FdTable::new();
        for _ in 0..3 {
            table.allocate(pipe_entry()).unwrap();
        }
        let a = table.allocate(pipe_entry()).unwrap();
        let b = table.allocate(pipe_entry()).unwrap();
        let c = table.allocate(pipe_entry()).unwrap();
        assert_eq!((a, b, c), (3, 4, 5));

        table.release(4).unwrap();
        assert_eq!(table.allocate(pipe_entry()).unwrap(), 4);
        table.release(3).unwrap();
        table.release(5).unwrap();
        assert_eq!(table.allocate(pipe_entry()).unwrap(), 3);
        assert_eq!(table.allocate(pipe_entry()).unwrap(), 5);
    }

    #[test]
    fn unknown_and_released_ids_are_bad_descriptors() {
        let table = FdTable::new();
        assert_eq!(table.resolve(7).unwrap_err().errno(), Errno::Badf);
        assert_eq!(table.release(7).unwrap_err().errno(), Errno::Badf);

        let fd = table.allocate(pipe_entry()).unwrap();
        table.release(fd).unwrap();
        assert_eq!(table.resolve(fd).unwrap_err().errno(), Errno::Badf);
        assert_eq!(table.release(fd).unwrap_err().errno(), Errno::Badf);
        assert!(table.is_empty());
    }

    #[test]
    fn insert_at_refuses_bound_ids() {
        let table = FdTable::new();
        table.insert_at(0, pipe_entry()).unwrap();
        assert_eq!(
            table.insert_at(0, pipe_entry()).unwrap_err().errno(),
            Errno::Exist
        );
        assert_eq!(table.allocate(pipe_entry()).unwrap(), 1);
    }
}

//! Per-session state of the emulation layer.
//!
//! Each [`HostEnv`] owns its descriptor table and shared counter, so
//! independent sessions can live side by side in one process.

mod builder;

use std::{
    path::{Path, PathBuf},
    sync::Arc,
    time::Duration,
};

pub use self::builder::{HostEnvBuilder, HostEnvCreationError};
use crate::{
    counter::SharedCounter,
    fs::{resolve_under_root, FdTable, OpenOptions},
    runtime::VirtualTaskManager,
    HostResult,
};

/// Default delay between readiness checks of descriptors the host cannot
/// wait on directly.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(10);

#[derive(Debug)]
pub struct HostEnv {
    pub(crate) fs: FdTable,
    pub(crate) counter: SharedCounter,
    pub(crate) tasks: Arc<dyn VirtualTaskManager>,
    pub(crate) root: Option<PathBuf>,
    pub(crate) include_dot_entries: bool,
    pub(crate) poll_interval: Duration,
}

impl HostEnv {
    pub fn builder() -> HostEnvBuilder {
        HostEnvBuilder::new()
    }

    pub fn fs(&self) -> &FdTable {
        &self.fs
    }

    pub fn counter(&self) -> &SharedCounter {
        &self.counter
    }

    pub fn tasks(&self) -> &Arc<dyn VirtualTaskManager> {
        &self.tasks
    }

    /// Host directory mapped as the guest's `/`, if any.
    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    pub fn include_dot_entries(&self) -> bool {
        self.include_dot_entries
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    pub fn new_open_options(&self) -> OpenOptions<'_> {
        OpenOptions::new(self)
    }

    /// Maps a guest path onto the host filesystem.
    pub(crate) fn host_path(&self, guest_path: &Path) -> HostResult<PathBuf> {
        match &self.root {
            Some(root) => resolve_under_root(root, guest_path),
            None => Ok(guest_path.to_path_buf()),
        }
    }
}

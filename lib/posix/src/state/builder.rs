//! Builder system for configuring a [`HostEnv`] and creating it.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
    time::Duration,
};

use hostcall_types::{Fd, ROOT_FILENO, STDERR_FILENO, STDIN_FILENO, STDOUT_FILENO};
use thiserror::Error;

use super::{HostEnv, DEFAULT_POLL_INTERVAL};
use crate::{
    counter::SharedCounter,
    fs::{FdEntry, FdTable, Stderr, Stdin, Stdout, VirtualFile},
    runtime::{TokioTaskManager, VirtualTaskManager},
};

/// Builder API for configuring a [`HostEnv`].
///
/// Usage:
/// ```no_run
/// # use hostcall::{HostEnv, HostEnvCreationError};
/// # fn main() -> Result<(), HostEnvCreationError> {
/// let env = HostEnv::builder()
///     .root("guest-root")
///     .include_dot_entries(true)
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct HostEnvBuilder {
    stdin: Option<Box<dyn VirtualFile>>,
    stdout: Option<Box<dyn VirtualFile>>,
    stderr: Option<Box<dyn VirtualFile>>,
    root: Option<PathBuf>,
    include_dot_entries: bool,
    poll_interval: Option<Duration>,
    task_manager: Option<Arc<dyn VirtualTaskManager>>,
}

impl std::fmt::Debug for HostEnvBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostEnvBuilder")
            .field("root", &self.root)
            .field("include_dot_entries", &self.include_dot_entries)
            .field("poll_interval", &self.poll_interval)
            .field("stdin_override exists", &self.stdin.is_some())
            .field("stdout_override exists", &self.stdout.is_some())
            .field("stderr_override exists", &self.stderr.is_some())
            .field("task_manager_override exists", &self.task_manager.is_some())
            .finish()
    }
}

/// Error type returned when bad data is given to [`HostEnvBuilder`].
#[derive(Error, Debug, PartialEq, Eq)]
pub enum HostEnvCreationError {
    #[error("preopened directory not found: `{0}`")]
    PreopenedDirectoryNotFound(PathBuf),
    #[error("preopened directory error: `{0}`")]
    PreopenedDirectoryError(String),
    #[error("descriptor table setup error: `{0}`")]
    FdTableSetupError(String),
    #[error("failed to start the timer runtime: `{0}`")]
    RuntimeCreation(String),
}

impl HostEnvBuilder {
    /// Creates an empty [`HostEnvBuilder`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the default stdin.
    pub fn stdin(mut self, new_file: Box<dyn VirtualFile>) -> Self {
        self.set_stdin(new_file);
        self
    }

    /// Overwrite the default stdin.
    pub fn set_stdin(&mut self, new_file: Box<dyn VirtualFile>) {
        self.stdin = Some(new_file);
    }

    /// Overwrite the default stdout.
    pub fn stdout(mut self, new_file: Box<dyn VirtualFile>) -> Self {
        self.set_stdout(new_file);
        self
    }

    /// Overwrite the default stdout.
    pub fn set_stdout(&mut self, new_file: Box<dyn VirtualFile>) {
        self.stdout = Some(new_file);
    }

    /// Overwrite the default stderr.
    pub fn stderr(mut self, new_file: Box<dyn VirtualFile>) -> Self {
        self.set_stderr(new_file);
        self
    }

    /// Overwrite the default stderr.
    pub fn set_stderr(&mut self, new_file: Box<dyn VirtualFile>) {
        self.stderr = Some(new_file);
    }

    /// Map a host directory as the guest's `/` and preopen it as descriptor 3.
    ///
    /// Without a root, guest paths are used as host paths unchanged.
    pub fn root(mut self, host_dir: impl AsRef<Path>) -> Self {
        self.set_root(host_dir);
        self
    }

    pub fn set_root(&mut self, host_dir: impl AsRef<Path>) {
        self.root = Some(host_dir.as_ref().to_path_buf());
    }

    /// Whether directory listings start with `.` and `..`. Off by default.
    pub fn include_dot_entries(mut self, include: bool) -> Self {
        self.set_include_dot_entries(include);
        self
    }

    pub fn set_include_dot_entries(&mut self, include: bool) {
        self.include_dot_entries = include;
    }

    /// How long readiness polling waits between checks of descriptors the
    /// host cannot wait on directly.
    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.set_poll_interval(interval);
        self
    }

    pub fn set_poll_interval(&mut self, interval: Duration) {
        self.poll_interval = Some(interval);
    }

    /// Sets the task manager used for sleeping and polling. By default a
    /// [`TokioTaskManager`] with its own runtime is created.
    pub fn task_manager(mut self, task_manager: Arc<dyn VirtualTaskManager>) -> Self {
        self.set_task_manager(task_manager);
        self
    }

    pub fn set_task_manager(&mut self, task_manager: Arc<dyn VirtualTaskManager>) {
        self.task_manager = Some(task_manager);
    }

    pub fn build(self) -> Result<HostEnv, HostEnvCreationError> {
        let root = self.root.as_deref().map(validate_root).transpose()?;

        let tasks = match self.task_manager {
            Some(tasks) => tasks,
            None => Arc::new(
                TokioTaskManager::with_owned_runtime()
                    .map_err(|err| HostEnvCreationError::RuntimeCreation(err.to_string()))?,
            ) as Arc<dyn VirtualTaskManager>,
        };

        let fs = FdTable::new();
        let stdin = self.stdin.unwrap_or_else(|| Box::new(Stdin::default()));
        let stdout = self.stdout.unwrap_or_else(|| Box::new(Stdout));
        let stderr = self.stderr.unwrap_or_else(|| Box::new(Stderr));
        preopen(&fs, STDIN_FILENO, FdEntry::file(stdin, FdEntry::READ, "<stdin>"))?;
        preopen(&fs, STDOUT_FILENO, FdEntry::file(stdout, FdEntry::WRITE, "<stdout>"))?;
        preopen(&fs, STDERR_FILENO, FdEntry::file(stderr, FdEntry::WRITE, "<stderr>"))?;
        if let Some(root) = &root {
            preopen(&fs, ROOT_FILENO, FdEntry::dir(root.clone(), None, "/"))?;
        }

        tracing::debug!(root = ?root, "host environment created");

        Ok(HostEnv {
            fs,
            counter: SharedCounter::new(),
            tasks,
            root,
            include_dot_entries: self.include_dot_entries,
            poll_interval: self.poll_interval.unwrap_or(DEFAULT_POLL_INTERVAL),
        })
    }
}

fn validate_root(host_dir: &Path) -> Result<PathBuf, HostEnvCreationError> {
    let root = host_dir
        .canonicalize()
        .map_err(|_| HostEnvCreationError::PreopenedDirectoryNotFound(host_dir.to_path_buf()))?;
    if !root.is_dir() {
        return Err(HostEnvCreationError::PreopenedDirectoryError(format!(
            "\"{}\" is not a directory",
            host_dir.display()
        )));
    }
    Ok(root)
}

fn preopen(fs: &FdTable, fd: Fd, entry: FdEntry) -> Result<(), HostEnvCreationError> {
    fs.insert_at(fd, entry.preopened())
        .map_err(|err| HostEnvCreationError::FdTableSetupError(format!("fd {fd}: {err}")))
}

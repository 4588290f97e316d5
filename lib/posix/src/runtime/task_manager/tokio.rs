use std::{future::Future, io, pin::Pin, sync::Arc, time::Duration};

use hostcall_types::Errno;
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};

use super::VirtualTaskManager;

/// A task manager that uses tokio to drive its timers.
#[derive(Clone, Debug)]
pub struct TokioTaskManager {
    handle: Handle,
    /// Set when the manager owns its runtime rather than borrowing an
    /// ambient one.
    _runtime: Option<Arc<Runtime>>,
}

impl TokioTaskManager {
    /// Drives timers on `rt`. Sleeps must not be requested from a thread
    /// that `rt` needs in order to make progress.
    pub fn new(rt: Handle) -> Self {
        Self {
            handle: rt,
            _runtime: None,
        }
    }

    /// Uses the runtime of the calling context, if there is one and it is
    /// multi-threaded.
    ///
    /// Sleeping parks the calling thread until a spawned timer task fires. On
    /// a current-thread runtime that task would have to run on the very
    /// thread being parked, so such runtimes are refused here.
    pub fn try_current() -> Option<Self> {
        Handle::try_current()
            .ok()
            .filter(|handle| handle.runtime_flavor() == RuntimeFlavor::MultiThread)
            .map(Self::new)
    }

    /// Creates a manager with a private multi-threaded runtime.
    pub fn with_owned_runtime() -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("hostcall-timer")
            .enable_time()
            .build()?;
        Ok(Self {
            handle: runtime.handle().clone(),
            _runtime: Some(Arc::new(runtime)),
        })
    }

    pub fn runtime_handle(&self) -> Handle {
        self.handle.clone()
    }
}

impl VirtualTaskManager for TokioTaskManager {
    /// See [`VirtualTaskManager::sleep_now`].
    fn sleep_now(
        &self,
        time: Duration,
    ) -> Pin<Box<dyn Future<Output = Result<(), Errno>> + Send + Sync>> {
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        self.handle.spawn(async move {
            if time == Duration::ZERO {
                tokio::task::yield_now().await;
            } else {
                tokio::time::sleep(time).await;
            }
            tx.send(()).ok();
        });
        Box::pin(async move {
            match rx.recv().await {
                Some(()) => Ok(()),
                None => {
                    tracing::debug!(?time, "sleep task dropped before completing");
                    Err(Errno::Io)
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;
    use crate::runtime::VirtualTaskManagerExt;

    #[test]
    fn sleeps_at_least_the_requested_time() {
        let tasks: Arc<dyn VirtualTaskManager> =
            Arc::new(TokioTaskManager::with_owned_runtime().unwrap());
        let start = Instant::now();
        tasks.block_on(tasks.sleep_now(Duration::from_millis(20))).unwrap();
        assert!(start.elapsed() >= Duration::from_millis(20));

        tasks.block_on(tasks.sleep_now(Duration::ZERO)).unwrap();
    }

    #[test]
    fn ambient_runtime_is_optional() {
        assert!(TokioTaskManager::try_current().is_none());

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_time()
            .build()
            .unwrap();
        let _guard = runtime.enter();
        let tasks: Arc<dyn VirtualTaskManager> =
            Arc::new(TokioTaskManager::try_current().unwrap());
        tasks.block_on(tasks.sleep_now(Duration::from_millis(1))).unwrap();
    }

    #[test]
    fn current_thread_runtimes_are_refused() {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .unwrap();
        let _guard = runtime.enter();
        assert!(TokioTaskManager::try_current().is_none());
    }
}

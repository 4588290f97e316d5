mod tokio;

use std::{future::Future, pin::Pin, sync::Arc, time::Duration};

use hostcall_types::Errno;

pub use self::tokio::TokioTaskManager;

/// Source of the suspension points used by sleeping and polling calls.
pub trait VirtualTaskManager: std::fmt::Debug + Send + Sync + 'static {
    /// Returns a future that resolves once `time` has elapsed on a monotonic
    /// clock. A zero duration must still yield to the scheduler once.
    ///
    /// Resolves to `Err(Errno::Io)` if the wait could not complete.
    fn sleep_now(
        &self,
        time: Duration,
    ) -> Pin<Box<dyn Future<Output = Result<(), Errno>> + Send + Sync>>;
}

/// Generic utility methods for VirtualTaskManager
pub trait VirtualTaskManagerExt {
    /// Parks the calling thread until `task` completes.
    fn block_on<'a, A>(&self, task: impl Future<Output = A> + 'a) -> A;
}

impl<T: VirtualTaskManager + ?Sized> VirtualTaskManagerExt for Arc<T> {
    fn block_on<'x, A>(&self, task: impl Future<Output = A> + 'x) -> A {
        futures::executor::block_on(task)
    }
}

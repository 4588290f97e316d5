pub mod task_manager;

pub use self::task_manager::{TokioTaskManager, VirtualTaskManager, VirtualTaskManagerExt};

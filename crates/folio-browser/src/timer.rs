//! One-shot deferred callbacks owned by a droppable task.

use zoon::{Task, TaskHandle, Timer};

/// Runs `callback` after `ms`. Dropping the handle cancels it.
pub fn after(ms: u32, callback: impl FnOnce() + 'static) -> TaskHandle {
    Task::start_droppable(async move {
        Timer::sleep(ms).await;
        callback();
    })
}

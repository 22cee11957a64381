//! Deferred task queue for the UI thread.
//!
//! Work that must not run synchronously with the caller (for example a
//! repaint requested while a provider is being swapped) is posted to a
//! [`UiHandler`] and runs the next time the host loop drains it.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::logging::targets;

/// A unique identifier for a deferred task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

impl TaskId {
    /// Get the raw u64 value of this task ID.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

static NEXT_TASK_ID: AtomicU64 = AtomicU64::new(1);

fn next_task_id() -> TaskId {
    TaskId(NEXT_TASK_ID.fetch_add(1, Ordering::Relaxed))
}

type BoxedTask = Box<dyn FnOnce() + Send + 'static>;

struct TaskData {
    id: TaskId,
    task: BoxedTask,
}

/// FIFO queue of pending tasks.
pub struct TaskQueue {
    tasks: VecDeque<TaskData>,
}

impl Default for TaskQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskQueue {
    /// Create a new task queue.
    pub fn new() -> Self {
        Self {
            tasks: VecDeque::new(),
        }
    }

    /// Post a task to be executed later.
    pub fn post<F>(&mut self, task: F) -> TaskId
    where
        F: FnOnce() + Send + 'static,
    {
        let id = next_task_id();
        self.tasks.push_back(TaskData {
            id,
            task: Box::new(task),
        });
        id
    }

    /// Cancel a pending task.
    ///
    /// Returns `true` if the task was found and cancelled.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        if let Some(pos) = self.tasks.iter().position(|t| t.id == id) {
            self.tasks.remove(pos);
            true
        } else {
            false
        }
    }

    /// Check if there are any pending tasks.
    pub fn has_pending(&self) -> bool {
        !self.tasks.is_empty()
    }

    /// Get the number of pending tasks.
    pub fn pending_count(&self) -> usize {
        self.tasks.len()
    }

    fn pop(&mut self) -> Option<TaskData> {
        self.tasks.pop_front()
    }
}

/// Cloneable handle to the UI thread's task queue.
///
/// All clones share one queue. Tasks run in posting order when
/// [`process_all`](Self::process_all) is called.
#[derive(Clone, Default)]
pub struct UiHandler {
    queue: Arc<Mutex<TaskQueue>>,
}

impl UiHandler {
    /// Create a handler with an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a task for the next drain.
    pub fn post<F>(&self, task: F) -> TaskId
    where
        F: FnOnce() + Send + 'static,
    {
        let id = self.queue.lock().post(task);
        tracing::trace!(target: targets::TASK, task_id = id.as_u64(), "task posted");
        id
    }

    /// Cancel a queued task.
    pub fn cancel(&self, id: TaskId) -> bool {
        self.queue.lock().cancel(id)
    }

    /// Check if any tasks are waiting.
    pub fn has_pending(&self) -> bool {
        self.queue.lock().has_pending()
    }

    /// Number of tasks waiting.
    pub fn pending_count(&self) -> usize {
        self.queue.lock().pending_count()
    }

    /// Run every queued task, including tasks posted while draining.
    ///
    /// The queue lock is released while each task runs. Returns the number
    /// of tasks executed.
    pub fn process_all(&self) -> usize {
        let mut count = 0;
        loop {
            let next = self.queue.lock().pop();
            let Some(task_data) = next else {
                break;
            };
            (task_data.task)();
            count += 1;
        }
        if count > 0 {
            tracing::trace!(target: targets::TASK, count, "processed tasks");
        }
        count
    }
}

impl std::fmt::Debug for UiHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UiHandler")
            .field("pending", &self.pending_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn test_tasks_run_in_post_order() {
        let handler = UiHandler::new();
        let log = Arc::new(Mutex::new(Vec::new()));

        for n in 0..3 {
            let log = log.clone();
            handler.post(move || log.lock().push(n));
        }
        assert_eq!(handler.pending_count(), 3);
        assert!(log.lock().is_empty());

        assert_eq!(handler.process_all(), 3);
        assert_eq!(*log.lock(), vec![0, 1, 2]);
        assert!(!handler.has_pending());
    }

    #[test]
    fn test_cancel_task() {
        let handler = UiHandler::new();
        let counter = Arc::new(AtomicUsize::new(0));

        let c = counter.clone();
        let id = handler.post(move || {
            c.fetch_add(1, Ordering::SeqCst);
        });
        assert!(handler.cancel(id));
        assert!(!handler.cancel(id));

        assert_eq!(handler.process_all(), 0);
        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_task_posted_while_draining_runs() {
        let handler = UiHandler::new();
        let counter = Arc::new(AtomicUsize::new(0));

        let inner_handler = handler.clone();
        let c = counter.clone();
        handler.post(move || {
            let c = c.clone();
            inner_handler.post(move || {
                c.fetch_add(1, Ordering::SeqCst);
            });
        });

        assert_eq!(handler.process_all(), 2);
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_task_ids_are_unique() {
        let mut queue = TaskQueue::new();
        let a = queue.post(|| {});
        let b = queue.post(|| {});
        assert_ne!(a, b);
        assert!(b.as_u64() > a.as_u64());
    }
}

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use tokio::task::{AbortHandle, JoinError, JoinHandle};
use tracing::debug;
use uuid::Uuid;

/// Registry of delayed work spawned on behalf of in-flight requests
#[derive(Clone, Default)]
pub struct TaskRegistry {
    tasks: Arc<DashMap<Uuid, AbortHandle>>,
}

/// Handle to a scheduled task. Dropping it aborts the task if it is still
/// pending, so a request that goes away takes its work with it.
pub struct ScheduledTask<T> {
    id: Uuid,
    handle: JoinHandle<T>,
    tasks: Arc<DashMap<Uuid, AbortHandle>>,
}

impl TaskRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `work` on a new task after `delay` has elapsed.
    pub fn schedule<F, T>(&self, delay: Duration, work: F) -> ScheduledTask<T>
    where
        F: Future<Output = T> + Send + 'static,
        T: Send + 'static,
    {
        let id = Uuid::new_v4();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            work.await
        });
        self.tasks.insert(id, handle.abort_handle());
        debug!(
            "Scheduled delayed task {} ({:?}), {} pending",
            id,
            delay,
            self.pending()
        );

        ScheduledTask {
            id,
            handle,
            tasks: self.tasks.clone(),
        }
    }

    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    /// Abort every pending task. Returns how many were aborted.
    pub fn cancel_all(&self) -> usize {
        let ids: Vec<Uuid> = self.tasks.iter().map(|entry| *entry.key()).collect();
        let mut cancelled = 0;
        for id in ids {
            if let Some((_, handle)) = self.tasks.remove(&id) {
                handle.abort();
                cancelled += 1;
            }
        }
        cancelled
    }
}

impl<T> ScheduledTask<T> {
    /// Wait for the task to finish. Errors if it was aborted or panicked.
    pub async fn wait(mut self) -> Result<T, JoinError> {
        (&mut self.handle).await
    }
}

impl<T> Drop for ScheduledTask<T> {
    fn drop(&mut self) {
        if let Some((_, handle)) = self.tasks.remove(&self.id) {
            if !handle.is_finished() {
                debug!("Cancelling delayed task {}", self.id);
            }
            handle.abort();
        }
    }
}

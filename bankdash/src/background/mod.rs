pub mod data_loader;

use crate::app_core::DataEventHandler;
use crate::events::ApiCall;
use data_loader::DataLoader;
use std::collections::HashMap;
use std::future::Future;
use tokio::task::JoinHandle;

/// Manages background tasks for data loading
/// Tracks running tasks and provides cancellation support
pub struct BackgroundTaskManager {
    tasks: HashMap<String, JoinHandle<()>>,
}

impl BackgroundTaskManager {
    pub fn new() -> Self {
        Self {
            tasks: HashMap::new(),
        }
    }

    /// Spawn a background data loading task
    /// If a task with the same ID already exists, it will be cancelled first
    pub fn spawn_load_task<F>(&mut self, task_id: String, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        // Forget tasks that already reported back
        self.tasks.retain(|_, handle| !handle.is_finished());

        // Cancel existing task with same ID (prevents stale data)
        if let Some(handle) = self.tasks.remove(&task_id) {
            handle.abort();
        }

        let handle = tokio::spawn(future);
        self.tasks.insert(task_id, handle);
    }

    /// Cancel all running tasks (used on shutdown)
    pub fn cancel_all(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }
}

impl Default for BackgroundTaskManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for BackgroundTaskManager {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

/// Production handler: every call becomes a spawned task
pub struct BackgroundDispatcher {
    task_manager: BackgroundTaskManager,
    data_loader: DataLoader,
    submissions: u64,
}

impl BackgroundDispatcher {
    pub fn new(data_loader: DataLoader) -> Self {
        Self {
            task_manager: BackgroundTaskManager::new(),
            data_loader,
            submissions: 0,
        }
    }

    pub fn cancel_all(&mut self) {
        self.task_manager.cancel_all();
    }
}

impl DataEventHandler for BackgroundDispatcher {
    fn dispatch(&mut self, call: ApiCall) {
        let data_loader = self.data_loader.clone();
        match call {
            // A newer fetch supersedes an older one
            ApiCall::FetchTransactions(request) => {
                let future = async move {
                    data_loader.load_transactions(request).await;
                };
                self.task_manager
                    .spawn_load_task("get_group_trans".to_string(), future);
            }
            // Submissions are never cancelled, each one gets its own id
            ApiCall::Submit { ticket, request } => {
                self.submissions += 1;
                let task_id = format!("{}_{}", ticket.tab.key(), self.submissions);
                let future = async move {
                    data_loader.submit(ticket, request).await;
                };
                self.task_manager.spawn_load_task(task_id, future);
            }
        }
    }
}

use std::{
    sync::{
        mpsc,
        Arc,
    },
    thread,
};

use tokio::runtime::Runtime;

use super::TaskResult;
use crate::{
    core::session::Navigation,
    store,
};

/// Owns the async runtime and the channel background work reports back
/// on. The GUI never blocks: it hands work off here and drains finished
/// results once per frame.
pub struct TaskManager {
    runtime: Arc<Runtime>,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
}

impl TaskManager {
    pub fn new() -> Self {
        let runtime = Arc::new(Runtime::new().expect("Failed to create TaskManager runtime"));

        let (sender, receiver) = mpsc::channel();

        Self { runtime, receiver, sender }
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }

        results
    }

    fn task_context(&self) -> (mpsc::Sender<TaskResult>, Arc<Runtime>) {
        (self.sender.clone(), self.runtime.clone())
    }

    /// Execute one navigation plan. The write-back is sequenced before the
    /// fetch, so within a navigation the outgoing record always lands
    /// before the target is read. Separate navigations still run on
    /// separate threads; stale fetches are filtered by `seq` on arrival.
    pub fn navigate(&self, base_url: String, navigation: Navigation) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            runtime.block_on(async {
                if let Some(outgoing) = navigation.save {
                    let result =
                        store::api::write_item(&base_url, outgoing.index, &outgoing.record).await;

                    let _ = sender
                        .send(TaskResult::SaveFinished { index: outgoing.index, result });
                }

                let result = store::api::fetch_item(&base_url, navigation.target).await;

                let _ = sender.send(TaskResult::Navigated {
                    seq: navigation.seq,
                    index: navigation.target,
                    result,
                });
            });
        });
    }

    pub fn check_store_connection(&self, base_url: String) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let connected = runtime.block_on(async { store::api::probe(&base_url).await });

            let _ = sender.send(TaskResult::StoreConnection(connected));
        });
    }
}

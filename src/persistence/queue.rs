//! Coalescing background writer.
//!
//! Each key gets one worker task and one pending slot. Enqueuing replaces
//! the pending value, so at most one write per key is in flight and a burst
//! of mutations collapses into a single trailing write of the latest value.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::sync::watch;

use super::storage::KeyValueStorage;

#[derive(Debug, Clone, Default)]
struct Pending {
    version: u64,
    value: Option<String>,
}

struct Slot {
    pending: watch::Sender<Pending>,
    written: watch::Receiver<u64>,
}

/// Fire-and-forget writes to a `KeyValueStorage`.
pub struct PersistQueue {
    storage: Arc<dyn KeyValueStorage>,
    runtime: Handle,
    slots: Mutex<HashMap<String, Slot>>,
}

impl PersistQueue {
    /// Create a queue whose workers run on `runtime`.
    pub fn new(storage: Arc<dyn KeyValueStorage>, runtime: Handle) -> Self {
        Self {
            storage,
            runtime,
            slots: Mutex::new(HashMap::new()),
        }
    }

    /// Schedule `value` to be written under `key`.
    ///
    /// Returns immediately. Failures are logged by the worker and dropped;
    /// the in-memory state stays authoritative.
    pub fn enqueue(&self, key: &str, value: String) {
        let mut slots = self.slots.lock();
        if let Some(slot) = slots.get(key) {
            if !slot.pending.is_closed() {
                slot.pending.send_modify(|pending| {
                    pending.version += 1;
                    pending.value = Some(value);
                });
                return;
            }
        }

        let (pending_tx, pending_rx) = watch::channel(Pending {
            version: 1,
            value: Some(value),
        });
        let (written_tx, written_rx) = watch::channel(0);
        self.runtime.spawn(drain(
            Arc::clone(&self.storage),
            key.to_string(),
            pending_rx,
            written_tx,
        ));
        slots.insert(
            key.to_string(),
            Slot {
                pending: pending_tx,
                written: written_rx,
            },
        );
    }

    /// Wait until every value enqueued before this call has been written
    /// (or has failed and been logged).
    pub async fn flush(&self) {
        let targets: Vec<(u64, watch::Receiver<u64>)> = self
            .slots
            .lock()
            .values()
            .map(|slot| (slot.pending.borrow().version, slot.written.clone()))
            .collect();

        for (version, mut written) in targets {
            // A closed channel means the worker is gone; nothing left to wait for.
            let _ = written.wait_for(|done| *done >= version).await;
        }
    }
}

async fn drain(
    storage: Arc<dyn KeyValueStorage>,
    key: String,
    mut pending: watch::Receiver<Pending>,
    written: watch::Sender<u64>,
) {
    loop {
        let Pending { version, value } = pending.borrow_and_update().clone();

        if let Some(value) = value {
            let storage = Arc::clone(&storage);
            let write_key = key.clone();
            let result =
                tokio::task::spawn_blocking(move || storage.set_item(&write_key, &value)).await;
            match result {
                Ok(Ok(())) => tracing::debug!(key = %key, version, "Persisted value"),
                Ok(Err(e)) => tracing::warn!(key = %key, error = %e, "Persist write failed"),
                Err(e) => tracing::warn!(key = %key, error = %e, "Persist task aborted"),
            }
        }
        written.send_replace(version);

        if pending.changed().await.is_err() {
            break;
        }
    }
}

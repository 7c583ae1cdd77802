//! Persistence bridge between the users store and device storage.
//!
//! - `storage`: the key-value backends
//! - `repository`: the users list encoded under its fixed key
//! - `queue`: coalescing fire-and-forget writes
//! - `persist_users_on_change`: the store observer wiring them together

mod error;
mod queue;
mod repository;
mod storage;

use std::sync::Arc;

use parking_lot::Mutex;

use crate::store::{Store, Subscription};
use crate::users::{User, UsersAppReducer};

pub use error::StorageError;
pub use queue::PersistQueue;
pub use repository::{UsersRepository, USERS_KEY};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};

/// Enqueue a save of the users list whenever a dispatch changes it.
///
/// Dispatches that leave `users.list` untouched (loading/error flags) do not
/// write. The observer holds a handle to `store`; dropping the returned
/// subscription releases it.
pub fn persist_users_on_change(
    store: &Store<UsersAppReducer>,
    repository: UsersRepository,
    queue: Arc<PersistQueue>,
) -> Subscription {
    let last: Mutex<Vec<User>> = Mutex::new(store.select(|s| s.users.list.clone()));
    let reader = store.clone();

    store.subscribe(move || {
        // Hold `last` across the read and the enqueue: enqueue order must
        // match read order.
        let mut last = last.lock();
        let list = reader.select(|s| s.users.list.clone());
        if *last == list {
            return;
        }

        match repository.encode(&list) {
            Ok(encoded) => queue.enqueue(repository.key(), encoded),
            Err(e) => tracing::warn!(error = %e, "Failed to encode users for storage"),
        }
        *last = list;
    })
}

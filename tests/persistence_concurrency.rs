mod common;

use std::sync::Arc;

use common::users;
use slicestore::persistence::{
    persist_users_on_change, MemoryStorage, PersistQueue, UsersRepository, USERS_KEY,
};
use slicestore::store::Store;
use slicestore::users::{UsersAction, UsersAppReducer};
use tokio::runtime::Handle;

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn concurrent_dispatches_persist_latest_list() {
    for round in 0..100 {
        let storage = Arc::new(MemoryStorage::new());
        let repository = UsersRepository::new(storage.clone(), USERS_KEY);
        let queue = Arc::new(PersistQueue::new(storage, Handle::current()));
        let store = Store::<UsersAppReducer>::default();
        let _persist = persist_users_on_change(&store, repository.clone(), queue.clone());

        std::thread::scope(|threads| {
            for worker in 0..4_i64 {
                let store = store.clone();
                threads.spawn(move || {
                    for step in 0..50_i64 {
                        let id = worker * 1000 + step;
                        store.dispatch(UsersAction::SetUsers(users(&[id])).into());
                    }
                });
            }
        });
        queue.flush().await;

        assert_eq!(
            repository.load(),
            Some(store.get_state().users.list),
            "round {round}: persisted list diverged from the store"
        );
    }
}

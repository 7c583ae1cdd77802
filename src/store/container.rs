//! The state container.
//!
//! A `Store` owns the root state of one application and is the only place
//! a reducer gets applied. Reads return snapshots; writes go through
//! `dispatch`, which is serialized by a single write lock.

use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::{Mutex, RwLock};

use super::reducer::Reducer;

type Observer = Arc<dyn Fn() + Send + Sync>;
type ObserverList = Mutex<Vec<(u64, Observer)>>;

/// Single authoritative container for an application's state.
///
/// Cloning a `Store` is cheap and yields another handle to the same state.
/// Stores are constructed explicitly, so tests can run isolated instances.
pub struct Store<R: Reducer> {
    state: Arc<RwLock<R::State>>,
    observers: Arc<ObserverList>,
    next_observer_id: Arc<AtomicU64>,
    _reducer: PhantomData<fn() -> R>,
}

impl<R: Reducer> Clone for Store<R> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            observers: Arc::clone(&self.observers),
            next_observer_id: Arc::clone(&self.next_observer_id),
            _reducer: PhantomData,
        }
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new(R::State::default())
    }
}

impl<R: Reducer> Store<R> {
    /// Create a store holding `initial` as its first state.
    pub fn new(initial: R::State) -> Self {
        Self {
            state: Arc::new(RwLock::new(initial)),
            observers: Arc::new(Mutex::new(Vec::new())),
            next_observer_id: Arc::new(AtomicU64::new(0)),
            _reducer: PhantomData,
        }
    }

    /// Apply `action` to the current state and notify observers.
    ///
    /// The reducer runs under the write lock, so two dispatches never
    /// interleave. Observers are called after the lock is released and
    /// always see the committed state.
    pub fn dispatch(&self, action: R::Action) {
        {
            let mut guard = self.state.write();
            let current = std::mem::take(&mut *guard);
            *guard = R::reduce(current, action);
        }
        self.notify();
    }

    /// Get a snapshot of the current state.
    pub fn get_state(&self) -> R::State {
        self.state.read().clone()
    }

    /// Read a projection of the current state without cloning all of it.
    pub fn select<T>(&self, selector: impl FnOnce(&R::State) -> T) -> T {
        selector(&self.state.read())
    }

    /// Register an observer called once per dispatch.
    ///
    /// Observers receive no payload and re-read through `get_state`.
    /// The observer stays registered until the returned `Subscription`
    /// is dropped.
    pub fn subscribe(&self, observer: impl Fn() + Send + Sync + 'static) -> Subscription {
        let id = self.next_observer_id.fetch_add(1, Ordering::Relaxed);
        self.observers.lock().push((id, Arc::new(observer)));
        Subscription {
            id,
            observers: Arc::downgrade(&self.observers),
        }
    }

    fn notify(&self) {
        // Snapshot the list so observers may dispatch or subscribe re-entrantly.
        let observers: Vec<Observer> = self
            .observers
            .lock()
            .iter()
            .map(|(_, observer)| Arc::clone(observer))
            .collect();
        for observer in observers {
            observer();
        }
    }
}

/// Handle for a registered observer. Unsubscribes on drop.
#[must_use = "dropping a Subscription immediately unsubscribes the observer"]
pub struct Subscription {
    id: u64,
    observers: Weak<ObserverList>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(observers) = self.observers.upgrade() {
            observers.lock().retain(|(id, _)| *id != self.id);
        }
    }
}

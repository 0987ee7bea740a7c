//! A thread-safe handle around [`StyleStore`].
//!
//! Every public operation takes the store lock for its whole duration. The
//! sink lives beside the store under its own lock and is called after the
//! store lock is released, so a sink may read the store through any handle.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::ordered::Properties;
use crate::parser::StyleEntry;
use crate::store::{BoxedSink, MergePolicy, StyleSink, StyleStore};

#[derive(Clone, Default)]
pub struct SharedStyleStore {
    inner: Arc<Mutex<StyleStore>>,
    sink: Arc<Mutex<Option<BoxedSink>>>,
}

/// Locks `mutex`, recovering a poisoned lock.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl SharedStyleStore {
    /// Wraps `store`. A sink already attached to it moves to the handle.
    pub fn new(mut store: StyleStore) -> Self {
        let sink = store.take_sink();
        Self {
            inner: Arc::new(Mutex::new(store)),
            sink: Arc::new(Mutex::new(sink)),
        }
    }

    /// Runs `f` with the lock held, for callers that need several
    /// operations to be atomic together.
    ///
    /// The sink is notified once afterwards if `f` changed the store.
    pub fn with<R>(&self, f: impl FnOnce(&mut StyleStore) -> R) -> R {
        let (result, changed) = {
            let mut store = lock(&self.inner);
            let before = store.revision();
            let result = f(&mut store);
            (result, store.revision() != before)
        };
        if changed {
            self.notify();
        }
        result
    }

    /// Sends the current style sheet to the sink.
    ///
    /// Serializing happens under the sink lock, so the last delivery always
    /// carries the latest state even when threads race.
    fn notify(&self) {
        let mut sink = lock(&self.sink);
        let Some(sink) = sink.as_mut() else {
            return;
        };
        let stylesheet = lock(&self.inner).serialize();
        sink.apply(&stylesheet);
    }

    pub fn add_or_update(
        &self,
        selector: impl Into<String>,
        property: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.with(|store| store.add_or_update(selector, property, value));
    }

    /// Returns a copy; the lock is released before the caller sees it.
    pub fn get(&self, selector: &str) -> Properties {
        lock(&self.inner).get(selector).clone()
    }

    pub fn get_merged(&self, selectors: &str) -> Properties {
        lock(&self.inner).get_merged(selectors)
    }

    pub fn serialize(&self) -> String {
        lock(&self.inner).serialize()
    }

    pub fn reset(&self) {
        self.with(StyleStore::reset);
    }

    pub fn load(&self, entries: impl Into<Vec<StyleEntry>>) {
        self.with(|store| store.load(entries));
    }

    pub fn entries(&self) -> Vec<StyleEntry> {
        lock(&self.inner).entries().to_vec()
    }

    pub fn selectors(&self) -> Vec<String> {
        lock(&self.inner).selectors().map(String::from).collect()
    }

    pub fn len(&self) -> usize {
        lock(&self.inner).len()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.inner).is_empty()
    }

    pub fn merge_policy(&self) -> MergePolicy {
        lock(&self.inner).merge_policy()
    }

    pub fn set_merge_policy(&self, policy: MergePolicy) {
        lock(&self.inner).set_merge_policy(policy);
    }

    /// Attaches the sink, replacing any previous one.
    ///
    /// The sink may read the store through a clone of this handle. It must
    /// not mutate the store or change the sink from inside
    /// [`apply`](StyleSink::apply): those calls wait on the sink lock the
    /// delivery holds.
    pub fn attach_sink(&self, sink: impl StyleSink + Send + 'static) {
        *lock(&self.sink) = Some(Box::new(sink));
    }

    pub fn detach_sink(&self) {
        *lock(&self.sink) = None;
    }
}

impl fmt::Debug for SharedStyleStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedStyleStore")
            .field("store", &*lock(&self.inner))
            .field("sink", &lock(&self.sink).is_some())
            .finish()
    }
}

impl From<StyleStore> for SharedStyleStore {
    fn from(store: StyleStore) -> Self {
        Self::new(store)
    }
}

//! Subscriber bookkeeping for the selection slot

use std::fmt;
use std::sync::Arc;

/// Callback invoked with the new slot value after every mutation
pub(super) type Callback<T> = Arc<dyn Fn(Option<&T>) + Send + Sync>;

/// Ordered list of subscriber callbacks keyed by a monotonically increasing id
pub(super) struct Subscribers<T> {
    next_id: u64,
    entries: Vec<(u64, Callback<T>)>,
}

impl<T> Subscribers<T> {
    pub(super) fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    /// Register a callback, returning the id used to remove it later
    pub(super) fn insert(&mut self, callback: Callback<T>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push((id, callback));
        id
    }

    /// Remove a callback by id. Returns false if it was already gone.
    pub(super) fn remove(&mut self, id: u64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// Copy out the callbacks in subscription order so they can run unlocked
    pub(super) fn snapshot(&self) -> Vec<Callback<T>> {
        self.entries
            .iter()
            .map(|(_, callback)| Arc::clone(callback))
            .collect()
    }

    pub(super) fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Guard for an active subscription
///
/// The callback stays registered until [`Subscription::unsubscribe`] is called
/// or the guard is dropped.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    pub(super) fn new(unsubscribe: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            unsubscribe: Some(Box::new(unsubscribe)),
        }
    }

    /// Stop receiving notifications
    pub fn unsubscribe(mut self) {
        self.run_unsubscribe();
    }

    fn run_unsubscribe(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run_unsubscribe();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.unsubscribe.is_some())
            .finish()
    }
}

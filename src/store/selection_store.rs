//! Shared selection slot and the handle consumers use to reach it

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::watch;

use super::subscription::{Subscribers, Subscription};

struct Inner<T> {
    /// The slot itself. Every send bumps the channel version, so receivers
    /// see each mutation even when the value is unchanged.
    slot: watch::Sender<Option<Arc<T>>>,
    subscribers: Mutex<Subscribers<T>>,
}

/// Handle to a selection slot
///
/// Cloning a handle is cheap and yields another view of the same slot. The
/// slot holds `Arc<T>`, so selecting an item never clones `T` itself.
pub struct StoreHandle<T> {
    inner: Arc<Inner<T>>,
}

impl<T> StoreHandle<T>
where
    T: Send + Sync + 'static,
{
    /// Create a standalone store with no selection
    ///
    /// Handles created here are not registered process-wide; use
    /// [`get_store`](super::get_store) to reach the shared instance.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                slot: watch::Sender::new(None),
                subscribers: Mutex::new(Subscribers::new()),
            }),
        }
    }

    /// The currently selected item, if any
    pub fn current(&self) -> Option<Arc<T>> {
        self.inner.slot.borrow().clone()
    }

    /// Whether an item is currently selected
    pub fn is_selected(&self) -> bool {
        self.inner.slot.borrow().is_some()
    }

    /// Run `f` against the current selection without keeping it alive afterwards
    pub fn with_current<R>(&self, f: impl FnOnce(Option<&T>) -> R) -> R {
        let current = self.current();
        f(current.as_deref())
    }

    /// Replace the selection with `item` and notify subscribers
    pub fn select(&self, item: impl Into<Arc<T>>) {
        let previous = self.inner.slot.send_replace(Some(item.into()));

        #[cfg(debug_assertions)]
        log::debug!(
            "Selected {} (replaced existing: {})",
            std::any::type_name::<T>(),
            previous.is_some()
        );
        drop(previous);

        self.notify();
    }

    /// Remove the selection and notify subscribers
    ///
    /// Subscribers are notified even when nothing was selected.
    pub fn clear(&self) {
        let previous = self.inner.slot.send_replace(None);

        #[cfg(debug_assertions)]
        log::debug!(
            "Cleared {} selection (was selected: {})",
            std::any::type_name::<T>(),
            previous.is_some()
        );
        drop(previous);

        self.notify();
    }

    /// Register a callback invoked after every `select` and `clear`
    ///
    /// The callback receives the slot's value at the moment it is called. It is
    /// not called on registration. Callbacks run in subscription order, outside
    /// the store's locks, so they may read or mutate the store themselves; the
    /// last value any subscriber receives always matches the slot.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(Option<&T>) + Send + Sync + 'static,
    {
        let id = self.lock_subscribers().insert(Arc::new(callback));

        #[cfg(debug_assertions)]
        log::trace!(
            "Subscriber {} added to {} store",
            id,
            std::any::type_name::<T>()
        );

        let inner = Arc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = inner.upgrade() {
                inner
                    .subscribers
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .remove(id);

                #[cfg(debug_assertions)]
                log::trace!(
                    "Subscriber {} removed from {} store",
                    id,
                    std::any::type_name::<T>()
                );
            }
        })
    }

    /// Live view of the slot for async consumers
    ///
    /// The receiver starts with the current value marked as seen; every
    /// subsequent `select` or `clear` marks it changed.
    pub fn watch(&self) -> watch::Receiver<Option<Arc<T>>> {
        self.inner.slot.subscribe()
    }

    /// Number of active callback subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.lock_subscribers().len()
    }

    /// Whether both handles refer to the same slot
    pub fn same_store(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.inner, &b.inner)
    }

    fn notify(&self) {
        let callbacks = self.lock_subscribers().snapshot();
        if callbacks.is_empty() {
            return;
        }

        // Re-read per callback: an earlier callback may have mutated the slot
        for callback in callbacks {
            let current = self.current();
            callback(current.as_deref());
        }
    }

    fn lock_subscribers(&self) -> MutexGuard<'_, Subscribers<T>> {
        self.inner
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> Clone for StoreHandle<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for StoreHandle<T>
where
    T: Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for StoreHandle<T>
where
    T: Send + Sync + 'static,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreHandle")
            .field("item_type", &std::any::type_name::<T>())
            .field("selected", &self.is_selected())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

#[cfg(test)]
#[path = "selection_store_tests.rs"]
mod selection_store_tests;

//! Process-wide store registry
//!
//! One [`StoreHandle`] per item type, created the first time that type's store
//! is acquired and kept for the rest of the process.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Mutex, OnceLock, PoisonError};

use super::StoreHandle;

type Registry = Mutex<HashMap<TypeId, Box<dyn Any + Send + Sync>>>;

static REGISTRY: OnceLock<Registry> = OnceLock::new();

/// Acquire the shared store for item type `T`
///
/// The first call for a given `T` allocates an empty slot; every later call
/// returns a handle to that same slot. Never fails.
pub fn get_store<T>() -> StoreHandle<T>
where
    T: Send + Sync + 'static,
{
    let registry = REGISTRY.get_or_init(|| Mutex::new(HashMap::new()));
    let mut stores = registry.lock().unwrap_or_else(PoisonError::into_inner);

    let entry = stores.entry(TypeId::of::<T>()).or_insert_with(|| {
        #[cfg(debug_assertions)]
        log::debug!("Creating {} store", std::any::type_name::<T>());

        Box::new(StoreHandle::<T>::new())
    });

    match entry.downcast_ref::<StoreHandle<T>>() {
        Some(handle) => handle.clone(),
        None => unreachable!("registry entries are keyed by their own TypeId"),
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod registry_tests;

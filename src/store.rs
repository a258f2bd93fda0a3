//! Process-wide selection slot
//!
//! Holds at most one selected item per item type. Every consumer that acquires
//! the store through [`get_store`] shares the same slot, mutates it through
//! [`StoreHandle::select`] and [`StoreHandle::clear`], and can observe changes
//! either with a callback ([`StoreHandle::subscribe`]) or a watch receiver
//! ([`StoreHandle::watch`]).

mod registry;
mod selection_store;
mod subscription;

pub use registry::get_store;
pub use selection_store::StoreHandle;
pub use subscription::Subscription;

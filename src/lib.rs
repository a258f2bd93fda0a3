//! selection-store library - process-wide observable selection slot
//!
//! The [`store`] module holds the slot itself; the remaining modules build the
//! product overlay and its command-line session on top of it.

pub mod catalog;
pub mod config;
pub mod error;
pub mod overlay;
pub mod session;
pub mod store;

// Re-export commonly used types for convenience
pub use catalog::{Catalog, Product};
pub use config::Config;
pub use error::StoreError;
pub use overlay::{ProductStore, use_product_store};
pub use store::{StoreHandle, Subscription, get_store};

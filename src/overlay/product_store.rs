//! Product-flavoured view of the selection slot

use std::sync::Arc;

use crate::catalog::Product;
use crate::store::{StoreHandle, Subscription, get_store};

/// Acquire the shared product overlay store
pub fn use_product_store() -> ProductStore {
    ProductStore::from_handle(get_store::<Product>())
}

/// Opens and closes the product overlay by selecting or clearing a product
#[derive(Debug, Clone)]
pub struct ProductStore {
    handle: StoreHandle<Product>,
}

impl ProductStore {
    /// Wrap an existing handle, e.g. a standalone store in tests
    pub fn from_handle(handle: StoreHandle<Product>) -> Self {
        Self { handle }
    }

    /// Product currently shown in the overlay
    pub fn selected_product(&self) -> Option<Arc<Product>> {
        self.handle.current()
    }

    /// Whether the overlay is showing a product
    pub fn is_open(&self) -> bool {
        self.handle.is_selected()
    }

    /// Show `product` in the overlay, replacing any product already shown
    pub fn open_product_overlay(&self, product: impl Into<Arc<Product>>) {
        let product = product.into();

        #[cfg(debug_assertions)]
        log::debug!(
            "Opening product overlay for {} ({})",
            product.id,
            product.title
        );

        self.handle.select(product);
    }

    /// Hide the overlay
    pub fn close_product_overlay(&self) {
        #[cfg(debug_assertions)]
        log::debug!("Closing product overlay");

        self.handle.clear();
    }

    /// Be told whenever the overlay opens, switches product or closes
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(Option<&Product>) + Send + Sync + 'static,
    {
        self.handle.subscribe(callback)
    }

    pub fn handle(&self) -> &StoreHandle<Product> {
        &self.handle
    }
}

#[cfg(test)]
#[path = "product_store_tests.rs"]
mod product_store_tests;

//! Product catalog
//!
//! Read-only list of products loaded from a products.json file (a JSON array
//! of product records). Products are handed out as `Arc<Product>` so the
//! overlay store can share them without copying.

mod product;

pub use product::Product;

use std::collections::BTreeSet;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::sync::Arc;

use crate::error::StoreError;

/// Products in file order
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Arc<Product>>,
}

impl Catalog {
    /// Load a catalog from a JSON file
    ///
    /// # Errors
    /// * `StoreError::CatalogNotFound` - the file does not exist
    /// * `StoreError::Io` - the file exists but cannot be read
    /// * `StoreError::InvalidCatalog` - the contents are not a product array
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        #[cfg(debug_assertions)]
        log::debug!("Loading catalog from {:?}", path);

        let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => StoreError::CatalogNotFound(path.to_path_buf()),
            _ => StoreError::Io(e),
        })?;

        let catalog = Self::from_json(&contents)?;

        #[cfg(debug_assertions)]
        log::debug!("Catalog loaded with {} products", catalog.len());

        Ok(catalog)
    }

    /// Parse a catalog from a JSON string
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let products: Vec<Product> =
            serde_json::from_str(json).map_err(|e| StoreError::InvalidCatalog(e.to_string()))?;

        Ok(Self {
            products: products.into_iter().map(Arc::new).collect(),
        })
    }

    /// First product with the given id
    pub fn find(&self, id: u64) -> Option<Arc<Product>> {
        self.products
            .iter()
            .find(|product| product.id == id)
            .cloned()
    }

    pub fn products(&self) -> &[Arc<Product>] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Distinct categories, sorted
    pub fn categories(&self) -> Vec<&str> {
        self.products
            .iter()
            .map(|product| product.category.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod catalog_tests;

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Catalog file not found: {}", .0.display())]
    CatalogNotFound(PathBuf),

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("No product with id {0} in catalog")]
    UnknownProduct(u64),

    #[error(
        "No catalog given.\n\nPass a catalog path or set [catalog] path in ~/.config/selection-store/config.toml"
    )]
    MissingCatalogPath,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

// Configuration type definitions

use std::path::PathBuf;

use serde::Deserialize;

/// Catalog configuration section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    /// Catalog used when none is given on the command line
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Overlay rendering configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OverlayConfig {
    #[serde(default = "default_show_description")]
    pub show_description: bool,
    #[serde(default)]
    pub show_specifications: bool,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_show_description() -> bool {
    true
}

fn default_currency() -> String {
    "RM".to_string()
}

impl Default for OverlayConfig {
    fn default() -> Self {
        OverlayConfig {
            show_description: true,
            show_specifications: false,
            currency: default_currency(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub overlay: OverlayConfig,
}

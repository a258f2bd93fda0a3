// Product record as stored in products.json

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};

/// A single catalog product
///
/// Only `id` and `title` are required; every other field falls back to the
/// catalog importer's defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u64,
    pub title: String,
    #[serde(default = "default_price", deserialize_with = "deserialize_price")]
    pub price: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub additional_images: Vec<String>,
    #[serde(default)]
    pub specifications: BTreeMap<String, String>,
    #[serde(default)]
    pub url: String,
}

fn default_price() -> String {
    "N/A".to_string()
}

/// Scraped prices arrive as numbers, hand-edited ones as display strings
#[derive(Deserialize)]
#[serde(untagged)]
enum RawPrice {
    Number(f64),
    Text(String),
}

fn deserialize_price<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawPrice::deserialize(deserializer)? {
        RawPrice::Number(value) => format!("{:.2}", value),
        RawPrice::Text(text) => text,
    })
}

fn default_category() -> String {
    "Uncategorized".to_string()
}

impl Product {
    /// Create a product with only the required fields set
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            price: default_price(),
            description: String::new(),
            category: default_category(),
            image: String::new(),
            additional_images: Vec::new(),
            specifications: BTreeMap::new(),
            url: String::new(),
        }
    }
}

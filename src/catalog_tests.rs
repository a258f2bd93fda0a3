//! Tests for catalog loading

use super::*;
use proptest::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

const SAMPLE_CATALOG: &str = r#"[
    {
        "id": 101,
        "title": "Wong Fei Hung Collection",
        "price": 89.9,
        "description": "Classic martial arts box set",
        "category": "Action",
        "image": "/images/wfh.jpg",
        "additionalImages": ["/images/wfh-back.jpg"],
        "specifications": {"Number of Disc": "5", "Language": "Cantonese"},
        "url": "https://example.com/wfh"
    },
    {
        "id": 102,
        "title": "Untitled Drama",
        "price": "N/A"
    },
    {
        "id": 103,
        "title": "Comedy Night",
        "category": "Comedy"
    }
]"#;

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_from_json_parses_all_products() {
    let catalog = Catalog::from_json(SAMPLE_CATALOG).unwrap();
    assert_eq!(catalog.len(), 3);
    assert!(!catalog.is_empty());
}

#[test]
fn test_full_product_fields() {
    let catalog = Catalog::from_json(SAMPLE_CATALOG).unwrap();
    let product = catalog.find(101).unwrap();
    assert_eq!(product.title, "Wong Fei Hung Collection");
    assert_eq!(product.price, "89.90");
    assert_eq!(product.category, "Action");
    assert_eq!(product.additional_images, vec!["/images/wfh-back.jpg"]);
    assert_eq!(
        product.specifications.get("Number of Disc").map(String::as_str),
        Some("5")
    );
}

#[test]
fn test_missing_fields_use_defaults() {
    let catalog = Catalog::from_json(SAMPLE_CATALOG).unwrap();
    let product = catalog.find(102).unwrap();
    assert_eq!(product.price, "N/A");
    assert_eq!(product.category, "Uncategorized");
    assert!(product.description.is_empty());
    assert!(product.specifications.is_empty());

    let minimal = Catalog::from_json(r#"[{"id": 1, "title": "Only"}]"#).unwrap();
    assert_eq!(*minimal.find(1).unwrap(), Product::new(1, "Only"));
}

#[test]
fn test_find_unknown_id() {
    let catalog = Catalog::from_json(SAMPLE_CATALOG).unwrap();
    assert!(catalog.find(999).is_none());
}

#[test]
fn test_find_returns_first_duplicate() {
    let catalog =
        Catalog::from_json(r#"[{"id": 1, "title": "First"}, {"id": 1, "title": "Second"}]"#)
            .unwrap();
    assert_eq!(catalog.find(1).unwrap().title, "First");
}

#[test]
fn test_find_shares_product() {
    let catalog = Catalog::from_json(SAMPLE_CATALOG).unwrap();
    let a = catalog.find(101).unwrap();
    let b = catalog.find(101).unwrap();
    assert!(Arc::ptr_eq(&a, &b));
}

#[test]
fn test_categories_sorted_and_deduplicated() {
    let catalog = Catalog::from_json(SAMPLE_CATALOG).unwrap();
    assert_eq!(
        catalog.categories(),
        vec!["Action", "Comedy", "Uncategorized"]
    );
}

#[test]
fn test_empty_catalog() {
    let catalog = Catalog::from_json("[]").unwrap();
    assert!(catalog.is_empty());
    assert!(catalog.categories().is_empty());
}

#[test]
fn test_invalid_json_is_rejected() {
    let result = Catalog::from_json("{not json");
    assert!(matches!(result, Err(StoreError::InvalidCatalog(_))));
}

#[test]
fn test_missing_title_is_rejected() {
    let result = Catalog::from_json(r#"[{"id": 1}]"#);
    assert!(matches!(result, Err(StoreError::InvalidCatalog(_))));
}

#[test]
fn test_load_from_file() {
    let file = write_temp(SAMPLE_CATALOG);
    let catalog = Catalog::load(file.path()).unwrap();
    assert_eq!(catalog.len(), 3);
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.json");
    let result = Catalog::load(&path);
    assert!(matches!(result, Err(StoreError::CatalogNotFound(p)) if p == path));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Numeric prices are always rendered with two decimal places.
    #[test]
    fn prop_numeric_price_has_two_decimals(cents in 0u32..10_000_000) {
        let price = f64::from(cents) / 100.0;
        let json = format!(r#"[{{"id": 1, "title": "P", "price": {}}}]"#, price);
        let catalog = Catalog::from_json(&json).unwrap();
        let product = catalog.find(1).unwrap();
        prop_assert_eq!(&product.price, &format!("{:.2}", price));
    }
}

//! Tests for overlay rendering

use super::*;
use insta::assert_snapshot;

fn box_set() -> Product {
    let mut product = Product::new(101, "Wong Fei Hung Collection");
    product.price = "89.90".to_string();
    product.category = "Action".to_string();
    product.description = "Classic martial arts box set".to_string();
    product
        .specifications
        .insert("Number of Disc".to_string(), "5".to_string());
    product
        .specifications
        .insert("Language".to_string(), "Cantonese".to_string());
    product
}

#[test]
fn test_nothing_selected_renders_empty() {
    assert_eq!(render_overlay(None, &OverlayConfig::default()), "");
}

#[test]
fn snapshot_default_config() {
    let output = render_overlay(Some(&box_set()), &OverlayConfig::default());
    assert_snapshot!(output, @r"
    Wong Fei Hung Collection
    Price: RM89.90
    Category: Action

    Classic martial arts box set
    ");
}

#[test]
fn snapshot_with_specifications() {
    let config = OverlayConfig {
        show_specifications: true,
        ..OverlayConfig::default()
    };
    let output = render_overlay(Some(&box_set()), &config);
    assert_snapshot!(output, @r"
    Wong Fei Hung Collection
    Price: RM89.90
    Category: Action

    Classic martial arts box set

    Language: Cantonese
    Number of Disc: 5
    ");
}

#[test]
fn snapshot_minimal_product() {
    let config = OverlayConfig {
        show_specifications: true,
        ..OverlayConfig::default()
    };
    let output = render_overlay(Some(&Product::new(7, "Untitled")), &config);
    assert_snapshot!(output, @r"
    Untitled
    Price: N/A
    Category: Uncategorized
    ");
}

#[test]
fn test_description_hidden_by_config() {
    let config = OverlayConfig {
        show_description: false,
        ..OverlayConfig::default()
    };
    let output = render_overlay(Some(&box_set()), &config);
    assert!(!output.contains("Classic martial arts"));
    assert_eq!(output.lines().count(), 3);
}

#[test]
fn test_custom_currency() {
    let config = OverlayConfig {
        currency: "$".to_string(),
        ..OverlayConfig::default()
    };
    let output = render_overlay(Some(&box_set()), &config);
    assert!(output.contains("Price: $89.90"));
}

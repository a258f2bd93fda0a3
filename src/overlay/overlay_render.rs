//! Plain-text rendering of the product overlay

use crate::catalog::Product;
use crate::config::OverlayConfig;

/// Price shown when the catalog has none
const NO_PRICE: &str = "N/A";

/// Render the overlay for the selected product
///
/// Returns an empty string when nothing is selected. Specifications are
/// listed in key order.
pub fn render_overlay(product: Option<&Product>, config: &OverlayConfig) -> String {
    let Some(product) = product else {
        return String::new();
    };

    let mut lines = vec![product.title.clone(), format_price(product, config)];
    lines.push(format!("Category: {}", product.category));

    if config.show_description && !product.description.is_empty() {
        lines.push(String::new());
        lines.push(product.description.clone());
    }

    if config.show_specifications && !product.specifications.is_empty() {
        lines.push(String::new());
        lines.extend(
            product
                .specifications
                .iter()
                .map(|(key, value)| format!("{}: {}", key, value)),
        );
    }

    lines.join("\n")
}

fn format_price(product: &Product, config: &OverlayConfig) -> String {
    if product.price == NO_PRICE {
        format!("Price: {}", NO_PRICE)
    } else {
        format!("Price: {}{}", config.currency, product.price)
    }
}

#[cfg(test)]
#[path = "overlay_render_tests.rs"]
mod overlay_render_tests;

//! Product overlay
//!
//! The product overlay shows whichever product is currently selected. Any
//! component can open or close it through [`use_product_store`]; all of them
//! share the process-wide `Product` selection slot.

mod overlay_render;
mod product_store;

pub use overlay_render::render_overlay;
pub use product_store::{ProductStore, use_product_store};

// web_app/components/mod.rs - UI components module
//
// Structure:
// - common.rs: Reusable atomic components (Button, TextInput, badges, notices)
// - product.rs: Product form and table components

pub mod common;
pub mod product;

// Re-export commonly used components for convenience
pub use common::*;
pub use product::*;

// web_app/pages/mod.rs - Page components module
//
// - InventoryPage: the product list editor

pub mod inventory;

// Re-export page components
pub use inventory::InventoryPage;

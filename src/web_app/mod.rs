// web_app/mod.rs - Root module for the inventory editor
//
// Architecture:
// - model/: Shared data types (Product, ProductDraft, Notice)
// - error.rs: Validation and persistence errors
// - config.rs: Storage key, low-stock threshold, notice lifetime
// - store/: The product list, its persistence and its mutations
// - table.rs: Pure rendering of the product list into table rows
// - notice.rs: Auto-dismissing status message slot
// - controller.rs: Store + message slot behind each page action
// - components/: Reusable UI components (both SSR and hydrate)
// - pages/: Page-level components (both SSR and hydrate)
// - app.rs: Root application component with routing (both SSR and hydrate)

pub mod model;
pub mod error;
pub mod config;
pub mod store;
pub mod table;
pub mod notice;
pub mod controller;

// Components, pages, and app are used by both server and client
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod components;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod pages;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;

// Re-export main app component for convenience
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use app::App;

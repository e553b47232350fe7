// lib.rs - Root module for the cosmetics_inventory library
//
// The same library is compiled three ways:
// - no features: the pure inventory core (model, store, table, notices)
// - `ssr`: plus the Leptos components, used by the actix binary
// - `hydrate`: plus the Leptos components and the WASM entry point

/// Reusable sample data for tests
pub mod fixtures;

/// The inventory editor: core logic and Leptos UI
pub mod web_app;

cfg_if::cfg_if! {
    if #[cfg(feature = "hydrate")] {
        use wasm_bindgen::prelude::wasm_bindgen;

        /// WASM entry point, called by the script cargo-leptos injects
        #[wasm_bindgen]
        pub fn hydrate() {
            console_error_panic_hook::set_once();
            leptos::mount::hydrate_body(web_app::App);
        }
    }
}

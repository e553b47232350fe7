// web_app/app.rs - Root application component
//
// This is the entry point for the Leptos application.
// It sets up meta tags, shared configuration, routing, and the component tree.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::web_app::config::InventoryConfig;
use crate::web_app::pages::InventoryPage;

pub const APP_TITLE: &str = "Cosmetics Inventory";
pub const STYLESHEET_PATH: &str = "/pkg/cosmetics_inventory.css";

/// Root application component
///
/// Sets up:
/// - Meta tags
/// - InventoryConfig in context for the page
/// - Router with routes
#[component]
pub fn App() -> impl IntoView {
    // Provide meta context for <Title>, <Meta>, etc.
    provide_meta_context();
    provide_context(InventoryConfig::default());

    view! {
        <Title text=APP_TITLE />
        <Meta name="description" content="Add, list and delete cosmetics products stored in your browser" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        // Stylesheet link (Tailwind CSS)
        <Stylesheet id="leptos" href=STYLESHEET_PATH />

        <Router>
            <main class="min-h-screen">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=InventoryPage />
                </Routes>
            </main>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-slate-100 flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-slate-300 mb-4">"404"</h1>
                <p class="text-xl text-slate-600 mb-8">"Page not found"</p>
                <a
                    href="/"
                    class="px-6 py-3 bg-pink-600 text-white rounded-lg hover:bg-pink-700 transition-colors"
                >
                    "Back to Inventory"
                </a>
            </div>
        </div>
    }
}

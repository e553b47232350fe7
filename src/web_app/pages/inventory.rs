// web_app/pages/inventory.rs - Inventory page component
//
// The page owns the inventory controller and the form inputs, and wires
// them to the form and table components. Timers and focus live here; every
// decision about what an action does lives in InventoryController.

use leptos::html;
use leptos::prelude::*;

use crate::web_app::components::*;
use crate::web_app::config::InventoryConfig;
use crate::web_app::controller::{InventoryController, Shown};
use crate::web_app::model::{ProductDraft, ProductId};
use crate::web_app::store::{BrowserPrompt, BrowserStorage, ProductStore};
use crate::web_app::table::ProductTable;

/// Main inventory page component
///
/// Orchestrates:
/// - Loading the saved list once the page runs in the browser
/// - Add / delete / clear with confirmation
/// - Auto-dismissing status messages
#[component]
pub fn InventoryPage() -> impl IntoView {
    let config = use_context::<InventoryConfig>().unwrap_or_default();

    // Starts empty so the server-rendered table matches the first client render.
    let inventory = RwSignal::new(InventoryController::new(ProductStore::empty(
        BrowserStorage,
        config,
    )));

    // Effects only run in the browser: read localStorage once after hydration
    Effect::new(move || {
        inventory.update(|ctl| ctl.reload());
    });

    // Form state
    let name = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let qty = RwSignal::new(String::new());
    let name_ref = NodeRef::<html::Input>::new();

    // Derived view state; the memo keeps notice changes from rebuilding the table
    let table: Signal<ProductTable> = Memo::new(move |_| inventory.with(|ctl| ctl.table())).into();
    let total_items = Signal::derive(move || table.with(|t| t.total_items));
    let current_notice = Signal::derive(move || inventory.with(|ctl| ctl.notice().cloned()));

    let schedule_dismiss = move |shown: Shown| {
        set_timeout(
            move || {
                inventory.update(|ctl| {
                    ctl.dismiss(shown.ticket);
                });
            },
            shown.lifetime,
        );
    };

    let on_submit = Callback::new(move |draft: ProductDraft| {
        let Some(outcome) = inventory.try_update(|ctl| ctl.submit(&draft)) else {
            return;
        };

        if outcome.reset_form {
            name.set(String::new());
            price.set(String::new());
            qty.set(String::new());
            if let Some(input) = name_ref.get_untracked() {
                if let Err(e) = input.focus() {
                    tracing::debug!("Could not focus the product name input: {:?}", e);
                }
            }
        }

        schedule_dismiss(outcome.shown);
    });

    let on_delete = Callback::new(move |id: ProductId| {
        if let Some(shown) = inventory.try_update(|ctl| ctl.delete(id, &BrowserPrompt)).flatten() {
            schedule_dismiss(shown);
        }
    });

    let on_clear = Callback::new(move |()| {
        if let Some(shown) = inventory.try_update(|ctl| ctl.clear(&BrowserPrompt)).flatten() {
            schedule_dismiss(shown);
        }
    });

    view! {
        <div class="min-h-screen bg-slate-100 font-sans text-slate-900">
            // Header
            <header class="bg-white shadow-sm border-b border-slate-200">
                <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 h-16 flex items-center justify-between">
                    <div class="flex items-center gap-2">
                        <span class="text-2xl">"💄"</span>
                        <h1 class="text-xl font-bold text-slate-800">"Cosmetics Inventory"</h1>
                    </div>
                    <div class="text-sm text-slate-500">
                        "Total items: "
                        <span id="total-items" class="font-bold text-pink-600">
                            {move || total_items.get()}
                        </span>
                    </div>
                </div>
            </header>

            <main class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <div class="grid grid-cols-1 lg:grid-cols-3 gap-8 items-start">
                    // Add product form
                    <section class="bg-white rounded-2xl shadow-sm p-6 border border-slate-100">
                        <h2 class="text-lg font-bold text-slate-800 mb-4">"Add Product"</h2>
                        <NoticeBanner notice=current_notice />
                        <ProductForm
                            name=name
                            price=price
                            qty=qty
                            name_ref=name_ref
                            on_submit=on_submit
                        />
                    </section>

                    // Product list
                    <section class="lg:col-span-2 bg-white rounded-2xl shadow-sm border border-slate-100 overflow-hidden">
                        <div class="flex justify-between items-center px-6 py-4 border-b border-slate-100">
                            <h2 class="text-lg font-bold text-slate-800">"Products"</h2>
                            <DangerButton
                                on_click=on_clear
                                disabled=Signal::derive(move || total_items.get() == 0)
                            >
                                "Clear All"
                            </DangerButton>
                        </div>
                        <InventoryTable table=table on_delete=on_delete />
                    </section>
                </div>
            </main>
        </div>
    }
}

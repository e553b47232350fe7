// web_app/components/product.rs - Product form and table components
//
// Components for editing the inventory:
// - ProductForm: name/price/quantity inputs with submit
// - InventoryTable: the product list, rebuilt from ProductTable on every change
// - ProductRow: one product with its delete control

use leptos::html;
use leptos::prelude::*;

use super::common::{Button, QuantityBadge, TextInput};
use crate::web_app::model::{ProductDraft, ProductId};
use crate::web_app::table::{ProductTable, TableRow, EMPTY_PLACEHOLDER};

/// Add-product form
///
/// Owns no state: the page holds the input signals so it can reset them
/// after a successful add.
#[component]
pub fn ProductForm(
    name: RwSignal<String>,
    price: RwSignal<String>,
    qty: RwSignal<String>,
    /// Focused again after a successful add
    name_ref: NodeRef<html::Input>,
    /// Receives the raw input on submit
    on_submit: Callback<ProductDraft>,
) -> impl IntoView {
    let handle_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(ProductDraft::new(
            name.get_untracked(),
            price.get_untracked(),
            qty.get_untracked(),
        ));
    };

    view! {
        <form id="product-form" on:submit=handle_submit class="space-y-4">
            <label class="block">
                <span class="block text-sm font-medium text-slate-600 mb-1">"Product Name"</span>
                <input
                    id="product-name"
                    type="text"
                    placeholder="e.g. Matte Lipstick"
                    node_ref=name_ref
                    class="w-full px-4 py-2 border border-slate-300 rounded-lg \
                           focus:ring-2 focus:ring-pink-500 focus:border-transparent \
                           outline-none transition-shadow shadow-sm"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </label>
            <div class="grid grid-cols-2 gap-4">
                <TextInput value=price label="Price ($)" placeholder="0.00" input_type="number" step="0.01" />
                <TextInput value=qty label="Quantity" placeholder="0" input_type="number" step="1" />
            </div>
            <Button button_type="submit" class="w-full">
                "Add Product"
            </Button>
        </form>
    }
}

/// One table row
#[component]
pub fn ProductRow(
    row: TableRow,
    /// Called with the row's product id when its delete button is clicked
    on_delete: Callback<ProductId>,
) -> impl IntoView {
    let position = row.position_label();
    let TableRow {
        id,
        name,
        price_label,
        qty,
        low_stock,
        ..
    } = row;

    view! {
        <tr class="hover:bg-slate-50 transition border-b border-slate-100 last:border-0">
            <td class="p-4 text-slate-500 text-sm font-mono">{position}</td>
            <td class="p-4 font-medium text-slate-800">{name}</td>
            <td class="p-4 text-slate-600">{price_label}</td>
            <td class="p-4">
                <QuantityBadge qty=qty low_stock=low_stock />
            </td>
            <td class="p-4 text-center">
                <button
                    type="button"
                    class="delete-btn text-slate-400 hover:text-red-600 transition p-2"
                    data-id=id.to_string()
                    title="Delete product"
                    on:click=move |_| on_delete.run(id)
                >
                    <svg class="w-5 h-5" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path
                            stroke-linecap="round"
                            stroke-linejoin="round"
                            stroke-width="2"
                            d="M19 7l-.867 12.142A2 2 0 0116.138 21H7.862a2 2 0 01-1.995-1.858L5 7m5 4v6m4-6v6m1-10V4a1 1 0 00-1-1h-4a1 1 0 00-1 1v3M4 7h16"
                        ></path>
                    </svg>
                </button>
            </td>
        </tr>
    }
}

/// Product table
///
/// Every change to `table` re-creates all rows; there is no keyed diffing,
/// so row numbers always match list positions.
#[component]
pub fn InventoryTable(
    table: Signal<ProductTable>,
    on_delete: Callback<ProductId>,
) -> impl IntoView {
    view! {
        <table class="w-full text-left">
            <thead class="bg-slate-50 text-slate-500 text-xs uppercase tracking-wider">
                <tr>
                    <th class="p-4">"#"</th>
                    <th class="p-4">"Name"</th>
                    <th class="p-4">"Price"</th>
                    <th class="p-4">"Qty"</th>
                    <th class="p-4 text-center">"Action"</th>
                </tr>
            </thead>
            <tbody id="product-table-body">
                {move || {
                    let table = table.get();
                    if table.is_empty() {
                        view! {
                            <tr id="empty-row">
                                <td colspan="5" class="p-8 text-center text-slate-400 italic">
                                    {EMPTY_PLACEHOLDER}
                                </td>
                            </tr>
                        }.into_any()
                    } else {
                        table.rows.into_iter().map(|row| view! {
                            <ProductRow row=row on_delete=on_delete />
                        }).collect_view().into_any()
                    }
                }}
            </tbody>
        </table>
    }
}

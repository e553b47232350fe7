// web_app/components/common.rs - Reusable UI components
//
// Small, composable components used by the inventory page.
// Pure, stateless components that receive all data via props.

use leptos::prelude::*;

use crate::web_app::model::{Notice, NoticeKind};
use crate::web_app::table::qty_badge_class;

const BUTTON_BASE_CLASS: &str = "px-4 py-2 bg-pink-600 text-white rounded-lg hover:bg-pink-700 \
                                 transition-colors disabled:bg-gray-400 disabled:cursor-not-allowed \
                                 font-medium shadow-sm active:transform active:scale-95";

/// Class attribute of `Button`: the base styling plus caller extras
pub fn button_class(extra: &str) -> String {
    if extra.is_empty() {
        BUTTON_BASE_CLASS.to_string()
    } else {
        format!("{} {}", BUTTON_BASE_CLASS, extra)
    }
}

/// Primary button component
///
/// A styled button with hover effects.
#[component]
pub fn Button(
    /// Button label text
    children: Children,
    /// Click handler
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    /// Whether the button is disabled
    #[prop(default = false)]
    disabled: bool,
    /// Button type (submit, button, reset)
    #[prop(default = "button")]
    button_type: &'static str,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <button
            type=button_type
            disabled=disabled
            class=button_class(class)
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

/// Destructive action button (e.g. "Clear All")
#[component]
pub fn DangerButton(
    children: Children,
    on_click: Callback<()>,
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
) -> impl IntoView {
    let class = "px-3 py-1.5 text-sm bg-white text-red-600 rounded-lg hover:bg-red-50 \
                 transition-colors border border-red-200 disabled:opacity-50 \
                 disabled:cursor-not-allowed font-medium";

    view! {
        <button
            type="button"
            class=class
            disabled=move || disabled.get()
            on:click=move |_| on_click.run(())
        >
            {children()}
        </button>
    }
}

/// Labelled form input bound to a string signal
#[component]
pub fn TextInput(
    /// The current value
    value: RwSignal<String>,
    /// Label shown above the input
    label: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Input type (text, number, ...)
    #[prop(default = "text")]
    input_type: &'static str,
    /// `step` attribute for number inputs
    #[prop(optional)]
    step: Option<&'static str>,
) -> impl IntoView {
    let class = "w-full px-4 py-2 border border-slate-300 rounded-lg \
                 focus:ring-2 focus:ring-pink-500 focus:border-transparent \
                 outline-none transition-shadow shadow-sm";

    view! {
        <label class="block">
            <span class="block text-sm font-medium text-slate-600 mb-1">{label}</span>
            <input
                type=input_type
                placeholder=placeholder
                step=step
                class=class
                prop:value=move || value.get()
                on:input=move |ev| {
                    value.set(event_target_value(&ev));
                }
            />
        </label>
    }
}

/// Quantity pill, red when stock is low
#[component]
pub fn QuantityBadge(qty: u32, low_stock: bool) -> impl IntoView {
    let title = if low_stock { "Low stock" } else { "In stock" };

    view! {
        <span class=qty_badge_class(low_stock) title=title>
            {qty}
        </span>
    }
}

/// Tailwind classes for the status message area
pub fn notice_class(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Success => "mb-4 p-3 rounded-lg text-sm font-medium bg-green-100 text-green-700",
        NoticeKind::Error => "mb-4 p-3 rounded-lg text-sm font-medium bg-red-100 text-red-700",
    }
}

/// Status message area; renders nothing while no notice is visible
#[component]
pub fn NoticeBanner(notice: Signal<Option<Notice>>) -> impl IntoView {
    move || {
        notice.get().map(|n| {
            view! {
                <div id="form-msg" role="status" class=notice_class(n.kind)>
                    {n.text}
                </div>
            }
        })
    }
}

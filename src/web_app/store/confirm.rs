// web_app/store/confirm.rs - Two-phase confirmation for destructive actions
//
// The store hands out a ConfirmRequest, something answers it, and only then
// is the request applied. The browser answers with window.confirm; tests
// answer with a closure.

use crate::web_app::model::ProductId;

/// A destructive action waiting for a yes/no answer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfirmRequest {
    DeleteOne(ProductId),
    ClearAll,
}

impl ConfirmRequest {
    /// Question shown to the user
    pub fn message(&self) -> &'static str {
        match self {
            ConfirmRequest::DeleteOne(_) => "Are you sure you want to delete this product?",
            ConfirmRequest::ClearAll => {
                "Are you sure you want to delete ALL products? This cannot be undone."
            }
        }
    }
}

/// Decides whether a ConfirmRequest goes ahead
pub trait ConfirmPrompt {
    fn confirm(&self, request: &ConfirmRequest) -> bool;
}

impl<F> ConfirmPrompt for F
where
    F: Fn(&ConfirmRequest) -> bool,
{
    fn confirm(&self, request: &ConfirmRequest) -> bool {
        self(request)
    }
}

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use browser::BrowserPrompt;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
mod browser {
    use super::{ConfirmPrompt, ConfirmRequest};

    /// Blocking window.confirm dialog; a missing window or a JS error counts as "no"
    #[derive(Clone, Copy, Debug, Default)]
    pub struct BrowserPrompt;

    impl ConfirmPrompt for BrowserPrompt {
        fn confirm(&self, request: &ConfirmRequest) -> bool {
            web_sys::window()
                .and_then(|w| w.confirm_with_message(request.message()).ok())
                .unwrap_or(false)
        }
    }
}

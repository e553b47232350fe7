// web_app/controller.rs - What the inventory page does for each user action
//
// InventoryController pairs the product store with the status message slot.
// The page keeps it in one signal and only adds what needs a browser:
// timers, input focus and the form's input signals.

use std::time::Duration;

use crate::web_app::model::{Notice, ProductDraft, ProductId};
use crate::web_app::notice::NoticeSlot;
use crate::web_app::store::{ConfirmPrompt, ProductStore, StorageBackend};
use crate::web_app::table::ProductTable;

/// A notice that was just shown, and when to hide it
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Shown {
    pub ticket: u64,
    pub lifetime: Duration,
}

/// Result of submitting the add-product form
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub shown: Shown,
    /// Clear the inputs and focus the name field
    pub reset_form: bool,
}

#[derive(Clone, Debug)]
pub struct InventoryController<S> {
    store: ProductStore<S>,
    notices: NoticeSlot,
}

impl<S: StorageBackend> InventoryController<S> {
    pub fn new(store: ProductStore<S>) -> Self {
        Self {
            store,
            notices: NoticeSlot::default(),
        }
    }

    /// Pick up the persisted list
    pub fn reload(&mut self) {
        self.store.reload();
    }

    pub fn store(&self) -> &ProductStore<S> {
        &self.store
    }

    pub fn table(&self) -> ProductTable {
        self.store.table()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notices.current()
    }

    pub fn submit(&mut self, draft: &ProductDraft) -> SubmitOutcome {
        let notice = self.store.submit(draft);
        let reset_form = notice.is_success();
        SubmitOutcome {
            shown: self.show(notice),
            reset_form,
        }
    }

    /// `None` when the user declines; nothing is shown then.
    pub fn delete(&mut self, id: ProductId, prompt: &impl ConfirmPrompt) -> Option<Shown> {
        let notice = self.store.delete_product(id, prompt)?;
        Some(self.show(notice))
    }

    /// `None` when the list is empty (the prompt is not asked) or the user declines.
    pub fn clear(&mut self, prompt: &impl ConfirmPrompt) -> Option<Shown> {
        let notice = self.store.clear_all(prompt)?;
        Some(self.show(notice))
    }

    /// Timer callback for a shown notice
    pub fn dismiss(&mut self, ticket: u64) -> bool {
        self.notices.dismiss(ticket)
    }

    fn show(&mut self, notice: Notice) -> Shown {
        Shown {
            ticket: self.notices.show(notice),
            lifetime: self.store.config().notice_lifetime(),
        }
    }
}

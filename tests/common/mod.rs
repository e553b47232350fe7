// common/mod.rs - Shared test helpers
//
// Fresh stores, drafts and canned confirmation answers, so each test file
// only spells out what it is actually checking.

#![allow(dead_code)]

use std::cell::RefCell;

use cosmetics_inventory::web_app::config::InventoryConfig;
use cosmetics_inventory::web_app::model::ProductDraft;
use cosmetics_inventory::web_app::store::{
    ConfirmPrompt, ConfirmRequest, MemoryStorage, ProductStore,
};

pub type TestStore = ProductStore<MemoryStorage>;

/// Store over empty in-memory storage with default settings
pub fn fresh_store() -> TestStore {
    ProductStore::load(MemoryStorage::new(), InventoryConfig::default())
}

/// Store loaded from existing storage, as after a page reload
pub fn store_from(storage: MemoryStorage) -> TestStore {
    ProductStore::load(storage, InventoryConfig::default())
}

pub fn draft(name: &str, price: &str, qty: &str) -> ProductDraft {
    ProductDraft::new(name, price, qty)
}

/// Prompt that always gives the same answer and records what it was asked
#[derive(Default)]
pub struct ScriptedPrompt {
    answer: bool,
    asked: RefCell<Vec<ConfirmRequest>>,
}

impl ScriptedPrompt {
    pub fn accepting() -> Self {
        Self {
            answer: true,
            asked: RefCell::new(Vec::new()),
        }
    }

    pub fn declining() -> Self {
        Self {
            answer: false,
            asked: RefCell::new(Vec::new()),
        }
    }

    pub fn asked(&self) -> Vec<ConfirmRequest> {
        self.asked.borrow().clone()
    }
}

impl ConfirmPrompt for ScriptedPrompt {
    fn confirm(&self, request: &ConfirmRequest) -> bool {
        self.asked.borrow_mut().push(*request);
        self.answer
    }
}

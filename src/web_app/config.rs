// web_app/config.rs - Client-side settings for the inventory editor
//
// Server settings (address, site root) come from leptos_config; these are
// the values the store and the page need in the browser.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// localStorage key holding the product list
pub const DEFAULT_STORAGE_KEY: &str = "cosmetics_products";

/// Products with fewer units than this get the low-stock badge
pub const DEFAULT_LOW_STOCK_THRESHOLD: u32 = 5;

/// How long a status message stays visible
pub const DEFAULT_NOTICE_LIFETIME_MS: u64 = 3000;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    pub storage_key: String,
    pub low_stock_threshold: u32,
    pub notice_lifetime_ms: u64,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
            notice_lifetime_ms: DEFAULT_NOTICE_LIFETIME_MS,
        }
    }
}

impl InventoryConfig {
    pub fn notice_lifetime(&self) -> Duration {
        Duration::from_millis(self.notice_lifetime_ms)
    }
}

// fixtures/mod.rs - Test fixtures module
//
// Reusable sample data for tests. Instead of spelling out products in every
// test, a test picks a catalog and either loads it into a store or writes it
// to a storage slot as if an earlier session had saved it.

pub mod catalog;

pub use catalog::CosmeticsCatalog;

use crate::web_app::config::InventoryConfig;
use crate::web_app::model::Product;
use crate::web_app::store::MemoryStorage;

/// A fixed set of products a test can start from
pub trait TestCatalog {
    /// Products in display order
    fn products() -> Vec<Product>;

    /// The catalog serialized the way the store persists it
    fn blob() -> String {
        serde_json::to_string(&Self::products()).unwrap_or_else(|_| "[]".to_string())
    }

    /// Storage holding the catalog under the default key
    fn storage() -> MemoryStorage {
        MemoryStorage::with_slot(InventoryConfig::default().storage_key, Self::blob())
    }
}

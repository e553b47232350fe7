// web_app/store/mod.rs - The product list and everything that mutates it
//
// ProductStore owns the ordered product list, the id generator and the
// storage slot. Every mutation writes the full list back to storage; the
// table is re-derived from the list by whoever renders it.

pub mod confirm;
pub mod ids;
pub mod storage;

pub use confirm::{ConfirmPrompt, ConfirmRequest};
pub use ids::IdGenerator;
pub use storage::{MemoryStorage, StorageBackend};

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use confirm::BrowserPrompt;
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use storage::BrowserStorage;

use crate::web_app::config::InventoryConfig;
use crate::web_app::error::{StoreError, StoreResult, ValidationError};
use crate::web_app::model::{Notice, Product, ProductDraft, ProductId};
use crate::web_app::table::ProductTable;

pub const PRODUCT_ADDED: &str = "Product added successfully!";
pub const PRODUCT_DELETED: &str = "Product deleted.";
pub const ALL_CLEARED: &str = "All products cleared.";

#[derive(Clone, Debug)]
pub struct ProductStore<S> {
    products: Vec<Product>,
    ids: IdGenerator,
    storage: S,
    config: InventoryConfig,
}

impl<S: StorageBackend> ProductStore<S> {
    /// Store with an empty list that has not looked at storage yet
    pub fn empty(storage: S, config: InventoryConfig) -> Self {
        Self {
            products: Vec::new(),
            ids: IdGenerator::default(),
            storage,
            config,
        }
    }

    /// Store initialized from whatever the storage slot holds
    pub fn load(storage: S, config: InventoryConfig) -> Self {
        let mut store = Self::empty(storage, config);
        store.reload();
        store
    }

    /// Replace the in-memory list with the persisted one.
    ///
    /// A missing or unreadable blob yields an empty list; the user is not told.
    pub fn reload(&mut self) {
        let loaded = self.read_blob().and_then(|products| {
            let products = products.unwrap_or_default();
            let ids = IdGenerator::seeded(&products)?;
            Ok((products, ids))
        });

        (self.products, self.ids) = match loaded {
            Ok((products, ids)) => {
                tracing::debug!("Loaded {} products from '{}'", products.len(), self.config.storage_key);
                (products, ids)
            }
            Err(e) => {
                tracing::warn!("Discarding saved products: {}", e);
                (Vec::new(), IdGenerator::default())
            }
        };
    }

    fn read_blob(&self) -> StoreResult<Option<Vec<Product>>> {
        let Some(raw) = self.storage.read(&self.config.storage_key)? else {
            return Ok(None);
        };
        serde_json::from_str(&raw).map(Some).map_err(StoreError::Corrupt)
    }

    /// Write the whole list to the storage slot
    pub fn save(&mut self) -> StoreResult<()> {
        let blob = serde_json::to_string(&self.products).map_err(StoreError::Encode)?;
        self.storage.write(&self.config.storage_key, &blob)?;
        tracing::debug!("Saved {} products to '{}'", self.products.len(), self.config.storage_key);
        Ok(())
    }

    // The in-memory change stands even if the write fails.
    fn persist(&mut self) {
        if let Err(e) = self.save() {
            tracing::error!("Failed to persist products: {}", e);
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn config(&self) -> &InventoryConfig {
        &self.config
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Table model of the current list
    pub fn table(&self) -> ProductTable {
        ProductTable::render(&self.products, self.config.low_stock_threshold)
    }

    /// Validate the draft and append it as a new product
    pub fn add_product(&mut self, draft: &ProductDraft) -> Result<ProductId, ValidationError> {
        let valid = match draft.validate() {
            Ok(valid) => valid,
            Err(e) => {
                tracing::warn!("Rejected product draft {:?}: {}", draft, e);
                return Err(e);
            }
        };

        let Some(id) = self.ids.next() else {
            tracing::error!("Product ids exhausted after {} products", self.products.len());
            return Err(ValidationError::OutOfIds);
        };
        self.products.push(Product {
            id,
            name: valid.name,
            price: valid.price,
            qty: valid.qty,
        });
        self.persist();

        tracing::info!("Added product {} ({} total)", id, self.products.len());
        Ok(id)
    }

    /// Form submit: add the draft and describe the outcome for the message area
    pub fn submit(&mut self, draft: &ProductDraft) -> Notice {
        match self.add_product(draft) {
            Ok(_) => Notice::success(PRODUCT_ADDED),
            Err(e) => e.into(),
        }
    }

    /// First phase of deleting one product
    pub fn request_delete(&self, id: ProductId) -> ConfirmRequest {
        ConfirmRequest::DeleteOne(id)
    }

    /// First phase of clearing the list; `None` when there is nothing to clear
    pub fn request_clear(&self) -> Option<ConfirmRequest> {
        (!self.products.is_empty()).then_some(ConfirmRequest::ClearAll)
    }

    /// Second phase: carry out a confirmed request
    pub fn apply(&mut self, request: ConfirmRequest) -> Notice {
        match request {
            ConfirmRequest::DeleteOne(id) => {
                match self.products.iter().position(|p| p.id == id) {
                    Some(index) => {
                        self.products.remove(index);
                        tracing::info!("Deleted product {} ({} left)", id, self.products.len());
                    }
                    None => tracing::debug!("Delete requested for unknown product {}", id),
                }
                self.persist();
                Notice::success(PRODUCT_DELETED)
            }
            ConfirmRequest::ClearAll => {
                let removed = self.products.len();
                self.products.clear();
                self.persist();
                tracing::info!("Cleared {} products", removed);
                Notice::success(ALL_CLEARED)
            }
        }
    }

    /// Ask, then delete. `None` when the user declines.
    pub fn delete_product(&mut self, id: ProductId, prompt: &impl ConfirmPrompt) -> Option<Notice> {
        let request = self.request_delete(id);
        if prompt.confirm(&request) {
            Some(self.apply(request))
        } else {
            None
        }
    }

    /// Ask, then clear. `None` when the list is already empty or the user declines.
    pub fn clear_all(&mut self, prompt: &impl ConfirmPrompt) -> Option<Notice> {
        let request = self.request_clear()?;
        if prompt.confirm(&request) {
            Some(self.apply(request))
        } else {
            None
        }
    }
}

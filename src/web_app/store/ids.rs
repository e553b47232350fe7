// web_app/store/ids.rs - Product id generation
//
// Ids are creation timestamps in epoch milliseconds, so they stay in the
// same range as ids written by earlier versions of the page. Two adds in the
// same millisecond would collide, so each id is at least one past the last.

use chrono::Utc;

use crate::web_app::error::{StoreError, StoreResult};
use crate::web_app::model::{Product, ProductId};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    /// Start after the largest id already in the list
    pub fn seeded(products: &[Product]) -> StoreResult<Self> {
        let last = products.iter().map(|p| p.id.0).max().unwrap_or(0);
        if last == i64::MAX {
            return Err(StoreError::IdsExhausted);
        }
        Ok(Self { last })
    }

    pub fn next(&mut self) -> Option<ProductId> {
        self.next_at(Utc::now().timestamp_millis())
    }

    /// Next id given the current time in epoch milliseconds; `None` once `i64::MAX` was handed out
    pub fn next_at(&mut self, now_ms: i64) -> Option<ProductId> {
        let id = now_ms.max(self.last.checked_add(1)?);
        self.last = id;
        Some(ProductId(id))
    }
}

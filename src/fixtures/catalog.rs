// fixtures/catalog.rs
//
// A small cosmetics shelf: a mix of well-stocked and low-stock items, whole
// and fractional prices, ids in creation order.

use rust_decimal::Decimal;

use crate::fixtures::TestCatalog;
use crate::web_app::model::{Product, ProductId};

pub struct CosmeticsCatalog;

impl CosmeticsCatalog {
    pub const FIRST_ID: i64 = 1_712_000_000_000;
}

impl TestCatalog for CosmeticsCatalog {
    fn products() -> Vec<Product> {
        let items = [
            ("Matte Lipstick", Decimal::new(999, 2), 10),
            ("Lip Gloss", Decimal::new(5, 0), 3),
            ("Volume Mascara", Decimal::new(1450, 2), 25),
            ("Rose Blush", Decimal::new(1100, 2), 4),
            ("Hydrating Serum", Decimal::new(3299, 2), 5),
        ];

        items
            .into_iter()
            .enumerate()
            .map(|(i, (name, price, qty))| Product {
                id: ProductId(Self::FIRST_ID + i as i64 * 1_000),
                name: name.to_string(),
                price,
                qty,
            })
            .collect()
    }
}

// web_app/table.rs - Product list to table rows
//
// Rendering is a full rebuild: every call produces the complete table from
// the current list, so rendering twice gives the same output.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::web_app::model::{Product, ProductId};

/// Text of the single row shown when there are no products
pub const EMPTY_PLACEHOLDER: &str = "No products added yet.";

/// One rendered table row
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableRow {
    /// 1-based position in the list
    pub position: usize,
    /// Carried by the row's delete button
    pub id: ProductId,
    pub name: String,
    pub price_label: String,
    pub qty: u32,
    pub low_stock: bool,
}

impl TableRow {
    pub fn position_label(&self) -> String {
        format!("#{}", self.position)
    }
}

/// The whole table plus the item counter shown in the header
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductTable {
    pub rows: Vec<TableRow>,
    pub total_items: usize,
}

impl ProductTable {
    pub fn render(products: &[Product], low_stock_threshold: u32) -> Self {
        let rows = products
            .iter()
            .enumerate()
            .map(|(index, product)| TableRow {
                position: index + 1,
                id: product.id,
                name: product.name.clone(),
                price_label: format_price(product.price),
                qty: product.qty,
                low_stock: product.qty < low_stock_threshold,
            })
            .collect();

        Self {
            rows,
            total_items: products.len(),
        }
    }

    /// When true the placeholder row is shown instead of product rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Dollar sign and exactly two decimals, halves rounded away from zero
pub fn format_price(price: Decimal) -> String {
    let rounded = price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("${:.2}", rounded)
}

/// Tailwind classes for the quantity badge
pub fn qty_badge_class(low_stock: bool) -> &'static str {
    if low_stock {
        "inline-block px-2 py-1 text-xs font-semibold rounded-full bg-red-100 text-red-700"
    } else {
        "inline-block px-2 py-1 text-xs font-semibold rounded-full bg-green-100 text-green-700"
    }
}

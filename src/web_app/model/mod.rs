// web_app/model/mod.rs - Shared data models for the inventory editor
//
// These structs are what the store keeps in memory, what gets written to
// localStorage, and what the components receive as props.

use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::web_app::error::ValidationError;

/// Unique product identifier (epoch milliseconds at creation, bumped on collision)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Product record as persisted under the storage key
///
/// Serialized as `{"id": number, "name": string, "price": number, "qty": number}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub qty: u32,
}

/// Raw form input, exactly as typed by the user
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: String,
    pub price: String,
    pub qty: String,
}

/// A draft that passed validation, ready to become a Product
#[derive(Clone, Debug, PartialEq)]
pub struct ValidDraft {
    pub name: String,
    pub price: Decimal,
    pub qty: u32,
}

impl ProductDraft {
    pub fn new(name: impl Into<String>, price: impl Into<String>, qty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            qty: qty.into(),
        }
    }

    /// Run the validation rules in order; the first failing rule wins.
    pub fn validate(&self) -> Result<ValidDraft, ValidationError> {
        let name = self.name.trim();
        let price = parse_price(&self.price).and_then(storable_price);
        let qty = parse_qty(&self.qty);

        let (price, qty) = match (price, qty) {
            (Some(price), Some(qty)) if !name.is_empty() => (price, qty),
            _ => return Err(ValidationError::Incomplete),
        };

        if price.is_sign_negative() && !price.is_zero() {
            return Err(ValidationError::NegativePrice);
        }

        if qty <= 0 {
            return Err(ValidationError::NonPositiveQuantity);
        }

        // "-0" is a valid price; keep the sign out of the stored value
        let price = if price.is_zero() { Decimal::ZERO } else { price };

        let qty = u32::try_from(qty).map_err(|_| ValidationError::Incomplete)?;

        Ok(ValidDraft {
            name: name.to_string(),
            price,
            qty,
        })
    }
}

fn parse_price(raw: &str) -> Option<Decimal> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    raw.parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
}

/// Snap `price` to the value a reload reads back from the float in the blob.
///
/// `None` when that value falls outside `Decimal` or never settles.
fn storable_price(price: Decimal) -> Option<Decimal> {
    let mut current = price;
    for _ in 0..4 {
        let stored = current.to_f64().filter(|f| f.is_finite())?;
        let reloaded = Decimal::from_str(&stored.to_string()).ok()?;
        if reloaded == current {
            return Some(current);
        }
        current = reloaded;
    }
    None
}

fn parse_qty(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}

/// Styling of a status message
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Transient status message shown above the form
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == NoticeKind::Success
    }
}

impl From<ValidationError> for Notice {
    fn from(err: ValidationError) -> Self {
        Notice::error(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_serializes_price_as_number() {
        let product = Product {
            id: ProductId(1700000000000),
            name: "Lipstick".to_string(),
            price: Decimal::from_str("9.99").unwrap(),
            qty: 10,
        };

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1700000000000_i64, "name": "Lipstick", "price": 9.99, "qty": 10})
        );
    }

    #[test]
    fn test_product_reads_browser_blob_entry() {
        let raw = r#"{"id":1712345678901,"name":"Gloss","price":5,"qty":3}"#;
        let product: Product = serde_json::from_str(raw).unwrap();

        assert_eq!(product.id, ProductId(1712345678901));
        assert_eq!(product.name, "Gloss");
        assert_eq!(product.price, Decimal::new(5, 0));
        assert_eq!(product.qty, 3);
    }

    #[test]
    fn test_validate_trims_name() {
        let valid = ProductDraft::new("  Mascara ", "12.5", "7").validate().unwrap();
        assert_eq!(valid.name, "Mascara");
        assert_eq!(valid.price, Decimal::from_str("12.5").unwrap());
        assert_eq!(valid.qty, 7);
    }

    #[test]
    fn test_validate_rule_order() {
        let cases = [
            (ProductDraft::new("", "-1", "0"), ValidationError::Incomplete),
            (ProductDraft::new("   ", "1", "1"), ValidationError::Incomplete),
            (ProductDraft::new("Blush", "abc", "1"), ValidationError::Incomplete),
            (ProductDraft::new("Blush", "1", ""), ValidationError::Incomplete),
            (ProductDraft::new("Blush", "-1", "0"), ValidationError::NegativePrice),
            (ProductDraft::new("Blush", "1", "0"), ValidationError::NonPositiveQuantity),
            (ProductDraft::new("Blush", "1", "-4"), ValidationError::NonPositiveQuantity),
        ];

        for (draft, expected) in cases {
            assert_eq!(draft.validate().unwrap_err(), expected, "draft {:?}", draft);
        }
    }

    #[test]
    fn test_validate_accepts_zero_price() {
        let valid = ProductDraft::new("Sample", "0", "1").validate().unwrap();
        assert!(valid.price.is_zero());

        let valid = ProductDraft::new("Sample", "-0", "1").validate().unwrap();
        assert!(valid.price.is_zero());
        assert!(!valid.price.is_sign_negative());
    }

    #[test]
    fn test_validate_keeps_only_float_precision() {
        let valid = ProductDraft::new("Serum", "1.23456789012345678", "1").validate().unwrap();
        assert_ne!(valid.price, Decimal::from_str("1.23456789012345678").unwrap());

        let product = Product {
            id: ProductId(1),
            name: valid.name,
            price: valid.price,
            qty: valid.qty,
        };
        let json = serde_json::to_string(&product).unwrap();
        let reloaded: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(reloaded, product);

        let valid = ProductDraft::new("Toner", "9.99", "1").validate().unwrap();
        assert_eq!(valid.price, Decimal::from_str("9.99").unwrap());
    }

    #[test]
    fn test_validate_rejects_price_beyond_float_range() {
        let err = ProductDraft::new("Gold Palette", "79228162514264337593543950335", "1")
            .validate()
            .unwrap_err();
        assert_eq!(err, ValidationError::Incomplete);
    }

    #[test]
    fn test_validate_rejects_fractional_quantity() {
        let err = ProductDraft::new("Toner", "4", "2.5").validate().unwrap_err();
        assert_eq!(err, ValidationError::Incomplete);
    }

    #[test]
    fn test_notice_from_validation_error() {
        let notice = Notice::from(ValidationError::NegativePrice);
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.text, "Price cannot be negative.");
        assert!(!notice.is_success());
    }

    #[test]
    fn test_product_id_display() {
        assert_eq!(ProductId(42).to_string(), "42");
    }
}

// web_app/error.rs - Error types for the inventory editor
//
// ValidationError messages are shown to the user verbatim.
// StoreError never reaches the user; it is logged and the store degrades.

use thiserror::Error;

/// Rejected form input. The first failing rule wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all fields correctly.")]
    Incomplete,

    #[error("Price cannot be negative.")]
    NegativePrice,

    #[error("Quantity must be greater than zero.")]
    NonPositiveQuantity,

    #[error("No more products can be added.")]
    OutOfIds,
}

/// Failure talking to the persisted storage slot
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage is not available")]
    Unavailable,

    #[error("failed to read storage: {0}")]
    Read(String),

    #[error("failed to write storage: {0}")]
    Write(String),

    #[error("stored product list is corrupt: {0}")]
    Corrupt(#[source] serde_json::Error),

    #[error("stored product ids leave no room for new ones")]
    IdsExhausted,

    #[error("failed to encode product list: {0}")]
    Encode(#[source] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            ValidationError::Incomplete.to_string(),
            "Please fill in all fields correctly."
        );
        assert_eq!(
            ValidationError::NegativePrice.to_string(),
            "Price cannot be negative."
        );
        assert_eq!(
            ValidationError::NonPositiveQuantity.to_string(),
            "Quantity must be greater than zero."
        );
        assert_eq!(
            ValidationError::OutOfIds.to_string(),
            "No more products can be added."
        );
    }

    #[test]
    fn test_corrupt_error_keeps_source() {
        let parse_err = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let err = StoreError::Corrupt(parse_err);
        assert!(err.to_string().starts_with("stored product list is corrupt"));
        assert!(std::error::Error::source(&err).is_some());
    }
}

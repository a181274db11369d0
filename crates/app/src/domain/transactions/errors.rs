//! Transactions service errors.

use sqlx::Error;
use thiserror::Error;

use crate::domain::products::records::ProductUuid;

#[derive(Debug, Error)]
pub enum TransactionsServiceError {
    #[error("checkout must contain at least one item")]
    EmptyCheckout,

    #[error("quantity for product {product} must be greater than zero")]
    InvalidQuantity { product: ProductUuid },

    #[error("product {product} not found")]
    ProductNotFound { product: ProductUuid },

    #[error("insufficient stock for {name}: {available} available, {requested} requested")]
    InsufficientStock {
        product: ProductUuid,
        name: String,
        available: u32,
        requested: u64,
    },

    #[error("transaction amount is too large")]
    AmountOverflow,

    #[error("transaction not found")]
    NotFound,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for TransactionsServiceError {
    fn from(error: Error) -> Self {
        match error {
            Error::RowNotFound => Self::NotFound,
            error => Self::Sql(error),
        }
    }
}

//! Transaction Records

use jiff::Timestamp;

use crate::{domain::products::records::ProductUuid, uuids::TypedUuid};

/// Transaction UUID
pub type TransactionUuid = TypedUuid<TransactionRecord>;

/// Transaction Detail UUID
pub type TransactionDetailUuid = TypedUuid<TransactionDetailRecord>;

/// A committed sale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRecord {
    pub uuid: TransactionUuid,
    /// Sum of every line subtotal, in minor currency units.
    pub total_amount: u64,
    pub created_at: Timestamp,
    /// Line items in the order they were requested.
    pub details: Vec<TransactionDetailRecord>,
}

/// A single line of a sale, with the product's name and price frozen at the
/// time of sale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionDetailRecord {
    pub uuid: TransactionDetailUuid,
    pub transaction: TransactionUuid,
    pub product: ProductUuid,
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: u64,
    pub subtotal: u64,
}

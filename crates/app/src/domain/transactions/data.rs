//! Transactions Data

use crate::domain::products::records::ProductUuid;

/// One requested line of a checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckoutItem {
    pub product: ProductUuid,
    pub quantity: u32,
}

//! Checkout planning.
//!
//! Turns the requested items and the locked product rows into the line items,
//! stock decrements and total to persist. Nothing here touches the database.

use rustc_hash::FxHashMap;

use crate::domain::{
    products::records::ProductUuid,
    transactions::{data::CheckoutItem, errors::TransactionsServiceError},
};

/// Largest amount a `BIGINT` column can hold.
const MAX_AMOUNT: u64 = i64::MAX.unsigned_abs();

/// A product row read under `FOR UPDATE` for the duration of a checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LockedProduct {
    pub uuid: ProductUuid,
    pub name: String,
    pub price: u64,
    pub stock: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CheckoutLine {
    pub product: ProductUuid,
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: u64,
    pub subtotal: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StockDecrement {
    pub product: ProductUuid,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CheckoutPlan {
    /// One line per requested item, in request order.
    pub lines: Vec<CheckoutLine>,
    /// One decrement per distinct product, in first-occurrence order.
    pub decrements: Vec<StockDecrement>,
    pub total: u64,
}

/// Reject requests that can never succeed before any storage work starts.
pub(crate) fn validate_items(items: &[CheckoutItem]) -> Result<(), TransactionsServiceError> {
    if items.is_empty() {
        return Err(TransactionsServiceError::EmptyCheckout);
    }

    if let Some(item) = items.iter().find(|item| item.quantity == 0) {
        return Err(TransactionsServiceError::InvalidQuantity {
            product: item.product,
        });
    }

    Ok(())
}

/// Distinct product identifiers, in first-occurrence order.
pub(crate) fn requested_products(items: &[CheckoutItem]) -> Vec<ProductUuid> {
    let mut seen = Vec::with_capacity(items.len());

    for item in items {
        if !seen.contains(&item.product) {
            seen.push(item.product);
        }
    }

    seen
}

/// Build the plan for `items` against the locked rows.
///
/// Products are checked in first-occurrence order, so the first product that
/// is unknown or short of stock decides the error. Quantities for the same
/// product are summed before comparing with stock, so splitting a purchase
/// over several lines can't oversell.
pub(crate) fn plan_checkout(
    items: &[CheckoutItem],
    locked: &FxHashMap<ProductUuid, LockedProduct>,
) -> Result<CheckoutPlan, TransactionsServiceError> {
    validate_items(items)?;

    let mut requested: FxHashMap<ProductUuid, u64> = FxHashMap::default();

    for item in items {
        *requested.entry(item.product).or_default() += u64::from(item.quantity);
    }

    let mut decrements = Vec::with_capacity(requested.len());

    for product in requested_products(items) {
        let row = locked_row(locked, product)?;
        let quantity = requested.get(&product).copied().unwrap_or_default();

        let Some(quantity) = u32::try_from(quantity)
            .ok()
            .filter(|quantity| *quantity <= row.stock)
        else {
            return Err(TransactionsServiceError::InsufficientStock {
                product,
                name: row.name.clone(),
                available: row.stock,
                requested: quantity,
            });
        };

        decrements.push(StockDecrement { product, quantity });
    }

    let mut lines = Vec::with_capacity(items.len());
    let mut total: u64 = 0;

    for item in items {
        let row = locked_row(locked, item.product)?;

        let subtotal = row
            .price
            .checked_mul(u64::from(item.quantity))
            .ok_or(TransactionsServiceError::AmountOverflow)?;

        total = total
            .checked_add(subtotal)
            .filter(|total| *total <= MAX_AMOUNT)
            .ok_or(TransactionsServiceError::AmountOverflow)?;

        lines.push(CheckoutLine {
            product: item.product,
            product_name: row.name.clone(),
            quantity: item.quantity,
            unit_price: row.price,
            subtotal,
        });
    }

    Ok(CheckoutPlan {
        lines,
        decrements,
        total,
    })
}

fn locked_row(
    locked: &FxHashMap<ProductUuid, LockedProduct>,
    product: ProductUuid,
) -> Result<&LockedProduct, TransactionsServiceError> {
    locked
        .get(&product)
        .ok_or(TransactionsServiceError::ProductNotFound { product })
}

//! Point-of-sale Domain Concerns

pub mod categories;
pub mod products;
pub mod transactions;

//! Point-of-sale domain and persistence modules.

pub mod context;
pub mod database;
pub mod domain;

#[cfg(test)]
mod test;

mod uuids;

pub use domain::{categories, products, transactions};
pub use uuids::TypedUuid;

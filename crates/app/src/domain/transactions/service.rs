//! Transactions service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::transactions::{
        data::CheckoutItem,
        errors::TransactionsServiceError,
        records::{TransactionRecord, TransactionUuid},
        repository::{PgTransactionsRepository, TransactionsRepository},
    },
};

#[derive(Clone)]
pub struct PgTransactionsService {
    repository: Arc<dyn TransactionsRepository>,
}

impl PgTransactionsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self::with_repository(Arc::new(PgTransactionsRepository::new(db)))
    }

    pub(crate) fn with_repository(repository: Arc<dyn TransactionsRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl TransactionsService for PgTransactionsService {
    async fn checkout(
        &self,
        items: Vec<CheckoutItem>,
    ) -> Result<TransactionRecord, TransactionsServiceError> {
        self.repository.create_transaction(items).await
    }

    async fn get_transaction(
        &self,
        transaction: TransactionUuid,
    ) -> Result<TransactionRecord, TransactionsServiceError> {
        self.repository.get_transaction(transaction).await
    }
}

#[automock]
#[async_trait]
/// Checkout and sale read-back operations.
pub trait TransactionsService: Send + Sync {
    /// Sells `items` in one atomic unit: validates stock, records the sale and
    /// its line items, and decrements stock.
    async fn checkout(
        &self,
        items: Vec<CheckoutItem>,
    ) -> Result<TransactionRecord, TransactionsServiceError>;

    /// Retrieve a committed sale.
    async fn get_transaction(
        &self,
        transaction: TransactionUuid,
    ) -> Result<TransactionRecord, TransactionsServiceError>;
}

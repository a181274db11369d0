//! Transactions Repository

use async_trait::async_trait;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use mockall::automock;
use rustc_hash::FxHashMap;
use sqlx::{FromRow, Postgres, Row, postgres::PgRow, query, query_as, query_scalar};
use tracing::{Span, info};

use crate::{
    database::Db,
    domain::transactions::{
        checkout::{self, LockedProduct},
        data::CheckoutItem,
        errors::TransactionsServiceError,
        records::{TransactionDetailRecord, TransactionDetailUuid, TransactionRecord, TransactionUuid},
    },
};

const LOCK_PRODUCTS_SQL: &str = include_str!("sql/lock_products.sql");
const CREATE_TRANSACTION_SQL: &str = include_str!("sql/create_transaction.sql");
const CREATE_TRANSACTION_DETAIL_SQL: &str = include_str!("sql/create_transaction_detail.sql");
const DECREMENT_STOCK_SQL: &str = include_str!("sql/decrement_stock.sql");
const GET_TRANSACTION_SQL: &str = include_str!("sql/get_transaction.sql");
const GET_TRANSACTION_DETAILS_SQL: &str = include_str!("sql/get_transaction_details.sql");

#[automock]
#[async_trait]
pub(crate) trait TransactionsRepository: Send + Sync {
    /// Record a sale and take its items out of stock, all or nothing.
    async fn create_transaction(
        &self,
        items: Vec<CheckoutItem>,
    ) -> Result<TransactionRecord, TransactionsServiceError>;

    /// Read back a committed sale with its line items in request order.
    async fn get_transaction(
        &self,
        transaction: TransactionUuid,
    ) -> Result<TransactionRecord, TransactionsServiceError>;
}

/// PostgreSQL-backed transactions repository.
///
/// Unlike the CRUD repositories this one owns the storage handle, because a
/// checkout has to run as exactly one database transaction.
#[derive(Debug, Clone)]
pub(crate) struct PgTransactionsRepository {
    db: Db,
}

impl PgTransactionsRepository {
    #[must_use]
    pub(crate) fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TransactionsRepository for PgTransactionsRepository {
    #[tracing::instrument(
        name = "transactions.repository.create_transaction",
        skip(self, items),
        fields(
            item_count = items.len(),
            transaction_uuid = tracing::field::Empty,
            total_amount = tracing::field::Empty
        ),
        err
    )]
    async fn create_transaction(
        &self,
        items: Vec<CheckoutItem>,
    ) -> Result<TransactionRecord, TransactionsServiceError> {
        checkout::validate_items(&items)?;

        // Rolls back on drop, including when the caller's future is cancelled.
        let mut tx = self.db.begin().await?;

        let locked: FxHashMap<_, _> = query_as::<Postgres, LockedProduct>(LOCK_PRODUCTS_SQL)
            .bind(checkout::requested_products(&items))
            .fetch_all(&mut *tx)
            .await?
            .into_iter()
            .map(|product| (product.uuid, product))
            .collect();

        let plan = checkout::plan_checkout(&items, &locked)?;

        let uuid = TransactionUuid::new();

        let span = Span::current();

        span.record("transaction_uuid", tracing::field::display(uuid));
        span.record("total_amount", plan.total);

        let created_at = query_scalar::<Postgres, SqlxTimestamp>(CREATE_TRANSACTION_SQL)
            .bind(uuid)
            .bind(to_bigint(plan.total)?)
            .fetch_one(&mut *tx)
            .await?
            .to_jiff();

        let mut details = Vec::with_capacity(plan.lines.len());

        for (position, line) in plan.lines.into_iter().enumerate() {
            let detail = TransactionDetailUuid::new();

            let position =
                i32::try_from(position).map_err(|_| TransactionsServiceError::AmountOverflow)?;

            let quantity = i32::try_from(line.quantity)
                .map_err(|_| TransactionsServiceError::AmountOverflow)?;

            query(CREATE_TRANSACTION_DETAIL_SQL)
                .bind(detail)
                .bind(uuid)
                .bind(line.product)
                .bind(position)
                .bind(&line.product_name)
                .bind(quantity)
                .bind(to_bigint(line.unit_price)?)
                .bind(to_bigint(line.subtotal)?)
                .execute(&mut *tx)
                .await?;

            details.push(TransactionDetailRecord {
                uuid: detail,
                transaction: uuid,
                product: line.product,
                product_name: line.product_name,
                quantity: line.quantity,
                unit_price: line.unit_price,
                subtotal: line.subtotal,
            });
        }

        for decrement in plan.decrements {
            let quantity = i32::try_from(decrement.quantity)
                .map_err(|_| TransactionsServiceError::AmountOverflow)?;

            query(DECREMENT_STOCK_SQL)
                .bind(decrement.product)
                .bind(quantity)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        info!(transaction_uuid = %uuid, total_amount = plan.total, "checkout committed");

        Ok(TransactionRecord {
            uuid,
            total_amount: plan.total,
            created_at,
            details,
        })
    }

    async fn get_transaction(
        &self,
        transaction: TransactionUuid,
    ) -> Result<TransactionRecord, TransactionsServiceError> {
        let mut tx = self.db.begin().await?;

        let (uuid, total_amount, created_at) =
            query_as::<Postgres, (TransactionUuid, i64, SqlxTimestamp)>(GET_TRANSACTION_SQL)
                .bind(transaction)
                .fetch_one(&mut *tx)
                .await?;

        let details = query_as::<Postgres, TransactionDetailRecord>(GET_TRANSACTION_DETAILS_SQL)
            .bind(transaction)
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(TransactionRecord {
            uuid,
            total_amount: from_bigint("total_amount", total_amount)?,
            created_at: created_at.to_jiff(),
            details,
        })
    }
}

fn to_bigint(amount: u64) -> Result<i64, TransactionsServiceError> {
    i64::try_from(amount).map_err(|_| TransactionsServiceError::AmountOverflow)
}

fn from_bigint(column: &str, value: i64) -> sqlx::Result<u64> {
    u64::try_from(value).map_err(|e| sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: Box::new(e),
    })
}

fn from_integer(column: &str, value: i32) -> sqlx::Result<u32> {
    u32::try_from(value).map_err(|e| sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: Box::new(e),
    })
}

impl<'r> FromRow<'r, PgRow> for LockedProduct {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: row.try_get("uuid")?,
            name: row.try_get("name")?,
            price: from_bigint("price", row.try_get("price")?)?,
            stock: from_integer("stock", row.try_get("stock")?)?,
        })
    }
}

impl<'r> FromRow<'r, PgRow> for TransactionDetailRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: row.try_get("uuid")?,
            transaction: row.try_get("transaction_uuid")?,
            product: row.try_get("product_uuid")?,
            product_name: row.try_get("product_name")?,
            quantity: from_integer("quantity", row.try_get("quantity")?)?,
            unit_price: from_bigint("unit_price", row.try_get("unit_price")?)?,
            subtotal: from_bigint("subtotal", row.try_get("subtotal")?)?,
        })
    }
}

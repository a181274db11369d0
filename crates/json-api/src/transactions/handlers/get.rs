//! Get Transaction Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use kasir_app::transactions::records::{TransactionDetailRecord, TransactionRecord};

use crate::{extensions::*, state::State, transactions::errors::into_status_error};

/// A completed sale.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TransactionResponse {
    pub id: Uuid,

    /// The date and time the sale was committed
    pub created_at: String,

    /// Sum of every line's subtotal, in minor currency units
    pub total_amount: u64,

    /// Line items in the order they were submitted
    pub details: Vec<TransactionDetailResponse>,
}

/// One line of a sale, priced as it was at checkout.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TransactionDetailResponse {
    pub id: Uuid,
    pub transaction_id: Uuid,
    pub product_id: Uuid,
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: u64,
    pub subtotal: u64,
}

impl From<TransactionDetailRecord> for TransactionDetailResponse {
    fn from(detail: TransactionDetailRecord) -> Self {
        TransactionDetailResponse {
            id: detail.uuid.into(),
            transaction_id: detail.transaction.into(),
            product_id: detail.product.into(),
            product_name: detail.product_name,
            quantity: detail.quantity,
            unit_price: detail.unit_price,
            subtotal: detail.subtotal,
        }
    }
}

impl From<TransactionRecord> for TransactionResponse {
    fn from(transaction: TransactionRecord) -> Self {
        TransactionResponse {
            id: transaction.uuid.into(),
            created_at: transaction.created_at.to_string(),
            total_amount: transaction.total_amount,
            details: transaction.details.into_iter().map(Into::into).collect(),
        }
    }
}

/// Get Transaction Handler
#[endpoint(
    tags("transactions"),
    summary = "Get Transaction",
    responses(
        (status_code = StatusCode::OK, description = "Transaction found"),
        (status_code = StatusCode::NOT_FOUND, description = "Transaction not found"),
    ),
)]
pub(crate) async fn handler(
    transaction: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<TransactionResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let transaction = state
        .app
        .transactions
        .get_transaction(transaction.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(transaction.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use kasir_app::{
        products::records::ProductUuid,
        transactions::{MockTransactionsService, TransactionsServiceError, records::TransactionUuid},
    };

    use crate::{
        errors::ErrorResponse,
        test_helpers::{make_transaction, transactions_service},
    };

    use super::*;

    fn make_service(repo: MockTransactionsService) -> Service {
        transactions_service(
            repo,
            Router::with_path("api/transactions/{transaction}").get(handler),
        )
    }

    #[tokio::test]
    async fn test_get_returns_transaction_with_details() -> TestResult {
        let uuid = TransactionUuid::new();
        let product = ProductUuid::new();
        let mut repo = MockTransactionsService::new();

        repo.expect_get_transaction()
            .once()
            .withf(move |u| *u == uuid)
            .return_once(move |_| Ok(make_transaction(uuid, product, 3, 1_000)));

        let body: serde_json::Value =
            TestClient::get(format!("http://example.com/api/transactions/{uuid}"))
                .send(&make_service(repo))
                .await
                .take_json()
                .await?;

        assert_eq!(body["id"], uuid.to_string());
        assert_eq!(body["totalAmount"], 3_000);
        assert_eq!(body["details"][0]["transactionId"], uuid.to_string());
        assert_eq!(body["details"][0]["productId"], product.to_string());
        assert_eq!(body["details"][0]["unitPrice"], 1_000);
        assert_eq!(body["details"][0]["subtotal"], 3_000);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_unknown_transaction_returns_404() -> TestResult {
        let mut repo = MockTransactionsService::new();

        repo.expect_get_transaction()
            .once()
            .return_once(|_| Err(TransactionsServiceError::NotFound));

        let mut res = TestClient::get(format!(
            "http://example.com/api/transactions/{}",
            TransactionUuid::new()
        ))
        .send(&make_service(repo))
        .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(body.error, "transaction not found");

        Ok(())
    }
}

//! Checkout Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use kasir_app::transactions::data::CheckoutItem;

use crate::{
    extensions::*,
    state::State,
    transactions::{errors::into_status_error, get::TransactionResponse},
};

/// Checkout Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CheckoutRequest {
    /// Items to sell, in receipt order
    pub items: Vec<CheckoutItemRequest>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CheckoutItemRequest {
    pub product_id: Uuid,

    /// Units to sell; must be greater than zero
    pub quantity: u32,
}

impl From<CheckoutItemRequest> for CheckoutItem {
    fn from(item: CheckoutItemRequest) -> Self {
        CheckoutItem {
            product: item.product_id.into(),
            quantity: item.quantity,
        }
    }
}

/// Checkout Handler
///
/// Sells every item in one atomic unit, decrementing stock.
#[endpoint(
    tags("transactions"),
    summary = "Checkout",
    responses(
        (status_code = StatusCode::CREATED, description = "Sale recorded"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid items or insufficient stock"),
        (status_code = StatusCode::METHOD_NOT_ALLOWED, description = "Method Not Allowed"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "transactions.checkout",
    skip(json, depot, res),
    fields(item_count = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<CheckoutRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<TransactionResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let items: Vec<CheckoutItem> = json.into_inner().items.into_iter().map(Into::into).collect();

    tracing::Span::current().record("item_count", items.len());

    let transaction = state
        .app
        .transactions
        .checkout(items)
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(transaction.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use kasir_app::{
        database::SqlError,
        products::records::ProductUuid,
        transactions::{MockTransactionsService, TransactionsServiceError, records::TransactionUuid},
    };

    use crate::{
        errors::{ErrorResponse, method_not_allowed},
        test_helpers::{make_transaction, transactions_service},
    };

    use super::*;

    fn make_service(repo: MockTransactionsService) -> Service {
        transactions_service(
            repo,
            Router::with_path("api/checkout")
                .post(handler)
                .goal(method_not_allowed),
        )
    }

    #[tokio::test]
    async fn test_checkout_returns_201_with_transaction() -> TestResult {
        let product = ProductUuid::new();
        let mut repo = MockTransactionsService::new();

        repo.expect_checkout()
            .once()
            .withf(move |items| {
                *items
                    == [CheckoutItem {
                        product,
                        quantity: 3,
                    }]
            })
            .return_once(move |_| Ok(make_transaction(TransactionUuid::new(), product, 3, 1_000)));

        let mut res = TestClient::post("http://example.com/api/checkout")
            .json(&json!({ "items": [{ "productId": Uuid::from(product), "quantity": 3 }] }))
            .send(&make_service(repo))
            .await;

        let body: TransactionResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(body.total_amount, 3_000);
        assert_eq!(body.details.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_checkout_keeps_item_order() {
        let first = ProductUuid::new();
        let second = ProductUuid::new();
        let mut repo = MockTransactionsService::new();

        repo.expect_checkout()
            .once()
            .withf(move |items| {
                items.iter().map(|item| item.product).collect::<Vec<_>>() == [second, first, second]
            })
            .return_once(move |_| Ok(make_transaction(TransactionUuid::new(), first, 1, 1)));

        let res = TestClient::post("http://example.com/api/checkout")
            .json(&json!({ "items": [
                { "productId": Uuid::from(second), "quantity": 1 },
                { "productId": Uuid::from(first), "quantity": 1 },
                { "productId": Uuid::from(second), "quantity": 2 },
            ] }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
    }

    #[tokio::test]
    async fn test_empty_checkout_returns_400() -> TestResult {
        let mut repo = MockTransactionsService::new();

        repo.expect_checkout()
            .once()
            .return_once(|_| Err(TransactionsServiceError::EmptyCheckout));

        let mut res = TestClient::post("http://example.com/api/checkout")
            .json(&json!({ "items": [] }))
            .send(&make_service(repo))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.error, "checkout must contain at least one item");

        Ok(())
    }

    #[tokio::test]
    async fn test_insufficient_stock_returns_400_with_message() -> TestResult {
        let product = ProductUuid::new();
        let mut repo = MockTransactionsService::new();

        repo.expect_checkout().once().return_once(move |_| {
            Err(TransactionsServiceError::InsufficientStock {
                product,
                name: "Kopi Susu".to_string(),
                available: 2,
                requested: 3,
            })
        });

        let mut res = TestClient::post("http://example.com/api/checkout")
            .json(&json!({ "items": [{ "productId": Uuid::from(product), "quantity": 3 }] }))
            .send(&make_service(repo))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(
            body.error,
            "insufficient stock for Kopi Susu: 2 available, 3 requested"
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_negative_quantity_is_rejected_before_the_service() {
        let mut repo = MockTransactionsService::new();

        repo.expect_checkout().never();

        let res = TestClient::post("http://example.com/api/checkout")
            .json(&json!({ "items": [{ "productId": Uuid::now_v7(), "quantity": -1 }] }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }

    #[tokio::test]
    async fn test_malformed_body_returns_400() {
        let mut repo = MockTransactionsService::new();

        repo.expect_checkout().never();

        let res = TestClient::post("http://example.com/api/checkout")
            .raw_json("{\"items\": [")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }

    #[tokio::test]
    async fn test_ill_typed_body_renders_json_error() -> TestResult {
        let mut repo = MockTransactionsService::new();

        repo.expect_checkout().never();

        let mut res = TestClient::post("http://example.com/api/checkout")
            .json(&json!({ "items": [{ "productId": "not-a-uuid", "quantity": "three" }] }))
            .send(&make_service(repo))
            .await;

        let content_type = res
            .headers()
            .get("content-type")
            .and_then(|value| value.to_str().ok())
            .map(ToOwned::to_owned);

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert!(
            content_type.is_some_and(|value| value.starts_with("application/json")),
            "expected a JSON error body"
        );
        assert!(!body.error.is_empty(), "expected an error message");

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_on_checkout_returns_405() -> TestResult {
        let mut res = TestClient::delete("http://example.com/api/checkout")
            .send(&make_service(MockTransactionsService::new()))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::METHOD_NOT_ALLOWED));
        assert_eq!(body.error, "method not allowed");

        Ok(())
    }

    #[tokio::test]
    async fn test_get_on_checkout_returns_405() -> TestResult {
        let mut res = TestClient::get("http://example.com/api/checkout")
            .send(&make_service(MockTransactionsService::new()))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::METHOD_NOT_ALLOWED));
        assert_eq!(body.error, "method not allowed");

        Ok(())
    }

    #[tokio::test]
    async fn test_storage_failure_returns_500() -> TestResult {
        let mut repo = MockTransactionsService::new();

        repo.expect_checkout()
            .once()
            .return_once(|_| Err(TransactionsServiceError::Sql(SqlError::PoolTimedOut)));

        let mut res = TestClient::post("http://example.com/api/checkout")
            .json(&json!({ "items": [{ "productId": Uuid::now_v7(), "quantity": 1 }] }))
            .send(&make_service(repo))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(body.error, "internal server error");

        Ok(())
    }
}

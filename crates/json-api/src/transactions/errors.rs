//! Transaction Errors

use salvo::http::StatusError;
use tracing::error;

use kasir_app::transactions::TransactionsServiceError;

pub(crate) fn into_status_error(error: TransactionsServiceError) -> StatusError {
    match &error {
        TransactionsServiceError::EmptyCheckout
        | TransactionsServiceError::InvalidQuantity { .. }
        | TransactionsServiceError::ProductNotFound { .. }
        | TransactionsServiceError::InsufficientStock { .. }
        | TransactionsServiceError::AmountOverflow => {
            StatusError::bad_request().brief(error.to_string())
        }
        TransactionsServiceError::NotFound => {
            StatusError::not_found().brief("transaction not found")
        }
        TransactionsServiceError::Sql(source) => {
            error!("transaction storage failure: {source}");

            StatusError::internal_server_error().brief("internal server error")
        }
    }
}

#[cfg(test)]
mod tests {
    use kasir_app::{database::SqlError, products::records::ProductUuid};
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn insufficient_stock_keeps_the_service_message() {
        let error = into_status_error(TransactionsServiceError::InsufficientStock {
            product: ProductUuid::new(),
            name: "Kopi Susu".to_string(),
            available: 2,
            requested: 3,
        });

        assert_eq!(error.code, StatusCode::BAD_REQUEST);
        assert_eq!(
            error.brief,
            "insufficient stock for Kopi Susu: 2 available, 3 requested"
        );
    }

    #[test]
    fn storage_failures_hide_their_cause() {
        let error = into_status_error(TransactionsServiceError::Sql(SqlError::PoolTimedOut));

        assert_eq!(error.code, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.brief, "internal server error");
    }
}

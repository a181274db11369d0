//! Product Errors

use salvo::http::StatusError;
use tracing::error;

use kasir_app::products::ProductsServiceError;

pub(crate) fn into_status_error(error: ProductsServiceError) -> StatusError {
    match error {
        ProductsServiceError::NotFound => StatusError::not_found().brief("product not found"),
        ProductsServiceError::InvalidReference => {
            StatusError::bad_request().brief("category not found")
        }
        ProductsServiceError::MissingRequiredData
        | ProductsServiceError::InvalidData
        | ProductsServiceError::InvalidAmount(_) => {
            StatusError::bad_request().brief("invalid product payload")
        }
        ProductsServiceError::Sql(source) => {
            error!("product storage failure: {source}");

            StatusError::internal_server_error().brief("internal server error")
        }
    }
}

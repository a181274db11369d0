//! Category Errors

use salvo::http::StatusError;
use tracing::error;

use kasir_app::categories::CategoriesServiceError;

pub(crate) fn into_status_error(error: CategoriesServiceError) -> StatusError {
    match error {
        CategoriesServiceError::AlreadyExists => {
            StatusError::conflict().brief("category already exists")
        }
        CategoriesServiceError::NotFound => StatusError::not_found().brief("category not found"),
        CategoriesServiceError::MissingRequiredData | CategoriesServiceError::InvalidData => {
            StatusError::bad_request().brief("invalid category payload")
        }
        CategoriesServiceError::Sql(source) => {
            error!("category storage failure: {source}");

            StatusError::internal_server_error().brief("internal server error")
        }
    }
}

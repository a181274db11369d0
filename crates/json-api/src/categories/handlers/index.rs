//! Category Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    categories::{errors::into_status_error, get::CategoryResponse},
    extensions::*,
    state::State,
};

/// Category Index Handler
///
/// Returns live categories ordered by name.
#[endpoint(tags("categories"), summary = "List Categories")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<CategoryResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let categories = state
        .app
        .categories
        .list_categories()
        .await
        .map_err(into_status_error)?;

    Ok(Json(categories.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use kasir_app::{
        categories::{CategoriesServiceError, MockCategoriesService, records::CategoryUuid},
        database::SqlError,
    };

    use crate::{
        errors::ErrorResponse,
        test_helpers::{categories_service, make_category},
    };

    use super::*;

    fn make_service(repo: MockCategoriesService) -> Service {
        categories_service(repo, Router::with_path("api/kategori").get(handler))
    }

    #[tokio::test]
    async fn test_index_returns_categories() -> TestResult {
        let uuid = CategoryUuid::new();
        let mut repo = MockCategoriesService::new();

        repo.expect_list_categories()
            .once()
            .return_once(move || Ok(vec![make_category(uuid, "Makanan")]));

        let response: Vec<CategoryResponse> = TestClient::get("http://example.com/api/kategori")
            .send(&make_service(repo))
            .await
            .take_json()
            .await?;

        assert_eq!(response.len(), 1);
        assert_eq!(response.first().map(|c| c.id), Some(uuid.into_uuid()));

        Ok(())
    }

    #[tokio::test]
    async fn test_index_storage_failure_returns_500() -> TestResult {
        let mut repo = MockCategoriesService::new();

        repo.expect_list_categories()
            .once()
            .return_once(|| Err(CategoriesServiceError::Sql(SqlError::PoolTimedOut)));

        let mut res = TestClient::get("http://example.com/api/kategori")
            .send(&make_service(repo))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(body.error, "internal server error");

        Ok(())
    }
}

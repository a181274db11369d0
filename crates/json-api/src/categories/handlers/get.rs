//! Get Category Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use kasir_app::categories::records::CategoryRecord;

use crate::{categories::errors::into_status_error, extensions::*, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CategoryResponse {
    /// The unique identifier of the category
    pub id: Uuid,

    /// The category name
    pub name: String,

    /// Free-form description
    pub description: Option<String>,

    /// The date and time the category was created
    pub created_at: String,

    /// The date and time the category was last updated
    pub updated_at: String,
}

impl From<CategoryRecord> for CategoryResponse {
    fn from(category: CategoryRecord) -> Self {
        CategoryResponse {
            id: category.uuid.into(),
            name: category.name,
            description: category.description,
            created_at: category.created_at.to_string(),
            updated_at: category.updated_at.to_string(),
        }
    }
}

/// Get Category Handler
#[endpoint(
    tags("categories"),
    summary = "Get Category",
    responses(
        (status_code = StatusCode::OK, description = "Category found"),
        (status_code = StatusCode::NOT_FOUND, description = "Category not found"),
    ),
)]
pub(crate) async fn handler(
    category: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<CategoryResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let category = state
        .app
        .categories
        .get_category(category.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(category.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use kasir_app::categories::{
        CategoriesServiceError, MockCategoriesService, records::CategoryUuid,
    };

    use crate::{
        errors::ErrorResponse,
        test_helpers::{categories_service, make_category},
    };

    use super::*;

    fn make_service(repo: MockCategoriesService) -> Service {
        categories_service(repo, Router::with_path("api/kategori/{category}").get(handler))
    }

    #[tokio::test]
    async fn test_get_returns_200() -> TestResult {
        let uuid = CategoryUuid::new();
        let mut repo = MockCategoriesService::new();

        repo.expect_get_category()
            .once()
            .withf(move |u| *u == uuid)
            .return_once(move |_| Ok(make_category(uuid, "Minuman")));

        let mut res = TestClient::get(format!("http://example.com/api/kategori/{uuid}"))
            .send(&make_service(repo))
            .await;

        let body: CategoryResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.id, uuid.into_uuid());
        assert_eq!(body.name, "Minuman");
        assert_eq!(body.description, None);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_category_returns_404() -> TestResult {
        let mut repo = MockCategoriesService::new();

        repo.expect_get_category()
            .once()
            .return_once(|_| Err(CategoriesServiceError::NotFound));

        let mut res = TestClient::get(format!(
            "http://example.com/api/kategori/{}",
            CategoryUuid::new()
        ))
        .send(&make_service(repo))
        .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(body.error, "category not found");

        Ok(())
    }
}

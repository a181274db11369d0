//! Create Category Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use kasir_app::categories::{data::NewCategory, records::CategoryUuid};

use crate::{
    categories::{errors::into_status_error, get::CategoryResponse},
    extensions::*,
    state::State,
};

/// Create Category Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateCategoryRequest {
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,
}

/// Create Category Handler
#[endpoint(
    tags("categories"),
    summary = "Create Category",
    responses(
        (status_code = StatusCode::CREATED, description = "Category created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::CONFLICT, description = "Category name already taken"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateCategoryRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CategoryResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    let category = state
        .app
        .categories
        .create_category(NewCategory {
            uuid: CategoryUuid::new(),
            name: request.name,
            description: request.description,
        })
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/api/kategori/{}", category.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(category.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use kasir_app::categories::{CategoriesServiceError, MockCategoriesService};

    use crate::{
        errors::ErrorResponse,
        test_helpers::{categories_service, make_category},
    };

    use super::*;

    fn make_service(repo: MockCategoriesService) -> Service {
        categories_service(repo, Router::with_path("api/kategori").post(handler))
    }

    #[tokio::test]
    async fn test_create_category_returns_201_with_location() -> TestResult {
        let mut repo = MockCategoriesService::new();

        repo.expect_create_category()
            .once()
            .withf(|new| new.name == "Minuman" && new.description.as_deref() == Some("Dingin"))
            .return_once(|new| {
                let mut category = make_category(new.uuid, &new.name);
                category.description = new.description;

                Ok(category)
            });

        let mut res = TestClient::post("http://example.com/api/kategori")
            .json(&json!({ "name": "Minuman", "description": "Dingin" }))
            .send(&make_service(repo))
            .await;

        let body: CategoryResponse = res.take_json().await?;
        let location = res
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(ToString::to_string);

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some(format!("/api/kategori/{}", body.id)));
        assert_eq!(body.description.as_deref(), Some("Dingin"));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_duplicate_category_returns_409() -> TestResult {
        let mut repo = MockCategoriesService::new();

        repo.expect_create_category()
            .once()
            .return_once(|_| Err(CategoriesServiceError::AlreadyExists));

        let mut res = TestClient::post("http://example.com/api/kategori")
            .json(&json!({ "name": "Minuman" }))
            .send(&make_service(repo))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));
        assert_eq!(body.error, "category already exists");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_blank_name_returns_400() {
        let mut repo = MockCategoriesService::new();

        repo.expect_create_category()
            .once()
            .return_once(|_| Err(CategoriesServiceError::InvalidData));

        let res = TestClient::post("http://example.com/api/kategori")
            .json(&json!({ "name": "  " }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }

    #[tokio::test]
    async fn test_create_malformed_body_returns_400() {
        let mut repo = MockCategoriesService::new();

        repo.expect_create_category().never();

        let res = TestClient::post("http://example.com/api/kategori")
            .raw_json("{\"name\": ")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }
}

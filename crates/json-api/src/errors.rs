//! Uniform JSON error bodies.
//!
//! Handlers fail with a [`StatusError`] whose brief is the client-facing
//! message. The catcher below turns every error response, including router
//! misses, into `{"error": "<message>"}`.

use salvo::{catcher::Catcher, http::ResBody, oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

/// Error Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

impl ErrorResponse {
    pub(crate) fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Catcher rendering every error status as an [`ErrorResponse`].
pub(crate) fn catcher() -> Catcher {
    Catcher::default().hoop(render_json_error)
}

#[handler]
async fn render_json_error(res: &mut Response, ctrl: &mut FlowCtrl) {
    let status = res.status_code.unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    if !(status.is_client_error() || status.is_server_error()) {
        return;
    }

    let message = match res.take_body() {
        ResBody::Error(error) => error.brief,
        ResBody::None => default_message(status),
        body => {
            res.body(body);
            return;
        }
    };

    res.render(Json(ErrorResponse::new(message)));
    ctrl.skip_rest();
}

fn default_message(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("error")
        .to_ascii_lowercase()
}

/// Fallback goal for a path whose method has no handler.
#[handler]
pub(crate) async fn method_not_allowed(res: &mut Response) {
    res.status_code(StatusCode::METHOD_NOT_ALLOWED);
    res.render(Json(ErrorResponse::new("method not allowed")));
}

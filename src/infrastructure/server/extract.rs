//! Call request extraction and error responses

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::application::errors::AppError;
use crate::domain::entities::{CallRequest, CallResponse};

/// A decoded call request body. An empty body decodes to an empty call.
#[derive(Debug, Clone, Default)]
pub struct CallBody(pub CallRequest);

impl<S> FromRequest<S> for CallBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state).await.map_err(|e| {
            AppError::InvalidRequest(format!("Could not read request body: {}", e.body_text()))
        })?;

        CallRequest::from_body(&body)
            .map(CallBody)
            .map_err(|e| AppError::InvalidRequest(format!("Malformed call request: {}", e)))
    }
}

// The platform only renders error text from a 200 response
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::info!("Rejected call: {}", self);
        (StatusCode::OK, Json(CallResponse::error(self.user_message()))).into_response()
    }
}

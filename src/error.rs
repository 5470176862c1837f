use crate::graph::StoreError;
use actix_web::{HttpRequest, HttpResponse, ResponseError, error::JsonPayloadError, http::StatusCode};
use derive_more::{Display, From};
use serde_json::json;

/// Every failure an operation can hand back to the HTTP boundary.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Caller input rejected before touching the store.
    #[display(fmt = "{}", _0)]
    #[from(ignore)]
    Validation(String),

    #[display(fmt = "{}", _0)]
    #[from(ignore)]
    NotFound(String),

    #[display(fmt = "{}", _0)]
    Store(StoreError),
}

impl std::error::Error for AppError {}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            AppError::Validation(msg) | AppError::NotFound(msg) => msg.as_str(),
            // cause is logged where it happened, never sent out
            AppError::Store(_) => "Internal Server Error",
        };

        HttpResponse::build(self.status_code()).json(json!({ "error": message }))
    }
}

/// Malformed JSON bodies answer 400 in the same `{error}` shape as
/// everything else.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(error = %err, "Rejected request body");
    AppError::Validation(err.to_string()).into()
}

use actix_web::body::BoxBody;
use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Errors returned by handlers. Clients only ever see the message, as
/// `{"error": message}`.
#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("{0}")]
    InvalidInput(&'static str),
    #[error("{0}")]
    NotFound(&'static str),
    #[error("{0}")]
    Unauthorized(&'static str),
    #[error("{message}")]
    Internal {
        message: &'static str,
        cause: anyhow::Error,
    },
}

impl HandlerError {
    pub fn internal(message: &'static str, cause: impl Into<anyhow::Error>) -> HandlerError {
        HandlerError::Internal {
            message,
            cause: cause.into(),
        }
    }

    fn message(&self) -> &'static str {
        match self {
            HandlerError::InvalidInput(message)
            | HandlerError::NotFound(message)
            | HandlerError::Unauthorized(message)
            | HandlerError::Internal { message, .. } => *message,
        }
    }
}

impl ResponseError for HandlerError {
    fn status_code(&self) -> StatusCode {
        match self {
            HandlerError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            HandlerError::NotFound(_) => StatusCode::NOT_FOUND,
            HandlerError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            HandlerError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        if let HandlerError::Internal { message, cause } = self {
            error!(error = %format!("{:#}", cause), "{}", message);
        }
        error_body(self.status_code(), self.message())
    }
}

fn error_body(status: StatusCode, message: &str) -> HttpResponse {
    HttpResponse::build(status).json(json!({ "error": message }))
}

/// JSON extractor config whose failures look like handler errors. Bodies are
/// parsed whatever their content type. Oversized payloads keep actix's own
/// response.
pub fn json_config(message: &'static str) -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(move |err, req| {
            error!(req_path = req.path(), %err);
            match err {
                JsonPayloadError::Overflow { .. }
                | JsonPayloadError::OverflowKnownLength { .. } => err.into(),
                _ => {
                    InternalError::from_response(err, error_body(StatusCode::BAD_REQUEST, message))
                        .into()
                }
            }
        })
}

/// Path extractor config that reports an unparsable id as a missing record.
pub fn path_config(message: &'static str) -> web::PathConfig {
    web::PathConfig::default().error_handler(move |err, req| {
        error!(req_path = req.path(), %err);
        InternalError::from_response(err, error_body(StatusCode::NOT_FOUND, message)).into()
    })
}

use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct ErrorBody {
    pub error: bool,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug)]
pub enum ApiError {
    Forbidden { message: Option<String> },
    NotFound { code: &'static str },
    Validation { message: String },
    PaymentProvider { message: String },
    Store { message: String },
    Internal { message: Option<String> },
}

impl ApiError {
    pub fn forbidden() -> Self {
        Self::Forbidden { message: None }
    }

    pub fn forbidden_with<M: Into<String>>(message: M) -> Self {
        Self::Forbidden {
            message: Some(message.into()),
        }
    }

    pub fn validation<M: Into<String>>(message: M) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn payment_provider<E: std::fmt::Display>(err: E) -> Self {
        Self::PaymentProvider {
            message: err.to_string(),
        }
    }

    pub fn store<E: std::fmt::Display>(err: E) -> Self {
        Self::Store {
            message: err.to_string(),
        }
    }

    pub fn internal<E: std::fmt::Display>(err: E) -> Self {
        Self::Internal {
            message: Some(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            ApiError::Forbidden { message } => (StatusCode::FORBIDDEN, "forbidden", message),
            ApiError::NotFound { code } => (StatusCode::NOT_FOUND, code, None),
            ApiError::Validation { message } => {
                (StatusCode::BAD_REQUEST, "validation_error", Some(message))
            }
            ApiError::PaymentProvider { message } => (
                StatusCode::BAD_GATEWAY,
                "payment_provider_error",
                Some(message),
            ),
            ApiError::Store { message } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "store_error", Some(message))
            }
            ApiError::Internal { message } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", message)
            }
        };

        let body = ErrorBody {
            error: true,
            code: code.into(),
            message,
        };
        let mut resp = (status, Json(body)).into_response();
        if let Ok(value) = HeaderValue::from_str(code) {
            resp.headers_mut().insert("X-Error-Code", value);
        }
        resp
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// JSON request-body extractor whose rejection is a `validation_error`
/// response instead of axum's plain-text default. Unknown or missing fields
/// surface here when the target type uses `deny_unknown_fields`.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation {
            message: rejection.body_text(),
        }
    }
}

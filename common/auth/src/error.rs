use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

pub type AuthResult<T> = Result<T, AuthError>;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("authorization header missing")]
    MissingAuthorization,
    #[error("authorization header malformed")]
    InvalidAuthorization,
    #[error("token verification failed: {0}")]
    Verification(String),
    #[error("invalid claim '{0}' with value '{1}'")]
    InvalidClaim(&'static str, String),
    #[error("malformed claim payload: {0}")]
    InvalidJson(String),
    #[error("failed to sign token: {0}")]
    Signing(String),
}

impl From<jsonwebtoken::errors::Error> for AuthError {
    fn from(value: jsonwebtoken::errors::Error) -> Self {
        Self::Verification(value.to_string())
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: bool,
    code: &'static str,
    message: String,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AuthError::MissingAuthorization => (StatusCode::UNAUTHORIZED, "unauthenticated"),
            AuthError::InvalidAuthorization
            | AuthError::Verification(_)
            | AuthError::InvalidClaim(_, _)
            | AuthError::InvalidJson(_) => (StatusCode::UNAUTHORIZED, "invalid_credential"),
            AuthError::Signing(_) => (StatusCode::INTERNAL_SERVER_ERROR, "token_signing"),
        };

        let body = ErrorBody {
            error: true,
            code,
            message: self.to_string(),
        };
        let mut resp = (status, Json(body)).into_response();
        if let Ok(value) = axum::http::HeaderValue::from_str(code) {
            resp.headers_mut().insert("X-Error-Code", value);
        }
        resp
    }
}

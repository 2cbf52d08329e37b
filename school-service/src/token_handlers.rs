use axum::extract::State;
use axum::Json;
use common_http_errors::{ApiError, ApiResult, JsonBody};
use serde::{Deserialize, Serialize};

use crate::app::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TokenRequest {
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Mints a time-bounded bearer credential for the supplied identity.
pub async fn issue_token(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<TokenRequest>,
) -> ApiResult<Json<TokenResponse>> {
    let email = req.email.trim();
    if email.is_empty() {
        return Err(ApiError::validation("email must not be empty"));
    }

    let issued = state
        .signer
        .issue(email, req.name.as_deref())
        .map_err(ApiError::internal)?;

    Ok(Json(TokenResponse {
        token: issued.token,
    }))
}

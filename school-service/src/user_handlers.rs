use axum::extract::{Path, State};
use axum::Json;
use common_auth::AuthContext;
use common_http_errors::{ApiError, ApiResult, JsonBody};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::app::AppState;
use crate::guards::require_admin;
use crate::responses::UpdateResponse;
use crate::store::{User, ROLE_ADMIN, ROLE_ORDINARY};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub photo_url: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum CreateUserResponse {
    Existing { message: &'static str },
    #[serde(rename_all = "camelCase")]
    Inserted { inserted_id: Uuid },
}

#[derive(Debug, Serialize)]
pub struct AdminStatus {
    pub admin: bool,
}

pub async fn list_users(
    State(state): State<AppState>,
    auth: AuthContext,
) -> ApiResult<Json<Vec<User>>> {
    require_admin(state.store.as_ref(), &auth.claims).await?;
    let users = state.store.list_users().await.map_err(ApiError::store)?;
    Ok(Json(users))
}

/// Sign-in upsert: email is the natural key, so a second create for the same
/// address is a no-op rather than an error.
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<NewUser>,
) -> ApiResult<Json<CreateUserResponse>> {
    let email = req.email.trim().to_owned();
    if email.is_empty() {
        return Err(ApiError::validation("email must not be empty"));
    }

    let existing = state
        .store
        .find_user_by_email(&email)
        .await
        .map_err(ApiError::store)?;
    if existing.is_some() {
        return Ok(Json(CreateUserResponse::Existing {
            message: "User already exists",
        }));
    }

    let user = User {
        id: Uuid::new_v4(),
        name: req.name,
        email,
        photo_url: req.photo_url,
        role: ROLE_ORDINARY.to_owned(),
    };
    let inserted_id = user.id;
    state
        .store
        .insert_user(user)
        .await
        .map_err(ApiError::store)?;

    Ok(Json(CreateUserResponse::Inserted { inserted_id }))
}

/// Answers whether the addressed account holds the admin role. Asking about
/// someone else's account short-circuits to non-admin without a lookup.
pub async fn admin_status(
    State(state): State<AppState>,
    auth: AuthContext,
    Path(email): Path<String>,
) -> ApiResult<Json<AdminStatus>> {
    if auth.claims.email != email {
        return Ok(Json(AdminStatus { admin: false }));
    }

    let user = state
        .store
        .find_user_by_email(&email)
        .await
        .map_err(ApiError::store)?;
    let admin = user.map(|user| user.role == ROLE_ADMIN).unwrap_or(false);
    Ok(Json(AdminStatus { admin }))
}

/// Promotes the addressed account to admin. Grants privilege, so it requires
/// an already-privileged caller.
pub async fn promote_user(
    State(state): State<AppState>,
    auth: AuthContext,
    Path(id): Path<String>,
) -> ApiResult<Json<UpdateResponse>> {
    require_admin(state.store.as_ref(), &auth.claims).await?;

    let id = Uuid::parse_str(id.trim())
        .map_err(|_| ApiError::validation("user id must be a UUID"))?;

    let updated = state
        .store
        .set_user_role(id, ROLE_ADMIN)
        .await
        .map_err(ApiError::store)?;
    if updated == 0 {
        return Err(ApiError::NotFound {
            code: "user_not_found",
        });
    }

    Ok(Json(UpdateResponse { updated }))
}

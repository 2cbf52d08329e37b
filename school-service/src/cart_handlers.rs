use axum::extract::{Path, Query, State};
use axum::Json;
use bigdecimal::BigDecimal;
use common_auth::AuthContext;
use common_http_errors::{ApiError, ApiResult, JsonBody};
use common_money::normalize_scale;
use serde::Deserialize;
use uuid::Uuid;

use crate::app::AppState;
use crate::responses::{DeleteResponse, InsertResponse};
use crate::store::CartItem;

#[derive(Debug, Deserialize)]
pub struct CartQuery {
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewCartItem {
    pub email: String,
    pub class_id: Uuid,
    pub class_name: String,
    pub price: BigDecimal,
}

/// Lists the caller's pending cart. The query owner must be the verified
/// identity; asking for another owner's cart is forbidden, never answered.
pub async fn list_cart_items(
    State(state): State<AppState>,
    auth: AuthContext,
    Query(query): Query<CartQuery>,
) -> ApiResult<Json<Vec<CartItem>>> {
    let Some(email) = query.email.filter(|email| !email.trim().is_empty()) else {
        return Ok(Json(Vec::new()));
    };

    if email != auth.claims.email {
        return Err(ApiError::forbidden_with(
            "cart listing is limited to the authenticated owner",
        ));
    }

    let items = state
        .store
        .list_cart_items(&email)
        .await
        .map_err(ApiError::store)?;
    Ok(Json(items))
}

pub async fn create_cart_item(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<NewCartItem>,
) -> ApiResult<Json<InsertResponse>> {
    if req.email.trim().is_empty() {
        return Err(ApiError::validation("email must not be empty"));
    }

    let item = CartItem {
        id: Uuid::new_v4(),
        email: req.email,
        class_id: req.class_id,
        class_name: req.class_name,
        price: normalize_scale(&req.price),
    };
    let inserted_id = item.id;
    state
        .store
        .insert_cart_item(item)
        .await
        .map_err(ApiError::store)?;

    Ok(Json(InsertResponse { inserted_id }))
}

pub async fn delete_cart_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<DeleteResponse>> {
    let deleted = state
        .store
        .delete_cart_item(id)
        .await
        .map_err(ApiError::store)?;
    Ok(Json(DeleteResponse { deleted }))
}

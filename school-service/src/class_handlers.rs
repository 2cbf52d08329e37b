use axum::extract::{Path, State};
use axum::Json;
use bigdecimal::BigDecimal;
use common_auth::AuthContext;
use common_http_errors::{ApiError, ApiResult, JsonBody};
use common_money::normalize_scale;
use serde::Deserialize;
use uuid::Uuid;

use crate::app::AppState;
use crate::guards::require_admin;
use crate::responses::{DeleteResponse, InsertResponse};
use crate::store::Class;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewClass {
    pub name: String,
    pub instructor: String,
    #[serde(default)]
    pub instructor_email: Option<String>,
    pub price: BigDecimal,
    #[serde(default)]
    pub available_seats: i32,
    #[serde(default)]
    pub image: Option<String>,
}

pub async fn list_classes(State(state): State<AppState>) -> ApiResult<Json<Vec<Class>>> {
    let classes = state.store.list_classes().await.map_err(ApiError::store)?;
    Ok(Json(classes))
}

pub async fn create_class(
    State(state): State<AppState>,
    auth: AuthContext,
    JsonBody(req): JsonBody<NewClass>,
) -> ApiResult<Json<InsertResponse>> {
    require_admin(state.store.as_ref(), &auth.claims).await?;

    let class = Class {
        id: Uuid::new_v4(),
        name: req.name,
        instructor: req.instructor,
        instructor_email: req.instructor_email,
        price: normalize_scale(&req.price),
        available_seats: req.available_seats,
        image: req.image,
    };
    let inserted_id = class.id;
    state
        .store
        .insert_class(class)
        .await
        .map_err(ApiError::store)?;

    Ok(Json(InsertResponse { inserted_id }))
}

pub async fn delete_class(
    State(state): State<AppState>,
    auth: AuthContext,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<DeleteResponse>> {
    require_admin(state.store.as_ref(), &auth.claims).await?;

    let deleted = state
        .store
        .delete_class(id)
        .await
        .map_err(ApiError::store)?;
    Ok(Json(DeleteResponse { deleted }))
}

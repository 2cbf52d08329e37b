use axum::extract::State;
use axum::Json;
use common_http_errors::{ApiError, ApiResult};

use crate::app::AppState;
use crate::store::Instructor;

/// Instructors are read-only through the API; rows are seeded out of band.
pub async fn list_instructors(State(state): State<AppState>) -> ApiResult<Json<Vec<Instructor>>> {
    let instructors = state
        .store
        .list_instructors()
        .await
        .map_err(ApiError::store)?;
    Ok(Json(instructors))
}

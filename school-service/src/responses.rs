use serde::Serialize;
use uuid::Uuid;

/// Write-result DTOs shared by the collection routes.

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertResponse {
    pub inserted_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct UpdateResponse {
    pub updated: u64,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub deleted: u64,
}

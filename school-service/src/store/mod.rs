use async_trait::async_trait;
use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use thiserror::Error;
use uuid::Uuid;

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

pub const ROLE_ORDINARY: &str = "ordinary";
pub const ROLE_ADMIN: &str = "admin";

/// Persistent account record keyed by email; the surrogate id only serves the
/// promotion route.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub photo_url: Option<String>,
    pub role: String,
}

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Class {
    pub id: Uuid,
    pub name: String,
    pub instructor: String,
    pub instructor_email: Option<String>,
    pub price: BigDecimal,
    pub available_seats: i32,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Instructor {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub image: Option<String>,
}

/// One selected class pending payment. Price and name are snapshots taken
/// when the item entered the cart.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: Uuid,
    pub email: String,
    pub class_id: Uuid,
    pub class_name: String,
    pub price: BigDecimal,
}

/// Append-only record of a completed transaction; never mutated or deleted.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    pub id: Uuid,
    pub email: String,
    pub amount: BigDecimal,
    pub currency: String,
    pub transaction_id: String,
    pub cart_item_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// The five collections backing the service. Each operation maps to a single
/// collection call; there are no cross-collection transactions.
#[async_trait]
pub trait CollectionStore: Send + Sync {
    async fn list_users(&self) -> StoreResult<Vec<User>>;
    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>>;
    async fn insert_user(&self, user: User) -> StoreResult<()>;
    /// Field-level role update by surrogate key; returns the matched count.
    async fn set_user_role(&self, id: Uuid, role: &str) -> StoreResult<u64>;

    async fn list_classes(&self) -> StoreResult<Vec<Class>>;
    async fn insert_class(&self, class: Class) -> StoreResult<()>;
    async fn delete_class(&self, id: Uuid) -> StoreResult<u64>;

    async fn list_instructors(&self) -> StoreResult<Vec<Instructor>>;
    async fn insert_instructor(&self, instructor: Instructor) -> StoreResult<()>;

    async fn list_cart_items(&self, email: &str) -> StoreResult<Vec<CartItem>>;
    async fn insert_cart_item(&self, item: CartItem) -> StoreResult<()>;
    async fn delete_cart_item(&self, id: Uuid) -> StoreResult<u64>;
    /// Bulk delete by key set; vacuous when no identifier matches.
    async fn delete_cart_items(&self, ids: &[Uuid]) -> StoreResult<u64>;

    async fn insert_payment(&self, payment: PaymentRecord) -> StoreResult<()>;
}

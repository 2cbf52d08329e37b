use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::{query, query_as, PgPool};
use uuid::Uuid;

use super::{CartItem, Class, CollectionStore, Instructor, PaymentRecord, StoreResult, User};

/// Postgres-backed collection store. The pool is acquired once at startup and
/// shared by every request; `close` releases it on shutdown.
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub async fn connect(database_url: &str) -> StoreResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;
        Ok(Self { pool })
    }

    pub fn with_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl CollectionStore for PgStore {
    async fn list_users(&self) -> StoreResult<Vec<User>> {
        let users = query_as::<_, User>("SELECT id, name, email, photo_url, role FROM users")
            .fetch_all(&self.pool)
            .await?;
        Ok(users)
    }

    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let user = query_as::<_, User>(
            "SELECT id, name, email, photo_url, role FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn insert_user(&self, user: User) -> StoreResult<()> {
        query("INSERT INTO users (id, name, email, photo_url, role) VALUES ($1, $2, $3, $4, $5)")
            .bind(user.id)
            .bind(user.name)
            .bind(user.email)
            .bind(user.photo_url)
            .bind(user.role)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn set_user_role(&self, id: Uuid, role: &str) -> StoreResult<u64> {
        let result = query("UPDATE users SET role = $2 WHERE id = $1")
            .bind(id)
            .bind(role)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn list_classes(&self) -> StoreResult<Vec<Class>> {
        let classes = query_as::<_, Class>(
            "SELECT id, name, instructor, instructor_email, price, available_seats, image FROM classes",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(classes)
    }

    async fn insert_class(&self, class: Class) -> StoreResult<()> {
        query(
            "INSERT INTO classes (id, name, instructor, instructor_email, price, available_seats, image)
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(class.id)
        .bind(class.name)
        .bind(class.instructor)
        .bind(class.instructor_email)
        .bind(class.price)
        .bind(class.available_seats)
        .bind(class.image)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn delete_class(&self, id: Uuid) -> StoreResult<u64> {
        let result = query("DELETE FROM classes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn list_instructors(&self) -> StoreResult<Vec<Instructor>> {
        let instructors =
            query_as::<_, Instructor>("SELECT id, name, email, image FROM instructors")
                .fetch_all(&self.pool)
                .await?;
        Ok(instructors)
    }

    async fn insert_instructor(&self, instructor: Instructor) -> StoreResult<()> {
        query("INSERT INTO instructors (id, name, email, image) VALUES ($1, $2, $3, $4)")
            .bind(instructor.id)
            .bind(instructor.name)
            .bind(instructor.email)
            .bind(instructor.image)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn list_cart_items(&self, email: &str) -> StoreResult<Vec<CartItem>> {
        let items = query_as::<_, CartItem>(
            "SELECT id, email, class_id, class_name, price FROM cart_items WHERE email = $1",
        )
        .bind(email)
        .fetch_all(&self.pool)
        .await?;
        Ok(items)
    }

    async fn insert_cart_item(&self, item: CartItem) -> StoreResult<()> {
        query(
            "INSERT INTO cart_items (id, email, class_id, class_name, price) VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(item.id)
        .bind(item.email)
        .bind(item.class_id)
        .bind(item.class_name)
        .bind(item.price)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn delete_cart_item(&self, id: Uuid) -> StoreResult<u64> {
        let result = query("DELETE FROM cart_items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn delete_cart_items(&self, ids: &[Uuid]) -> StoreResult<u64> {
        let result = query("DELETE FROM cart_items WHERE id = ANY($1)")
            .bind(ids.to_vec())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn insert_payment(&self, payment: PaymentRecord) -> StoreResult<()> {
        query(
            "INSERT INTO payments (id, email, amount, currency, transaction_id, cart_item_ids, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(payment.id)
        .bind(payment.email)
        .bind(payment.amount)
        .bind(payment.currency)
        .bind(payment.transaction_id)
        .bind(payment.cart_item_ids)
        .bind(payment.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use super::{CartItem, Class, CollectionStore, Instructor, PaymentRecord, StoreResult, User};

/// In-process collection store used when no `DATABASE_URL` is configured and
/// by the test suite. Every collection holds its own lock; no lock is held
/// across an await point.
#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<HashMap<Uuid, User>>,
    classes: RwLock<HashMap<Uuid, Class>>,
    instructors: RwLock<HashMap<Uuid, Instructor>>,
    cart_items: RwLock<HashMap<Uuid, CartItem>>,
    payments: RwLock<Vec<PaymentRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CollectionStore for MemoryStore {
    async fn list_users(&self) -> StoreResult<Vec<User>> {
        let guard = self.users.read().expect("rwlock poisoned");
        Ok(guard.values().cloned().collect())
    }

    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let guard = self.users.read().expect("rwlock poisoned");
        Ok(guard.values().find(|user| user.email == email).cloned())
    }

    async fn insert_user(&self, user: User) -> StoreResult<()> {
        let mut guard = self.users.write().expect("rwlock poisoned");
        guard.insert(user.id, user);
        Ok(())
    }

    async fn set_user_role(&self, id: Uuid, role: &str) -> StoreResult<u64> {
        let mut guard = self.users.write().expect("rwlock poisoned");
        match guard.get_mut(&id) {
            Some(user) => {
                user.role = role.to_owned();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn list_classes(&self) -> StoreResult<Vec<Class>> {
        let guard = self.classes.read().expect("rwlock poisoned");
        Ok(guard.values().cloned().collect())
    }

    async fn insert_class(&self, class: Class) -> StoreResult<()> {
        let mut guard = self.classes.write().expect("rwlock poisoned");
        guard.insert(class.id, class);
        Ok(())
    }

    async fn delete_class(&self, id: Uuid) -> StoreResult<u64> {
        let mut guard = self.classes.write().expect("rwlock poisoned");
        Ok(u64::from(guard.remove(&id).is_some()))
    }

    async fn list_instructors(&self) -> StoreResult<Vec<Instructor>> {
        let guard = self.instructors.read().expect("rwlock poisoned");
        Ok(guard.values().cloned().collect())
    }

    async fn insert_instructor(&self, instructor: Instructor) -> StoreResult<()> {
        let mut guard = self.instructors.write().expect("rwlock poisoned");
        guard.insert(instructor.id, instructor);
        Ok(())
    }

    async fn list_cart_items(&self, email: &str) -> StoreResult<Vec<CartItem>> {
        let guard = self.cart_items.read().expect("rwlock poisoned");
        Ok(guard
            .values()
            .filter(|item| item.email == email)
            .cloned()
            .collect())
    }

    async fn insert_cart_item(&self, item: CartItem) -> StoreResult<()> {
        let mut guard = self.cart_items.write().expect("rwlock poisoned");
        guard.insert(item.id, item);
        Ok(())
    }

    async fn delete_cart_item(&self, id: Uuid) -> StoreResult<u64> {
        let mut guard = self.cart_items.write().expect("rwlock poisoned");
        Ok(u64::from(guard.remove(&id).is_some()))
    }

    async fn delete_cart_items(&self, ids: &[Uuid]) -> StoreResult<u64> {
        let mut guard = self.cart_items.write().expect("rwlock poisoned");
        let removed = ids.iter().filter(|id| guard.remove(id).is_some()).count();
        Ok(removed as u64)
    }

    async fn insert_payment(&self, payment: PaymentRecord) -> StoreResult<()> {
        let mut guard = self.payments.write().expect("rwlock poisoned");
        guard.push(payment);
        Ok(())
    }
}

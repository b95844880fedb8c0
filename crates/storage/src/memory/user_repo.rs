//! User repository implementation over the in-memory store.

use std::sync::Arc;

use async_trait::async_trait;

use agora_core::error::StorageResult;
use agora_core::models::User;
use agora_core::ports::UserRepository;

use super::store::MemoryStore;

/// In-memory implementation of [`UserRepository`].
pub struct MemUserRepository {
    store: Arc<MemoryStore>,
}

impl MemUserRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserRepository for MemUserRepository {
    async fn get_user(&self, id: &str) -> StorageResult<Option<User>> {
        self.store.get_user(id)
    }

    async fn list_users(&self) -> StorageResult<Vec<User>> {
        self.store.list_users()
    }
}

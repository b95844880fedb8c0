//! Forum repository implementation over the in-memory store.

use std::sync::Arc;

use async_trait::async_trait;

use agora_core::error::StorageResult;
use agora_core::models::{Forum, Message};
use agora_core::ports::ForumRepository;

use super::store::MemoryStore;

/// In-memory implementation of [`ForumRepository`].
pub struct MemForumRepository {
    store: Arc<MemoryStore>,
}

impl MemForumRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ForumRepository for MemForumRepository {
    async fn list_forums(&self) -> StorageResult<Vec<Forum>> {
        self.store.list_forums()
    }

    async fn get_forum(&self, id: &str) -> StorageResult<Option<Forum>> {
        self.store.get_forum(id)
    }

    async fn get_forum_by_name(&self, name: &str) -> StorageResult<Option<Forum>> {
        self.store.get_forum_by_name(name)
    }

    async fn create_forum(&self, name: &str, creator_id: &str) -> StorageResult<Option<Forum>> {
        self.store.create_forum(name, creator_id)
    }

    async fn join_forum(&self, forum_id: &str, user_id: &str) -> StorageResult<Option<Forum>> {
        self.store.join_forum(forum_id, user_id)
    }

    async fn join_forum_by_name(
        &self,
        name: &str,
        user_id: &str,
    ) -> StorageResult<Option<Forum>> {
        self.store.join_forum_by_name(name, user_id)
    }

    async fn append_message(
        &self,
        forum_id: &str,
        sender_id: &str,
        text: &str,
    ) -> StorageResult<Option<Message>> {
        self.store.append_message(forum_id, sender_id, text)
    }
}

//! Port traits for the fixture store.
//!
//! These traits define the storage interface used by the domain layer.
//! Implementations live in the infrastructure layer (e.g. `agora-storage`).

use async_trait::async_trait;

use crate::error::StorageResult;
use crate::models::{Forum, Message, User};

/// Repository for forum records and their message logs.
#[async_trait]
pub trait ForumRepository: Send + Sync {
    /// List all forums in fixture order.
    async fn list_forums(&self) -> StorageResult<Vec<Forum>>;

    /// Get a forum by id.
    async fn get_forum(&self, id: &str) -> StorageResult<Option<Forum>>;

    /// Get a forum by its unique name.
    async fn get_forum_by_name(&self, name: &str) -> StorageResult<Option<Forum>>;

    /// Create a forum with the creator as its first member.
    ///
    /// Returns `None` when the name is already taken; the existing forum
    /// is left untouched.
    async fn create_forum(&self, name: &str, creator_id: &str) -> StorageResult<Option<Forum>>;

    /// Add a user to a forum's member list.
    ///
    /// Joining a forum the user already belongs to is a no-op. Returns
    /// `None` when the forum does not exist.
    async fn join_forum(&self, forum_id: &str, user_id: &str) -> StorageResult<Option<Forum>>;

    /// Add a user to the member list of the forum with the given name.
    ///
    /// Same semantics as [`join_forum`](Self::join_forum).
    async fn join_forum_by_name(&self, name: &str, user_id: &str)
        -> StorageResult<Option<Forum>>;

    /// Append a message to a forum's log, stamping the receive time.
    ///
    /// Returns `None` when the forum does not exist.
    async fn append_message(
        &self,
        forum_id: &str,
        sender_id: &str,
        text: &str,
    ) -> StorageResult<Option<Message>>;
}

/// Repository for user records.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Get a user by id.
    async fn get_user(&self, id: &str) -> StorageResult<Option<User>>;

    /// List all users in fixture order.
    async fn list_users(&self) -> StorageResult<Vec<User>>;
}

/// Combined repository access for the forum service.
pub trait Repositories: Send + Sync {
    /// Access the forum repository.
    fn forums(&self) -> &dyn ForumRepository;

    /// Access the user repository.
    fn users(&self) -> &dyn UserRepository;
}

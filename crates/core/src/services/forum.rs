//! Forum service - applies authorization and pagination over the store.
//!
//! Every operation takes the request's resolved actor id (`actor`) and
//! returns a typed [`DomainError`] on failure. Denial-class errors are
//! converted to null results by the API layer; see
//! [`DomainError::is_denial`].

use std::sync::Arc;

use tracing::{debug, info};

use crate::error::{DomainError, DomainResult};
use crate::metrics::{record_forum_created, record_forum_joined, record_message_posted};
use crate::models::{Forum, Message, User};
use crate::pagination::{paginate, Connection};
use crate::ports::Repositories;

use super::guard::is_member;

/// Maximum length for forum names.
const MAX_FORUM_NAME_LENGTH: usize = 128;
/// Maximum length for message texts.
const MAX_MESSAGE_LENGTH: usize = 4096;

/// Domain service for forum queries and mutations.
///
/// Thin orchestration over the repository ports: every forum-scoped read
/// passes the membership guard first, and the message connection is
/// produced by the pagination engine over the forum's append-ordered log.
pub struct ForumService {
    repos: Arc<dyn Repositories>,
}

impl ForumService {
    pub fn new(repos: Arc<dyn Repositories>) -> Self {
        Self { repos }
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// List all forums. Requires an authenticated actor.
    pub async fn list_forums(&self, actor: Option<&str>) -> DomainResult<Vec<Forum>> {
        require_actor(actor)?;
        Ok(self.repos.forums().list_forums().await?)
    }

    /// Get a forum by id. The actor must be a member.
    pub async fn get_forum(&self, actor: Option<&str>, id: &str) -> DomainResult<Forum> {
        let actor = require_actor(actor)?;

        let forum = self
            .repos
            .forums()
            .get_forum(id)
            .await?
            .ok_or_else(|| DomainError::ForumNotFound(id.to_string()))?;

        if !is_member(&forum.member_ids, Some(actor)) {
            return Err(DomainError::NotMember(id.to_string()));
        }

        Ok(forum)
    }

    /// Get the actor's own user record.
    pub async fn current_user(&self, actor: Option<&str>) -> DomainResult<User> {
        let actor = require_actor(actor)?;
        self.lookup_user(actor).await
    }

    /// Get any user by id. Requires an authenticated actor.
    pub async fn user(&self, actor: Option<&str>, id: &str) -> DomainResult<User> {
        require_actor(actor)?;
        self.lookup_user(id).await
    }

    /// List the forums a user has joined. Users may only list their own.
    pub async fn forums_for_user(
        &self,
        actor: Option<&str>,
        user_id: &str,
    ) -> DomainResult<Vec<Forum>> {
        let actor = require_actor(actor)?;

        if actor != user_id {
            return Err(DomainError::Forbidden(
                "users may only list their own forums".to_string(),
            ));
        }

        let forums = self.repos.forums().list_forums().await?;
        Ok(forums
            .into_iter()
            .filter(|forum| is_member(&forum.member_ids, Some(actor)))
            .collect())
    }

    /// List a forum's members. The actor must be a member.
    ///
    /// Members are returned in fixture (user list) order, not join order.
    pub async fn members(&self, actor: Option<&str>, forum_id: &str) -> DomainResult<Vec<User>> {
        let forum = self.get_forum(actor, forum_id).await?;

        let users = self.repos.users().list_users().await?;
        Ok(users
            .into_iter()
            .filter(|user| forum.member_ids.contains(&user.id))
            .collect())
    }

    /// Produce a newest-first message page for a forum. The actor must be
    /// a member.
    pub async fn messages_page(
        &self,
        actor: Option<&str>,
        forum_id: &str,
        first: i32,
        after: Option<i64>,
    ) -> DomainResult<Connection<Message>> {
        let forum = self.get_forum(actor, forum_id).await?;
        paginate(&forum.messages, first, after)
    }

    /// Resolve a message's sender.
    pub async fn sender(&self, sender_id: &str) -> DomainResult<User> {
        self.lookup_user(sender_id).await
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Create a forum with the actor as its first member.
    pub async fn create_forum(&self, actor: Option<&str>, name: &str) -> DomainResult<Forum> {
        let actor = require_actor(actor)?;
        validate_text(name, "forum name", MAX_FORUM_NAME_LENGTH)?;

        let forum = self
            .repos
            .forums()
            .create_forum(name, actor)
            .await?
            .ok_or_else(|| DomainError::DuplicateForumName(name.to_string()))?;

        record_forum_created();
        info!(forum = %forum.id, name = %forum.name, "Forum created");

        Ok(forum)
    }

    /// Join a forum by id. Already being a member is a no-op.
    pub async fn join_forum_by_id(
        &self,
        actor: Option<&str>,
        forum_id: &str,
    ) -> DomainResult<Forum> {
        let actor = require_actor(actor)?;

        let forum = self
            .repos
            .forums()
            .join_forum(forum_id, actor)
            .await?
            .ok_or_else(|| DomainError::ForumNotFound(forum_id.to_string()))?;

        record_forum_joined();
        debug!(forum = %forum.id, user = actor, "Forum joined");

        Ok(forum)
    }

    /// Join a forum by name. Already being a member is a no-op.
    pub async fn join_forum_by_name(
        &self,
        actor: Option<&str>,
        name: &str,
    ) -> DomainResult<Forum> {
        let actor = require_actor(actor)?;

        let forum = self
            .repos
            .forums()
            .join_forum_by_name(name, actor)
            .await?
            .ok_or_else(|| DomainError::ForumNotFound(name.to_string()))?;

        record_forum_joined();
        debug!(forum = %forum.id, user = actor, "Forum joined");

        Ok(forum)
    }

    /// Post a message to a forum. The actor must be a member.
    pub async fn post_message(
        &self,
        actor: Option<&str>,
        forum_id: &str,
        text: &str,
    ) -> DomainResult<Message> {
        let actor = require_actor(actor)?;
        validate_text(text, "message text", MAX_MESSAGE_LENGTH)?;

        let forum = self
            .repos
            .forums()
            .get_forum(forum_id)
            .await?
            .ok_or_else(|| DomainError::ForumNotFound(forum_id.to_string()))?;

        if !is_member(&forum.member_ids, Some(actor)) {
            return Err(DomainError::NotMember(forum_id.to_string()));
        }

        let message = self
            .repos
            .forums()
            .append_message(forum_id, actor, text)
            .await?
            .ok_or_else(|| DomainError::ForumNotFound(forum_id.to_string()))?;

        record_message_posted();
        debug!(forum = forum_id, user = actor, "Message posted");

        Ok(message)
    }

    // -------------------------------------------------------------------------
    // Helpers
    // -------------------------------------------------------------------------

    async fn lookup_user(&self, id: &str) -> DomainResult<User> {
        self.repos
            .users()
            .get_user(id)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(id.to_string()))
    }
}

/// Reject anonymous actors.
fn require_actor(actor: Option<&str>) -> DomainResult<&str> {
    actor.ok_or(DomainError::Unauthenticated)
}

/// Validate a user-supplied text field at the boundary.
fn validate_text(value: &str, field_name: &str, max_length: usize) -> DomainResult<()> {
    if value.is_empty() {
        return Err(DomainError::InvalidArgument(format!(
            "{field_name} cannot be empty"
        )));
    }
    if value.len() > max_length {
        return Err(DomainError::InvalidArgument(format!(
            "{field_name} too long: maximum {max_length} bytes allowed"
        )));
    }
    Ok(())
}

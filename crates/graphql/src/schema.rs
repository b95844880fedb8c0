//! GraphQL schema definition.
//!
//! This module provides the forum GraphQL schema: queries over forums and
//! users, mutations for creating/joining forums and posting messages, and
//! the newest-first message connection.
//!
//! Authorization failures, missing records, and duplicate forum names are
//! surfaced as null results rather than field errors, per the API's
//! convention; only invalid arguments and store failures reach the error
//! channel. See [`null_on_denied`].

use std::sync::Arc;

use async_graphql::{
    ComplexObject, Context, EmptySubscription, InputObject, Object, Result, Schema, SimpleObject,
    ID,
};
use chrono::{DateTime, Utc};

use agora_core::error::DomainResult;
use agora_core::models;
use agora_core::pagination;
use agora_core::services::ForumService;

use crate::types::AgoraSchema;

// -----------------------------------------------------------------------------
// Schema Configuration
// -----------------------------------------------------------------------------

/// Maximum query depth to prevent deeply nested queries (DoS protection).
/// Note: GraphQL introspection requires depth ~13, so we use 15 to allow it.
pub const MAX_QUERY_DEPTH: usize = 15;

/// Maximum query complexity score (DoS protection).
/// Each field has a default complexity of 1, nested objects multiply.
pub const MAX_QUERY_COMPLEXITY: usize = 500;

/// Maximum page size for message pagination.
const MAX_PAGE_SIZE: i32 = 100;

/// Build the forum schema over a [`ForumService`].
///
/// Includes query depth and complexity limits for DoS protection.
pub fn build_schema(service: Arc<ForumService>) -> AgoraSchema {
    Schema::build(Query, Mutation, EmptySubscription)
        .data(service)
        .limit_depth(MAX_QUERY_DEPTH)
        .limit_complexity(MAX_QUERY_COMPLEXITY)
        .finish()
}

// -----------------------------------------------------------------------------
// Request Context
// -----------------------------------------------------------------------------

/// The request's resolved actor, injected per request by the HTTP layer.
///
/// Absent or `None` means an anonymous request; every gated field then
/// resolves to null.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Option<String>);

/// Read the resolved actor id from the request context.
fn actor(ctx: &Context<'_>) -> Option<String> {
    ctx.data_opt::<CurrentUser>().and_then(|user| user.0.clone())
}

/// Convert denial-class domain errors into null results.
fn null_on_denied<T>(result: DomainResult<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err) if err.is_denial() => Ok(None),
        Err(err) => Err(async_graphql::Error::new(err.to_string())),
    }
}

/// Cap the requested page size. Non-positive values pass through and are
/// rejected by the pagination engine.
fn clamp_page_size(first: i32) -> i32 {
    first.min(MAX_PAGE_SIZE)
}

// -----------------------------------------------------------------------------
// Query Root
// -----------------------------------------------------------------------------

/// The schema's root query type.
pub struct Query;

#[Object]
impl Query {
    /// Retrieve all existing forums.
    async fn forums<'ctx>(&self, ctx: &Context<'ctx>) -> Result<Option<Vec<Forum>>> {
        let service = ctx.data::<Arc<ForumService>>()?;

        let forums = service.list_forums(actor(ctx).as_deref()).await;
        null_on_denied(forums.map(|forums| forums.into_iter().map(Forum::from).collect()))
    }

    /// Retrieve the forum with the given id. Members only.
    async fn forum<'ctx>(&self, ctx: &Context<'ctx>, id: ID) -> Result<Option<Forum>> {
        let service = ctx.data::<Arc<ForumService>>()?;

        let forum = service.get_forum(actor(ctx).as_deref(), &id).await;
        null_on_denied(forum.map(Forum::from))
    }

    /// Retrieve the currently logged-in user.
    async fn me<'ctx>(&self, ctx: &Context<'ctx>) -> Result<Option<User>> {
        let service = ctx.data::<Arc<ForumService>>()?;

        let user = service.current_user(actor(ctx).as_deref()).await;
        null_on_denied(user.map(User::from))
    }

    /// Retrieve a user by id.
    async fn user<'ctx>(&self, ctx: &Context<'ctx>, id: ID) -> Result<Option<User>> {
        let service = ctx.data::<Arc<ForumService>>()?;

        let user = service.user(actor(ctx).as_deref(), &id).await;
        null_on_denied(user.map(User::from))
    }
}

// -----------------------------------------------------------------------------
// Mutation Root
// -----------------------------------------------------------------------------

/// The schema's root mutation type.
pub struct Mutation;

#[Object]
impl Mutation {
    /// Create a new forum unless the name is already taken. The creator
    /// joins automatically.
    async fn create_forum<'ctx>(
        &self,
        ctx: &Context<'ctx>,
        input: CreateForumInput,
    ) -> Result<Option<Forum>> {
        let service = ctx.data::<Arc<ForumService>>()?;

        let forum = service
            .create_forum(actor(ctx).as_deref(), &input.forum_name)
            .await;
        null_on_denied(forum.map(Forum::from))
    }

    /// Join the forum with the given id.
    #[graphql(name = "joinForumByID")]
    async fn join_forum_by_id<'ctx>(
        &self,
        ctx: &Context<'ctx>,
        input: JoinForumByIdInput,
    ) -> Result<Option<Forum>> {
        let service = ctx.data::<Arc<ForumService>>()?;

        let forum = service
            .join_forum_by_id(actor(ctx).as_deref(), &input.forum_id)
            .await;
        null_on_denied(forum.map(Forum::from))
    }

    /// Join the forum with the given name.
    async fn join_forum_by_name<'ctx>(
        &self,
        ctx: &Context<'ctx>,
        input: JoinForumByNameInput,
    ) -> Result<Option<Forum>> {
        let service = ctx.data::<Arc<ForumService>>()?;

        let forum = service
            .join_forum_by_name(actor(ctx).as_deref(), &input.forum_name)
            .await;
        null_on_denied(forum.map(Forum::from))
    }

    /// Post a message to a forum. Members only.
    async fn create_message<'ctx>(
        &self,
        ctx: &Context<'ctx>,
        input: CreateMessageInput,
    ) -> Result<Option<Message>> {
        let service = ctx.data::<Arc<ForumService>>()?;

        let message = service
            .post_message(actor(ctx).as_deref(), &input.forum_id, &input.text)
            .await;
        null_on_denied(message.map(Message::from))
    }
}

// -----------------------------------------------------------------------------
// Input Types
// -----------------------------------------------------------------------------

/// Required fields to create a forum.
#[derive(InputObject)]
pub struct CreateForumInput {
    /// Name of the forum to create.
    pub forum_name: String,
}

/// Required fields to join a forum by id.
#[derive(InputObject)]
pub struct JoinForumByIdInput {
    /// Id of the forum to join.
    #[graphql(name = "forumID")]
    pub forum_id: String,
}

/// Required fields to join a forum by name.
#[derive(InputObject)]
pub struct JoinForumByNameInput {
    /// Name of the forum to join.
    pub forum_name: String,
}

/// Required fields to post a message.
#[derive(InputObject)]
pub struct CreateMessageInput {
    /// The text content of the message.
    pub text: String,
    /// Id of the forum targeted by this message.
    #[graphql(name = "forumID")]
    pub forum_id: String,
}

// -----------------------------------------------------------------------------
// Object Types
// -----------------------------------------------------------------------------

/// A forum.
#[derive(SimpleObject)]
#[graphql(complex)]
pub struct Forum {
    pub id: ID,
    pub name: String,
}

#[ComplexObject]
impl Forum {
    /// Members of this forum. Members only.
    async fn members<'ctx>(&self, ctx: &Context<'ctx>) -> Result<Option<Vec<User>>> {
        let service = ctx.data::<Arc<ForumService>>()?;

        let members = service.members(actor(ctx).as_deref(), &self.id).await;
        null_on_denied(members.map(|users| users.into_iter().map(User::from).collect()))
    }

    /// A cursor-based navigation object to paginate over forum messages,
    /// newest first. Members only.
    async fn messages<'ctx>(
        &self,
        ctx: &Context<'ctx>,
        first: i32,
        after: Option<i64>,
    ) -> Result<Option<MessageConnection>> {
        let service = ctx.data::<Arc<ForumService>>()?;

        let page = service
            .messages_page(
                actor(ctx).as_deref(),
                &self.id,
                clamp_page_size(first),
                after,
            )
            .await;
        null_on_denied(page.map(MessageConnection::from))
    }
}

impl From<models::Forum> for Forum {
    fn from(forum: models::Forum) -> Self {
        Self {
            id: ID(forum.id),
            name: forum.name,
        }
    }
}

/// A user.
#[derive(SimpleObject)]
#[graphql(complex)]
pub struct User {
    pub id: ID,
    pub name: String,
    /// Avatar.
    pub image: String,
}

#[ComplexObject]
impl User {
    /// The list of forums where this user is a member. Users may only
    /// list their own.
    async fn forums<'ctx>(&self, ctx: &Context<'ctx>) -> Result<Option<Vec<Forum>>> {
        let service = ctx.data::<Arc<ForumService>>()?;

        let forums = service.forums_for_user(actor(ctx).as_deref(), &self.id).await;
        null_on_denied(forums.map(|forums| forums.into_iter().map(Forum::from).collect()))
    }
}

impl From<models::User> for User {
    fn from(user: models::User) -> Self {
        Self {
            id: ID(user.id),
            name: user.name,
            image: user.image,
        }
    }
}

/// A message.
#[derive(SimpleObject)]
#[graphql(complex)]
pub struct Message {
    pub text: String,
    /// The sending time of this message, assigned when the message
    /// reaches the server.
    pub sending_time: DateTime<Utc>,
    #[graphql(skip)]
    sender_id: String,
}

#[ComplexObject]
impl Message {
    /// The user who posted this message.
    async fn sender<'ctx>(&self, ctx: &Context<'ctx>) -> Result<Option<User>> {
        let service = ctx.data::<Arc<ForumService>>()?;

        let sender = service.sender(&self.sender_id).await;
        null_on_denied(sender.map(User::from))
    }
}

impl From<models::Message> for Message {
    fn from(message: models::Message) -> Self {
        Self {
            text: message.text,
            sending_time: message.sending_time,
            sender_id: message.sender_id,
        }
    }
}

// -----------------------------------------------------------------------------
// Connection Types (Relay-style pagination)
// -----------------------------------------------------------------------------

/// Page information for cursor-based pagination.
#[derive(SimpleObject)]
pub struct PageInfo {
    pub has_next_page: bool,
    pub has_previous_page: bool,
    pub start_cursor: Option<i64>,
    pub end_cursor: Option<i64>,
}

/// Edge for a cursor-based pagination over messages.
#[derive(SimpleObject)]
pub struct MessageEdge {
    pub node: Message,
    /// Cursor identifying this message's position.
    pub cursor: i64,
}

/// A connection object for cursor-based pagination over messages.
#[derive(SimpleObject)]
pub struct MessageConnection {
    /// Total number of messages, regardless of the requested window.
    pub total_count: i64,
    pub edges: Vec<MessageEdge>,
    pub page_info: PageInfo,
}

impl From<pagination::Connection<models::Message>> for MessageConnection {
    fn from(conn: pagination::Connection<models::Message>) -> Self {
        Self {
            total_count: conn.total_count,
            edges: conn
                .edges
                .into_iter()
                .map(|edge| MessageEdge {
                    node: Message::from(edge.node),
                    cursor: edge.cursor,
                })
                .collect(),
            page_info: PageInfo {
                has_next_page: conn.page_info.has_next_page,
                has_previous_page: conn.page_info.has_previous_page,
                start_cursor: conn.page_info.start_cursor,
                end_cursor: conn.page_info.end_cursor,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_page_size_caps_only_the_upper_bound() {
        assert_eq!(clamp_page_size(10), 10);
        assert_eq!(clamp_page_size(10_000), MAX_PAGE_SIZE);
        // Non-positive values are left for the engine to reject.
        assert_eq!(clamp_page_size(0), 0);
        assert_eq!(clamp_page_size(-3), -3);
    }

    #[test]
    fn denials_become_null_results() {
        use agora_core::error::DomainError;

        let denied: DomainResult<u32> = Err(DomainError::NotMember("1".into()));
        assert_eq!(null_on_denied(denied).unwrap(), None);

        let invalid: DomainResult<u32> = Err(DomainError::InvalidArgument("first".into()));
        assert!(null_on_denied(invalid).is_err());

        let ok: DomainResult<u32> = Ok(7);
        assert_eq!(null_on_denied(ok).unwrap(), Some(7));
    }
}

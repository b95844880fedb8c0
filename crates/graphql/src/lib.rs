//! GraphQL API for the Agora forum service.
//!
//! Provides the forum schema (queries, mutations, and the newest-first
//! message connection) and an axum HTTP server hosting it, with a
//! GraphiQL playground and a health endpoint.
//!
//! The HTTP layer resolves the request's identity through the
//! [`agora_core::ports::IdentityProvider`] port and injects the result
//! into the execution context as [`CurrentUser`]; all authorization
//! decisions happen below, in the domain service.

mod schema;
mod server;
mod types;

pub use schema::{
    build_schema, CurrentUser, Mutation, Query, MAX_QUERY_COMPLEXITY, MAX_QUERY_DEPTH,
};
pub use server::{serve, serve_with_shutdown, ServerConfig};
pub use types::AgoraSchema;

//! GraphQL type definitions.

use async_graphql::{EmptySubscription, Schema};

use crate::schema::{Mutation, Query};

/// The forum GraphQL schema type.
pub type AgoraSchema = Schema<Query, Mutation, EmptySubscription>;

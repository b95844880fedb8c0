//! Core domain layer for the Agora forum API.
//!
//! This crate contains the domain models, port traits (interfaces), and
//! business logic for a small forum service backed by an in-memory
//! fixture store. It follows hexagonal architecture principles - this is
//! the innermost layer with no dependencies on infrastructure.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │               agora (binary)                │
//! ├─────────────────────────────────────────────┤
//! │               agora-graphql                 │
//! │            (API, HTTP server)               │
//! ├─────────────────────────────────────────────┤
//! │               agora-storage                 │
//! │            (in-memory fixtures)             │
//! ├─────────────────────────────────────────────┤
//! │          agora-core  ← YOU ARE HERE         │
//! │     (models, ports, pagination, service)    │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`models`] - Domain models (Forum, User, Message)
//! - [`ports`] - Interface traits for adapters to implement
//! - [`pagination`] - Newest-first cursor pagination over message logs
//! - [`services`] - Membership guard and the [`services::ForumService`]
//! - [`error`] - Domain error types
//! - [`metrics`] - Prometheus metrics definitions
//!
//! # Key Concepts
//!
//! ## Ports
//!
//! Ports define interfaces that external adapters must implement:
//!
//! - [`ports::Repositories`] - Read and mutate forum/user fixture data
//! - [`ports::IdentityProvider`] - Resolve the request's actor id
//!
//! ## Authorization
//!
//! Forum-scoped data is gated on membership. Denied access is reported
//! as a typed error that the API layer converts to a null result; see
//! [`error::DomainError::is_denial`].
//!
//! ## Pagination
//!
//! A forum's message log is stored oldest-first and served newest-first
//! through a Relay-style connection. Cursors are stable ascending-order
//! indexes, so tail appends never invalidate a page already handed out.

pub mod error;
pub mod metrics;
pub mod models;
pub mod pagination;
pub mod ports;
pub mod services;

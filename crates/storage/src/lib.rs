//! Storage layer for the Agora forum API.
//!
//! This crate provides the in-memory implementation of the repository
//! traits defined in `agora-core`. State is seeded from a JSON fixture
//! document (an embedded default or a file supplied at startup) and
//! mutated in place behind a lock.
//!
//! # Usage
//!
//! ```ignore
//! use agora_storage::{Fixtures, MemoryRepositories};
//!
//! // Seed from the embedded fixtures...
//! let repositories = Arc::new(MemoryRepositories::seeded()?);
//!
//! // ...or from a file.
//! let fixtures = Fixtures::from_path("fixtures.json")?;
//! let repositories = Arc::new(MemoryRepositories::with_fixtures(fixtures));
//! ```

pub mod memory;

pub use memory::{Fixtures, MemForumRepository, MemUserRepository, MemoryRepositories, MemoryStore};

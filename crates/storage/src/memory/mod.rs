//! In-memory store implementation.

mod fixtures;
mod forum_repo;
mod store;
mod user_repo;

use std::sync::Arc;

use agora_core::error::StorageResult;
use agora_core::ports::{ForumRepository, Repositories, UserRepository};

pub use fixtures::Fixtures;
pub use forum_repo::MemForumRepository;
pub use store::MemoryStore;
pub use user_repo::MemUserRepository;

/// In-memory implementation of the [`Repositories`] composite.
///
/// Both repositories share one [`MemoryStore`], so forum and user reads
/// observe a single consistent state.
pub struct MemoryRepositories {
    forums: MemForumRepository,
    users: MemUserRepository,
}

impl MemoryRepositories {
    /// Build repositories over an existing store.
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self {
            forums: MemForumRepository::new(store.clone()),
            users: MemUserRepository::new(store),
        }
    }

    /// Build repositories seeded with the given fixture document.
    pub fn with_fixtures(fixtures: Fixtures) -> Self {
        Self::new(Arc::new(MemoryStore::new(fixtures)))
    }

    /// Build repositories seeded with the embedded default fixtures.
    pub fn seeded() -> StorageResult<Self> {
        Ok(Self::new(Arc::new(MemoryStore::seeded()?)))
    }
}

impl Repositories for MemoryRepositories {
    fn forums(&self) -> &dyn ForumRepository {
        &self.forums
    }

    fn users(&self) -> &dyn UserRepository {
        &self.users
    }
}

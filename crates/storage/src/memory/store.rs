//! Shared in-memory store state.
//!
//! [`MemoryStore`] owns the fixture collections behind a `RwLock` and is
//! the single writer for all mutations, so the append-only message log
//! and unique-membership invariants hold under the multi-threaded
//! runtime. Repository implementations share it via `Arc`.

use std::sync::RwLock;

use chrono::Utc;

use agora_core::error::{StorageError, StorageResult};
use agora_core::models::{Forum, Message, User};

use super::fixtures::Fixtures;

/// In-memory fixture store.
pub struct MemoryStore {
    state: RwLock<Fixtures>,
}

impl MemoryStore {
    /// Create a store seeded with the given fixture document.
    pub fn new(fixtures: Fixtures) -> Self {
        Self {
            state: RwLock::new(fixtures),
        }
    }

    /// Create a store seeded with the embedded default fixtures.
    pub fn seeded() -> StorageResult<Self> {
        Ok(Self::new(Fixtures::embedded()?))
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    pub fn list_forums(&self) -> StorageResult<Vec<Forum>> {
        Ok(self.read()?.forums.clone())
    }

    pub fn get_forum(&self, id: &str) -> StorageResult<Option<Forum>> {
        Ok(self.read()?.forums.iter().find(|f| f.id == id).cloned())
    }

    pub fn get_forum_by_name(&self, name: &str) -> StorageResult<Option<Forum>> {
        Ok(self.read()?.forums.iter().find(|f| f.name == name).cloned())
    }

    pub fn get_user(&self, id: &str) -> StorageResult<Option<User>> {
        Ok(self.read()?.users.iter().find(|u| u.id == id).cloned())
    }

    pub fn list_users(&self) -> StorageResult<Vec<User>> {
        Ok(self.read()?.users.clone())
    }

    // -------------------------------------------------------------------------
    // Writes
    // -------------------------------------------------------------------------

    /// Create a forum unless the name is taken. The creator becomes the
    /// first member.
    pub fn create_forum(&self, name: &str, creator_id: &str) -> StorageResult<Option<Forum>> {
        let mut state = self.write()?;

        if state.forums.iter().any(|f| f.name == name) {
            return Ok(None);
        }

        // Ids are numeric strings; the next id is one past the largest
        // existing one.
        let next_id = state
            .forums
            .iter()
            .filter_map(|f| f.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0)
            + 1;

        let forum = Forum {
            id: next_id.to_string(),
            name: name.to_string(),
            member_ids: vec![creator_id.to_string()],
            messages: Vec::new(),
        };
        state.forums.push(forum.clone());

        Ok(Some(forum))
    }

    /// Add a user to a forum's member list, keeping it duplicate-free.
    pub fn join_forum(&self, forum_id: &str, user_id: &str) -> StorageResult<Option<Forum>> {
        let mut state = self.write()?;

        let Some(forum) = state.forums.iter_mut().find(|f| f.id == forum_id) else {
            return Ok(None);
        };

        if !forum.member_ids.iter().any(|m| m == user_id) {
            forum.member_ids.push(user_id.to_string());
        }

        Ok(Some(forum.clone()))
    }

    /// Like [`join_forum`](Self::join_forum), addressing the forum by name.
    pub fn join_forum_by_name(&self, name: &str, user_id: &str) -> StorageResult<Option<Forum>> {
        let mut state = self.write()?;

        let Some(forum) = state.forums.iter_mut().find(|f| f.name == name) else {
            return Ok(None);
        };

        if !forum.member_ids.iter().any(|m| m == user_id) {
            forum.member_ids.push(user_id.to_string());
        }

        Ok(Some(forum.clone()))
    }

    /// Append a message to a forum's log, stamped with the current time.
    ///
    /// Tail-append is the only message mutation the store supports, which
    /// keeps the log chronological and previously issued cursors stable.
    pub fn append_message(
        &self,
        forum_id: &str,
        sender_id: &str,
        text: &str,
    ) -> StorageResult<Option<Message>> {
        let mut state = self.write()?;

        let Some(forum) = state.forums.iter_mut().find(|f| f.id == forum_id) else {
            return Ok(None);
        };

        let message = Message {
            text: text.to_string(),
            sender_id: sender_id.to_string(),
            sending_time: Utc::now(),
        };
        forum.messages.push(message.clone());

        Ok(Some(message))
    }

    // -------------------------------------------------------------------------
    // Lock helpers
    // -------------------------------------------------------------------------

    fn read(&self) -> StorageResult<std::sync::RwLockReadGuard<'_, Fixtures>> {
        self.state
            .read()
            .map_err(|e| StorageError::LockPoisoned(e.to_string()))
    }

    fn write(&self) -> StorageResult<std::sync::RwLockWriteGuard<'_, Fixtures>> {
        self.state
            .write()
            .map_err(|e| StorageError::LockPoisoned(e.to_string()))
    }
}

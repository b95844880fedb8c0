//! Domain models for forums, users, and messages.
//!
//! These models are storage-agnostic and represent the canonical form
//! of forum data within the domain layer. Serde field renames follow the
//! fixture document format (`memberIDs`, `senderID`, `sendingTime`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A forum member account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier (numeric string in the fixture data).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Avatar path or URL.
    pub image: String,
}

/// A message posted to a forum.
///
/// Messages are immutable once created and live in their forum's
/// `messages` list in receive order (append order = chronological
/// ascending).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Message body.
    pub text: String,
    /// Id of the posting user.
    #[serde(rename = "senderID")]
    pub sender_id: String,
    /// Server-assigned receive time.
    #[serde(rename = "sendingTime")]
    pub sending_time: DateTime<Utc>,
}

/// A forum: a named room with a member list and a message log.
///
/// `member_ids` keeps insertion order and holds no duplicates; `messages`
/// is append-only. Both invariants are enforced by the store's write
/// operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Forum {
    /// Unique identifier (numeric string, assigned as max existing id + 1).
    pub id: String,
    /// Unique forum name.
    pub name: String,
    /// Member user ids in join order.
    #[serde(rename = "memberIDs")]
    pub member_ids: Vec<String>,
    /// Message log in receive order, oldest first.
    pub messages: Vec<Message>,
}

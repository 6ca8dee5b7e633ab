//! Typed snowflake identifiers.
//!
//! Every record kind gets its own id newtype over the raw snowflake i64.
//! Association fields store these ids instead of references, and the
//! arenas in the association graph resolve them back to records.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a workspace record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkspaceId(pub i64);

impl WorkspaceId {
    /// Create a new WorkspaceId from raw value.
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the raw i64 value.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for WorkspaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for WorkspaceId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<WorkspaceId> for i64 {
    fn from(id: WorkspaceId) -> Self {
        id.0
    }
}

/// Identifier of an entry (file or directory) record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub i64);

impl EntryId {
    /// Create a new EntryId from raw value.
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the raw i64 value.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for EntryId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<EntryId> for i64 {
    fn from(id: EntryId) -> Self {
        id.0
    }
}

/// Identifier of a workspace membership record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MembershipId(pub i64);

impl MembershipId {
    /// Create a new MembershipId from raw value.
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the raw i64 value.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for MembershipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for MembershipId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<MembershipId> for i64 {
    fn from(id: MembershipId) -> Self {
        id.0
    }
}

/// Identifier of a chat room record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChatRoomId(pub i64);

impl ChatRoomId {
    /// Create a new ChatRoomId from raw value.
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the raw i64 value.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ChatRoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ChatRoomId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<ChatRoomId> for i64 {
    fn from(id: ChatRoomId) -> Self {
        id.0
    }
}

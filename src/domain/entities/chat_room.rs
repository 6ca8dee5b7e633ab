//! Chat room entity and repository trait.
//!
//! Each workspace owns at most one chat room, and a chat room belongs to
//! at most one workspace. Message transport and history live outside this
//! crate; only the 1:1 link is modeled here.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{ChatRoomId, WorkspaceId};
use crate::shared::error::DomainError;

/// Represents a workspace's chat room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRoom {
    /// Snowflake ID (primary key)
    pub id: ChatRoomId,

    /// Room name shown in the chat panel
    pub name: String,

    /// Workspace this room is attached to (strict 1:1)
    pub workspace_id: Option<WorkspaceId>,

    /// Room creation timestamp
    pub created_at: DateTime<Utc>,
}

impl ChatRoom {
    pub(crate) fn new(id: ChatRoomId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            workspace_id: None,
            created_at: Utc::now(),
        }
    }

    /// Check if the room is attached to a workspace.
    pub fn is_attached(&self) -> bool {
        self.workspace_id.is_some()
    }
}

/// Repository trait for ChatRoom data access operations.
#[async_trait]
pub trait ChatRoomRepository: Send + Sync {
    /// Find a chat room by its Snowflake ID.
    async fn find_by_id(&self, id: ChatRoomId) -> Result<Option<ChatRoom>, DomainError>;

    /// Find the chat room attached to a workspace.
    async fn find_by_workspace_id(
        &self,
        workspace_id: WorkspaceId,
    ) -> Result<Option<ChatRoom>, DomainError>;

    /// Create a new chat room.
    async fn create(&self, chat_room: &ChatRoom) -> Result<ChatRoom, DomainError>;

    /// Delete a chat room.
    async fn delete(&self, id: ChatRoomId) -> Result<(), DomainError>;
}

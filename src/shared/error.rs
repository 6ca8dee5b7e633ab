//! Domain Error Types
//!
//! Centralized error type shared by the association graph and the
//! repository traits.

use crate::domain::value_objects::{ChatRoomId, EntryId, MembershipId, WorkspaceId};

/// Domain error type
///
/// Every variant is a caller fault: the graph operations are total over
/// records that exist, so the only failures are unknown ids and file-tree
/// shape violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("Workspace not found: {0}")]
    WorkspaceNotFound(WorkspaceId),

    #[error("Entry not found: {0}")]
    EntryNotFound(EntryId),

    #[error("Membership not found: {0}")]
    MembershipNotFound(MembershipId),

    #[error("Chat room not found: {0}")]
    ChatRoomNotFound(ChatRoomId),

    #[error("Entry {0} is not a directory")]
    NotADirectory(EntryId),

    #[error("Attaching entry {child} under {parent} would create a cycle")]
    HierarchyCycle { parent: EntryId, child: EntryId },
}

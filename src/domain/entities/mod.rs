//! # Domain Entities
//!
//! Core domain entities representing the records of a collaborative
//! workspace: the workspace itself, its file-tree entries, the memberships
//! of its users, and its chat room.
//!
//! ## Core Entities
//!
//! - **Workspace**: container of a coding session, owning everything below
//! - **Entry**: a file or directory node in the workspace's file tree
//! - **MemberWorkspace**: a user's membership in a specific workspace
//! - **ChatRoom**: the workspace's chat room (strict 1:1)
//!
//! ## Repository Traits
//!
//! Each entity has an associated repository trait defining data access
//! operations. These traits are implemented by the persistence layer,
//! following the dependency inversion principle; identifier durability and
//! cascading deletes at the storage level are its responsibility.

mod chat_room;
mod entry;
mod member_workspace;
mod workspace;

// Re-export Workspace entity and related types
pub use workspace::{
    Category, CreateWorkspace, Language, Workspace, WorkspaceRepository, WorkspaceStatus,
};

// Re-export Entry entity and related types
pub use entry::{CreateEntry, Entry, EntryRepository};

// Re-export MemberWorkspace entity and related types
pub use member_workspace::{MemberWorkspace, MemberWorkspaceRepository, MembershipRole};

// Re-export ChatRoom entity and related types
pub use chat_room::{ChatRoom, ChatRoomRepository};

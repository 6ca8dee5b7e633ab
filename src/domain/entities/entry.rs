//! Entry entity and repository trait.
//!
//! An entry is one node of a workspace's file tree: a file with optional
//! text content, or a directory holding child entries. Entries form a
//! forest; an entry with no parent is a root of its workspace.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{EntryId, WorkspaceId};
use crate::shared::error::DomainError;

/// Parameters for creating an entry.
#[derive(Debug, Clone)]
pub struct CreateEntry {
    pub name: String,
    pub content: Option<String>,
    pub is_directory: bool,
}

impl CreateEntry {
    /// Parameters for a directory entry.
    pub fn directory(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: None,
            is_directory: true,
        }
    }

    /// Parameters for a file entry.
    pub fn file(name: impl Into<String>, content: Option<String>) -> Self {
        Self {
            name: name.into(),
            content,
            is_directory: false,
        }
    }
}

/// Represents a file or directory in a workspace's file tree.
///
/// `parent_id`, `children` and `workspace_id` are maintained by the
/// association graph; a child's workspace is always its parent's, and a
/// file entry never has children.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    /// Snowflake ID (primary key)
    pub id: EntryId,

    /// File or directory name
    pub name: String,

    /// File contents; `None` for directories
    pub content: Option<String>,

    /// Whether this entry is a directory
    pub is_directory: bool,

    /// Owning directory; `None` for workspace roots
    pub parent_id: Option<EntryId>,

    /// Child entries in creation order; always empty for files
    pub children: Vec<EntryId>,

    /// Workspace that owns this entry
    pub workspace_id: Option<WorkspaceId>,

    /// Entry creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Entry {
    pub(crate) fn new(id: EntryId, params: CreateEntry) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: params.name,
            content: if params.is_directory {
                None
            } else {
                params.content
            },
            is_directory: params.is_directory,
            parent_id: None,
            children: Vec::new(),
            workspace_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if this entry is a file.
    pub fn is_file(&self) -> bool {
        !self.is_directory
    }

    /// Check if this entry is a root of its workspace's file tree.
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Check if an entry is a direct child of this one.
    pub fn has_child(&self, entry_id: EntryId) -> bool {
        self.children.contains(&entry_id)
    }

    /// Replace the entry name.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.touch();
    }

    /// Replace the file contents.
    pub fn update_content(&mut self, content: Option<String>) {
        self.content = content;
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Repository trait for Entry data access operations.
#[async_trait]
pub trait EntryRepository: Send + Sync {
    /// Find an entry by its Snowflake ID.
    async fn find_by_id(&self, id: EntryId) -> Result<Option<Entry>, DomainError>;

    /// Find all entries owned by a workspace.
    async fn find_by_workspace_id(&self, workspace_id: WorkspaceId)
        -> Result<Vec<Entry>, DomainError>;

    /// Find the direct children of a directory entry.
    async fn find_children(&self, parent_id: EntryId) -> Result<Vec<Entry>, DomainError>;

    /// Create a new entry.
    async fn create(&self, entry: &Entry) -> Result<Entry, DomainError>;

    /// Update an existing entry.
    async fn update(&self, entry: &Entry) -> Result<Entry, DomainError>;

    /// Delete an entry (cascading delete of descendants).
    async fn delete(&self, id: EntryId) -> Result<(), DomainError>;
}

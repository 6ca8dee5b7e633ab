//! Workspace entity and repository trait.
//!
//! A workspace is the top-level container of a collaborative coding
//! session: it owns a file tree of entries, the memberships of the users
//! working in it, and at most one chat room.

use std::collections::HashSet;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{ChatRoomId, EntryId, MembershipId, WorkspaceId};
use crate::shared::error::DomainError;

/// Workspace category tags.
///
/// A workspace carries a non-empty set of these so it can be listed under
/// several headings at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    #[default]
    Frontend,
    Backend,
    Fullstack,
    Algorithm,
    Embedded,
    Data,
}

impl Category {
    /// Convert from storage string representation.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "frontend" => Self::Frontend,
            "backend" => Self::Backend,
            "fullstack" => Self::Fullstack,
            "algorithm" => Self::Algorithm,
            "embedded" => Self::Embedded,
            "data" => Self::Data,
            _ => Self::Frontend,
        }
    }

    /// Convert to storage string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Frontend => "frontend",
            Self::Backend => "backend",
            Self::Fullstack => "fullstack",
            Self::Algorithm => "algorithm",
            Self::Embedded => "embedded",
            Self::Data => "data",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Programming language a workspace's container is provisioned for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    C,
    Cpp,
    Java,
    Javascript,
    #[default]
    Python,
    Go,
    Rust,
}

impl Language {
    /// Convert from storage string representation.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "c" => Self::C,
            "cpp" => Self::Cpp,
            "java" => Self::Java,
            "javascript" => Self::Javascript,
            "python" => Self::Python,
            "go" => Self::Go,
            "rust" => Self::Rust,
            _ => Self::Python,
        }
    }

    /// Convert to storage string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::C => "c",
            Self::Cpp => "cpp",
            Self::Java => "java",
            Self::Javascript => "javascript",
            Self::Python => "python",
            Self::Go => "go",
            Self::Rust => "rust",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Workspace lifecycle states.
///
/// Transitions are decided by the surrounding application workflow; this
/// layer only records the current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WorkspaceStatus {
    #[default]
    Active,
    Archived,
    Deleted,
}

impl WorkspaceStatus {
    /// Convert from storage string representation.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "active" => Self::Active,
            "archived" => Self::Archived,
            "deleted" => Self::Deleted,
            _ => Self::Active,
        }
    }

    /// Convert to storage string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Archived => "archived",
            Self::Deleted => "deleted",
        }
    }
}

impl std::fmt::Display for WorkspaceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parameters for creating a workspace.
#[derive(Debug, Clone)]
pub struct CreateWorkspace {
    pub title: String,
    pub categories: HashSet<Category>,
    pub language: Language,
    pub description: Option<String>,
    pub is_public: bool,
    pub status: WorkspaceStatus,
}

/// Represents a collaborative workspace.
///
/// Association fields hold ids only; the association graph owns the
/// records and keeps both sides of every relationship consistent. Mutate
/// associations through the graph, never by assigning these fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workspace {
    /// Snowflake ID (primary key)
    pub id: WorkspaceId,

    /// Short human-readable title shown in workspace listings
    pub title: String,

    /// Category tags the workspace is listed under
    pub categories: HashSet<Category>,

    /// Language the workspace container is provisioned for
    pub language: Language,

    /// Free-form description
    pub description: Option<String>,

    /// Whether the workspace shows up in public listings
    pub is_public: bool,

    /// Lifecycle state
    pub status: WorkspaceStatus,

    /// Memberships of the users participating in this workspace
    pub members: Vec<MembershipId>,

    /// Every entry owned by this workspace, roots and nested entries alike
    pub entries: Vec<EntryId>,

    /// The workspace's chat room, if one has been opened (strict 1:1)
    pub chat_room: Option<ChatRoomId>,

    /// Workspace creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Workspace {
    pub(crate) fn new(id: WorkspaceId, params: CreateWorkspace) -> Self {
        let now = Utc::now();
        Self {
            id,
            title: params.title,
            categories: params.categories,
            language: params.language,
            description: params.description,
            is_public: params.is_public,
            status: params.status,
            members: Vec::new(),
            entries: Vec::new(),
            chat_room: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if the workspace is in its active lifecycle state.
    pub fn is_active(&self) -> bool {
        self.status == WorkspaceStatus::Active
    }

    /// Check if a membership is listed on this workspace.
    pub fn has_member(&self, membership_id: MembershipId) -> bool {
        self.members.contains(&membership_id)
    }

    /// Check if an entry is owned by this workspace.
    pub fn owns_entry(&self, entry_id: EntryId) -> bool {
        self.entries.contains(&entry_id)
    }

    /// Replace the title.
    pub fn update_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.touch();
    }

    /// Replace the description.
    pub fn update_description(&mut self, description: Option<String>) {
        self.description = description;
        self.touch();
    }

    /// Switch the workspace between public and private listings.
    pub fn update_visibility(&mut self, is_public: bool) {
        self.is_public = is_public;
        self.touch();
    }

    /// Add a category tag.
    pub fn add_category(&mut self, category: Category) {
        self.categories.insert(category);
        self.touch();
    }

    /// Remove a category tag.
    pub fn remove_category(&mut self, category: Category) {
        self.categories.remove(&category);
        self.touch();
    }

    /// Replace the whole category set.
    pub fn replace_categories(&mut self, categories: HashSet<Category>) {
        self.categories = categories;
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Repository trait for Workspace data access operations.
#[async_trait]
pub trait WorkspaceRepository: Send + Sync {
    /// Find a workspace by its Snowflake ID.
    async fn find_by_id(&self, id: WorkspaceId) -> Result<Option<Workspace>, DomainError>;

    /// Find all publicly listed workspaces.
    async fn find_public(&self) -> Result<Vec<Workspace>, DomainError>;

    /// Find all workspaces a user participates in.
    async fn find_by_user_id(&self, user_id: i64) -> Result<Vec<Workspace>, DomainError>;

    /// Create a new workspace.
    async fn create(&self, workspace: &Workspace) -> Result<Workspace, DomainError>;

    /// Update an existing workspace.
    async fn update(&self, workspace: &Workspace) -> Result<Workspace, DomainError>;

    /// Delete a workspace (cascading delete of entries, memberships and chat room).
    async fn delete(&self, id: WorkspaceId) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn create_test_workspace() -> Workspace {
        Workspace::new(
            WorkspaceId::new(1),
            CreateWorkspace {
                title: "demo".to_string(),
                categories: HashSet::from([Category::Backend]),
                language: Language::Go,
                description: None,
                is_public: true,
                status: WorkspaceStatus::Active,
            },
        )
    }

    // ==========================================================================
    // Enum Tests
    // ==========================================================================

    #[test_case("frontend", Category::Frontend)]
    #[test_case("BACKEND", Category::Backend)]
    #[test_case("Fullstack", Category::Fullstack)]
    #[test_case("algorithm", Category::Algorithm)]
    #[test_case("embedded", Category::Embedded)]
    #[test_case("data", Category::Data)]
    #[test_case("unknown", Category::Frontend)]
    fn test_category_from_str(input: &str, expected: Category) {
        assert_eq!(Category::from_str(input), expected);
    }

    #[test_case("java", Language::Java)]
    #[test_case("GO", Language::Go)]
    #[test_case("rust", Language::Rust)]
    #[test_case("not-a-language", Language::Python)]
    fn test_language_from_str(input: &str, expected: Language) {
        assert_eq!(Language::from_str(input), expected);
    }

    #[test_case("active", WorkspaceStatus::Active)]
    #[test_case("ARCHIVED", WorkspaceStatus::Archived)]
    #[test_case("deleted", WorkspaceStatus::Deleted)]
    #[test_case("", WorkspaceStatus::Active)]
    fn test_status_from_str(input: &str, expected: WorkspaceStatus) {
        assert_eq!(WorkspaceStatus::from_str(input), expected);
    }

    #[test]
    fn test_enum_str_roundtrip() {
        for category in [
            Category::Frontend,
            Category::Backend,
            Category::Fullstack,
            Category::Algorithm,
            Category::Embedded,
            Category::Data,
        ] {
            assert_eq!(Category::from_str(category.as_str()), category);
        }
        for language in [
            Language::C,
            Language::Cpp,
            Language::Java,
            Language::Javascript,
            Language::Python,
            Language::Go,
            Language::Rust,
        ] {
            assert_eq!(Language::from_str(language.as_str()), language);
        }
    }

    // ==========================================================================
    // Workspace Tests
    // ==========================================================================

    #[test]
    fn test_new_workspace_has_no_associations() {
        let workspace = create_test_workspace();
        assert!(workspace.members.is_empty());
        assert!(workspace.entries.is_empty());
        assert!(workspace.chat_room.is_none());
        assert!(workspace.is_active());
    }

    #[test]
    fn test_update_title_and_description() {
        let mut workspace = create_test_workspace();
        workspace.update_title("renamed");
        workspace.update_description(Some("a demo workspace".to_string()));
        assert_eq!(workspace.title, "renamed");
        assert_eq!(workspace.description.as_deref(), Some("a demo workspace"));
    }

    #[test]
    fn test_update_visibility() {
        let mut workspace = create_test_workspace();
        workspace.update_visibility(false);
        assert!(!workspace.is_public);
    }

    #[test]
    fn test_category_mutators() {
        let mut workspace = create_test_workspace();
        workspace.add_category(Category::Data);
        assert!(workspace.categories.contains(&Category::Data));

        workspace.remove_category(Category::Backend);
        assert!(!workspace.categories.contains(&Category::Backend));

        workspace.replace_categories(HashSet::from([Category::Algorithm]));
        assert_eq!(workspace.categories, HashSet::from([Category::Algorithm]));
    }

    #[test]
    fn test_workspace_serde_roundtrip() {
        let workspace = create_test_workspace();
        let json = serde_json::to_string(&workspace).unwrap();
        let back: Workspace = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, workspace.id);
        assert_eq!(back.title, workspace.title);
        assert_eq!(back.categories, workspace.categories);
        assert_eq!(back.language, workspace.language);
    }
}

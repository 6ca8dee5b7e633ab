//! Workspace membership entity and repository trait.
//!
//! Join record linking an external user identity to a workspace. A
//! membership belongs to exactly one workspace for its whole lifetime;
//! leaving a workspace deletes the record rather than repointing it.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{MembershipId, WorkspaceId};
use crate::shared::error::DomainError;

/// Role a member holds inside a workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MembershipRole {
    /// Can manage the workspace and its members
    Admin,
    /// Can edit entries and chat
    #[default]
    Member,
}

impl MembershipRole {
    /// Convert from storage string representation.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "admin" => Self::Admin,
            "member" => Self::Member,
            _ => Self::Member,
        }
    }

    /// Convert to storage string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Member => "member",
        }
    }
}

impl std::fmt::Display for MembershipRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Represents a user's membership in a workspace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberWorkspace {
    /// Snowflake ID (primary key)
    pub id: MembershipId,

    /// Identity of the member, issued by the account system
    pub user_id: i64,

    /// Role inside the workspace
    pub role: MembershipRole,

    /// Workspace this membership points at; set when the membership is
    /// added to a workspace and never repointed afterwards
    pub workspace_id: Option<WorkspaceId>,

    /// When the user joined the workspace
    pub joined_at: DateTime<Utc>,
}

impl MemberWorkspace {
    pub(crate) fn new(id: MembershipId, user_id: i64, role: MembershipRole) -> Self {
        Self {
            id,
            user_id,
            role,
            workspace_id: None,
            joined_at: Utc::now(),
        }
    }

    /// Check if the member can manage the workspace.
    pub fn is_admin(&self) -> bool {
        self.role == MembershipRole::Admin
    }
}

/// Repository trait for MemberWorkspace data access operations.
#[async_trait]
pub trait MemberWorkspaceRepository: Send + Sync {
    /// Find a membership by its Snowflake ID.
    async fn find_by_id(&self, id: MembershipId) -> Result<Option<MemberWorkspace>, DomainError>;

    /// Find all memberships of a workspace.
    async fn find_by_workspace_id(
        &self,
        workspace_id: WorkspaceId,
    ) -> Result<Vec<MemberWorkspace>, DomainError>;

    /// Find all memberships of a user across workspaces.
    async fn find_by_user_id(&self, user_id: i64) -> Result<Vec<MemberWorkspace>, DomainError>;

    /// Create a new membership.
    async fn create(&self, membership: &MemberWorkspace) -> Result<MemberWorkspace, DomainError>;

    /// Delete a membership.
    async fn delete(&self, id: MembershipId) -> Result<(), DomainError>;
}

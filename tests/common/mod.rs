//! Common Test Utilities
//!
//! Shared fixtures for association graph scenario tests.

use std::collections::HashSet;
use std::sync::Once;

use webide_core::domain::entities::{
    Category, CreateEntry, CreateWorkspace, Language, MembershipRole, WorkspaceStatus,
};
use webide_core::domain::services::AssociationGraph;
use webide_core::domain::value_objects::{ChatRoomId, EntryId, MembershipId, WorkspaceId};

static TRACING: Once = Once::new();

/// Initialize tracing once for the whole test binary.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("webide_core=debug"));
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_test_writer()
            .init();
    });
}

/// Workspace creation parameters used across scenarios.
pub fn workspace_params(title: &str) -> CreateWorkspace {
    CreateWorkspace {
        title: title.to_string(),
        categories: HashSet::from([Category::Backend]),
        language: Language::Go,
        description: Some("integration fixture".to_string()),
        is_public: true,
        status: WorkspaceStatus::Active,
    }
}

/// A populated workspace: one member, a chat room, and a small Go project
/// tree (`root/` with `go.mod` and `src/main.go`).
pub struct ProjectFixture {
    pub graph: AssociationGraph,
    pub workspace: WorkspaceId,
    pub membership: MembershipId,
    pub chat_room: ChatRoomId,
    pub root: EntryId,
    pub go_mod: EntryId,
    pub src: EntryId,
    pub main_go: EntryId,
}

impl ProjectFixture {
    pub fn new() -> Self {
        init_tracing();
        let mut graph = AssociationGraph::new();
        let workspace = graph.create_workspace(workspace_params("demo"));

        let membership = graph.create_membership(77, MembershipRole::Admin);
        graph.add_member(workspace, membership).unwrap();

        let chat_room = graph.create_chat_room("general");
        graph.assign_chat_room(workspace, Some(chat_room)).unwrap();

        let root = graph.create_entry(CreateEntry::directory("root"));
        graph.add_entry(workspace, root).unwrap();

        let go_mod = graph.create_entry(CreateEntry::file(
            "go.mod",
            Some("module demo".to_string()),
        ));
        graph.attach_child(root, go_mod).unwrap();

        let src = graph.create_entry(CreateEntry::directory("src"));
        graph.attach_child(root, src).unwrap();

        let main_go = graph.create_entry(CreateEntry::file(
            "main.go",
            Some("package main".to_string()),
        ));
        graph.attach_child(src, main_go).unwrap();

        Self {
            graph,
            workspace,
            membership,
            chat_room,
            root,
            go_mod,
            src,
            main_go,
        }
    }
}

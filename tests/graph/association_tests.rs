//! End-to-end link consistency over a populated workspace.

use pretty_assertions::assert_eq;
use webide_core::domain::entities::Workspace;

use crate::common::{workspace_params, ProjectFixture};

#[test]
fn test_full_workspace_wiring() {
    let fixture = ProjectFixture::new();
    let graph = &fixture.graph;

    let workspace = graph.workspace(fixture.workspace).unwrap();
    assert_eq!(workspace.members, vec![fixture.membership]);
    assert_eq!(workspace.chat_room, Some(fixture.chat_room));

    // Root and nested entries are all listed on the workspace.
    for entry_id in [fixture.root, fixture.go_mod, fixture.src, fixture.main_go] {
        assert!(workspace.owns_entry(entry_id));
        assert_eq!(
            graph.entry(entry_id).unwrap().workspace_id,
            Some(fixture.workspace)
        );
    }

    assert_eq!(graph.entry(fixture.root).unwrap().children.len(), 2);
    assert_eq!(
        graph.entry(fixture.main_go).unwrap().parent_id,
        Some(fixture.src)
    );
    assert_eq!(
        graph.chat_room(fixture.chat_room).unwrap().workspace_id,
        Some(fixture.workspace)
    );
}

#[test]
fn test_project_tree_moves_to_new_workspace() {
    let mut fixture = ProjectFixture::new();
    let target = fixture.graph.create_workspace(workspace_params("fork"));

    fixture
        .graph
        .assign_workspace(fixture.root, Some(target))
        .unwrap();

    let source_ws = fixture.graph.workspace(fixture.workspace).unwrap();
    let target_ws = fixture.graph.workspace(target).unwrap();
    assert!(source_ws.entries.is_empty());
    assert_eq!(target_ws.entries.len(), 4);
    for entry_id in [fixture.root, fixture.go_mod, fixture.src, fixture.main_go] {
        assert_eq!(
            fixture.graph.entry(entry_id).unwrap().workspace_id,
            Some(target)
        );
    }
    // Members and chat room stay with the source workspace.
    assert_eq!(source_ws.members, vec![fixture.membership]);
    assert_eq!(source_ws.chat_room, Some(fixture.chat_room));
}

#[test]
fn test_chat_rooms_never_shared_between_workspaces() {
    let mut fixture = ProjectFixture::new();
    let other = fixture.graph.create_workspace(workspace_params("other"));
    let other_room = fixture.graph.create_chat_room("other-general");
    fixture
        .graph
        .assign_chat_room(other, Some(other_room))
        .unwrap();

    // Steal the first workspace's room, then hand it back.
    fixture
        .graph
        .assign_chat_room(other, Some(fixture.chat_room))
        .unwrap();
    fixture
        .graph
        .assign_chat_room(fixture.workspace, Some(fixture.chat_room))
        .unwrap();

    let workspaces = [fixture.workspace, other];
    for room_id in [fixture.chat_room, other_room] {
        let holders = workspaces
            .iter()
            .filter(|ws| fixture.graph.workspace(**ws).unwrap().chat_room == Some(room_id))
            .count();
        assert!(holders <= 1, "room {room_id} referenced by {holders} workspaces");
        let back_ref = fixture.graph.chat_room(room_id).unwrap().workspace_id;
        if let Some(ws_id) = back_ref {
            assert_eq!(
                fixture.graph.workspace(ws_id).unwrap().chat_room,
                Some(room_id)
            );
        }
    }
    // The second workspace lost its room when it took the first one's.
    assert_eq!(
        fixture.graph.chat_room(other_room).unwrap().workspace_id,
        None
    );
}

#[test]
fn test_workspace_serde_roundtrip_preserves_links() {
    let fixture = ProjectFixture::new();
    let workspace = fixture.graph.workspace(fixture.workspace).unwrap();

    let json = serde_json::to_string(workspace).unwrap();
    let back: Workspace = serde_json::from_str(&json).unwrap();

    assert_eq!(back.id, workspace.id);
    assert_eq!(back.entries, workspace.entries);
    assert_eq!(back.members, workspace.members);
    assert_eq!(back.chat_room, workspace.chat_room);
}

//! Cascading removal over a populated workspace.

use pretty_assertions::assert_eq;
use webide_core::domain::entities::MembershipRole;

use crate::common::ProjectFixture;

#[test]
fn test_remove_directory_cascades_to_contents() {
    let mut fixture = ProjectFixture::new();

    fixture.graph.remove_entry(fixture.src).unwrap();

    assert!(fixture.graph.entry(fixture.src).is_none());
    assert!(fixture.graph.entry(fixture.main_go).is_none());
    assert_eq!(
        fixture.graph.entry(fixture.root).unwrap().children,
        vec![fixture.go_mod]
    );
    let workspace = fixture.graph.workspace(fixture.workspace).unwrap();
    assert!(workspace.owns_entry(fixture.root));
    assert!(workspace.owns_entry(fixture.go_mod));
    assert!(!workspace.owns_entry(fixture.src));
    assert!(!workspace.owns_entry(fixture.main_go));
}

#[test]
fn test_remove_workspace_drops_every_owned_record() {
    let mut fixture = ProjectFixture::new();

    fixture.graph.remove_workspace(fixture.workspace).unwrap();

    assert_eq!(fixture.graph.workspace_count(), 0);
    assert_eq!(fixture.graph.entry_count(), 0);
    assert_eq!(fixture.graph.membership_count(), 0);
    assert_eq!(fixture.graph.chat_room_count(), 0);
}

#[test]
fn test_membership_leave_and_rejoin() {
    let mut fixture = ProjectFixture::new();

    fixture.graph.remove_membership(fixture.membership).unwrap();
    assert!(fixture
        .graph
        .workspace(fixture.workspace)
        .unwrap()
        .members
        .is_empty());

    let rejoined = fixture.graph.create_membership(77, MembershipRole::Member);
    fixture.graph.add_member(fixture.workspace, rejoined).unwrap();

    let workspace = fixture.graph.workspace(fixture.workspace).unwrap();
    assert_eq!(workspace.members, vec![rejoined]);
    assert!(!fixture.graph.membership(rejoined).unwrap().is_admin());
}

//! Bidirectional association maintenance for workspace records.
//!
//! Every two-sided relationship in the record model — workspace/entry,
//! entry parent/child, workspace/membership, workspace/chat room — is
//! mutated through this service only. Each operation leaves both sides of
//! the edge consistent regardless of prior state or call order, relinking
//! permissively instead of rejecting records that are already attached
//! elsewhere.

use std::collections::{HashMap, HashSet};

use crate::domain::entities::{
    Category, ChatRoom, CreateEntry, CreateWorkspace, Entry, MemberWorkspace, MembershipRole,
    Workspace,
};
use crate::domain::value_objects::{ChatRoomId, EntryId, MembershipId, WorkspaceId};
use crate::shared::error::DomainError;
use crate::shared::snowflake::SnowflakeGenerator;

/// In-memory graph of workspace records with one mutation path per
/// relationship.
///
/// Records are arena-addressed: association fields store typed ids, and
/// the arenas here resolve them. Records enter the graph through the
/// `create_*` factories, which also assign their snowflake ids, so a
/// record built by hand can never show up in linked state.
///
/// Operations are synchronous in-memory mutations with no internal
/// locking; callers serialize access per graph instance.
pub struct AssociationGraph {
    workspaces: HashMap<WorkspaceId, Workspace>,
    entries: HashMap<EntryId, Entry>,
    memberships: HashMap<MembershipId, MemberWorkspace>,
    chat_rooms: HashMap<ChatRoomId, ChatRoom>,
    ids: SnowflakeGenerator,
}

impl AssociationGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::with_generator(SnowflakeGenerator::default())
    }

    /// Create an empty graph with a specific id generator.
    pub fn with_generator(ids: SnowflakeGenerator) -> Self {
        Self {
            workspaces: HashMap::new(),
            entries: HashMap::new(),
            memberships: HashMap::new(),
            chat_rooms: HashMap::new(),
            ids,
        }
    }

    // ==========================================================================
    // Factories
    // ==========================================================================

    /// Create a workspace and insert it into the graph.
    pub fn create_workspace(&mut self, params: CreateWorkspace) -> WorkspaceId {
        let id = WorkspaceId::new(self.ids.generate());
        self.workspaces.insert(id, Workspace::new(id, params));
        tracing::debug!(workspace_id = %id, "workspace created");
        id
    }

    /// Create a detached entry. Link it with [`add_entry`](Self::add_entry)
    /// or [`attach_child`](Self::attach_child).
    pub fn create_entry(&mut self, params: CreateEntry) -> EntryId {
        let id = EntryId::new(self.ids.generate());
        self.entries.insert(id, Entry::new(id, params));
        id
    }

    /// Create an unattached membership for an external user identity.
    pub fn create_membership(&mut self, user_id: i64, role: MembershipRole) -> MembershipId {
        let id = MembershipId::new(self.ids.generate());
        self.memberships
            .insert(id, MemberWorkspace::new(id, user_id, role));
        id
    }

    /// Create a detached chat room.
    pub fn create_chat_room(&mut self, name: impl Into<String>) -> ChatRoomId {
        let id = ChatRoomId::new(self.ids.generate());
        self.chat_rooms.insert(id, ChatRoom::new(id, name));
        id
    }

    // ==========================================================================
    // Read access
    // ==========================================================================

    /// Look up a workspace.
    pub fn workspace(&self, id: WorkspaceId) -> Option<&Workspace> {
        self.workspaces.get(&id)
    }

    /// Look up an entry.
    pub fn entry(&self, id: EntryId) -> Option<&Entry> {
        self.entries.get(&id)
    }

    /// Look up a membership.
    pub fn membership(&self, id: MembershipId) -> Option<&MemberWorkspace> {
        self.memberships.get(&id)
    }

    /// Look up a chat room.
    pub fn chat_room(&self, id: ChatRoomId) -> Option<&ChatRoom> {
        self.chat_rooms.get(&id)
    }

    /// Number of workspaces in the graph.
    pub fn workspace_count(&self) -> usize {
        self.workspaces.len()
    }

    /// Number of entries in the graph.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Number of memberships in the graph.
    pub fn membership_count(&self) -> usize {
        self.memberships.len()
    }

    /// Number of chat rooms in the graph.
    pub fn chat_room_count(&self) -> usize {
        self.chat_rooms.len()
    }

    // ==========================================================================
    // Workspace <-> Entry
    // ==========================================================================

    /// Move an entry, and with it its whole subtree, into `target`, or
    /// detach it from its workspace entirely when `target` is `None`.
    ///
    /// The subtree is removed from the previous workspace's entry list
    /// before the new list is touched, so no stale reference survives the
    /// move. An entry moved to a different workspace leaves its parent
    /// directory behind and becomes a root of the target workspace.
    /// Calling this twice with the same arguments leaves the same state.
    pub fn assign_workspace(
        &mut self,
        entry_id: EntryId,
        target: Option<WorkspaceId>,
    ) -> Result<(), DomainError> {
        let previous = match self.entries.get(&entry_id) {
            Some(entry) => entry.workspace_id,
            None => return Err(DomainError::EntryNotFound(entry_id)),
        };
        if let Some(workspace_id) = target {
            if !self.workspaces.contains_key(&workspace_id) {
                return Err(DomainError::WorkspaceNotFound(workspace_id));
            }
        }

        let subtree = self.collect_subtree(entry_id);

        if previous != target {
            self.sever_parent_edge(entry_id);

            if let Some(previous_id) = previous {
                if let Some(previous_ws) = self.workspaces.get_mut(&previous_id) {
                    previous_ws.entries.retain(|id| !subtree.contains(id));
                }
            }
            for id in &subtree {
                if let Some(entry) = self.entries.get_mut(id) {
                    entry.workspace_id = target;
                }
            }
            tracing::debug!(
                entry_id = %entry_id,
                from = ?previous,
                to = ?target,
                moved = subtree.len(),
                "entry subtree moved"
            );
        }

        if let Some(workspace_id) = target {
            let workspace = self.workspace_mut(workspace_id)?;
            for id in &subtree {
                if !workspace.entries.contains(id) {
                    workspace.entries.push(*id);
                }
            }
        }

        Ok(())
    }

    /// Add an entry to a workspace. Symmetric entry point to
    /// [`assign_workspace`](Self::assign_workspace): either side of the
    /// link may initiate it, with the same guarantees.
    pub fn add_entry(
        &mut self,
        workspace_id: WorkspaceId,
        entry_id: EntryId,
    ) -> Result<(), DomainError> {
        if !self.entries.contains_key(&entry_id) {
            return Err(DomainError::EntryNotFound(entry_id));
        }
        {
            let workspace = self.workspace_mut(workspace_id)?;
            if !workspace.entries.contains(&entry_id) {
                workspace.entries.push(entry_id);
            }
        }
        let current = self.entries.get(&entry_id).and_then(|e| e.workspace_id);
        if current != Some(workspace_id) {
            self.assign_workspace(entry_id, Some(workspace_id))?;
        }
        Ok(())
    }

    // ==========================================================================
    // Entry <-> Entry (file tree)
    // ==========================================================================

    /// Attach `child_id` as the last child of the directory `parent_id`.
    ///
    /// The child is moved out of any previous parent, and its subtree
    /// follows the parent's workspace. Attaching an entry under itself or
    /// one of its own descendants is refused.
    pub fn attach_child(
        &mut self,
        parent_id: EntryId,
        child_id: EntryId,
    ) -> Result<(), DomainError> {
        let parent_workspace = match self.entries.get(&parent_id) {
            Some(parent) if parent.is_directory => parent.workspace_id,
            Some(_) => return Err(DomainError::NotADirectory(parent_id)),
            None => return Err(DomainError::EntryNotFound(parent_id)),
        };
        if !self.entries.contains_key(&child_id) {
            return Err(DomainError::EntryNotFound(child_id));
        }
        if self.collect_subtree(child_id).contains(&parent_id) {
            return Err(DomainError::HierarchyCycle {
                parent: parent_id,
                child: child_id,
            });
        }

        self.sever_parent_edge(child_id);

        // Workspace agreement first: assign_workspace severs parent edges
        // on cross-workspace moves, so the new edge is linked afterwards.
        let child_workspace = self.entries.get(&child_id).and_then(|e| e.workspace_id);
        if child_workspace != parent_workspace {
            self.assign_workspace(child_id, parent_workspace)?;
        }

        if let Some(parent) = self.entries.get_mut(&parent_id) {
            if !parent.children.contains(&child_id) {
                parent.children.push(child_id);
            }
        }
        if let Some(child) = self.entries.get_mut(&child_id) {
            child.parent_id = Some(parent_id);
        }

        Ok(())
    }

    /// Sever the parent edge of an entry, turning it into a root of its
    /// workspace. Workspace membership is unchanged.
    pub fn detach_from_parent(&mut self, child_id: EntryId) -> Result<(), DomainError> {
        if !self.entries.contains_key(&child_id) {
            return Err(DomainError::EntryNotFound(child_id));
        }
        self.sever_parent_edge(child_id);
        Ok(())
    }

    // ==========================================================================
    // Workspace <-> Membership
    // ==========================================================================

    /// Add a membership to a workspace's member list and point the
    /// membership at the workspace.
    ///
    /// A membership belongs to one workspace for its lifetime, so there is
    /// no detach-on-reassign here: leaving a workspace goes through
    /// [`remove_membership`](Self::remove_membership) instead.
    pub fn add_member(
        &mut self,
        workspace_id: WorkspaceId,
        membership_id: MembershipId,
    ) -> Result<(), DomainError> {
        if !self.memberships.contains_key(&membership_id) {
            return Err(DomainError::MembershipNotFound(membership_id));
        }
        let workspace = self.workspace_mut(workspace_id)?;
        if !workspace.members.contains(&membership_id) {
            workspace.members.push(membership_id);
        }
        let membership = self.membership_mut(membership_id)?;
        if membership.workspace_id != Some(workspace_id) {
            membership.workspace_id = Some(workspace_id);
        }
        Ok(())
    }

    // ==========================================================================
    // Workspace <-> ChatRoom
    // ==========================================================================

    /// Attach a chat room to a workspace, or detach the current one when
    /// `target` is `None`.
    ///
    /// The link is strict 1:1 on both sides: the workspace's previous room
    /// is released first, and a room currently attached to another
    /// workspace is released from that workspace before it is re-attached.
    pub fn assign_chat_room(
        &mut self,
        workspace_id: WorkspaceId,
        target: Option<ChatRoomId>,
    ) -> Result<(), DomainError> {
        let current = match self.workspaces.get(&workspace_id) {
            Some(workspace) => workspace.chat_room,
            None => return Err(DomainError::WorkspaceNotFound(workspace_id)),
        };
        if let Some(room_id) = target {
            if !self.chat_rooms.contains_key(&room_id) {
                return Err(DomainError::ChatRoomNotFound(room_id));
            }
        }

        if current != target {
            if let Some(old_room_id) = current {
                if let Some(old_room) = self.chat_rooms.get_mut(&old_room_id) {
                    old_room.workspace_id = None;
                }
            }
        }

        if let Some(room_id) = target {
            let owner = self.chat_rooms.get(&room_id).and_then(|r| r.workspace_id);
            if let Some(owner_id) = owner {
                if owner_id != workspace_id {
                    if let Some(owner_ws) = self.workspaces.get_mut(&owner_id) {
                        owner_ws.chat_room = None;
                    }
                    tracing::debug!(
                        chat_room_id = %room_id,
                        from = %owner_id,
                        to = %workspace_id,
                        "chat room re-attached"
                    );
                }
            }
            if let Some(room) = self.chat_rooms.get_mut(&room_id) {
                room.workspace_id = Some(workspace_id);
            }
        }

        self.workspace_mut(workspace_id)?.chat_room = target;
        Ok(())
    }

    // ==========================================================================
    // Field mutators
    // ==========================================================================

    /// Replace a workspace's title.
    pub fn update_title(
        &mut self,
        workspace_id: WorkspaceId,
        title: impl Into<String>,
    ) -> Result<(), DomainError> {
        self.workspace_mut(workspace_id)?.update_title(title);
        Ok(())
    }

    /// Replace a workspace's description.
    pub fn update_description(
        &mut self,
        workspace_id: WorkspaceId,
        description: Option<String>,
    ) -> Result<(), DomainError> {
        self.workspace_mut(workspace_id)?.update_description(description);
        Ok(())
    }

    /// Switch a workspace between public and private listings.
    pub fn update_visibility(
        &mut self,
        workspace_id: WorkspaceId,
        is_public: bool,
    ) -> Result<(), DomainError> {
        self.workspace_mut(workspace_id)?.update_visibility(is_public);
        Ok(())
    }

    /// Add a category tag to a workspace.
    pub fn add_category(
        &mut self,
        workspace_id: WorkspaceId,
        category: Category,
    ) -> Result<(), DomainError> {
        self.workspace_mut(workspace_id)?.add_category(category);
        Ok(())
    }

    /// Remove a category tag from a workspace.
    pub fn remove_category(
        &mut self,
        workspace_id: WorkspaceId,
        category: Category,
    ) -> Result<(), DomainError> {
        self.workspace_mut(workspace_id)?.remove_category(category);
        Ok(())
    }

    /// Replace a workspace's whole category set.
    pub fn replace_categories(
        &mut self,
        workspace_id: WorkspaceId,
        categories: HashSet<Category>,
    ) -> Result<(), DomainError> {
        self.workspace_mut(workspace_id)?.replace_categories(categories);
        Ok(())
    }

    /// Rename an entry.
    pub fn rename_entry(
        &mut self,
        entry_id: EntryId,
        name: impl Into<String>,
    ) -> Result<(), DomainError> {
        self.entry_mut(entry_id)?.rename(name);
        Ok(())
    }

    /// Replace a file entry's contents.
    pub fn update_content(
        &mut self,
        entry_id: EntryId,
        content: Option<String>,
    ) -> Result<(), DomainError> {
        self.entry_mut(entry_id)?.update_content(content);
        Ok(())
    }

    // ==========================================================================
    // Removal (cascading)
    // ==========================================================================

    /// Remove a workspace together with everything it owns: its entries,
    /// its memberships and its chat room.
    pub fn remove_workspace(&mut self, workspace_id: WorkspaceId) -> Result<(), DomainError> {
        let workspace = self
            .workspaces
            .remove(&workspace_id)
            .ok_or(DomainError::WorkspaceNotFound(workspace_id))?;

        for entry_id in &workspace.entries {
            self.entries.remove(entry_id);
        }
        for membership_id in &workspace.members {
            self.memberships.remove(membership_id);
        }
        if let Some(room_id) = workspace.chat_room {
            self.chat_rooms.remove(&room_id);
        }
        tracing::debug!(
            workspace_id = %workspace_id,
            entries = workspace.entries.len(),
            members = workspace.members.len(),
            "workspace removed with owned records"
        );
        Ok(())
    }

    /// Remove an entry and all of its descendants, unlinking them from the
    /// owning workspace and the parent directory.
    pub fn remove_entry(&mut self, entry_id: EntryId) -> Result<(), DomainError> {
        if !self.entries.contains_key(&entry_id) {
            return Err(DomainError::EntryNotFound(entry_id));
        }
        self.sever_parent_edge(entry_id);

        let subtree = self.collect_subtree(entry_id);
        let workspace_id = self.entries.get(&entry_id).and_then(|e| e.workspace_id);
        if let Some(workspace_id) = workspace_id {
            if let Some(workspace) = self.workspaces.get_mut(&workspace_id) {
                workspace.entries.retain(|id| !subtree.contains(id));
            }
        }
        for id in subtree {
            self.entries.remove(&id);
        }
        Ok(())
    }

    /// Remove a membership, unlinking it from its workspace.
    pub fn remove_membership(&mut self, membership_id: MembershipId) -> Result<(), DomainError> {
        let membership = self
            .memberships
            .remove(&membership_id)
            .ok_or(DomainError::MembershipNotFound(membership_id))?;
        if let Some(workspace_id) = membership.workspace_id {
            if let Some(workspace) = self.workspaces.get_mut(&workspace_id) {
                workspace.members.retain(|id| *id != membership_id);
            }
        }
        Ok(())
    }

    /// Remove a chat room, clearing the owning workspace's reference.
    pub fn remove_chat_room(&mut self, room_id: ChatRoomId) -> Result<(), DomainError> {
        let room = self
            .chat_rooms
            .remove(&room_id)
            .ok_or(DomainError::ChatRoomNotFound(room_id))?;
        if let Some(workspace_id) = room.workspace_id {
            if let Some(workspace) = self.workspaces.get_mut(&workspace_id) {
                if workspace.chat_room == Some(room_id) {
                    workspace.chat_room = None;
                }
            }
        }
        Ok(())
    }

    // ==========================================================================
    // Internal helpers
    // ==========================================================================

    fn workspace_mut(&mut self, id: WorkspaceId) -> Result<&mut Workspace, DomainError> {
        self.workspaces
            .get_mut(&id)
            .ok_or(DomainError::WorkspaceNotFound(id))
    }

    fn entry_mut(&mut self, id: EntryId) -> Result<&mut Entry, DomainError> {
        self.entries.get_mut(&id).ok_or(DomainError::EntryNotFound(id))
    }

    fn membership_mut(&mut self, id: MembershipId) -> Result<&mut MemberWorkspace, DomainError> {
        self.memberships
            .get_mut(&id)
            .ok_or(DomainError::MembershipNotFound(id))
    }

    /// Collect an entry and all of its descendants. Work is bounded by the
    /// subtree, not the whole graph.
    fn collect_subtree(&self, root: EntryId) -> Vec<EntryId> {
        let mut collected = Vec::new();
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            if let Some(entry) = self.entries.get(&id) {
                collected.push(id);
                stack.extend(entry.children.iter().copied());
            }
        }
        collected
    }

    /// Remove the parent/child edge above `child_id`, if any.
    fn sever_parent_edge(&mut self, child_id: EntryId) {
        let parent_id = match self.entries.get(&child_id).and_then(|e| e.parent_id) {
            Some(id) => id,
            None => return,
        };
        if let Some(parent) = self.entries.get_mut(&parent_id) {
            parent.children.retain(|id| *id != child_id);
        }
        if let Some(child) = self.entries.get_mut(&child_id) {
            child.parent_id = None;
        }
    }
}

impl Default for AssociationGraph {
    fn default() -> Self {
        Self::new()
    }
}

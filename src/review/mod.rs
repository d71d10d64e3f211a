//! Provisional permission decisions of a review flow.
//!
//! The store keeps the switch position the user picked for every permission under review,
//! independently of the grant state persisted by the system, so that the decisions can be explored
//! and changed before they are committed. A store lives for one review flow: it is reset with
//! [`ReviewStore::initialize`] when the flow starts and dropped when it ends.

use std::collections::{btree_map, BTreeMap, BTreeSet};

use crate::{model::PermissionGroup, ReviewState};


/// Review decision for one permission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionEntry {
    permission: String,
    group: String,
    state: ReviewState,
}

impl PermissionEntry {
    fn new<P: Into<String>, G: Into<String>>(permission: P, group: G) -> Self {
        Self {
            permission: permission.into(),
            group: group.into(),
            state: ReviewState::default(),
        }
    }

    /// Gets the name of the permission.
    pub fn permission(&self) -> &str {
        &self.permission
    }

    /// Gets the name of the foreground group the permission was reviewed with.
    pub fn group(&self) -> &str {
        &self.group
    }

    /// Gets the current decision.
    pub fn state(&self) -> ReviewState {
        self.state
    }
}

/// Permission review state store.
#[derive(Debug, Default)]
pub struct ReviewStore {
    entries: BTreeMap<String, PermissionEntry>,
}

impl ReviewStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets the store with the permissions of the given groups.
    ///
    /// Every permission of every group, and of its background group, starts `Denied` if it is in
    /// the `revoked` list and `Allowed` otherwise. Previous entries are dropped.
    pub fn initialize<'g, I, S>(&mut self, groups: I, revoked: Option<&[S]>)
    where
        I: IntoIterator<Item = &'g PermissionGroup>,
        S: AsRef<str>,
    {
        self.entries.clear();
        let revoked: BTreeSet<&str> = revoked
            .map(|names| names.iter().map(|n| n.as_ref()).collect())
            .unwrap_or_default();

        for group in groups {
            for permission in group.all_permissions() {
                let mut entry = PermissionEntry::new(permission.name(), group.name());
                entry.state = if revoked.contains(permission.name()) {
                    ReviewState::Denied
                } else {
                    ReviewState::Allowed
                };
                let _ = self.entries.insert(permission.name().to_owned(), entry);
            }
        }

        debug!(
            "review initialized with {} permissions, {} revoked",
            self.entries.len(),
            self.entries
                .values()
                .filter(|e| e.state == ReviewState::Denied)
                .count()
        );
    }

    /// Gets the decision for a permission.
    ///
    /// Permissions outside of the review read as `Denied`.
    pub fn state(&self, permission: &str) -> ReviewState {
        match self.entries.get(permission) {
            Some(entry) => entry.state,
            None => {
                warn!("can not find permission: {}", permission);
                ReviewState::Denied
            }
        }
    }

    /// Checks if the switch of the permission is on.
    pub fn is_granted(&self, permission: &str) -> bool {
        self.state(permission) == ReviewState::Allowed
    }

    /// Changes the decision for a permission.
    ///
    /// Permissions outside of the review are ignored: a switch callback may arrive after the store
    /// has been reset.
    pub fn set_state(&mut self, permission: &str, state: ReviewState) {
        if let Some(entry) = self.entries.get_mut(permission) {
            trace!("{}: {} -> {}", permission, entry.state, state);
            entry.state = state;
        }
    }

    /// Checks if at least one permission of the group, or of its background group, is allowed.
    pub fn is_group_granted(&self, group: &PermissionGroup) -> bool {
        group
            .all_permissions()
            .fold(false, |granted, p| self.is_granted(p.name()) || granted)
    }

    /// Allows or denies every permission of the group and of its background group.
    pub fn set_group_state(&mut self, group: &PermissionGroup, grant: bool) {
        let state = ReviewState::from_grant(grant);
        for permission in group.all_permissions() {
            self.set_state(permission.name(), state);
        }
    }

    /// Gets the review entry of a permission.
    pub fn entry(&self, permission: &str) -> Option<&PermissionEntry> {
        self.entries.get(permission)
    }

    /// Iterates the entries, ordered by permission name.
    pub fn iter(&self) -> btree_map::Values<'_, String, PermissionEntry> {
        self.entries.values()
    }

    /// Number of permissions under review.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks if no permission is under review.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Gets the permissions that will be revoked, in name order.
    pub fn revoked_permissions(&self) -> Vec<&str> {
        self.names_in(ReviewState::Denied)
    }

    /// Gets the permissions that will be kept, in name order.
    pub fn granted_permissions(&self) -> Vec<&str> {
        self.names_in(ReviewState::Allowed)
    }

    fn names_in(&self, state: ReviewState) -> Vec<&str> {
        self.entries
            .values()
            .filter(|e| e.state == state)
            .map(PermissionEntry::permission)
            .collect()
    }
}

impl<'s> IntoIterator for &'s ReviewStore {
    type Item = &'s PermissionEntry;
    type IntoIter = btree_map::Values<'s, String, PermissionEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

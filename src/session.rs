//! Review session: one app, one store, the switches the user flips.

use crate::{
    config::Toggle,
    model::{AppPermissions, PermissionGroup},
    policy,
    report::{revoked_summary, ReviewReport},
    Config, Result, ReviewState, ReviewStore,
};

/// Review flow of one app.
#[derive(Debug)]
pub struct ReviewSession {
    app: AppPermissions,
    store: ReviewStore,
}

impl ReviewSession {
    /// Starts the review of the app, with the given permissions already revoked.
    ///
    /// Revoked names may be short, as for the switches; names the app does not request are
    /// skipped with a warning.
    pub fn start<S: AsRef<str>>(app: AppPermissions, revoked: &[S]) -> Self {
        let mut store = ReviewStore::new();
        store.initialize(app.groups(), None::<&[S]>);

        let mut session = Self { app, store };
        for permission in revoked {
            let permission = session.resolve_permission(permission.as_ref());
            if session.store.entry(&permission).is_some() {
                session.store.set_state(&permission, ReviewState::Denied);
            } else {
                warn!(
                    "{} is not requested by {}, cannot revoke it",
                    permission,
                    session.app.package()
                );
            }
        }
        session
    }

    /// Gets the permission model under review.
    pub fn app(&self) -> &AppPermissions {
        &self.app
    }

    /// Gets the review state store.
    pub fn store(&self) -> &ReviewStore {
        &self.store
    }

    /// Flips a switch. Returns `false` if the review screen would not offer that switch.
    pub fn apply(&mut self, toggle: &Toggle) -> bool {
        match *toggle {
            Toggle::Allow(ref permission) => self.set_permission(permission, ReviewState::Allowed),
            Toggle::Deny(ref permission) => self.set_permission(permission, ReviewState::Denied),
            Toggle::GrantGroup(ref group) => self.set_group(group, true),
            Toggle::RevokeGroup(ref group) => self.set_group(group, false),
        }
    }

    /// Takes a snapshot of the review.
    pub fn report(&self) -> ReviewReport {
        ReviewReport::new(&self.app, &self.store)
    }

    /// Builds the text listing the permissions that will be revoked.
    pub fn revoked_summary(&self, header: &str) -> String {
        revoked_summary(header, &self.store.revoked_permissions(), &self.app)
    }

    fn set_permission(&mut self, permission: &str, state: ReviewState) -> bool {
        let permission = self.resolve_permission(permission);
        if !policy::is_individually_controlled(&permission) {
            warn!("{} has no switch of its own, skipping", permission);
            return false;
        }

        if self.store.entry(&permission).is_none() {
            warn!(
                "{} is not requested by {}, skipping",
                permission,
                self.app.package()
            );
            return false;
        }

        match self.app.foreground_group(&permission) {
            Some(group) => info!("{} ({}): {}", permission, group.label(), state),
            None => info!("{}: {}", permission, state),
        }
        self.store.set_state(&permission, state);
        true
    }

    fn set_group(&mut self, group: &str, grant: bool) -> bool {
        let group = match resolve_group(&self.app, group) {
            Some(group) => group,
            None => {
                warn!(
                    "{} does not request the {} group, skipping",
                    self.app.package(),
                    group
                );
                return false;
            }
        };

        info!(
            "{}: {}",
            group.label(),
            if grant { "allow all" } else { "deny all" }
        );
        self.store.set_group_state(group, grant);
        true
    }

    /// Short names resolve to the platform permission if the app does not use them verbatim.
    fn resolve_permission(&self, permission: &str) -> String {
        if self.store.entry(permission).is_some() {
            permission.to_owned()
        } else {
            policy::full_permission_name(permission)
        }
    }
}

fn resolve_group<'a>(app: &'a AppPermissions, group: &str) -> Option<&'a PermissionGroup> {
    app.group(group)
        .or_else(|| app.group(&policy::full_group_name(group)))
}

/// Runs the review described by the configuration.
pub fn run_review(config: &Config) -> Result<ReviewSession> {
    let app = AppPermissions::from_file(config.app_file())?;
    if config.is_verbose() {
        info!(
            "Reviewing {} permission groups of {}.",
            app.groups().len(),
            app.package()
        );
    }

    let mut session = ReviewSession::start(app, config.revoked());
    let applied = config
        .toggles()
        .iter()
        .filter(|toggle| session.apply(toggle))
        .count();
    debug!(
        "{} of {} switches applied",
        applied,
        config.toggles().len()
    );

    Ok(session)
}

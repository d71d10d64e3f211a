//! Review report.

use colored::Colorize;

use crate::{
    model::{AppPermissions, PermissionGroup, PermissionRegistry},
    policy, Result, ReviewState, ReviewStore,
};

/// Snapshot of a review flow.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewReport {
    package: String,
    groups: Vec<GroupReport>,
    revoked: Vec<String>,
}

/// Review state of one permission group.
#[derive(Debug, Clone, Serialize)]
pub struct GroupReport {
    name: String,
    label: String,
    granted: bool,
    regulated: bool,
    permissions: Vec<PermissionReport>,
}

/// Review state of one permission.
#[derive(Debug, Clone, Serialize)]
pub struct PermissionReport {
    name: String,
    state: ReviewState,
    individually_controlled: bool,
    background: bool,
}

impl ReviewReport {
    /// Takes a snapshot of the store for the groups of the app.
    pub fn new(app: &AppPermissions, store: &ReviewStore) -> Self {
        Self {
            package: app.package().to_owned(),
            groups: app
                .groups()
                .iter()
                .map(|group| GroupReport::new(group, store))
                .collect(),
            revoked: store
                .revoked_permissions()
                .into_iter()
                .map(str::to_owned)
                .collect(),
        }
    }

    /// Gets the package name of the reviewed app.
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Gets the group reports, in the order the app declares them.
    pub fn groups(&self) -> &[GroupReport] {
        &self.groups
    }

    /// Gets the permissions that will be revoked.
    pub fn revoked(&self) -> &[String] {
        &self.revoked
    }

    /// Serializes the report as pretty printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Prints the report to the console.
    pub fn print(&self) {
        println!("Permission review for {}", self.package.italic());
        for group in &self.groups {
            let switch = if group.granted {
                "on".green()
            } else {
                "off".red()
            };
            let regulated = if group.regulated {
                " (CTA)".yellow().to_string()
            } else {
                String::new()
            };
            println!("  {} [{}]{}", group.label.bold(), switch, regulated);

            for permission in &group.permissions {
                let state = match permission.state {
                    ReviewState::Allowed => permission.state.to_string().green(),
                    ReviewState::Denied => permission.state.to_string().red(),
                    ReviewState::Unknown => permission.state.to_string().normal(),
                };
                let mut flags = Vec::new();
                if permission.background {
                    flags.push("background");
                }
                if permission.individually_controlled {
                    flags.push("switch");
                }
                if flags.is_empty() {
                    println!("    {} {}", permission.name, state);
                } else {
                    println!("    {} {} ({})", permission.name, state, flags.join(", "));
                }
            }
        }
    }
}

impl GroupReport {
    fn new(group: &PermissionGroup, store: &ReviewStore) -> Self {
        let foreground = group
            .permissions()
            .iter()
            .map(|p| PermissionReport::new(p.name(), store, false));
        let background = group
            .background()
            .into_iter()
            .flat_map(|bg| bg.permissions())
            .map(|p| PermissionReport::new(p.name(), store, true));

        Self {
            name: group.name().to_owned(),
            label: group.label().to_owned(),
            granted: store.is_group_granted(group),
            regulated: policy::is_regulated_group(group.name()),
            permissions: foreground.chain(background).collect(),
        }
    }

    /// Gets the name of the group.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Checks if the group switch reads as on.
    pub fn is_granted(&self) -> bool {
        self.granted
    }

    /// Checks if the group takes part in the CTA compliance override.
    pub fn is_regulated(&self) -> bool {
        self.regulated
    }

    /// Gets the permission reports, foreground permissions first.
    pub fn permissions(&self) -> &[PermissionReport] {
        &self.permissions
    }
}

impl PermissionReport {
    fn new(name: &str, store: &ReviewStore, background: bool) -> Self {
        Self {
            name: name.to_owned(),
            state: store.state(name),
            individually_controlled: policy::is_individually_controlled(name),
            background,
        }
    }

    /// Gets the name of the permission.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gets the review decision.
    pub fn state(&self) -> ReviewState {
        self.state
    }

    /// Checks if the permission has its own switch.
    pub fn is_individually_controlled(&self) -> bool {
        self.individually_controlled
    }

    /// Checks if the permission comes from the background group.
    pub fn is_background(&self) -> bool {
        self.background
    }
}

/// Builds the text telling the user which permissions will be revoked.
///
/// Permissions the registry has no label for are left out.
pub fn revoked_summary<R, S>(header: &str, permissions: &[S], registry: &R) -> String
where
    R: PermissionRegistry + ?Sized,
    S: AsRef<str>,
{
    let mut summary = String::from(header);
    for permission in permissions {
        let permission = permission.as_ref();
        match registry.label(permission) {
            Some(label) => {
                summary.push('\n');
                summary.push_str(label);
            }
            None => error!("can't get permission info for {}", permission),
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::{revoked_summary, ReviewReport};
    use crate::{
        model::{AppPermissions, PermissionGroup},
        ReviewState, ReviewStore,
    };
    use std::collections::BTreeMap;

    fn app() -> AppPermissions {
        let groups = vec![
            PermissionGroup::new(
                "android.permission-group.CONTACTS",
                vec![
                    "android.permission.READ_CONTACTS",
                    "android.permission.WRITE_CONTACTS",
                ],
            )
            .with_label("Contacts"),
            PermissionGroup::new(
                "android.permission-group.LOCATION",
                vec!["android.permission.ACCESS_FINE_LOCATION"],
            )
            .with_background(PermissionGroup::new(
                "android.permission-group.LOCATION_BACKGROUND",
                vec!["android.permission.ACCESS_BACKGROUND_LOCATION"],
            )),
        ];
        AppPermissions::new("com.example", groups).unwrap()
    }

    #[test]
    fn it_report() {
        let app = app();
        let mut store = ReviewStore::new();
        store.initialize(
            app.groups(),
            Some(&["android.permission.WRITE_CONTACTS"][..]),
        );
        store.set_group_state(&app.groups()[1], false);

        let report = ReviewReport::new(&app, &store);
        assert_eq!(report.package(), "com.example");
        assert_eq!(report.groups().len(), 2);

        let contacts = &report.groups()[0];
        assert!(contacts.is_granted());
        assert!(!contacts.is_regulated());
        assert_eq!(contacts.permissions().len(), 2);
        assert!(contacts.permissions()[0].is_individually_controlled());
        assert_eq!(contacts.permissions()[1].state(), ReviewState::Denied);

        let location = &report.groups()[1];
        assert!(!location.is_granted());
        assert!(location.is_regulated());
        assert_eq!(location.permissions().len(), 2);
        assert!(!location.permissions()[0].is_background());
        assert!(location.permissions()[1].is_background());
        assert!(!location.permissions()[1].is_individually_controlled());

        assert_eq!(
            report.revoked(),
            &[
                "android.permission.ACCESS_BACKGROUND_LOCATION".to_owned(),
                "android.permission.ACCESS_FINE_LOCATION".to_owned(),
                "android.permission.WRITE_CONTACTS".to_owned(),
            ]
        );
    }

    #[test]
    fn it_report_json() {
        let app = app();
        let mut store = ReviewStore::new();
        store.initialize(app.groups(), None::<&[&str]>);

        let json: serde_json::Value =
            serde_json::from_str(&ReviewReport::new(&app, &store).to_json().unwrap()).unwrap();
        assert_eq!(json["package"], "com.example");
        assert_eq!(json["groups"][0]["label"], "Contacts");
        assert_eq!(json["groups"][0]["granted"], true);
        assert_eq!(json["groups"][1]["regulated"], true);
        assert_eq!(json["groups"][1]["permissions"][1]["state"], "allowed");
        assert_eq!(json["groups"][1]["permissions"][1]["background"], true);
        assert_eq!(json["revoked"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn it_revoked_summary() {
        let mut labels = BTreeMap::new();
        let _ = labels.insert(
            String::from("android.permission.READ_SMS"),
            String::from("read your text messages"),
        );
        let _ = labels.insert(
            String::from("android.permission.CAMERA"),
            String::from("take pictures and videos"),
        );

        let summary = revoked_summary(
            "These permissions will be revoked:",
            &[
                "android.permission.CAMERA",
                "android.permission.UNKNOWN",
                "android.permission.READ_SMS",
            ],
            &labels,
        );
        assert_eq!(
            summary,
            "These permissions will be revoked:\ntake pictures and videos\nread your text messages"
        );

        assert_eq!(revoked_summary("Nothing", &Vec::<String>::new(), &labels), "Nothing");
    }
}

//! Permission model of an app.
//!
//! The groups and permissions here are owned by the permission registry of the system; the review
//! only reads them.

use std::{
    collections::{BTreeMap, BTreeSet},
    fs,
    path::Path,
    result,
    str::FromStr,
};

use failure::{Error, ResultExt};

use crate::{error::Kind, policy, Result};

#[cfg(test)]
mod tests;

/// Looks up display information about permissions.
pub trait PermissionRegistry {
    /// Gets the user visible label of the permission, if it is known.
    fn label(&self, permission: &str) -> Option<&str>;
}

impl PermissionRegistry for BTreeMap<String, String> {
    fn label(&self, permission: &str) -> Option<&str> {
        self.get(permission).map(String::as_str)
    }
}

/// A single permission, identified by its name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(from = "String")]
pub struct Permission {
    name: String,
}

impl Permission {
    /// Creates a new permission with the given name.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self { name: name.into() }
    }

    /// Gets the name of the permission.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl From<String> for Permission {
    fn from(name: String) -> Self {
        Self { name }
    }
}

/// Named set of related permissions, with an optional background sibling.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PermissionGroup {
    name: String,
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    permissions: Vec<Permission>,
    #[serde(default)]
    background: Option<Box<PermissionGroup>>,
}

impl PermissionGroup {
    /// Creates a new group with the given permissions and no background group.
    pub fn new<N, I, P>(name: N, permissions: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        Self {
            name: name.into(),
            label: None,
            permissions: permissions.into_iter().map(Permission::new).collect(),
            background: None,
        }
    }

    /// Sets the display label of the group.
    pub fn with_label<S: Into<String>>(mut self, label: S) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the background sibling of the group.
    pub fn with_background(mut self, background: PermissionGroup) -> Self {
        self.background = Some(Box::new(background));
        self
    }

    /// Gets the name of the group.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gets the display label of the group, falling back to its name.
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }

    /// Gets the (foreground) permissions of the group.
    pub fn permissions(&self) -> &[Permission] {
        &self.permissions
    }

    /// Gets the background sibling of the group, if any.
    pub fn background(&self) -> Option<&PermissionGroup> {
        self.background.as_deref()
    }

    /// Iterates the foreground permissions and then the background ones.
    pub fn all_permissions(&self) -> impl Iterator<Item = &Permission> {
        self.permissions.iter().chain(
            self.background()
                .into_iter()
                .flat_map(|bg| bg.permissions.iter()),
        )
    }

    /// Gets one of the foreground permissions of the group.
    pub fn permission(&self, name: &str) -> Option<&Permission> {
        self.permissions.iter().find(|p| p.name() == name)
    }

    /// Checks if the permission is one of the foreground permissions of the group.
    pub fn has_permission(&self, name: &str) -> bool {
        self.permission(name).is_some()
    }
}

/// Permission groups requested by one app.
#[derive(Debug, Clone, Deserialize)]
pub struct AppPermissions {
    package: String,
    #[serde(default)]
    groups: Vec<PermissionGroup>,
    #[serde(default)]
    labels: BTreeMap<String, String>,
}

impl AppPermissions {
    /// Creates the permission model of a package.
    pub fn new<S: Into<String>>(package: S, groups: Vec<PermissionGroup>) -> Result<Self> {
        let app = Self {
            package: package.into(),
            groups,
            labels: BTreeMap::new(),
        };
        app.validate()?;
        Ok(app)
    }

    /// Loads the permission model from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let toml = fs::read_to_string(path)
            .context(format!("could not read the app file {}", path.display()))?;
        let app = toml
            .parse::<Self>()
            .context(format!("could not load the app file {}", path.display()))?;
        debug!(
            "loaded {} permission groups for {} from {}",
            app.groups.len(),
            app.package,
            path.display()
        );
        Ok(app)
    }

    /// Adds a display label for a permission.
    pub fn set_label<P: Into<String>, L: Into<String>>(&mut self, permission: P, label: L) {
        let _ = self.labels.insert(permission.into(), label.into());
    }

    /// Gets the package name of the app.
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Gets the permission groups of the app, in declaration order.
    pub fn groups(&self) -> &[PermissionGroup] {
        &self.groups
    }

    /// Gets the group with the given name.
    pub fn group(&self, name: &str) -> Option<&PermissionGroup> {
        self.groups.iter().find(|g| g.name() == name)
    }

    /// Gets the group a permission belongs to.
    ///
    /// Background permissions resolve to the background group that lists them. Permissions the
    /// app model does not list fall back to the CTA grouping, if that group is present.
    pub fn foreground_group(&self, permission: &str) -> Option<&PermissionGroup> {
        for group in &self.groups {
            if group.has_permission(permission) {
                return Some(group);
            }
            if let Some(background) = group.background() {
                if background.has_permission(permission) {
                    return Some(background);
                }
            }
        }

        policy::extra_permission_group(permission).and_then(|name| self.group(name))
    }

    fn validate(&self) -> result::Result<(), Kind> {
        if self.package.is_empty() {
            return Err(Kind::AppModel {
                message: String::from("the package name can't be empty"),
            });
        }

        let mut names = BTreeSet::new();
        for group in &self.groups {
            if group.name().is_empty() {
                return Err(Kind::AppModel {
                    message: format!("{} has a group without name", self.package),
                });
            }
            if !names.insert(group.name()) {
                return Err(Kind::AppModel {
                    message: format!("the group {} is declared twice", group.name()),
                });
            }
        }

        Ok(())
    }
}

impl FromStr for AppPermissions {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let app: Self = toml::from_str(s)?;
        app.validate()?;
        Ok(app)
    }
}

impl PermissionRegistry for AppPermissions {
    fn label(&self, permission: &str) -> Option<&str> {
        self.labels.label(permission)
    }
}

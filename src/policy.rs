//! CTA eligibility policy.
//!
//! Static lists deciding which permissions get their own switch in the review screen and which
//! permission groups take part in the compliance override.

use std::collections::{BTreeMap, BTreeSet};

/// Prefix of the platform permission names.
pub const PERMISSION_PREFIX: &str = "android.permission.";
/// Prefix of the platform permission group names.
pub const PERMISSION_GROUP_PREFIX: &str = "android.permission-group.";

/// MMS sending permission only defined on CTA builds.
pub const CTA_SEND_MMS: &str = "com.android.permission.SEND_MMS";
/// Voicemail permission, outside of the `android.permission` namespace.
pub const ADD_VOICEMAIL: &str = "com.android.voicemail.permission.ADD_VOICEMAIL";

/// CTA permissions the platform does not put in any group, with the group they belong to.
const EXTRA_PERMISSION_GROUPS: &[(&str, &str)] = &[(CTA_SEND_MMS, "android.permission-group.SMS")];

lazy_static! {
    static ref INDIVIDUALLY_CONTROLLED: BTreeSet<&'static str> = [
        "android.permission.READ_CONTACTS",
        "android.permission.WRITE_CONTACTS",
        "android.permission.GET_ACCOUNTS",
        "android.permission.READ_CALENDAR",
        "android.permission.WRITE_CALENDAR",
        "android.permission.SEND_SMS",
        CTA_SEND_MMS,
        "android.permission.RECEIVE_SMS",
        "android.permission.READ_SMS",
        "android.permission.RECEIVE_MMS",
        "android.permission.RECEIVE_WAP_PUSH",
        "android.permission.READ_CELL_BROADCASTS",
        "android.permission.READ_CALL_LOG",
        "android.permission.WRITE_CALL_LOG",
        "android.permission.PROCESS_OUTGOING_CALLS",
        "android.permission.READ_PHONE_STATE",
        "android.permission.READ_PHONE_NUMBERS",
        "android.permission.CALL_PHONE",
        ADD_VOICEMAIL,
        "android.permission.USE_SIP",
        "android.permission.ANSWER_PHONE_CALLS",
        "android.permission.ACCEPT_HANDOVER",
    ]
    .iter()
    .cloned()
    .collect();

    /// Short name (the part after the last dot) of every individually controlled permission.
    static ref SHORT_NAMES: BTreeMap<&'static str, &'static str> = INDIVIDUALLY_CONTROLLED
        .iter()
        .map(|&name| (name.rsplit('.').next().unwrap_or(name), name))
        .collect();

    static ref REGULATED_GROUPS: BTreeSet<&'static str> = [
        "android.permission-group.CAMERA",
        "android.permission-group.LOCATION",
        "android.permission-group.MICROPHONE",
        "android.permission-group.STORAGE",
        "android.permission-group.SENSORS",
        "android.permission-group.ACTIVITY_RECOGNITION",
    ]
    .iter()
    .cloned()
    .collect();
}

/// Checks if the permission gets its own switch in the review screen.
///
/// Both the fully qualified name (`android.permission.READ_CONTACTS`) and the short one
/// (`READ_CONTACTS`) are accepted.
pub fn is_individually_controlled<S: AsRef<str>>(permission: S) -> bool {
    let permission = permission.as_ref();
    INDIVIDUALLY_CONTROLLED.contains(permission)
        || INDIVIDUALLY_CONTROLLED.contains(full_permission_name(permission).as_str())
}

/// Checks if the permission group takes part in the CTA compliance override.
pub fn is_regulated_group<S: AsRef<str>>(group: S) -> bool {
    let group = group.as_ref();
    REGULATED_GROUPS.contains(group)
        || REGULATED_GROUPS.contains(full_group_name(group).as_str())
}

/// Gets the group of a CTA permission the platform leaves ungrouped.
pub fn extra_permission_group<S: AsRef<str>>(permission: S) -> Option<&'static str> {
    let permission = permission.as_ref();
    EXTRA_PERMISSION_GROUPS
        .iter()
        .find(|(name, _)| *name == permission)
        .map(|(_, group)| *group)
}

/// Expands a short permission name (`CAMERA`) to the platform one.
///
/// Short names of individually controlled permissions expand to their own namespace, so
/// `ADD_VOICEMAIL` becomes `com.android.voicemail.permission.ADD_VOICEMAIL`.
pub fn full_permission_name(permission: &str) -> String {
    match SHORT_NAMES.get(permission) {
        Some(full) => (*full).to_owned(),
        None => qualify(PERMISSION_PREFIX, permission),
    }
}

/// Expands a short permission group name (`CAMERA`) to the platform one.
pub fn full_group_name(group: &str) -> String {
    qualify(PERMISSION_GROUP_PREFIX, group)
}

/// Short names have no dots; anything else is returned untouched.
fn qualify(prefix: &str, name: &str) -> String {
    if name.contains('.') {
        name.to_owned()
    } else {
        format!("{}{}", prefix, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_individually_controlled() {
        assert!(is_individually_controlled("READ_CONTACTS"));
        assert!(is_individually_controlled("android.permission.READ_CONTACTS"));
        assert!(is_individually_controlled("android.permission.ACCEPT_HANDOVER"));
        assert!(is_individually_controlled(CTA_SEND_MMS));
        assert!(is_individually_controlled(ADD_VOICEMAIL));
        assert!(is_individually_controlled("ADD_VOICEMAIL"));
        assert!(is_individually_controlled("SEND_MMS"));

        assert!(!is_individually_controlled("INTERNET"));
        assert!(!is_individually_controlled("android.permission.INTERNET"));
        assert!(!is_individually_controlled("android.permission.CAMERA"));
        assert!(!is_individually_controlled("com.example.READ_CONTACTS"));
        assert!(!is_individually_controlled(""));
    }

    #[test]
    fn it_regulated_group() {
        for group in &[
            "CAMERA",
            "LOCATION",
            "MICROPHONE",
            "STORAGE",
            "SENSORS",
            "ACTIVITY_RECOGNITION",
        ] {
            assert!(is_regulated_group(group));
            assert!(is_regulated_group(format!("{}{}", PERMISSION_GROUP_PREFIX, group)));
        }

        assert!(!is_regulated_group("CONTACTS"));
        assert!(!is_regulated_group("android.permission-group.SMS"));
        assert!(!is_regulated_group("camera"));
    }

    #[test]
    fn it_full_names() {
        assert_eq!(full_permission_name("CAMERA"), "android.permission.CAMERA");
        assert_eq!(full_permission_name(CTA_SEND_MMS), CTA_SEND_MMS);
        assert_eq!(full_permission_name("SEND_MMS"), CTA_SEND_MMS);
        assert_eq!(full_permission_name("ADD_VOICEMAIL"), ADD_VOICEMAIL);
        assert_eq!(full_permission_name("READ_SMS"), "android.permission.READ_SMS");
        assert_eq!(full_group_name("SMS"), "android.permission-group.SMS");
        assert_eq!(
            full_group_name("android.permission-group.SMS"),
            "android.permission-group.SMS"
        );
    }

    #[test]
    fn it_extra_permission_group() {
        assert_eq!(
            extra_permission_group(CTA_SEND_MMS),
            Some("android.permission-group.SMS")
        );
        assert_eq!(extra_permission_group("android.permission.SEND_SMS"), None);
    }
}

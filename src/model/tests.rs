//! Tests for the permission model.

use super::{AppPermissions, PermissionGroup, PermissionRegistry};

const APP: &str = r#"
package = "com.example.messenger"

[[groups]]
name = "android.permission-group.SMS"
label = "SMS"
permissions = ["android.permission.SEND_SMS", "android.permission.READ_SMS"]

[[groups]]
name = "android.permission-group.LOCATION"
permissions = ["android.permission.ACCESS_FINE_LOCATION"]

[groups.background]
name = "android.permission-group.LOCATION_BACKGROUND"
permissions = ["android.permission.ACCESS_BACKGROUND_LOCATION"]

[labels]
"android.permission.SEND_SMS" = "send SMS messages"
"#;

#[test]
fn it_parses_app_model() {
    let app: AppPermissions = APP.parse().unwrap();

    assert_eq!(app.package(), "com.example.messenger");
    assert_eq!(app.groups().len(), 2);

    let sms = app.group("android.permission-group.SMS").unwrap();
    assert_eq!(sms.label(), "SMS");
    assert_eq!(sms.permissions().len(), 2);
    assert!(sms.has_permission("android.permission.READ_SMS"));
    assert!(sms.background().is_none());

    let location = app.group("android.permission-group.LOCATION").unwrap();
    assert_eq!(location.label(), "android.permission-group.LOCATION");
    let background = location.background().unwrap();
    assert!(background.has_permission("android.permission.ACCESS_BACKGROUND_LOCATION"));
    assert!(!location.has_permission("android.permission.ACCESS_BACKGROUND_LOCATION"));

    assert_eq!(app.label("android.permission.SEND_SMS"), Some("send SMS messages"));
    assert_eq!(app.label("android.permission.READ_SMS"), None);
}

#[test]
fn it_all_permissions() {
    let group = PermissionGroup::new("LOCATION", vec!["FINE", "COARSE"])
        .with_background(PermissionGroup::new("LOCATION_BACKGROUND", vec!["BACKGROUND"]));

    let names: Vec<_> = group.all_permissions().map(|p| p.name()).collect();
    assert_eq!(names, vec!["FINE", "COARSE", "BACKGROUND"]);
}

#[test]
fn it_foreground_group() {
    let app: AppPermissions = APP.parse().unwrap();

    assert_eq!(
        app.foreground_group("android.permission.SEND_SMS")
            .map(PermissionGroup::name),
        Some("android.permission-group.SMS")
    );
    assert_eq!(
        app.foreground_group("android.permission.ACCESS_BACKGROUND_LOCATION")
            .map(PermissionGroup::name),
        Some("android.permission-group.LOCATION_BACKGROUND")
    );
    // Not declared by the app, but grouped by the CTA policy.
    assert_eq!(
        app.foreground_group("com.android.permission.SEND_MMS")
            .map(PermissionGroup::name),
        Some("android.permission-group.SMS")
    );
    assert!(app.foreground_group("android.permission.CAMERA").is_none());
}

#[test]
fn it_rejects_invalid_models() {
    assert!("groups = []".parse::<AppPermissions>().is_err());
    assert!("package = \"\"".parse::<AppPermissions>().is_err());
    assert!("package = \"com.example\"\n[[groups]]\nname = \"\""
        .parse::<AppPermissions>()
        .is_err());

    let twice = vec![
        PermissionGroup::new("CAMERA", vec!["android.permission.CAMERA"]),
        PermissionGroup::new("CAMERA", Vec::<String>::new()),
    ];
    assert!(AppPermissions::new("com.example", twice).is_err());
    assert!(AppPermissions::new("com.example", Vec::new()).is_ok());
}

#[test]
fn it_set_label() {
    let mut app = AppPermissions::new("com.example", Vec::new()).unwrap();
    app.set_label("android.permission.CAMERA", "take pictures");

    assert_eq!(app.label("android.permission.CAMERA"), Some("take pictures"));
}

#[test]
fn it_loads_demo_app() {
    let app = AppPermissions::from_file(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/demos/messenger.toml"
    ))
    .unwrap();

    assert_eq!(app.package(), "com.example.messenger");
    assert_eq!(app.groups().len(), 3);
    assert_eq!(
        app.label("com.android.permission.SEND_MMS"),
        Some("send MMS messages")
    );
    assert!(AppPermissions::from_file("demos/does-not-exist.toml").is_err());
}

//! Verify the (de)serialized representation of cookie options.
use cookie_options::{CookieOptionValue, CookieOptions, cookie_options};

#[test]
fn defaults_serialization() {
    let json = serde_json::to_string(CookieOptions::defaults()).unwrap();
    insta::assert_snapshot!(json, @r#"{"maxAge":2505600,"maxCookieLength":3000,"sameSite":"lax","httpOnly":true,"path":"/"}"#);
}

#[test]
fn unrecognized_options_are_serialized_after_the_recognized_ones() {
    let overrides = CookieOptions::new()
        .try_with("priority", "high")
        .unwrap()
        .with_secure(true);
    let json = serde_json::to_string(&cookie_options(Some(overrides))).unwrap();
    insta::assert_snapshot!(json, @r#"{"maxAge":2505600,"maxCookieLength":3000,"sameSite":"lax","httpOnly":true,"secure":true,"path":"/","priority":"high"}"#);
}

#[test]
fn an_empty_set_serializes_to_an_empty_object() {
    let json = serde_json::to_string(&CookieOptions::new()).unwrap();
    assert_eq!(json, "{}");
}

#[test]
fn all_fields_are_optional() {
    let options: CookieOptions = serde_json::from_str("{}").unwrap();
    assert!(options.is_empty());
}

#[test]
fn deserialization_routes_recognized_keys_to_their_field() {
    let json = r#"{
        "maxAge": 60,
        "http_only": false,
        "sameSite": "strict",
        "domain": "example.com",
        "priority": "high",
        "partitioned": true
    }"#;
    let options: CookieOptions = serde_json::from_str(json).unwrap();

    assert_eq!(options.max_age, Some(60));
    assert_eq!(options.http_only, Some(false));
    assert_eq!(options.same_site.as_deref(), Some("strict"));
    assert_eq!(options.domain.as_deref(), Some("example.com"));
    assert_eq!(options.extra().len(), 2);
    assert_eq!(
        options.get("partitioned"),
        Some(CookieOptionValue::Boolean(true))
    );
}

#[test]
fn null_marks_an_option_as_unset() {
    let options: CookieOptions =
        serde_json::from_str(r#"{"secure": null, "same_site": null, "priority": null}"#).unwrap();
    assert_eq!(options.secure, None);
    assert!(options.is_empty());
    assert!(options.is_unset("secure"));
    assert!(options.is_unset("sameSite"));
    assert!(options.is_unset("priority"));
    assert!(!options.is_unset("path"));

    let json = serde_json::to_string(&options).unwrap();
    insta::assert_snapshot!(json, @r#"{"secure":null,"sameSite":null,"priority":null}"#);
}

#[test]
fn null_overrides_remove_the_defaults() {
    let overrides: CookieOptions =
        serde_json::from_str(r#"{"maxAge": null, "path": null}"#).unwrap();
    let options = cookie_options(Some(overrides));

    assert_eq!(options.max_age, None);
    assert_eq!(options.path, None);
    // Missing keys still fall back to the defaults.
    assert_eq!(options.same_site.as_deref(), Some("lax"));
    assert_eq!(options.http_only, Some(true));
    assert_eq!(options.max_cookie_length, Some(3000));

    let json = serde_json::to_string(&options).unwrap();
    insta::assert_snapshot!(json, @r#"{"maxCookieLength":3000,"sameSite":"lax","httpOnly":true,"maxAge":null,"path":null}"#);
}

#[test]
fn recognized_options_with_the_wrong_type_are_rejected() {
    assert!(serde_json::from_str::<CookieOptions>(r#"{"httpOnly": "yes"}"#).is_err());
    assert!(serde_json::from_str::<CookieOptions>(r#"{"maxAge": "60"}"#).is_err());
    assert!(serde_json::from_str::<CookieOptions>(r#"{"path": 1}"#).is_err());
}

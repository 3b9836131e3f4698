use crate::UserProfile;

use chrono::{TimeZone, Utc};
use googletest::prelude::*;

#[test]
fn given_missing_field_when_validate_then_fails() {
    let profile = UserProfile::new("Sara", "", "f");

    assert_that!(profile.validate(), err(anything()));
}

#[test]
fn given_complete_profile_when_validate_then_ok() {
    let profile = UserProfile::new(" Sara ", "30", "f");

    assert_that!(profile.validate(), ok(anything()));
    assert_that!(profile.name, eq("Sara"));
    assert_that!(profile.is_private, eq(false));
}

#[test]
fn given_same_inputs_when_derive_id_then_deterministic_hex() {
    let at = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();

    let a = UserProfile::derive_id("Sara", at);
    let b = UserProfile::derive_id("Sara", at);

    assert_that!(a, eq(&b));
    assert_that!(a.len(), eq(64));
    assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn given_different_time_when_derive_id_then_differs() {
    let a = UserProfile::derive_id("Sara", Utc.timestamp_millis_opt(1).unwrap());
    let b = UserProfile::derive_id("Sara", Utc.timestamp_millis_opt(2).unwrap());

    assert_that!(a, not(eq(&b)));
}

#[test]
fn given_app_json_with_numeric_age_when_deserialized_then_age_is_text() {
    let json = r#"{"id":"abc","name":"Sara","age":30,"sex":"f","isPrivate":true}"#;

    let profile: UserProfile = serde_json::from_str(json).unwrap();

    assert_that!(profile.age, eq("30"));
    assert_that!(profile.is_private, eq(true));
    assert_that!(profile.id, some(eq("abc")));
}

#[test]
fn given_profile_when_serialized_then_uses_camel_case() {
    let profile = UserProfile::new("Sara", "30", "f");

    let json = serde_json::to_value(&profile).unwrap();

    assert_that!(json["isPrivate"].as_bool(), some(eq(false)));
    assert!(json.get("id").is_none());
}

//! Integration tests for terminating gateway validation

use meshgate::domain::{
    ConfigEntry, GatewayConfigEntry, LinkedService, TerminatingGatewayConfigEntry,
};
use meshgate::ValidationError;

fn terminating(names: &[&str]) -> TerminatingGatewayConfigEntry {
    names
        .iter()
        .fold(TerminatingGatewayConfigEntry::new("terminating-gw-west"), |entry, name| {
            entry.with_service(*name)
        })
}

fn assert_contains_lower(haystack: &str, needle: &str) {
    assert!(
        haystack.to_lowercase().contains(&needle.to_lowercase()),
        "expected {haystack:?} to contain {needle:?}"
    );
}

#[test]
fn service_conflict() {
    let error = terminating(&["foo", "foo"]).validate().unwrap_err();
    assert_contains_lower(&error.to_string(), "Service \"foo\" was specified more than once");
}

#[test]
fn blank_service_name() {
    let entry = TerminatingGatewayConfigEntry {
        name: "terminating-gw-west".to_string(),
        services: vec![LinkedService { name: String::new() }],
        ..Default::default()
    };

    let error = entry.validate().unwrap_err();
    assert_contains_lower(&error.to_string(), "Service name cannot be blank.");
}

#[test]
fn unique_names_pass() {
    let entry = terminating(&["billing", "ledger", "Billing"]);
    assert_eq!(entry.validate(), Ok(()));
    assert_eq!(entry.validate(), entry.validate());
}

#[test]
fn empty_service_list_passes() {
    assert_eq!(terminating(&[]).validate(), Ok(()));
}

#[test]
fn first_duplicate_is_reported() {
    let entry = terminating(&["a", "b", "b", "a"]);
    assert_eq!(
        entry.validate(),
        Err(ValidationError::DuplicateService { name: "b".to_string() })
    );
    assert_eq!(
        entry.violations(),
        vec![
            ValidationError::DuplicateService { name: "b".to_string() },
            ValidationError::DuplicateService { name: "a".to_string() },
        ]
    );
}

#[test]
fn entry_decoded_from_json_validates() {
    let json = r#"{
        "Kind": "terminating-gateway",
        "Name": "terminating-gw-west",
        "Services": [{ "Name": "foo" }, { "Name": "foo" }]
    }"#;

    let entry: GatewayConfigEntry = serde_json::from_str(json).expect("entry should decode");
    assert_eq!(entry.display_id(), "terminating-gateway/terminating-gw-west");
    assert_eq!(
        entry.validate(),
        Err(ValidationError::DuplicateService { name: "foo".to_string() })
    );
}

//! Integration tests for ingress gateway validation
//!
//! Each case builds an entry, validates it and checks either success or that
//! the error message contains the expected text (compared case-insensitively).

use meshgate::domain::{
    ConfigEntry, GatewayConfigEntry, IngressGatewayConfigEntry, IngressListener, IngressService,
};
use meshgate::ValidationError;

struct Case {
    name: &'static str,
    entry: IngressGatewayConfigEntry,
    expect_err: Option<&'static str>,
}

fn ingress(listeners: Vec<IngressListener>) -> IngressGatewayConfigEntry {
    listeners.into_iter().fold(IngressGatewayConfigEntry::new("ingress-web"), |entry, listener| {
        entry.with_listener(listener)
    })
}

fn assert_contains_lower(haystack: &str, needle: &str) {
    assert!(
        haystack.to_lowercase().contains(&needle.to_lowercase()),
        "expected {haystack:?} to contain {needle:?}"
    );
}

fn cases() -> Vec<Case> {
    vec![
        Case {
            name: "port conflict",
            entry: ingress(vec![
                IngressListener::new(1111, "tcp").with_service("mysql"),
                IngressListener::new(1111, "tcp").with_service("postgres"),
            ]),
            expect_err: Some("port 1111 declared on two listeners"),
        },
        Case {
            name: "http features: wildcard",
            entry: ingress(vec![IngressListener::new(1111, "http").with_service("*")]),
            expect_err: None,
        },
        Case {
            name: "http features: wildcard service on invalid protocol",
            entry: ingress(vec![IngressListener::new(1111, "tcp").with_service("*")]),
            expect_err: Some("Wildcard service name is only valid for protocol"),
        },
        Case {
            name: "http features: multiple services",
            entry: ingress(vec![IngressListener::new(1111, "tcp")
                .with_service("db1")
                .with_service("db2")]),
            expect_err: Some("multiple services per listener are only supported for protocol"),
        },
        Case {
            name: "tcp listener requires a defined service",
            entry: ingress(vec![IngressListener::new(1111, "tcp")]),
            expect_err: Some("no service declared for listener with port 1111"),
        },
        Case {
            name: "empty service name not supported",
            entry: ingress(vec![IngressListener {
                port: 1111,
                protocol: "tcp".into(),
                services: vec![IngressService::default()],
            }]),
            expect_err: Some("Service name cannot be blank"),
        },
        Case {
            name: "grpc and http2 multiplex",
            entry: ingress(vec![
                IngressListener::new(8443, "http2").with_service("*").with_service("web"),
                IngressListener::new(9090, "grpc").with_service("billing").with_service("ledger"),
            ]),
            expect_err: None,
        },
        Case {
            name: "unknown protocol is treated like tcp",
            entry: ingress(vec![IngressListener::new(6379, "redis")
                .with_service("cache-a")
                .with_service("cache-b")]),
            expect_err: Some("multiple services per listener are only supported for protocol"),
        },
    ]
}

#[test]
fn ingress_config_entry_validate() {
    for case in cases() {
        let result = case.entry.validate();
        match case.expect_err {
            Some(expected) => {
                let error = result.expect_err(case.name);
                assert_contains_lower(&error.to_string(), expected);
            }
            None => assert!(result.is_ok(), "{}: unexpected error {:?}", case.name, result),
        }
    }
}

#[test]
fn validation_is_idempotent() {
    for case in cases() {
        assert_eq!(case.entry.validate(), case.entry.validate(), "{}", case.name);
    }
}

#[test]
fn fully_valid_entry_passes() {
    let entry = ingress(vec![
        IngressListener::new(1111, "tcp").with_service("mysql"),
        IngressListener::new(8080, "http").with_service("web").with_service("api"),
        IngressListener::new(8081, "http").with_service("*"),
    ]);

    assert_eq!(entry.validate(), Ok(()));
    assert!(entry.violations().is_empty());
}

#[test]
fn errors_are_structured() {
    let entry = ingress(vec![
        IngressListener::new(2222, "tcp").with_service("a"),
        IngressListener::new(2222, "http").with_service("b"),
    ]);

    let error = entry.validate().unwrap_err();
    assert_eq!(error, ValidationError::PortConflict { port: 2222 });
    assert_eq!(error.port(), Some(2222));
}

#[test]
fn entry_decoded_from_json_validates() {
    let json = r#"{
        "Kind": "ingress-gateway",
        "Name": "ingress-web",
        "Listeners": [
            { "Port": 1111, "Protocol": "tcp", "Services": [{ "Name": "*" }] }
        ]
    }"#;

    let entry: GatewayConfigEntry = serde_json::from_str(json).expect("entry should decode");
    assert_eq!(entry.name(), "ingress-web");

    let error = entry.validate().unwrap_err();
    assert!(matches!(error, ValidationError::WildcardNotAllowed { port: 1111, .. }));
}

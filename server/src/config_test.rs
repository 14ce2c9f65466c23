use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

// =============================================================================
// from_lookup
// =============================================================================

#[test]
fn defaults_without_relay_settings_disable_the_relay() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.relay, RelayConfig::Disabled);
}

#[test]
fn function_relay_is_the_default_kind() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("CONTACT_FUNCTION_URL", "https://example.test/functions/v1/send-contact-email"),
        ("CONTACT_FUNCTION_KEY", "anon-key"),
    ]))
    .unwrap();
    assert_eq!(
        cfg.relay,
        RelayConfig::Function {
            url: "https://example.test/functions/v1/send-contact-email".into(),
            key: Some("anon-key".into()),
            timeouts: RelayTimeouts::default(),
        }
    );
}

#[test]
fn function_relay_parses_timeouts_and_ignores_garbage() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("CONTACT_RELAY", "function"),
        ("CONTACT_FUNCTION_URL", "https://example.test/fn"),
        ("CONTACT_REQUEST_TIMEOUT_SECS", "30"),
        ("CONTACT_CONNECT_TIMEOUT_SECS", "soon"),
    ]))
    .unwrap();
    let RelayConfig::Function { key, timeouts, .. } = cfg.relay else {
        panic!("expected function relay");
    };
    assert_eq!(key, None);
    assert_eq!(timeouts, RelayTimeouts { request_secs: 30, connect_secs: DEFAULT_CONTACT_CONNECT_TIMEOUT_SECS });
    assert_eq!(timeouts.request(), Duration::from_secs(30));
}

#[test]
fn resend_relay_requires_all_three_values() {
    let full = ServerConfig::from_lookup(lookup(&[
        ("CONTACT_RELAY", "Resend"),
        ("RESEND_API_KEY", "re_123"),
        ("CONTACT_FROM", "Portfolio <site@example.test>"),
        ("CONTACT_TO", "owner@example.test"),
    ]))
    .unwrap();
    assert_eq!(
        full.relay,
        RelayConfig::Resend {
            api_key: "re_123".into(),
            from: "Portfolio <site@example.test>".into(),
            to: "owner@example.test".into(),
        }
    );

    let partial = ServerConfig::from_lookup(lookup(&[("CONTACT_RELAY", "resend"), ("RESEND_API_KEY", "re_123")])).unwrap();
    assert_eq!(partial.relay, RelayConfig::Disabled);
}

#[test]
fn relay_can_be_switched_off() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("CONTACT_RELAY", "none"),
        ("CONTACT_FUNCTION_URL", "https://example.test/fn"),
    ]))
    .unwrap();
    assert_eq!(cfg.relay, RelayConfig::Disabled);
}

#[test]
fn invalid_port_is_an_error() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "eighty".into() });
}

#[test]
fn unknown_relay_kind_disables_the_relay() {
    for raw in ["pigeon", "function x"] {
        let cfg = ServerConfig::from_lookup(lookup(&[
            ("PORT", "8080"),
            ("CONTACT_RELAY", raw),
            ("CONTACT_FUNCTION_URL", "https://example.test/fn"),
        ]))
        .unwrap();
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.relay, RelayConfig::Disabled, "CONTACT_RELAY={raw:?}");
    }
}

#[test]
fn parse_relay_kind_names_the_bad_value() {
    let err = parse_relay_kind(Some("pigeon")).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "CONTACT_RELAY", value: "pigeon".into() });
    assert_eq!(parse_relay_kind(None).unwrap(), RelayKind::Function);
}

#[test]
fn blank_values_count_as_unset() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PORT", "  "), ("CONTACT_FUNCTION_URL", " ")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.relay, RelayConfig::Disabled);
}

// =============================================================================
// relay_from
// =============================================================================

#[test]
fn relay_from_names_the_missing_variable() {
    let err = ServerConfig::relay_from(RelayKind::Function, &lookup(&[])).unwrap_err();
    assert_eq!(err, ConfigError::Missing { var: "CONTACT_FUNCTION_URL", relay: "function" });

    let err = ServerConfig::relay_from(RelayKind::Resend, &lookup(&[("RESEND_API_KEY", "k")])).unwrap_err();
    assert_eq!(err, ConfigError::Missing { var: "CONTACT_FROM", relay: "resend" });
}


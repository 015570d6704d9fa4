#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use agentgate_gateway::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
gateway:
  listen: "0.0.0.0:8080"
agents:
  - id: "docs"
    api_key: "k1"
    origin_whitelist_enabeld: true # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn ok_minimal_config() {
    let ok = r#"
version: 1
agents:
  - id: "docs"
    api_key: "k1"
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.gateway.listen, "0.0.0.0:8080");
    assert_eq!(cfg.gateway.socket_addr().expect("valid addr").port(), 8080);
    assert_eq!(cfg.agents[0].id, "docs");
    assert!(!cfg.agents[0].origin_whitelist_enabled);
    assert_eq!(cfg.agents[0].allowed_origins, "");
    assert!(cfg.origins.use_builtin_defaults);
    assert_eq!(cfg.origins.default_origins().len(), 2);
}

#[test]
fn unsupported_version() {
    let bad = r#"
version: 2
agents:
  - id: "docs"
    api_key: "k1"
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn agents_must_not_be_empty() {
    let err = config::load_from_str("version: 1\n").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn duplicate_agent_id_rejected() {
    let bad = r#"
version: 1
agents:
  - { id: "docs", api_key: "k1" }
  - { id: "docs", api_key: "k2" }
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(err.to_string().contains("duplicate agent id"), "{err}");
}

#[test]
fn duplicate_api_key_rejected() {
    let bad = r#"
version: 1
agents:
  - { id: "a", api_key: "k1" }
  - { id: "b", api_key: "k1" }
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(err.to_string().contains("duplicate api_key"), "{err}");
}

#[test]
fn bad_listen_rejected() {
    let bad = r#"
version: 1
gateway:
  listen: "not-an-addr"
agents:
  - { id: "a", api_key: "k1" }
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
    assert!(err.to_string().contains("gateway.listen"), "{err}");
}

#[test]
fn custom_default_origins() {
    let ok = r#"
version: 1
origins:
  use_builtin_defaults: false
  extra_defaults: ["https://docs.internal"]
agents:
  - id: "docs"
    api_key: "k1"
    origin_whitelist_enabled: true
    allowed_origins: "https://a.com, https://b.com"
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    let defaults = cfg.origins.default_origins();
    assert_eq!(defaults.len(), 1);
    assert!(defaults.contains("https://docs.internal"));
    assert!(!defaults.contains("https://app.docsgpt.cloud"));

    let policy = cfg.agents[0].origin_policy();
    assert!(policy.origin_whitelist_enabled);
    assert_eq!(policy.compile().listed().len(), 2);
}

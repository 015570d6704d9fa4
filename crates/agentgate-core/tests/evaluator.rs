//! Origin evaluator invariants and default-set injection.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use agentgate_core::origin::{
    parse_allowed_origins, AgentOriginPolicy, AllowReason, DefaultOrigins, DenyReason,
    OriginDecision, OriginEvaluator, BUILTIN_DEFAULT_ORIGINS,
};

const LISTS: [&str; 5] = [
    "",
    "https://example.com",
    "https://a.com, https://b.com",
    " , ,",
    "https://app.docsgpt.cloud",
];

const ORIGINS: [Option<&str>; 6] = [
    None,
    Some(""),
    Some("https://example.com"),
    Some("https://a.com"),
    Some("https://c.com"),
    Some("https://app.docsgpt.cloud"),
];

#[test]
fn disabled_admits_any_origin() {
    let ev = OriginEvaluator::default();
    for list in LISTS {
        let policy = AgentOriginPolicy::new(false, list);
        for origin in ORIGINS {
            assert!(ev.is_allowed(&policy, origin), "list={list:?} origin={origin:?}");
        }
    }
}

#[test]
fn enabled_rejects_missing_origin() {
    let ev = OriginEvaluator::default();
    for list in LISTS {
        let policy = AgentOriginPolicy::new(true, list);
        assert_eq!(ev.evaluate(&policy, None), OriginDecision::Deny(DenyReason::MissingOrigin));
    }
}

#[test]
fn defaults_always_admitted_when_enabled() {
    let ev = OriginEvaluator::default();
    for list in LISTS {
        let policy = AgentOriginPolicy::new(true, list);
        for origin in BUILTIN_DEFAULT_ORIGINS.iter().copied() {
            assert!(ev.is_allowed(&policy, Some(origin)), "list={list:?} origin={origin}");
        }
    }
}

#[test]
fn listed_reason_wins_over_default() {
    let ev = OriginEvaluator::default();
    let policy = AgentOriginPolicy::new(true, "https://app.docsgpt.cloud");
    assert_eq!(
        ev.evaluate(&policy, Some("https://app.docsgpt.cloud")),
        OriginDecision::Allow(AllowReason::Listed)
    );
}

#[test]
fn injected_defaults_replace_builtin() {
    let ev = OriginEvaluator::new(DefaultOrigins::new(["https://self-hosted.example"]));
    let policy = AgentOriginPolicy::new(true, "");

    assert!(ev.is_allowed(&policy, Some("https://self-hosted.example")));
    assert!(!ev.is_allowed(&policy, Some("https://app.docsgpt.cloud")));
}

#[test]
fn no_defaults_means_list_only() {
    let ev = OriginEvaluator::new(DefaultOrigins::none());
    let policy = AgentOriginPolicy::new(true, "");

    for origin in BUILTIN_DEFAULT_ORIGINS.iter().copied() {
        assert!(!ev.is_allowed(&policy, Some(origin)));
    }
    assert!(ev.is_allowed(&AgentOriginPolicy::disabled(), None));
}

#[test]
fn builtin_with_extends_defaults() {
    let defaults = DefaultOrigins::builtin_with([" https://extra.example ", ""]);
    assert_eq!(defaults.len(), 3);
    assert!(defaults.contains("https://extra.example"));
    assert!(defaults.contains("https://ent.docsgpt.cloud"));
}

#[test]
fn parse_trims_and_dedups() {
    let set = parse_allowed_origins(" https://b.com,https://a.com , https://b.com,, ");
    let got: Vec<&str> = set.iter().collect();
    assert_eq!(got, ["https://a.com", "https://b.com"]);
    assert!(parse_allowed_origins("").is_empty());
}

#[test]
fn effective_set_is_union_with_defaults() {
    let set = parse_allowed_origins("https://a.com").union(&DefaultOrigins::builtin());
    assert_eq!(set.len(), 3);
    assert!(set.contains("https://a.com"));
    assert!(set.contains("https://app.docsgpt.cloud"));
}

#[test]
fn evaluation_is_shareable_across_threads() {
    let ev = std::sync::Arc::new(OriginEvaluator::default());
    let policy = std::sync::Arc::new(AgentOriginPolicy::new(true, "https://a.com"));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let ev = ev.clone();
            let policy = policy.clone();
            std::thread::spawn(move || {
                (0..1000).all(|_| ev.is_allowed(&policy, Some("https://a.com")))
            })
        })
        .collect();

    for h in handles {
        assert!(h.join().unwrap());
    }
}

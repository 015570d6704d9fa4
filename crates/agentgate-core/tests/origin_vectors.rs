//! Origin policy vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use agentgate_core::origin::{is_origin_allowed, OriginEvaluator};

use vector_loader::{load, ALL};

#[test]
fn origin_vectors() {
    let evaluator = OriginEvaluator::default();

    for f in ALL {
        let v = load(f);
        let policy = v.policy.to_policy();

        for case in &v.cases {
            let origin = case.origin.as_deref();
            let decision = evaluator.evaluate(&policy, origin);

            assert_eq!(decision.as_str(), case.expect, "vector={} origin={origin:?}", v.description);
            assert_eq!(decision.reason(), case.reason, "vector={} origin={origin:?}", v.description);
            assert_eq!(
                is_origin_allowed(&policy, origin),
                case.expect == "allow",
                "vector={} origin={origin:?}",
                v.description
            );
        }
    }
}

#[test]
fn compiled_policy_agrees_with_raw_evaluation() {
    let evaluator = OriginEvaluator::default();

    for f in ALL {
        let v = load(f);
        let policy = v.policy.to_policy();
        let compiled = policy.compile();

        for case in &v.cases {
            let origin = case.origin.as_deref();
            assert_eq!(
                evaluator.evaluate(&policy, origin),
                evaluator.evaluate_compiled(&compiled, origin),
                "vector={} origin={origin:?}",
                v.description
            );
        }
    }
}

//! Property tests for sequential registries and contract dispatch.

use proptest::prelude::*;

use chronicle_core::models::{CausalLoop, TimelineEvent};
use chronicle_registry::{CausalLoopContract, SequentialRegistry, TimelineContract};
use serde_json::json;

fn causal_loop() -> impl Strategy<Value = CausalLoop> {
    (".{0,24}", any::<u32>()).prop_map(|(description, severity)| CausalLoop {
        description,
        severity,
    })
}

proptest! {
    // The k-th registration receives id k.
    #[test]
    fn prop_ids_follow_registration_order(records in prop::collection::vec(causal_loop(), 0..64)) {
        let mut registry = SequentialRegistry::new();
        for (k, record) in records.into_iter().enumerate() {
            prop_assert_eq!(registry.register(record), k as u64);
        }
    }

    // register then get returns the same fields.
    #[test]
    fn prop_get_returns_registered_record(records in prop::collection::vec(causal_loop(), 1..32)) {
        let mut registry = SequentialRegistry::new();
        let ids: Vec<u64> = records.iter().cloned().map(|r| registry.register(r)).collect();
        for (id, record) in ids.iter().zip(&records) {
            prop_assert_eq!(registry.get(*id), Some(record));
        }
    }

    // Ids at or beyond next_id are absent.
    #[test]
    fn prop_unassigned_ids_are_absent(count in 0usize..32, offset in 0u64..1_000) {
        let mut registry = SequentialRegistry::new();
        for i in 0..count {
            registry.register(i);
        }
        prop_assert!(registry.get(registry.next_id() + offset).is_none());
    }

    // Any name outside the contract's pair is unknown, whatever the arguments.
    #[test]
    fn prop_unrecognized_methods_are_unknown(
        method in "[a-z-]{0,16}",
        arg in any::<i64>(),
    ) {
        prop_assume!(method != "register-loop" && method != "get-loop");
        let mut contract = CausalLoopContract::default();
        let response = contract.call(&method, &[json!(arg), json!("x")]);
        prop_assert!(!response.success);
        prop_assert_eq!(response.error(), Some("Unknown method"));
    }

    // Dispatched round trip preserves fields.
    #[test]
    fn prop_dispatch_round_trip(record in causal_loop()) {
        let mut contract = CausalLoopContract::default();
        let registered = contract.call(
            "register-loop",
            &[json!(&record.description), json!(record.severity)],
        );
        prop_assert_eq!(registered.value(), &json!(0));

        let fetched = contract.call("get-loop", &[json!(0)]);
        let back: CausalLoop = serde_json::from_value(fetched.value().clone()).unwrap();
        prop_assert_eq!(back, record);
    }

    // Timeline round trip over the full i64 range, negatives included.
    #[test]
    fn prop_timeline_dispatch_round_trip(
        events in prop::collection::vec((".{0,24}", any::<i64>()), 1..16),
    ) {
        let mut contract = TimelineContract::default();
        for (k, (description, timestamp)) in events.iter().enumerate() {
            let recorded = contract.call("record-event", &[json!(description), json!(timestamp)]);
            prop_assert!(recorded.success);
            prop_assert_eq!(recorded.value(), &json!(k as u64));
        }
        for (k, (description, timestamp)) in events.iter().enumerate() {
            let fetched = contract.call("get-event", &[json!(k as u64)]);
            let back: TimelineEvent = serde_json::from_value(fetched.value().clone()).unwrap();
            prop_assert_eq!(back, TimelineEvent::new(description.clone(), *timestamp));
        }
    }
}

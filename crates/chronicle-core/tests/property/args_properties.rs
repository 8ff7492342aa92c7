//! Property tests for argument extraction and record models.

use proptest::prelude::*;

use chronicle_core::args::{i64_arg, u32_arg, u64_arg};
use chronicle_core::models::TimelineEvent;
use serde_json::json;

proptest! {
    // calendar_date is total over i64 and only yields dates that
    // format back to the same YYYYMMDD digits.
    #[test]
    fn prop_calendar_date_never_panics(timestamp in any::<i64>()) {
        let event = TimelineEvent::new("prop", timestamp);
        if let Some(date) = event.calendar_date() {
            let digits: i64 = date.format("%Y%m%d").to_string().parse().unwrap();
            prop_assert_eq!(digits, timestamp);
        }
    }

    #[test]
    fn prop_u32_arg_accepts_exactly_u32(raw in any::<u64>()) {
        let parsed = u32_arg("register-loop", &[json!(raw)], 0, "severity");
        match u32::try_from(raw) {
            Ok(expected) => prop_assert_eq!(parsed.unwrap(), expected),
            Err(_) => prop_assert!(parsed.is_err()),
        }
    }

    #[test]
    fn prop_i64_arg_accepts_every_i64(raw in any::<i64>()) {
        prop_assert_eq!(i64_arg("record-event", &[json!(raw)], 0, "timestamp").unwrap(), raw);
    }

    #[test]
    fn prop_u64_arg_rejects_negatives(raw in i64::MIN..0) {
        prop_assert!(u64_arg("get-loop", &[json!(raw)], 0, "id").is_err());
    }

    // Whole floats resolve to the same id as their integer spelling.
    #[test]
    fn prop_whole_float_ids_match_integers(id in 0u32..) {
        let from_float = u64_arg("get-loop", &[json!(f64::from(id))], 0, "id").unwrap();
        prop_assert_eq!(from_float, u64::from(id));
    }
}

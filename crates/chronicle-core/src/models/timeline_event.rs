use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::args;
use crate::errors::DispatchError;
use crate::traits::ContractRecord;

/// A recorded point on the timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub description: String,
    /// Caller-defined ordinal. Conventionally `YYYYMMDD`.
    pub timestamp: i64,
}

impl TimelineEvent {
    pub fn new(description: impl Into<String>, timestamp: i64) -> Self {
        Self {
            description: description.into(),
            timestamp,
        }
    }

    /// Read the timestamp as a `YYYYMMDD` calendar date.
    ///
    /// Returns `None` for timestamps before year 1 or digit groups that do
    /// not name a real day (`19690230`, `123`).
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        // 0001-01-01
        if self.timestamp < 10_101 {
            return None;
        }
        let year = i32::try_from(self.timestamp / 10_000).ok()?;
        let month = u32::try_from(self.timestamp / 100 % 100).ok()?;
        let day = u32::try_from(self.timestamp % 100).ok()?;
        NaiveDate::from_ymd_opt(year, month, day)
    }
}

impl ContractRecord for TimelineEvent {
    const KIND: &'static str = "timeline-event";
    const REGISTER_METHOD: &'static str = "record-event";
    const GET_METHOD: &'static str = "get-event";

    fn from_args(args: &[Value]) -> Result<Self, DispatchError> {
        let method = Self::REGISTER_METHOD;
        Ok(Self {
            description: args::string_arg(method, args, 0, "description")?,
            timestamp: args::i64_arg(method, args, 1, "timestamp")?,
        })
    }
}

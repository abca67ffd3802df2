//! Arrival-hour buckets: half-open (lower, upper] intervals.

use crate::types::ArrivalHour;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HourBucket {
    #[serde(rename = "14-16h")]
    Afternoon,
    #[serde(rename = "17-18h")]
    EarlyEvening,
    #[serde(rename = "19-20h")]
    Evening,
    #[serde(rename = "21-23h")]
    Late,
}

impl HourBucket {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Afternoon    => "14-16h",
            Self::EarlyEvening => "17-18h",
            Self::Evening      => "19-20h",
            Self::Late         => "21-23h",
        }
    }
}

/// (lower exclusive, upper inclusive, bucket), ordered by lower bound.
pub const HOUR_BUCKETS: [(ArrivalHour, ArrivalHour, HourBucket); 4] = [
    (13, 16, HourBucket::Afternoon),
    (16, 18, HourBucket::EarlyEvening),
    (18, 20, HourBucket::Evening),
    (20, 23, HourBucket::Late),
];

/// Bucket for an arrival hour, or None outside (13, 23].
pub fn bucket_for(hour: ArrivalHour) -> Option<HourBucket> {
    HOUR_BUCKETS
        .iter()
        .find(|(lower, upper, _)| hour > *lower && hour <= *upper)
        .map(|(_, _, bucket)| *bucket)
}

//! Tracking tags for order audit correlation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Caller-generated unique tag attached to an order.
///
/// Every order must carry a distinct tag so that retries and audits can
/// be correlated on the brokerage side. Uniqueness is non-negotiable:
/// the timestamp alone is second-resolution, so a per-batch sequence
/// number is appended to keep two same-symbol orders generated within
/// the same second distinguishable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrackingTag(String);

impl TrackingTag {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrackingTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Generator for per-batch tracking tags.
///
/// Format: `{SYMBOL}-{YYYY_MM_DD_HH_MM_SS}-{seq}` where `seq` increments
/// monotonically for the lifetime of the generator.
#[derive(Debug, Default)]
pub struct TagGenerator {
    seq: u64,
}

impl TagGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self { seq: 0 }
    }

    /// Generate the next tag for `symbol` using the current time.
    pub fn next(&mut self, symbol: &str) -> TrackingTag {
        self.next_at(symbol, Utc::now())
    }

    /// Generate the next tag at a fixed timestamp.
    pub fn next_at(&mut self, symbol: &str, at: DateTime<Utc>) -> TrackingTag {
        self.seq += 1;
        TrackingTag(format!(
            "{}-{}-{}",
            symbol,
            at.format("%Y_%m_%d_%H_%M_%S"),
            self.seq
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_tags_distinct_within_same_second() {
        let at = Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap();
        let mut tags = TagGenerator::new();
        let a = tags.next_at("INFY", at);
        let b = tags.next_at("INFY", at);
        assert_ne!(a, b);
    }

    #[test]
    fn test_tags_distinct_across_seconds() {
        let t0 = Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap();
        let t1 = Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 1).unwrap();
        let mut tags = TagGenerator::new();
        assert_ne!(tags.next_at("INFY", t0), tags.next_at("INFY", t1));
    }

    #[test]
    fn test_tag_format() {
        let at = Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 5).unwrap();
        let mut tags = TagGenerator::new();
        let tag = tags.next_at("TATASTEEL", at);
        assert_eq!(tag.as_str(), "TATASTEEL-2025_03_14_09_30_05-1");
    }
}

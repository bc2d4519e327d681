//! Wire model for completion records
//!
//! Matches the JSON shape the front end submits and the store persists:
//! `{"moves": 27, "time": {"minutes": 1, "seconds": 23, "milliseconds": 456},
//! "date": "2026-08-06T10:00:00.000Z"}`.

use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};

use crate::core::CompletionRecord;

/// Elapsed time split for display-friendly storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeParts {
    pub minutes: u32,
    pub seconds: u32,
    pub milliseconds: u32,
}

impl TimeParts {
    pub fn from_millis(elapsed_ms: u64) -> Self {
        Self {
            minutes: (elapsed_ms / 60_000) as u32,
            seconds: ((elapsed_ms % 60_000) / 1_000) as u32,
            milliseconds: (elapsed_ms % 1_000) as u32,
        }
    }

    pub fn total_millis(&self) -> u64 {
        self.minutes as u64 * 60_000 + self.seconds as u64 * 1_000 + self.milliseconds as u64
    }
}

/// One persisted completion record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedTime {
    pub moves: u32,
    pub time: TimeParts,
    pub date: String,
}

impl From<&CompletionRecord> for SavedTime {
    fn from(record: &CompletionRecord) -> Self {
        Self {
            moves: record.moves,
            time: TimeParts::from_millis(record.elapsed_ms),
            date: record
                .finished_at
                .to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_time_parts_split() {
        let parts = TimeParts::from_millis(83_456);
        assert_eq!(
            parts,
            TimeParts {
                minutes: 1,
                seconds: 23,
                milliseconds: 456
            }
        );
        assert_eq!(parts.total_millis(), 83_456);
    }

    #[test]
    fn test_time_parts_zero() {
        let parts = TimeParts::from_millis(0);
        assert_eq!(parts.total_millis(), 0);
    }

    #[test]
    fn test_wire_shape() {
        let record = CompletionRecord {
            moves: 42,
            elapsed_ms: 83_456,
            timed_out: false,
            finished_at: Utc.with_ymd_and_hms(2026, 8, 6, 10, 0, 0).unwrap(),
        };

        let saved = SavedTime::from(&record);
        let json = serde_json::to_string(&saved).unwrap();
        assert_eq!(
            json,
            r#"{"moves":42,"time":{"minutes":1,"seconds":23,"milliseconds":456},"date":"2026-08-06T10:00:00.000Z"}"#
        );
    }

    #[test]
    fn test_serde_roundtrip() {
        let saved = SavedTime {
            moves: 7,
            time: TimeParts::from_millis(12_345),
            date: "2026-08-06T10:00:00.000Z".to_string(),
        };
        let json = serde_json::to_string(&saved).unwrap();
        let parsed: SavedTime = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, saved);
    }
}

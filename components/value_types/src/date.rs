//! Date payloads.
//!
//! Dates are epoch-millisecond based. An out-of-range timestamp produces
//! an invalid date rather than an error, so date construction never fails.

use chrono::{DateTime, TimeZone, Utc};
use std::fmt;

/// A point-in-time value, possibly invalid.
///
/// # Examples
///
/// ```
/// use value_types::DateValue;
///
/// let d = DateValue::from_timestamp_ms(0);
/// assert!(d.is_valid());
/// assert_eq!(d.timestamp_ms(), Some(0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateValue {
    instant: Option<DateTime<Utc>>,
}

impl DateValue {
    /// The current instant.
    pub fn now() -> Self {
        DateValue {
            instant: Some(Utc::now()),
        }
    }

    /// Construct from milliseconds since the Unix epoch. Out-of-range
    /// timestamps yield an invalid date.
    pub fn from_timestamp_ms(ms: i64) -> Self {
        DateValue {
            instant: Utc.timestamp_millis_opt(ms).single(),
        }
    }

    /// An invalid date.
    pub fn invalid() -> Self {
        DateValue { instant: None }
    }

    /// Whether this date holds a real instant.
    pub fn is_valid(&self) -> bool {
        self.instant.is_some()
    }

    /// Milliseconds since the Unix epoch, if valid.
    pub fn timestamp_ms(&self) -> Option<i64> {
        self.instant.map(|dt| dt.timestamp_millis())
    }
}

impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.instant {
            Some(dt) => write!(f, "{}", dt.to_rfc3339()),
            None => write!(f, "Invalid Date"),
        }
    }
}

//! Integer nanosecond timestamps.

use core::fmt;
use core::ops::{Add, Sub};

use serde::{Deserialize, Serialize};
use serde_json::Value;

const NANOS_PER_MILLI: f64 = 1e6;
const NANOS_PER_SECOND: f64 = 1e9;
const NANOS_PER_MINUTE: f64 = 6e10;

/// A point or span on the score timeline, stored as signed nanoseconds.
///
/// On the wire a `Time` is a plain JSON integer. The floating-point
/// constructors are lossy: the scaled value is truncated toward zero, and
/// values outside the `i64` range saturate.
///
/// # Example
///
/// ```rust
/// use grapher_core::Time;
///
/// assert_eq!(Time::from_millis(1.5).as_nanos(), 1_500_000);
/// assert_eq!(Time::from_seconds(2.0), Time::from_millis(2000.0));
/// assert!(Time::ZERO < Time::from_nanos(1));
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Time(i64);

impl Time {
    /// The start of the timeline.
    pub const ZERO: Time = Time(0);

    /// Create a time from a nanosecond count.
    pub const fn from_nanos(nanos: i64) -> Self {
        Self(nanos)
    }

    /// Create a time from milliseconds, truncating sub-nanosecond precision.
    pub fn from_millis(millis: f64) -> Self {
        Self((millis * NANOS_PER_MILLI) as i64)
    }

    /// Create a time from seconds, truncating sub-nanosecond precision.
    pub fn from_seconds(seconds: f64) -> Self {
        Self((seconds * NANOS_PER_SECOND) as i64)
    }

    /// Create a time from minutes, truncating sub-nanosecond precision.
    pub fn from_minutes(minutes: f64) -> Self {
        Self((minutes * NANOS_PER_MINUTE) as i64)
    }

    /// The nanosecond count.
    pub const fn as_nanos(self) -> i64 {
        self.0
    }

    /// The time in (fractional) seconds.
    pub fn as_secs_f64(self) -> f64 {
        self.0 as f64 / NANOS_PER_SECOND
    }
}

impl Add for Time {
    type Output = Time;

    fn add(self, rhs: Time) -> Time {
        Time(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Time {
    type Output = Time;

    fn sub(self, rhs: Time) -> Time {
        Time(self.0.saturating_sub(rhs.0))
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ns", self.0)
    }
}

impl From<Time> for Value {
    fn from(time: Time) -> Self {
        Value::from(time.0)
    }
}

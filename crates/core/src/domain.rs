use crate::utils::format_rate;
use chrono::{DateTime, Duration, Utc};
use std::fmt;

/// Length of the trailing window the sales rate is computed over
pub const WINDOW_HOURS: i64 = 24;

/// Lower bound for "since" queries; instants equal to `since` are outside the window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub since: DateTime<Utc>,
}

impl TimeWindow {
    /// `None` when `now - length` falls outside chrono's representable range
    pub fn trailing(now: DateTime<Utc>, length: Duration) -> Option<Self> {
        now.checked_sub_signed(length).map(|since| Self { since })
    }

    /// The last `WINDOW_HOURS` hours before `now`
    pub fn last_day(now: DateTime<Utc>) -> Option<Self> {
        Self::trailing(now, Duration::hours(WINDOW_HOURS))
    }

    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        at > self.since
    }
}

/// Sales per customer over one window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SalesRate {
    pub sales: f64,
    pub customers: i64,
    pub window: TimeWindow,
}

impl SalesRate {
    /// Raw ratio; infinite or NaN when no customers were counted
    pub fn value(&self) -> f64 {
        self.sales / self.customers as f64
    }

    pub fn is_defined(&self) -> bool {
        self.value().is_finite()
    }
}

impl fmt::Display for SalesRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_rate(self.value()))
    }
}

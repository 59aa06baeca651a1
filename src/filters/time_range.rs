use std::fmt;
use std::str::FromStr;

use anyhow::{Result, bail};
use chrono::{DateTime, Duration, Utc};
use clap::ValueEnum;

/// Recency windows for `--past`.
///
/// Windows are flat durations, not calendar periods: a month is always 30 days and
/// a year is always 365 days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TimeRange {
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl TimeRange {
    pub fn window(self) -> Duration {
        match self {
            TimeRange::Hour => Duration::hours(1),
            TimeRange::Day => Duration::hours(24),
            TimeRange::Week => Duration::days(7),
            TimeRange::Month => Duration::days(30),
            TimeRange::Year => Duration::days(365),
        }
    }

    /// Earliest start time still inside the window
    pub fn cutoff(self, now: DateTime<Utc>) -> DateTime<Utc> {
        now - self.window()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TimeRange::Hour => "hour",
            TimeRange::Day => "day",
            TimeRange::Week => "week",
            TimeRange::Month => "month",
            TimeRange::Year => "year",
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeRange {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "hour" => Ok(TimeRange::Hour),
            "day" => Ok(TimeRange::Day),
            "week" => Ok(TimeRange::Week),
            "month" => Ok(TimeRange::Month),
            "year" => Ok(TimeRange::Year),
            other => bail!("Unknown time range '{}'. Valid: hour, day, week, month, year", other),
        }
    }
}

/// Anything with an optional, timezone-aware start time
pub trait HasStartTime {
    fn start_time(&self) -> Option<DateTime<Utc>>;
}

impl HasStartTime for Option<DateTime<Utc>> {
    fn start_time(&self) -> Option<DateTime<Utc>> {
        *self
    }
}

/// Keep conversations started within `range` of now.
///
/// `None` returns the input unchanged. Otherwise conversations without a start time
/// are dropped.
pub fn filter_by_range<T: HasStartTime>(conversations: Vec<T>, range: Option<TimeRange>) -> Vec<T> {
    filter_by_range_at(conversations, range, Utc::now())
}

/// [`filter_by_range`] against an explicit `now`
pub fn filter_by_range_at<T: HasStartTime>(
    conversations: Vec<T>,
    range: Option<TimeRange>,
    now: DateTime<Utc>,
) -> Vec<T> {
    let Some(range) = range else {
        return conversations;
    };

    let cutoff = range.cutoff(now);
    conversations
        .into_iter()
        .filter(|c| c.start_time().is_some_and(|start| start >= cutoff))
        .collect()
}

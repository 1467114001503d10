use chrono::{DateTime, Local, TimeZone, Utc};

/// Format used for history timestamps, e.g. `2024/05/03 14:05:09`.
pub const HISTORY_TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Clock abstraction so services and tests control "now".
#[derive(Debug, Clone, Copy, Default)]
pub enum Clock {
    #[default]
    Default,
    Fixed(DateTime<Utc>),
}

impl Clock {
    /// Returns a clock that uses the current system time.
    #[must_use]
    pub fn default_clock() -> Self {
        Self::Default
    }

    /// Returns a clock fixed at the given timestamp.
    #[must_use]
    pub fn fixed(at: DateTime<Utc>) -> Self {
        Self::Fixed(at)
    }

    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::Default => Utc::now(),
            Clock::Fixed(t) => *t,
        }
    }
}

/// Render `at` in the given zone using [`HISTORY_TIMESTAMP_FORMAT`].
#[must_use]
pub fn format_timestamp<Tz: TimeZone>(at: DateTime<Utc>, zone: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.with_timezone(zone)
        .format(HISTORY_TIMESTAMP_FORMAT)
        .to_string()
}

/// Render `at` as local wall-clock time. No timezone marker is included.
#[must_use]
pub fn format_local_timestamp(at: DateTime<Utc>) -> String {
    format_timestamp(at, &Local)
}

/// Deterministic timestamp for tests and examples (2023-11-14T22:13:20Z).
pub const FIXED_TEST_TIMESTAMP: i64 = 1_700_000_000;

/// Returns a deterministic `DateTime<Utc>` for tests and doc examples.
///
/// # Panics
///
/// Panics if the fixed timestamp cannot be represented.
#[must_use]
pub fn fixed_now() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(FIXED_TEST_TIMESTAMP, 0)
        .expect("fixed timestamp should be valid")
}

/// Returns a `Clock` fixed at the deterministic test timestamp.
#[must_use]
pub fn fixed_clock() -> Clock {
    Clock::fixed(fixed_now())
}

// Countdown model
// Time-remaining breakdown, target parsing and the display strings built from them

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};

/// Shown when no target date has been stored yet.
pub const NO_TARGET_MESSAGE: &str = "Enter a date to start countdown";
/// Shown once the target moment has been reached.
pub const FINISHED_MESSAGE: &str = "Countdown finished!";
/// Label used in place of a missing event title.
pub const DEFAULT_EVENT_LABEL: &str = "your event";

/// Format the date input writes back to storage (matches an HTML `datetime-local` value).
pub const TARGET_INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

const LOCAL_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Remaining time split into calendar-ish units.
///
/// `days` is unbounded; the other fields are reduced modulo their natural period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeLeft {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl TimeLeft {
    /// Break a strictly positive millisecond difference into its fields.
    pub fn from_millis(diff_ms: i64) -> Option<Self> {
        if diff_ms <= 0 {
            return None;
        }

        Some(Self {
            days: diff_ms / MS_PER_DAY,
            hours: (diff_ms / MS_PER_HOUR) % 24,
            minutes: (diff_ms / MS_PER_MINUTE) % 60,
            seconds: (diff_ms / MS_PER_SECOND) % 60,
        })
    }

    pub fn format(&self) -> String {
        format!(
            "{} days, {} h, {} m, {} s",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// Time left until `target`, or `None` once `target <= now`.
pub fn calculate_time_left(target: DateTime<Local>, now: DateTime<Local>) -> Option<TimeLeft> {
    let diff_ms = target.signed_duration_since(now).num_milliseconds();
    TimeLeft::from_millis(diff_ms)
}

/// Parse a stored target date.
///
/// Accepts RFC 3339 timestamps, local `YYYY-MM-DD[T ]HH:MM[:SS]` values and bare
/// dates (local midnight). Anything else yields `None`.
pub fn parse_target(raw: &str) -> Option<DateTime<Local>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Local));
    }

    for format in LOCAL_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return resolve_local(naive);
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .and_then(resolve_local)
}

/// Render a target in the same shape the date input persists.
pub fn format_target(target: DateTime<Local>) -> String {
    target.format(TARGET_INPUT_FORMAT).to_string()
}

// DST gaps have no local mapping; ambiguous times take the earlier instant.
fn resolve_local(naive: NaiveDateTime) -> Option<DateTime<Local>> {
    Local.from_local_datetime(&naive).earliest()
}

/// The "time remaining" line.
///
/// `surface_available` is false in headless contexts, where nothing is shown.
pub fn time_left_title(
    target: Option<&str>,
    now: DateTime<Local>,
    surface_available: bool,
) -> String {
    if !surface_available {
        return String::new();
    }

    match target.and_then(parse_target) {
        None => NO_TARGET_MESSAGE.to_string(),
        Some(target) => match calculate_time_left(target, now) {
            Some(left) => left.format(),
            None => FINISHED_MESSAGE.to_string(),
        },
    }
}

/// The heading above the countdown.
pub fn countdown_title(title: Option<&str>, surface_available: bool) -> String {
    if !surface_available {
        return String::new();
    }

    match title.filter(|title| !title.trim().is_empty()) {
        Some(title) => format!("Time to {}", title),
        None => format!("Time to {}", DEFAULT_EVENT_LABEL),
    }
}

pub fn title_present(title: Option<&str>, surface_available: bool) -> bool {
    surface_available && title.is_some_and(|title| !title.trim().is_empty())
}

/// Everything the presentation layer needs to draw the countdown.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CountdownDisplay {
    pub countdown_title: String,
    pub time_left_title: String,
    pub title_present: bool,
}

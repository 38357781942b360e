//! Display formatting for the upgrade start time.

use chrono::{DateTime, TimeZone, Utc};

const UTC_FORMAT: &str = "%d %b %Y %H:%M:%S";
const ZONED_FORMAT: &str = "%d %b %Y %H:%M:%S (%z)";

/// Both renderings of `initiated_at` shown on the polling screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitiatedAtLabels {
    /// Primary label, in UTC without offset, e.g. `01 Mar 2024 12:30:00`.
    pub utc: String,
    /// Tooltip, in the viewer's zone with a numeric offset,
    /// e.g. `01 Mar 2024 13:30:00 (+0100)`.
    pub local: String,
}

impl InitiatedAtLabels {
    /// Format in the given zone. An absent timestamp renders as the Unix epoch.
    pub fn in_zone<Tz>(initiated_at: Option<DateTime<Utc>>, zone: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let at = initiated_at.unwrap_or(DateTime::UNIX_EPOCH);
        Self {
            utc: at.format(UTC_FORMAT).to_string(),
            local: at.with_timezone(zone).format(ZONED_FORMAT).to_string(),
        }
    }

    /// Format using the machine's local zone.
    pub fn local(initiated_at: Option<DateTime<Utc>>) -> Self {
        Self::in_zone(initiated_at, &chrono::Local)
    }
}

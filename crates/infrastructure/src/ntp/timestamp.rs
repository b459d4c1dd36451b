use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};
use probewire_domain::config::DisplayZone;
use std::fmt;

/// Seconds between the NTP epoch (1900-01-01) and the Unix epoch.
pub const NTP_UNIX_OFFSET: i64 = 2_208_988_800;

/// e.g. `Mon Jan 02 2006 15:04:05 GMT-0700`
pub const DISPLAY_FORMAT: &str = "%a %b %d %Y %H:%M:%S GMT%z";

/// Instant `seconds` after 1900-01-01T00:00:00Z.
///
/// Era 0 only: values are not unwrapped past the 2036 rollover.
pub fn from_ntp_seconds(seconds: u32) -> DateTime<Utc> {
    DateTime::UNIX_EPOCH + TimeDelta::seconds(i64::from(seconds) - NTP_UNIX_OFFSET)
}

pub fn ntp_epoch() -> DateTime<Utc> {
    from_ntp_seconds(0)
}

pub fn format_in<Tz: TimeZone>(instant: DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: fmt::Display,
{
    instant.with_timezone(tz).format(DISPLAY_FORMAT).to_string()
}

pub fn format_display(instant: DateTime<Utc>, zone: DisplayZone) -> String {
    match zone {
        DisplayZone::Local => format_in(instant, &Local),
        DisplayZone::Named(tz) => format_in(instant, &tz),
    }
}

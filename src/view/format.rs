use chrono::{DateTime, Local, TimeZone, Utc};
use std::fmt::Display;

/// `Wednesday, December 18, 2019, 02:39 AM`
const CREATED_FORMAT: &str = "%A, %B %-d, %Y, %I:%M %p";

/// Human readable creation time in the local timezone.
pub fn format_created(created: &DateTime<Utc>) -> String {
    format_created_in(created, &Local)
}

pub fn format_created_in<Tz>(created: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    created.with_timezone(tz).format(CREATED_FORMAT).to_string()
}

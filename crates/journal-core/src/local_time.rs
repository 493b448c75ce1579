//! Real-world clock, formatted with `strftime`-style specifiers.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, TimeZone};
use std::fmt::{Display, Write};

/// Render the host's current local time.
pub fn format_local_time(format: &str) -> String {
    format_time(format, &Local::now())
}

/// Render a timestamp through a `strftime` format.
///
/// An invalid specifier renders the whole output as an empty string.
pub fn format_time<Tz>(format: &str, time: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let items: Vec<Item<'_>> = StrftimeItems::new(format).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return String::new();
    }

    let mut out = String::new();
    match write!(out, "{}", time.format_with_items(items.into_iter())) {
        Ok(()) => out,
        Err(_) => String::new(),
    }
}

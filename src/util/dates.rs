//! French-style date rendering for backend timestamps.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

/// Render an RFC 3339 timestamp as `dd/mm/yyyy hh:mm`.
///
/// Unparseable input is returned unchanged.
pub fn format_timestamp(raw: &str) -> String {
    let format = format_description!("[day]/[month]/[year] [hour]:[minute]");
    OffsetDateTime::parse(raw.trim(), &Rfc3339)
        .ok()
        .and_then(|ts| ts.format(format).ok())
        .unwrap_or_else(|| raw.to_owned())
}

/// Render an ISO `yyyy-mm-dd` date as `dd/mm/yyyy`.
///
/// Unparseable input is returned unchanged.
pub fn format_date(raw: &str) -> String {
    let input = format_description!("[year]-[month]-[day]");
    let output = format_description!("[day]/[month]/[year]");
    Date::parse(raw.trim(), input)
        .ok()
        .and_then(|date| date.format(output).ok())
        .unwrap_or_else(|| raw.to_owned())
}

use chrono::{DateTime, Datelike, Utc};

/// Abbreviated US month names used in chat replies.
const SHORT_MONTHS: [&str; 12] = [
    "Jan.", "Feb.", "March", "April", "May", "June", "July", "Aug.", "Sep.", "Oct.", "Nov.",
    "Dec.",
];

/// Formats a join date as `Month Year`, e.g. `March 2023`.
pub fn format_join_date(date: &DateTime<Utc>) -> String {
    date.format("%B %Y").to_string()
}

/// Formats a join date with an abbreviated month, e.g. `Sep. 2023`.
///
/// Used by the plain-text `/user` reply where space is tight.
pub fn format_short_join_date(date: &DateTime<Utc>) -> String {
    format!("{} {}", SHORT_MONTHS[date.month0() as usize], date.year())
}

/// Formats the stat card footer timestamp, e.g. `March 4, 2024 17:05:09 UTC`.
///
/// Time is always shown in 24-hour UTC.
pub fn format_footer_date(date: &DateTime<Utc>) -> String {
    date.format("%B %-d, %Y %H:%M:%S UTC").to_string()
}

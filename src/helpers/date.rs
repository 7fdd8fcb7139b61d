//! Date helper functions

use chrono::{DateTime, TimeZone};

/// Format a date using Moment.js-compatible format string
///
/// # Examples
/// ```ignore
/// format_date(&date, "D MMM") // -> "1 Mar"
/// ```
pub fn format_date<Tz: TimeZone>(date: &DateTime<Tz>, format: &str) -> String
where
    Tz::Offset: std::fmt::Display,
{
    // Convert Moment.js format to chrono format
    let chrono_format = moment_to_chrono_format(format);
    date.format(&chrono_format).to_string()
}

/// Convert Moment.js format to chrono format
fn moment_to_chrono_format(format: &str) -> String {
    // Process from longest to shortest patterns within each category
    let replacements = [
        // Year (process first as they're uppercase)
        ("YYYY", "%Y"),
        ("YY", "%y"),
        // Month (uppercase M)
        ("MMMM", "%B"), // Full month name
        ("MMM", "%b"),  // Abbreviated month name
        ("MM", "%m"),   // Two-digit month
        // Day of month (uppercase D) - process before lowercase
        ("DDDD", "%j"), // Day of year
        ("DD", "%d"),   // Two-digit day
        ("D", "%-d"),   // Day without leading zero
        // Hour 24h (uppercase H)
        ("HH", "%H"),
        // Hour 12h (lowercase h)
        ("hh", "%I"),
        // Minute (lowercase m after we've processed MM)
        ("mm", "%M"),
        // Second (lowercase s)
        ("ss", "%S"),
        // Day of week (lowercase d) - process last to avoid conflicts
        ("dddd", "%A"), // Full weekday name
        ("ddd", "%a"),  // Abbreviated weekday name
        // Timezone
        ("ZZ", "%z"),
    ];

    let mut result = format.to_string();

    for (from, to) in replacements {
        result = result.replace(from, to);
    }

    result
}

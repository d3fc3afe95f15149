/// Utilities for date formatting
///
/// Provides consistent date formatting across the listing pages
use chrono::NaiveDate;

/// Placeholder for a missing date
pub const NO_DATE: &str = "N/A";

/// Format a date as YYYY-MM-DD
/// Example: 2025-03-14 -> "2025-03-14"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Format an optional date, `N/A` when absent
pub fn format_optional_date(date: Option<NaiveDate>) -> String {
    date.map(format_date).unwrap_or_else(|| NO_DATE.to_string())
}

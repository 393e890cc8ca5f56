/// Shared formatting utilities for the UI layer.
///
/// Prices arrive as plain `f64` dollars and timestamps as UTC `DateTime`s;
/// everything here produces display strings for the two dashboards.
use chrono::{DateTime, NaiveDate, Utc};
use shared_ui::Date;

/// Date display pattern shared through context by the root shell.
///
/// Every date rendered on a page goes through [`DateFormat::date`] so the
/// two dashboards stay consistent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateFormat {
    pub date: &'static str,
    pub time: &'static str,
}

impl Default for DateFormat {
    fn default() -> Self {
        Self {
            date: "%b %-d, %Y",
            time: "%-I:%M %p",
        }
    }
}

impl DateFormat {
    /// Format a calendar date, e.g. "Jan 20, 2026".
    pub fn date(&self, date: NaiveDate) -> String {
        date.format(self.date).to_string()
    }

    /// Format a UTC timestamp, e.g. "Jan 20, 2026 9:35 PM".
    pub fn datetime(&self, value: DateTime<Utc>) -> String {
        format!("{} {}", value.format(self.date), value.format(self.time))
    }
}

/// Format an hourly price as "$2.50/hr".
pub fn format_hourly_price(price: f64) -> String {
    format!("{}/hr", format_price(price))
}

/// Format a dollar amount with two decimals.
pub fn format_price(price: f64) -> String {
    format!("${price:.2}")
}

/// Convert a picker date into the chrono date the filters work with.
pub fn picker_to_naive(date: Date) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(date.year(), u8::from(date.month()) as u32, date.day() as u32)
}

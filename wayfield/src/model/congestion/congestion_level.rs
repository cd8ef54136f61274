use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// congestion regimes parameterizing crossing penalties, after Jaakkonen
/// (2013)'s assessment of intersection delays in the Helsinki metropolitan
/// area (table 28, p. 61).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CongestionLevel {
    RushHour,
    OffPeak,
    Average,
}

impl CongestionLevel {
    /// the weekday congestion regime for a clock time, following the five
    /// fixed bands of the Helsinki traffic index: off-peak until 7:00, rush
    /// hour until 10:00, average until 14:00, rush hour until 18:00, then
    /// off-peak for the rest of the day.
    pub fn from_seconds_since_midnight(seconds_since_midnight: u32) -> CongestionLevel {
        if seconds_since_midnight < 25_200 {
            // 7:00
            CongestionLevel::OffPeak
        } else if seconds_since_midnight < 36_000 {
            // 10:00
            CongestionLevel::RushHour
        } else if seconds_since_midnight < 50_400 {
            // 14:00
            CongestionLevel::Average
        } else if seconds_since_midnight < 64_800 {
            // 18:00
            CongestionLevel::RushHour
        } else {
            CongestionLevel::OffPeak
        }
    }

    /// the congestion regime for a query's departure date and clock time.
    /// weekends are off-peak at any hour; a query without a date falls back
    /// to the average regime.
    pub fn from_date_and_time(
        date: Option<NaiveDate>,
        seconds_since_midnight: u32,
    ) -> CongestionLevel {
        match date {
            Some(date) => match date.weekday() {
                Weekday::Sat | Weekday::Sun => CongestionLevel::OffPeak,
                _ => CongestionLevel::from_seconds_since_midnight(seconds_since_midnight),
            },
            None => CongestionLevel::Average,
        }
    }
}

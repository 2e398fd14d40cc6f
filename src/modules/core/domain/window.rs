//! Trailing date window anchored to the dataset's latest observation

use chrono::{Days, NaiveDate};

use crate::error::ClimateError;

/// Date format used by the `date` column
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Inclusive `[start, end]` span of ISO dates
///
/// `end` is always the dataset's global maximum date, never today's date and
/// never a per-station maximum. Bounds are kept as strings because the store
/// compares dates lexically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrailingWindow {
    start: String,
    end: String,
}

impl TrailingWindow {
    /// Build the window of `days` days ending at `max_date`
    pub fn ending_at(max_date: &str, days: u32) -> Result<Self, ClimateError> {
        let end = NaiveDate::parse_from_str(max_date, DATE_FORMAT).map_err(|e| {
            ClimateError::QueryExecution(format!(
                "Invalid maximum date '{}': {}",
                max_date, e
            ))
        })?;

        let start = end.checked_sub_days(Days::new(days.into())).ok_or_else(|| {
            ClimateError::QueryExecution(format!(
                "Window of {} days before '{}' is out of range",
                days, max_date
            ))
        })?;

        Ok(Self {
            start: start.format(DATE_FORMAT).to_string(),
            end: end.format(DATE_FORMAT).to_string(),
        })
    }

    /// First date in the window
    pub fn start(&self) -> &str {
        &self.start
    }

    /// Last date in the window
    pub fn end(&self) -> &str {
        &self.end
    }

    /// Whether `date` falls inside the window (string comparison)
    pub fn contains(&self, date: &str) -> bool {
        date >= self.start.as_str() && date <= self.end.as_str()
    }
}

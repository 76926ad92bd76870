//! Publish-date lookback window

use anyhow::{anyhow, Result};
use chrono::{DateTime, TimeDelta, Utc};

/// Timestamp layout sent to the provider: microseconds and a literal `Z`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6fZ";

/// The `[start, end]` publish-date range of a search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookbackWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl LookbackWindow {
    /// Window ending at `end` and reaching back `ceil(365 * years)` days
    pub fn ending_at(end: DateTime<Utc>, years: f64) -> Result<Self> {
        let days = lookback_days(years)?;
        let span = TimeDelta::try_days(days)
            .ok_or_else(|| anyhow!("lookback of {} days is out of range", days))?;
        let start = end
            .checked_sub_signed(span)
            .ok_or_else(|| anyhow!("lookback of {} days reaches before the supported calendar", days))?;
        Ok(Self { start, end })
    }

    /// Window ending now
    pub fn until_now(years: f64) -> Result<Self> {
        Self::ending_at(Utc::now(), years)
    }

    pub fn start_published_date(&self) -> String {
        format_timestamp(&self.start)
    }

    pub fn end_published_date(&self) -> String {
        format_timestamp(&self.end)
    }
}

/// Number of whole days covered by `years`, rounded up
pub fn lookback_days(years: f64) -> Result<i64> {
    if !years.is_finite() || years <= 0.0 {
        return Err(anyhow!("lookback years must be positive, got {}", years));
    }
    let days = (365.0 * years).ceil();
    if days > i64::MAX as f64 {
        return Err(anyhow!("lookback of {} years is out of range", years));
    }
    Ok(days as i64)
}

pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 12, 30, 45).unwrap()
            + TimeDelta::microseconds(123_456)
    }

    #[test]
    fn test_three_years_is_1095_days() {
        let window = LookbackWindow::ending_at(fixed_now(), 3.0).unwrap();
        assert_eq!(window.end - window.start, TimeDelta::days(1095));
        assert_eq!(window.start_published_date(), "2021-03-16T12:30:45.123456Z");
        assert_eq!(window.end_published_date(), "2024-03-15T12:30:45.123456Z");
    }

    #[test]
    fn test_fractional_years_round_up() {
        assert_eq!(lookback_days(1.0).unwrap(), 365);
        assert_eq!(lookback_days(0.5).unwrap(), 183);
        assert_eq!(lookback_days(0.001).unwrap(), 1);
        assert_eq!(lookback_days(2.5).unwrap(), 913);
    }

    #[test]
    fn test_whole_seconds_keep_microsecond_field() {
        let at = Utc.with_ymd_and_hms(2020, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(format_timestamp(&at), "2020-01-02T03:04:05.000000Z");
    }

    #[test]
    fn test_invalid_years_rejected() {
        assert!(lookback_days(0.0).is_err());
        assert!(lookback_days(-3.0).is_err());
        assert!(lookback_days(f64::NAN).is_err());
        assert!(LookbackWindow::ending_at(fixed_now(), 1e9).is_err());
    }
}

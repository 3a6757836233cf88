use crate::error::CoreError;
use chrono::{DateTime, FixedOffset, NaiveDate, Utc};

pub const DEFAULT_UPCOMING_DAYS: i64 = 7;
pub const MAX_UPCOMING_DAYS: i64 = 365;

pub fn local_today(now_utc: i64, local_offset: FixedOffset) -> Result<NaiveDate, CoreError> {
    let now = DateTime::<Utc>::from_timestamp(now_utc, 0).ok_or(CoreError::InvalidTimestamp)?;
    Ok(now.with_timezone(&local_offset).date_naive())
}

pub fn validate_upcoming_days(days: i64) -> Result<i64, CoreError> {
    if !(0..=MAX_UPCOMING_DAYS).contains(&days) {
        return Err(CoreError::InvalidUpcomingDays(days));
    }
    Ok(days)
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

#[cfg(test)]
mod tests {
    use super::{is_leap_year, local_today, validate_upcoming_days};
    use crate::error::CoreError;
    use chrono::{FixedOffset, NaiveDate, TimeZone, Utc};

    #[test]
    fn local_today_applies_offset() {
        let now = Utc
            .with_ymd_and_hms(2024, 12, 31, 23, 30, 0)
            .unwrap()
            .timestamp();
        let utc = FixedOffset::east_opt(0).unwrap();
        let kyiv = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(
            local_today(now, utc).unwrap(),
            NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
        );
        assert_eq!(
            local_today(now, kyiv).unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
        );
    }

    #[test]
    fn local_today_rejects_out_of_range_timestamp() {
        let offset = FixedOffset::east_opt(0).unwrap();
        assert_eq!(
            local_today(i64::MAX, offset).unwrap_err(),
            CoreError::InvalidTimestamp
        );
    }

    #[test]
    fn upcoming_days_bounds() {
        assert_eq!(validate_upcoming_days(0).unwrap(), 0);
        assert_eq!(validate_upcoming_days(365).unwrap(), 365);
        assert!(validate_upcoming_days(-1).is_err());
        assert!(validate_upcoming_days(366).is_err());
    }

    #[test]
    fn leap_year_logic() {
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2023));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2000));
    }
}

use crate::domain::field::ValueField;
use crate::error::CoreError;
use crate::rules::is_leap_year;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const BIRTHDAY_FORMAT: &str = "%Y.%m.%d";

/// A calendar date rendered as `YYYY.MM.DD`.
///
/// Parsing only checks the shape and the calendar. Rejecting dates in the
/// future is left to [`ContactRecord::add_birthday`](crate::ContactRecord::add_birthday),
/// so computed occurrences can be wrapped with [`BirthdayDate::from_trusted`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "ValueField", into = "ValueField")]
pub struct BirthdayDate(NaiveDate);

impl BirthdayDate {
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        if !has_birthday_shape(raw) {
            return Err(CoreError::InvalidBirthday(raw.to_string()));
        }
        NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| CoreError::InvalidBirthday(raw.to_string()))
    }

    pub fn from_trusted(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn format(&self) -> String {
        self.0.format(BIRTHDAY_FORMAT).to_string()
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The same month and day in `year`. A Feb 29 birthday lands on Feb 28
    /// when `year` is not a leap year.
    pub fn occurrence_in(&self, year: i32) -> Option<NaiveDate> {
        let (month, day) = (self.0.month(), self.0.day());
        if month == 2 && day == 29 && !is_leap_year(year) {
            return NaiveDate::from_ymd_opt(year, 2, 28);
        }
        NaiveDate::from_ymd_opt(year, month, day)
    }
}

fn has_birthday_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(idx, byte)| match idx {
            4 | 7 => *byte == b'.',
            _ => byte.is_ascii_digit(),
        })
}

impl fmt::Display for BirthdayDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

impl FromStr for BirthdayDate {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::parse(raw)
    }
}

impl TryFrom<ValueField> for BirthdayDate {
    type Error = CoreError;

    fn try_from(field: ValueField) -> Result<Self, Self::Error> {
        Self::parse(&field.value)
    }
}

impl From<BirthdayDate> for ValueField {
    fn from(date: BirthdayDate) -> Self {
        ValueField {
            value: date.format(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::BirthdayDate;
    use crate::error::CoreError;
    use chrono::NaiveDate;

    #[test]
    fn parse_and_format_roundtrip() {
        for (y, m, d) in [(1990, 1, 5), (2000, 2, 29), (1, 12, 31), (2024, 10, 9)] {
            let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
            let formatted = BirthdayDate::from_trusted(date).format();
            assert_eq!(BirthdayDate::parse(&formatted).unwrap().date(), date);
        }
    }

    #[test]
    fn format_pads_components() {
        let date = NaiveDate::from_ymd_opt(987, 3, 4).unwrap();
        assert_eq!(BirthdayDate::from_trusted(date).format(), "0987.03.04");
    }

    #[test]
    fn parse_rejects_malformed_values() {
        for raw in [
            "",
            "2023-05-01",
            "2023.13.40",
            "2023.02.30",
            "2023.5.1",
            "01.05.2023",
            "2023.05.011",
            "+023.05.01",
        ] {
            assert!(BirthdayDate::parse(raw).is_err(), "{raw:?}");
        }
    }

    #[test]
    fn parse_rejects_surrounding_whitespace() {
        for raw in [" 2023.05.01", "2023.05.01 ", " 2023.05.01 ", "2023.05.01\n"] {
            let err = BirthdayDate::parse(raw).unwrap_err();
            assert!(matches!(err, CoreError::InvalidBirthday(_)), "{raw:?}");
        }
    }

    #[test]
    fn occurrence_keeps_month_and_day() {
        let birthday = BirthdayDate::parse("1990.07.15").unwrap();
        assert_eq!(
            birthday.occurrence_in(2031),
            NaiveDate::from_ymd_opt(2031, 7, 15)
        );
    }

    #[test]
    fn occurrence_of_leap_day_falls_back_to_feb_28() {
        let birthday = BirthdayDate::parse("2000.02.29").unwrap();
        assert_eq!(
            birthday.occurrence_in(2025),
            NaiveDate::from_ymd_opt(2025, 2, 28)
        );
        assert_eq!(
            birthday.occurrence_in(2028),
            NaiveDate::from_ymd_opt(2028, 2, 29)
        );
    }
}

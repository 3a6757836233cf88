use crate::domain::field::ValueField;
use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const COUNTRY_CODE: &str = "38";
const NATIONAL_DIGITS: usize = 10;

/// A phone number in canonical `+38XXXXXXXXXX` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ValueField", into = "ValueField")]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Strips formatting and one leading country code, then requires exactly
    /// ten national digits.
    pub fn normalize(raw: &str) -> Result<Self, CoreError> {
        let digits: String = raw
            .trim()
            .chars()
            .filter(|ch| ch.is_ascii_digit())
            .collect();
        let national = digits.strip_prefix(COUNTRY_CODE).unwrap_or(&digits);
        if national.len() != NATIONAL_DIGITS {
            return Err(CoreError::InvalidPhone(raw.to_string()));
        }
        Ok(Self(format!("+{COUNTRY_CODE}{national}")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Compares against an already-normalized string without re-normalizing it.
    pub fn matches_raw(&self, raw: &str) -> bool {
        self.0 == raw
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PhoneNumber {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::normalize(raw)
    }
}

impl TryFrom<ValueField> for PhoneNumber {
    type Error = CoreError;

    fn try_from(field: ValueField) -> Result<Self, Self::Error> {
        Self::normalize(&field.value)
    }
}

impl From<PhoneNumber> for ValueField {
    fn from(phone: PhoneNumber) -> Self {
        ValueField { value: phone.0 }
    }
}

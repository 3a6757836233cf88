use crate::domain::{BirthdayDate, ContactName, PhoneNumber};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact whose birthday falls inside the requested window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpcomingBirthday {
    pub name: ContactName,
    pub phones: Vec<PhoneNumber>,
    pub congratulation_date: BirthdayDate,
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(
            f,
            "Contact name: {}, phones: {}, birthday: {}",
            self.name, phones, self.congratulation_date
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpcomingBirthdaysDto {
    pub today: String,
    pub within_days: i64,
    pub items: Vec<UpcomingBirthday>,
}

use crate::domain::birthday::BirthdayDate;
use crate::domain::name::ContactName;
use crate::domain::phone::PhoneNumber;
use crate::error::CoreError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    name: ContactName,
    #[serde(default)]
    phones: Vec<PhoneNumber>,
    #[serde(default)]
    birthday: Option<BirthdayDate>,
}

/// Outcome of [`ContactRecord::remove_phone`].
///
/// Unparseable input is not an error for removal; it is handed back as
/// `Ignored` so callers can still tell the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhoneRemoval {
    Removed(PhoneNumber),
    NotPresent(PhoneNumber),
    Ignored(CoreError),
}

impl ContactRecord {
    pub fn new(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn from_parts(
        name: ContactName,
        phones: Vec<PhoneNumber>,
        birthday: Option<BirthdayDate>,
    ) -> Self {
        Self {
            name,
            phones,
            birthday,
        }
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<BirthdayDate> {
        self.birthday
    }

    pub fn has_phone(&self, phone: &PhoneNumber) -> bool {
        self.phones.contains(phone)
    }

    /// Appends without checking for duplicates.
    pub fn add_phone(&mut self, raw: &str) -> Result<PhoneNumber, CoreError> {
        let phone = PhoneNumber::normalize(raw)?;
        self.phones.push(phone.clone());
        Ok(phone)
    }

    pub fn remove_phone(&mut self, raw: &str) -> PhoneRemoval {
        let phone = match PhoneNumber::normalize(raw) {
            Ok(phone) => phone,
            Err(err) => return PhoneRemoval::Ignored(err),
        };
        match self.phones.iter().position(|existing| *existing == phone) {
            Some(idx) => PhoneRemoval::Removed(self.phones.remove(idx)),
            None => PhoneRemoval::NotPresent(phone),
        }
    }

    /// Replaces the first occurrence of `old_raw`; the new number goes to the end.
    pub fn edit_phone(&mut self, old_raw: &str, new_raw: &str) -> Result<(), CoreError> {
        let old = PhoneNumber::normalize(old_raw)?;
        let new = PhoneNumber::normalize(new_raw)?;
        let idx = self
            .phones
            .iter()
            .position(|existing| *existing == old)
            .ok_or_else(|| CoreError::PhoneNotInRecord {
                phone: old.to_string(),
                record: self.to_string(),
            })?;
        self.phones.remove(idx);
        self.phones.push(new);
        Ok(())
    }

    pub fn find_phone(&self, raw: &str) -> Result<&PhoneNumber, CoreError> {
        let phone = PhoneNumber::normalize(raw)?;
        self.phones
            .iter()
            .find(|existing| **existing == phone)
            .ok_or_else(|| CoreError::PhoneNotFound(phone.to_string()))
    }

    /// Sets the birthday and returns the stored value.
    pub fn add_birthday(
        &mut self,
        raw: &str,
        today: NaiveDate,
    ) -> Result<BirthdayDate, CoreError> {
        let birthday = BirthdayDate::parse(raw)?;
        if birthday.date() > today {
            return Err(CoreError::FutureBirthday(birthday.format()));
        }
        self.birthday = Some(birthday);
        Ok(birthday)
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        let birthday = self.birthday.map(|b| b.format()).unwrap_or_default();
        write!(
            f,
            "Contact name: {}, phones: {}, birthday: {}",
            self.name, phones, birthday
        )
    }
}

use crate::domain::{BirthdayDate, ContactName, ContactRecord};
use crate::dto::UpcomingBirthday;
use chrono::{Datelike, NaiveDate};
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Contacts keyed by name, iterated in insertion order.
///
/// Serializes as a map from name to record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: Vec<ContactRecord>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = &ContactRecord> {
        self.records.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &ContactName> {
        self.records.iter().map(ContactRecord::name)
    }

    /// Inserts `record`, replacing any record stored under the same name.
    /// A replaced record keeps its position.
    pub fn add_record(&mut self, record: ContactRecord) {
        match self.position(record.name().as_str()) {
            Some(idx) => self.records[idx] = record,
            None => self.records.push(record),
        }
    }

    pub fn find(&self, name: &str) -> Option<&ContactRecord> {
        self.position(name).map(|idx| &self.records[idx])
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut ContactRecord> {
        self.position(name).map(|idx| &mut self.records[idx])
    }

    pub fn delete(&mut self, name: &str) -> Option<ContactRecord> {
        self.position(name).map(|idx| self.records.remove(idx))
    }

    /// Contacts whose next birthday falls within `within_days` of `today`.
    ///
    /// A birthday on `today` counts as already passed and rolls over to next
    /// year. Results follow the book's order.
    pub fn upcoming_birthdays(&self, today: NaiveDate, within_days: i64) -> Vec<UpcomingBirthday> {
        self.records
            .iter()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let mut occurrence = birthday.occurrence_in(today.year())?;
                if occurrence <= today {
                    occurrence = birthday.occurrence_in(today.year() + 1)?;
                }
                let days_until = (occurrence - today).num_days();
                if !(0..=within_days).contains(&days_until) {
                    return None;
                }
                Some(UpcomingBirthday {
                    name: record.name().clone(),
                    phones: record.phones().to_vec(),
                    congratulation_date: BirthdayDate::from_trusted(occurrence),
                })
            })
            .collect()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records
            .iter()
            .position(|record| record.name().as_str() == name)
    }
}

impl Serialize for AddressBook {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(
            self.records
                .iter()
                .map(|record| (record.name().as_str(), record)),
        )
    }
}

impl<'de> Deserialize<'de> for AddressBook {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(AddressBookVisitor)
    }
}

struct AddressBookVisitor;

impl<'de> Visitor<'de> for AddressBookVisitor {
    type Value = AddressBook;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of contact name to record")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut book = AddressBook::new();
        while let Some((key, record)) = map.next_entry::<String, ContactRecord>()? {
            if key.trim() != record.name().as_str() {
                return Err(de::Error::custom(format!(
                    "record key {key:?} does not match name {:?}",
                    record.name().as_str()
                )));
            }
            book.add_record(record);
        }
        Ok(book)
    }
}

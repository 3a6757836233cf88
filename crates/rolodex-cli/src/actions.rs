use anyhow::Result;
use chrono::NaiveDate;
use rolodex_core::{
    AddressBook, BirthdayDate, ContactName, ContactRecord, PhoneNumber, PhoneRemoval,
    UpcomingBirthday,
};
use serde::Serialize;

use crate::error::not_found;
use crate::util::split_trailing;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddOutcome {
    pub name: ContactName,
    pub phone: PhoneNumber,
    pub created: bool,
    pub duplicate: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeOutcome {
    pub name: ContactName,
    pub old_phone: PhoneNumber,
    pub new_phone: PhoneNumber,
}

/// Adds a phone to a contact, creating the contact when needed.
///
/// Duplicate numbers are refused here rather than in `ContactRecord`.
pub fn add_contact(book: &mut AddressBook, tokens: &[String]) -> Result<AddOutcome> {
    let (name_tokens, params) = split_trailing(tokens, 1)?;
    let name = ContactName::from_tokens(name_tokens)?;
    let phone = PhoneNumber::normalize(&params[0])?;

    let created = book.find(name.as_str()).is_none();
    if created {
        book.add_record(ContactRecord::new(name.clone()));
    }
    let record = book
        .find_mut(name.as_str())
        .ok_or_else(|| not_found(format!("contact {name}")))?;

    let duplicate = record.has_phone(&phone);
    if !duplicate {
        record.add_phone(phone.as_str())?;
    }
    Ok(AddOutcome {
        name,
        phone,
        created,
        duplicate,
    })
}

pub fn change_contact(book: &mut AddressBook, tokens: &[String]) -> Result<ChangeOutcome> {
    let (name_tokens, params) = split_trailing(tokens, 2)?;
    let name = ContactName::from_tokens(name_tokens)?;
    let old_phone = PhoneNumber::normalize(&params[0])?;
    let new_phone = PhoneNumber::normalize(&params[1])?;
    let record = find_record_mut(book, &name)?;
    record.edit_phone(old_phone.as_str(), new_phone.as_str())?;
    Ok(ChangeOutcome {
        name,
        old_phone,
        new_phone,
    })
}

pub fn show_phones<'a>(book: &'a AddressBook, tokens: &[String]) -> Result<&'a ContactRecord> {
    let name = ContactName::from_tokens(tokens)?;
    find_record(book, &name)
}

pub fn remove_phone(book: &mut AddressBook, tokens: &[String]) -> Result<PhoneRemoval> {
    let (name_tokens, params) = split_trailing(tokens, 1)?;
    let name = ContactName::from_tokens(name_tokens)?;
    let record = find_record_mut(book, &name)?;
    Ok(record.remove_phone(&params[0]))
}

pub fn add_birthday(
    book: &mut AddressBook,
    tokens: &[String],
    today: NaiveDate,
) -> Result<(ContactName, BirthdayDate)> {
    let (name_tokens, params) = split_trailing(tokens, 1)?;
    let name = ContactName::from_tokens(name_tokens)?;
    let record = find_record_mut(book, &name)?;
    let birthday = record.add_birthday(&params[0], today)?;
    Ok((name, birthday))
}

pub fn show_birthday<'a>(
    book: &'a AddressBook,
    tokens: &[String],
) -> Result<(&'a ContactName, Option<BirthdayDate>)> {
    let name = ContactName::from_tokens(tokens)?;
    let record = find_record(book, &name)?;
    Ok((record.name(), record.birthday()))
}

pub fn delete_contact(book: &mut AddressBook, tokens: &[String]) -> Result<ContactRecord> {
    let name = ContactName::from_tokens(tokens)?;
    book.delete(name.as_str())
        .ok_or_else(|| not_found(format!("no contact named {name}")))
}

pub fn upcoming_birthdays(
    book: &AddressBook,
    today: NaiveDate,
    within_days: i64,
) -> Result<Vec<UpcomingBirthday>> {
    let within_days = rolodex_core::validate_upcoming_days(within_days)?;
    Ok(book.upcoming_birthdays(today, within_days))
}

fn find_record<'a>(book: &'a AddressBook, name: &ContactName) -> Result<&'a ContactRecord> {
    book.find(name.as_str())
        .ok_or_else(|| not_found(format!("no contact named {name}, add the person first")))
}

fn find_record_mut<'a>(
    book: &'a mut AddressBook,
    name: &ContactName,
) -> Result<&'a mut ContactRecord> {
    book.find_mut(name.as_str())
        .ok_or_else(|| not_found(format!("no contact named {name}, add the person first")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use rolodex_core::CoreError;

    fn tokens(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|token| token.to_string()).collect()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 28).unwrap()
    }

    #[test]
    fn add_creates_then_updates() {
        let mut book = AddressBook::new();
        let first = add_contact(&mut book, &tokens(&["Mary", "Ann", "0501234567"])).unwrap();
        assert!(first.created);
        assert!(!first.duplicate);
        assert_eq!(first.name.as_str(), "Mary Ann");

        let second = add_contact(&mut book, &tokens(&["Mary", "Ann", "0671234567"])).unwrap();
        assert!(!second.created);
        assert_eq!(book.find("Mary Ann").unwrap().phones().len(), 2);
    }

    #[test]
    fn add_refuses_duplicate_phone() {
        let mut book = AddressBook::new();
        add_contact(&mut book, &tokens(&["Ada", "0501234567"])).unwrap();
        let outcome = add_contact(&mut book, &tokens(&["Ada", "+38 050 123 45 67"])).unwrap();
        assert!(outcome.duplicate);
        assert_eq!(book.find("Ada").unwrap().phones().len(), 1);
    }

    #[test]
    fn add_with_invalid_phone_creates_nothing() {
        let mut book = AddressBook::new();
        let err = add_contact(&mut book, &tokens(&["Ada", "123"])).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CoreError>(),
            Some(CoreError::InvalidPhone(_))
        ));
        assert!(book.is_empty());
    }

    #[test]
    fn add_requires_name_and_phone() {
        let mut book = AddressBook::new();
        let err = add_contact(&mut book, &tokens(&["0501234567"])).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::InvalidInput(_))
        ));
    }

    #[test]
    fn change_replaces_phone() {
        let mut book = AddressBook::new();
        add_contact(&mut book, &tokens(&["Ada", "0501234567"])).unwrap();
        let outcome =
            change_contact(&mut book, &tokens(&["Ada", "0501234567", "0931112233"])).unwrap();
        assert_eq!(outcome.new_phone.as_str(), "+380931112233");
        let record = book.find("Ada").unwrap();
        assert!(record.find_phone("0931112233").is_ok());
        assert!(record.find_phone("0501234567").is_err());
    }

    #[test]
    fn change_unknown_contact_is_not_found() {
        let mut book = AddressBook::new();
        let err =
            change_contact(&mut book, &tokens(&["Ada", "0501234567", "0931112233"])).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::NotFound(_))
        ));
    }

    #[test]
    fn change_missing_old_phone_fails() {
        let mut book = AddressBook::new();
        add_contact(&mut book, &tokens(&["Ada", "0501234567"])).unwrap();
        let err =
            change_contact(&mut book, &tokens(&["Ada", "0671234567", "0931112233"])).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CoreError>(),
            Some(CoreError::PhoneNotInRecord { .. })
        ));
    }

    #[test]
    fn remove_phone_reports_ignored_input() {
        let mut book = AddressBook::new();
        add_contact(&mut book, &tokens(&["Ada", "0501234567"])).unwrap();
        let outcome = remove_phone(&mut book, &tokens(&["Ada", "junk"])).unwrap();
        assert!(matches!(outcome, PhoneRemoval::Ignored(_)));
        let outcome = remove_phone(&mut book, &tokens(&["Ada", "0501234567"])).unwrap();
        assert!(matches!(outcome, PhoneRemoval::Removed(_)));
        assert!(book.find("Ada").unwrap().phones().is_empty());
    }

    #[test]
    fn birthday_add_and_show() {
        let mut book = AddressBook::new();
        add_contact(&mut book, &tokens(&["Ada", "0501234567"])).unwrap();
        let (_, birthday) = show_birthday(&book, &tokens(&["Ada"])).unwrap();
        assert!(birthday.is_none());

        let (_, stored) =
            add_birthday(&mut book, &tokens(&["Ada", "2000.12.30"]), today()).unwrap();
        assert_eq!(stored.format(), "2000.12.30");
        let (name, birthday) = show_birthday(&book, &tokens(&["Ada"])).unwrap();
        assert_eq!(name.as_str(), "Ada");
        assert_eq!(birthday.unwrap().format(), "2000.12.30");

        let err = add_birthday(&mut book, &tokens(&["Ada", "2025.12.29"]), today()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CoreError>(),
            Some(CoreError::FutureBirthday(_))
        ));
    }

    #[test]
    fn upcoming_uses_window_and_validates_it() {
        let mut book = AddressBook::new();
        add_contact(&mut book, &tokens(&["Ada", "0501234567"])).unwrap();
        add_birthday(&mut book, &tokens(&["Ada", "2000.12.30"]), today()).unwrap();

        let items = upcoming_birthdays(&book, today(), 7).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].congratulation_date.format(), "2025.12.30");
        assert!(upcoming_birthdays(&book, today(), 1).unwrap().is_empty());
        assert!(upcoming_birthdays(&book, today(), -3).is_err());
    }

    #[test]
    fn delete_reports_missing_contact() {
        let mut book = AddressBook::new();
        add_contact(&mut book, &tokens(&["Ada", "0501234567"])).unwrap();
        assert!(delete_contact(&mut book, &tokens(&["Grace"])).is_err());
        let removed = delete_contact(&mut book, &tokens(&["Ada"])).unwrap();
        assert_eq!(removed.name().as_str(), "Ada");
        assert!(book.is_empty());
    }
}

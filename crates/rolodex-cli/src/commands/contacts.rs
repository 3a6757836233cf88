use crate::actions;
use crate::commands::{print_json, Context};
use anyhow::Result;
use clap::Args;
use rolodex_core::{AddressBook, PhoneNumber, PhoneRemoval};
use std::io::Write;
use tracing::warn;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Contact name followed by a phone number
    #[arg(required = true, num_args = 2.., value_name = "NAME... PHONE", allow_hyphen_values = true)]
    pub args: Vec<String>,
}

#[derive(Debug, Args)]
pub struct ChangeArgs {
    /// Contact name followed by the old and the new phone number
    #[arg(required = true, num_args = 3.., value_name = "NAME... OLD NEW", allow_hyphen_values = true)]
    pub args: Vec<String>,
}

#[derive(Debug, Args)]
pub struct RemovePhoneArgs {
    /// Contact name followed by the phone number to drop
    #[arg(required = true, num_args = 2.., value_name = "NAME... PHONE", allow_hyphen_values = true)]
    pub args: Vec<String>,
}

#[derive(Debug, Args)]
pub struct NameArgs {
    #[arg(required = true, num_args = 1.., value_name = "NAME")]
    pub name: Vec<String>,
}

pub fn add_contact(
    ctx: &Context<'_>,
    book: &mut AddressBook,
    tokens: &[String],
    out: &mut dyn Write,
) -> Result<()> {
    let outcome = actions::add_contact(book, tokens)?;
    if ctx.json {
        return print_json(out, &outcome);
    }
    if outcome.duplicate {
        writeln!(
            out,
            "Such phone number is already present in contact {}",
            outcome.name
        )?;
    } else if outcome.created {
        writeln!(out, "Contact added.")?;
    } else {
        writeln!(out, "Contact updated.")?;
    }
    Ok(())
}

pub fn change_contact(
    ctx: &Context<'_>,
    book: &mut AddressBook,
    tokens: &[String],
    out: &mut dyn Write,
) -> Result<()> {
    let outcome = actions::change_contact(book, tokens)?;
    if ctx.json {
        return print_json(out, &outcome);
    }
    writeln!(
        out,
        "For user {}, phone {} is replaced with {}.",
        outcome.name, outcome.old_phone, outcome.new_phone
    )?;
    Ok(())
}

pub fn show_phones(
    ctx: &Context<'_>,
    book: &AddressBook,
    tokens: &[String],
    out: &mut dyn Write,
) -> Result<()> {
    let record = actions::show_phones(book, tokens)?;
    if ctx.json {
        let phones: Vec<&str> = record.phones().iter().map(PhoneNumber::as_str).collect();
        return print_json(
            out,
            &serde_json::json!({ "name": record.name(), "phones": phones }),
        );
    }
    let phones = record
        .phones()
        .iter()
        .map(PhoneNumber::as_str)
        .collect::<Vec<_>>()
        .join(" ");
    writeln!(out, "Phones: {}", phones)?;
    Ok(())
}

pub fn remove_phone(
    ctx: &Context<'_>,
    book: &mut AddressBook,
    tokens: &[String],
    out: &mut dyn Write,
) -> Result<()> {
    let outcome = actions::remove_phone(book, tokens)?;
    if let PhoneRemoval::Ignored(err) = &outcome {
        warn!(error = %err, "phone removal skipped");
    }
    if ctx.json {
        let (status, phone, reason) = match &outcome {
            PhoneRemoval::Removed(phone) => ("removed", Some(phone.as_str()), None),
            PhoneRemoval::NotPresent(phone) => ("not_present", Some(phone.as_str()), None),
            PhoneRemoval::Ignored(err) => ("ignored", None, Some(err.to_string())),
        };
        return print_json(
            out,
            &serde_json::json!({ "status": status, "phone": phone, "reason": reason }),
        );
    }
    match outcome {
        PhoneRemoval::Removed(phone) => writeln!(out, "Phone {} removed.", phone)?,
        PhoneRemoval::NotPresent(phone) => writeln!(out, "Phone {} is not in the record.", phone)?,
        PhoneRemoval::Ignored(err) => writeln!(out, "Nothing removed: {}", err)?,
    }
    Ok(())
}

pub fn list_all(ctx: &Context<'_>, book: &AddressBook, out: &mut dyn Write) -> Result<()> {
    if ctx.json {
        return print_json(out, book);
    }
    if book.is_empty() {
        writeln!(out, "no contacts")?;
        return Ok(());
    }
    writeln!(out, "Your contacts are:")?;
    for record in book.records() {
        writeln!(out, " * {}", record)?;
    }
    Ok(())
}

pub fn delete_contact(
    ctx: &Context<'_>,
    book: &mut AddressBook,
    tokens: &[String],
    out: &mut dyn Write,
) -> Result<()> {
    let removed = actions::delete_contact(book, tokens)?;
    if ctx.json {
        return print_json(out, &removed);
    }
    writeln!(out, "deleted {}", removed.name())?;
    Ok(())
}

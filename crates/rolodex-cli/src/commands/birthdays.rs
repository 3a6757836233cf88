use crate::actions;
use crate::commands::{print_json, Context};
use anyhow::Result;
use clap::Args;
use rolodex_core::{AddressBook, UpcomingBirthdaysDto, BIRTHDAY_FORMAT};
use std::io::Write;

#[derive(Debug, Args)]
pub struct AddBirthdayArgs {
    /// Contact name followed by a date in YYYY.MM.DD form
    #[arg(required = true, num_args = 2.., value_name = "NAME... DATE")]
    pub args: Vec<String>,
}

#[derive(Debug, Args)]
pub struct UpcomingArgs {
    /// Window in days, counted from today (defaults to the configured value)
    #[arg(long)]
    pub days: Option<i64>,
}

pub fn add_birthday(
    ctx: &Context<'_>,
    book: &mut AddressBook,
    tokens: &[String],
    out: &mut dyn Write,
) -> Result<()> {
    let (name, birthday) = actions::add_birthday(book, tokens, ctx.today)?;
    if ctx.json {
        return print_json(
            out,
            &serde_json::json!({ "name": name, "birthday": birthday.format() }),
        );
    }
    writeln!(out, "Successfully updated the birthday")?;
    Ok(())
}

pub fn show_birthday(
    ctx: &Context<'_>,
    book: &AddressBook,
    tokens: &[String],
    out: &mut dyn Write,
) -> Result<()> {
    let (name, birthday) = actions::show_birthday(book, tokens)?;
    if ctx.json {
        return print_json(
            out,
            &serde_json::json!({
                "name": name,
                "birthday": birthday.map(|date| date.format()),
            }),
        );
    }
    match birthday {
        Some(date) => writeln!(out, "{}", date)?,
        None => writeln!(out, "There is no birthday specified for the user {}.", name)?,
    }
    Ok(())
}

pub fn upcoming(
    ctx: &Context<'_>,
    book: &AddressBook,
    days: Option<i64>,
    out: &mut dyn Write,
) -> Result<()> {
    let within_days = days.unwrap_or(ctx.config.upcoming_days);
    let items = actions::upcoming_birthdays(book, ctx.today, within_days)?;
    if ctx.json {
        let dto = UpcomingBirthdaysDto {
            today: ctx.today.format(BIRTHDAY_FORMAT).to_string(),
            within_days,
            items,
        };
        return print_json(out, &dto);
    }
    if items.is_empty() {
        writeln!(out, "There are no people celebrating")?;
        return Ok(());
    }
    writeln!(out, "The people to give congratulations to are:")?;
    for item in &items {
        writeln!(out, " * {}", item)?;
    }
    Ok(())
}

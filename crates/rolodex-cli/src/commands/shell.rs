use crate::commands::{birthdays, contacts, Context};
use anyhow::Result;
use rolodex_core::AddressBook;
use std::io::{BufRead, Write};
use tracing::debug;

const PROMPT: &str = "Enter a command: ";

const HELP: &[(&str, &str)] = &[
    ("hello", "The greeting"),
    ("add", "Add a phone to a contact, e.g. add John 0679796518"),
    (
        "change",
        "Replace a phone, e.g. change John 0679796518 0997215120",
    ),
    ("phone", "Show the phones of a contact"),
    ("remove-phone", "Drop a phone from a contact"),
    ("delete", "Delete a contact"),
    ("all", "List all contacts"),
    (
        "add-birthday",
        "Set a birthday, e.g. add-birthday John 2003.06.07",
    ),
    ("show-birthday", "Show the birthday of a contact"),
    ("birthdays", "Birthdays coming up in the configured window"),
    ("close, exit", "Save and leave"),
];

/// Runs the interactive command loop until `close`/`exit` or end of input.
///
/// Errors from a single command are printed and the loop continues. Input
/// that is not valid UTF-8 is decoded lossily.
pub fn run_session<R: BufRead, W: Write>(
    ctx: &Context<'_>,
    book: &mut AddressBook,
    mut input: R,
    out: &mut W,
) -> Result<()> {
    let session = Context {
        store: ctx.store,
        json: false,
        config: ctx.config,
        today: ctx.today,
    };

    writeln!(out, "* Welcome to the assistant bot!")?;
    writeln!(out, "* Type 'help' to see the list of available commands")?;
    writeln!(out, "* Type 'exit' or 'close' to leave")?;

    let mut buf = Vec::new();
    loop {
        write!(out, "\n{PROMPT}")?;
        out.flush()?;
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(out)?;
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        let mut tokens = line.split_whitespace().map(str::to_string);
        let Some(command) = tokens.next() else {
            continue;
        };
        let command = command.to_lowercase();
        let args: Vec<String> = tokens.collect();
        debug!(command = %command, args = args.len(), "shell command");

        if matches!(command.as_str(), "close" | "exit") {
            writeln!(out, "Good bye!")?;
            break;
        }
        if let Err(err) = dispatch(&session, book, &command, &args, out) {
            writeln!(out, "error: {err}")?;
        }
    }
    Ok(())
}

fn dispatch<W: Write>(
    ctx: &Context<'_>,
    book: &mut AddressBook,
    command: &str,
    args: &[String],
    out: &mut W,
) -> Result<()> {
    match command {
        "hello" => writeln!(out, "How can I help you?")?,
        "add" => contacts::add_contact(ctx, book, args, out)?,
        "change" => contacts::change_contact(ctx, book, args, out)?,
        "phone" => contacts::show_phones(ctx, book, args, out)?,
        "remove-phone" => contacts::remove_phone(ctx, book, args, out)?,
        "delete" => contacts::delete_contact(ctx, book, args, out)?,
        "all" => contacts::list_all(ctx, book, out)?,
        "add-birthday" => birthdays::add_birthday(ctx, book, args, out)?,
        "show-birthday" => birthdays::show_birthday(ctx, book, args, out)?,
        "birthdays" => birthdays::upcoming(ctx, book, None, out)?,
        "help" => print_help(out)?,
        _ => writeln!(
            out,
            "Invalid command. Type 'help' to get the list of commands"
        )?,
    }
    Ok(())
}

fn print_help<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "List of all the available commands:")?;
    let width = HELP.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    for (key, description) in HELP {
        writeln!(out, "{key:<width$} : {description}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::run_session;
    use crate::commands::Context;
    use chrono::NaiveDate;
    use rolodex_config::AppConfig;
    use rolodex_core::AddressBook;
    use rolodex_store::Store;
    use std::io::Cursor;

    fn run(book: &mut AddressBook, script: &str) -> String {
        run_bytes(book, script.as_bytes())
    }

    fn run_bytes(book: &mut AddressBook, script: &[u8]) -> String {
        let temp = tempfile::tempdir().unwrap();
        let store = Store::open(&temp.path().join("contacts.json")).unwrap();
        let config = AppConfig::default();
        let ctx = Context {
            store: &store,
            json: true,
            config: &config,
            today: NaiveDate::from_ymd_opt(2025, 12, 28).unwrap(),
        };
        let mut out = Vec::new();
        run_session(&ctx, book, Cursor::new(script.to_vec()), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn greets_and_leaves() {
        let mut book = AddressBook::new();
        let output = run(&mut book, "HELLO\nexit\nhello\n");
        assert!(output.starts_with("* Welcome to the assistant bot!"));
        assert_eq!(output.matches("How can I help you?").count(), 1);
        assert!(output.contains("Good bye!"));
    }

    #[test]
    fn mutates_the_book_and_keeps_going_after_errors() {
        let mut book = AddressBook::new();
        let output = run(
            &mut book,
            "add Mary Ann 0501234567\nadd Bob 12\nphone Ghost\n\nadd-birthday Mary Ann 2000.12.30\nbirthdays\nall\n",
        );
        assert!(output.contains("Contact added."));
        assert!(output.contains("error: phone number must consist of 10 digits: 12"));
        assert!(output.contains("error: not found: no contact named Ghost"));
        assert!(output.contains("Successfully updated the birthday"));
        assert!(output.contains("The people to give congratulations to are:"));
        assert!(output.contains(" * Contact name: Mary Ann, phones: +380501234567"));

        let record = book.find("Mary Ann").unwrap();
        assert_eq!(record.birthday().unwrap().format(), "2000.12.30");
        assert!(book.find("Bob").is_none());
    }

    #[test]
    fn unknown_command_prints_hint() {
        let mut book = AddressBook::new();
        let output = run(&mut book, "fly\nhelp\n");
        assert!(output.contains("Invalid command. Type 'help' to get the list of commands"));
        assert!(output.contains("List of all the available commands:"));
        assert!(output.contains("remove-phone"));
    }

    #[test]
    fn invalid_utf8_line_does_not_end_the_session() {
        let mut book = AddressBook::new();
        let output = run_bytes(
            &mut book,
            b"add Ada 0501234567\nphone \xff\xfe\nadd Ada 0671234567\nclose\n",
        );
        assert!(output.contains("error: not found: no contact named \u{fffd}\u{fffd}"));
        assert!(output.contains("Contact updated."));
        assert!(output.contains("Good bye!"));
        assert_eq!(book.find("Ada").unwrap().phones().len(), 2);
    }
}

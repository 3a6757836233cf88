mod actions;
mod commands;
mod error;
mod util;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{backup, birthdays, completions, contacts, shell, Context};
use crate::error::{exit_code_for, report_error};
use rolodex_config as config;
use rolodex_store::{paths, Store};

#[derive(Debug, Parser)]
#[command(name = "rolodex", version, about = "rolodex contact book")]
struct Cli {
    #[arg(long, global = true)]
    data_path: Option<PathBuf>,
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Add a phone to a contact, creating the contact when needed
    Add(contacts::AddArgs),
    /// Replace one phone of a contact with another
    Change(contacts::ChangeArgs),
    /// Show the phones of a contact
    Phone(contacts::NameArgs),
    /// Remove one phone from a contact
    #[command(name = "remove-phone")]
    RemovePhone(contacts::RemovePhoneArgs),
    /// List every contact
    All,
    /// Set the birthday of a contact (YYYY.MM.DD)
    #[command(name = "add-birthday")]
    AddBirthday(birthdays::AddBirthdayArgs),
    /// Show the birthday of a contact
    #[command(name = "show-birthday")]
    ShowBirthday(contacts::NameArgs),
    /// Birthdays coming up in the next days
    Birthdays(birthdays::UpcomingArgs),
    /// Delete a contact
    Delete(contacts::NameArgs),
    /// Copy the contacts file to a backup location
    Backup(backup::BackupArgs),
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
    /// Interactive command loop reading from stdin
    Shell,
}

impl Command {
    fn mutates(&self) -> bool {
        matches!(
            self,
            Command::Add(_)
                | Command::Change(_)
                | Command::RemovePhone(_)
                | Command::AddBirthday(_)
                | Command::Delete(_)
                | Command::Shell
        )
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        data_path,
        config: config_path,
        json,
        verbose,
        command,
    } = cli;

    if let Command::Completions(args) = command {
        let stdout = io::stdout();
        return completions::emit(args, &mut stdout.lock());
    }

    let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
    if verbose {
        match config::resolve_config_path(config_path) {
            Ok(path) => {
                if path.exists() {
                    debug!(path = %path.display(), "config resolved");
                } else {
                    debug!(path = %path.display(), "config missing, using defaults");
                }
            }
            Err(err) => {
                debug!(error = %err, "config unavailable");
            }
        }
    }

    let data_path = paths::resolve_data_path(data_path.or_else(|| app_config.data_path.clone()))
        .with_context(|| "resolve data path")?;
    debug!(path = %data_path.display(), "data path resolved");

    let store = Store::open(&data_path)
        .with_context(|| format!("open contacts file {}", data_path.display()))?;
    let mut book = store.load();

    let ctx = Context {
        store: &store,
        json,
        config: &app_config,
        today: util::today()?,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mutates = command.mutates();
    let shell_session = matches!(command, Command::Shell);

    let result = match command {
        Command::Add(args) => contacts::add_contact(&ctx, &mut book, &args.args, &mut out),
        Command::Change(args) => contacts::change_contact(&ctx, &mut book, &args.args, &mut out),
        Command::Phone(args) => contacts::show_phones(&ctx, &book, &args.name, &mut out),
        Command::RemovePhone(args) => {
            contacts::remove_phone(&ctx, &mut book, &args.args, &mut out)
        }
        Command::All => contacts::list_all(&ctx, &book, &mut out),
        Command::AddBirthday(args) => {
            birthdays::add_birthday(&ctx, &mut book, &args.args, &mut out)
        }
        Command::ShowBirthday(args) => {
            birthdays::show_birthday(&ctx, &book, &args.name, &mut out)
        }
        Command::Birthdays(args) => birthdays::upcoming(&ctx, &book, args.days, &mut out),
        Command::Delete(args) => contacts::delete_contact(&ctx, &mut book, &args.name, &mut out),
        Command::Backup(args) => backup::backup(&ctx, args, &mut out),
        Command::Shell => {
            let stdin = io::stdin();
            shell::run_session(&ctx, &mut book, stdin.lock(), &mut out)
        }
        Command::Completions(_) => {
            unreachable!("completions command handled before store initialization")
        }
    };

    // A shell session keeps what it changed before failing.
    if mutates && (result.is_ok() || shell_session) {
        store
            .save(&book)
            .with_context(|| format!("save contacts to {}", data_path.display()))?;
    }
    out.flush()?;
    result
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

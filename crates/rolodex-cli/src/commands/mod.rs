use anyhow::Result;
use chrono::NaiveDate;
use rolodex_config::AppConfig;
use rolodex_store::Store;
use serde::Serialize;
use std::io::Write;

pub mod backup;
pub mod birthdays;
pub mod completions;
pub mod contacts;
pub mod shell;

pub struct Context<'a> {
    pub store: &'a Store,
    pub json: bool,
    pub config: &'a AppConfig,
    pub today: NaiveDate,
}

pub fn print_json<T: Serialize>(out: &mut dyn Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

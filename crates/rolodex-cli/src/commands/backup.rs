use crate::commands::{print_json, Context};
use anyhow::{Context as _, Result};
use clap::Args;
use rolodex_store::error::StoreError;
use rolodex_store::paths;
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct BackupArgs {
    /// Destination file (defaults to a timestamped file in the data directory)
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct BackupReport {
    output: String,
    size_bytes: u64,
}

pub fn backup(ctx: &Context<'_>, args: BackupArgs, out: &mut dyn Write) -> Result<()> {
    let target = match args.out {
        Some(path) => path,
        None => paths::backup_path()?,
    };

    if let Err(err) = ctx.store.backup_to(&target) {
        if matches!(err, StoreError::InvalidBackupPath(_)) {
            return Err(err)
                .with_context(|| format!("backup path matches data file: {}", target.display()));
        }
        return Err(err).with_context(|| {
            format!(
                "back up {} to {}",
                ctx.store.path().display(),
                target.display()
            )
        });
    }

    let size = fs::metadata(&target)
        .with_context(|| format!("stat backup file {}", target.display()))?
        .len();

    if ctx.json {
        let report = BackupReport {
            output: target.display().to_string(),
            size_bytes: size,
        };
        return print_json(out, &report);
    }

    writeln!(out, "Backup written to {}", target.display())?;
    Ok(())
}

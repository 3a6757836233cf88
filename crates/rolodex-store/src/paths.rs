use crate::error::{Result, StoreError};
use chrono::Local;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "rolodex";
const DATA_FILENAME: &str = "contacts.json";
const BACKUP_DIR: &str = "backups";

pub fn data_dir() -> Result<PathBuf> {
    if let Some(dir) = env::var_os("XDG_DATA_HOME") {
        let path = PathBuf::from(dir);
        if path.as_os_str().is_empty() {
            return Err(StoreError::InvalidDataPath(path));
        }
        return Ok(path.join(APP_DIR));
    }

    let home = dirs::home_dir().ok_or(StoreError::MissingHomeDir)?;
    Ok(home.join(".local").join("share").join(APP_DIR))
}

pub fn ensure_data_dir() -> Result<PathBuf> {
    let dir = data_dir()?;
    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }
    restrict_dir_permissions(&dir)?;
    Ok(dir)
}

pub fn data_path() -> Result<PathBuf> {
    Ok(ensure_data_dir()?.join(DATA_FILENAME))
}

pub fn resolve_data_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(StoreError::InvalidDataPath(path));
            }
            ensure_parent_dir(&path)?;
            Ok(path)
        }
        None => data_path(),
    }
}

pub fn backup_path() -> Result<PathBuf> {
    let dir = ensure_data_dir()?.join(BACKUP_DIR);
    let stamp = Local::now().format("%Y%m%dT%H%M%S");
    Ok(dir.join(format!("contacts-{stamp}.json")))
}

/// A sibling name that does not exist yet, e.g.
/// `contacts.json.unreadable-20250101T120000`.
pub fn unreadable_copy_path(path: &Path) -> PathBuf {
    let stamp = Local::now().format("%Y%m%dT%H%M%S");
    let mut base = path.as_os_str().to_owned();
    base.push(format!(".unreadable-{stamp}"));
    let mut candidate = PathBuf::from(&base);
    let mut counter = 1;
    while candidate.exists() {
        let mut name = base.clone();
        name.push(format!("-{counter}"));
        candidate = PathBuf::from(name);
        counter += 1;
    }
    candidate
}

pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(unix)]
fn restrict_dir_permissions(dir: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    let perms = fs::Permissions::from_mode(0o700);
    fs::set_permissions(dir, perms)?;
    Ok(())
}

#[cfg(not(unix))]
fn restrict_dir_permissions(_dir: &Path) -> Result<()> {
    Ok(())
}

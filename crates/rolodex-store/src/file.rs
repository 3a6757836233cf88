use crate::error::{Result, StoreError};
use rolodex_core::AddressBook;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Reads a book, returning `None` when the file does not exist.
pub fn read_book(path: &Path) -> Result<Option<AddressBook>> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };
    if contents.trim().is_empty() {
        return Ok(Some(AddressBook::new()));
    }
    Ok(Some(serde_json::from_str(&contents)?))
}

/// Writes through a sibling temp file so a failed save never truncates the
/// previous data. The temp file is removed when any step fails.
pub fn write_book(path: &Path, book: &AddressBook) -> Result<()> {
    let tmp = temp_path(path);
    let result =
        write_temp(&tmp, book).and_then(|()| fs::rename(&tmp, path).map_err(StoreError::from));
    if result.is_err() && tmp.exists() {
        if let Err(err) = fs::remove_file(&tmp) {
            warn!(path = %tmp.display(), error = %err, "could not remove temp file");
        }
    }
    result
}

fn write_temp(tmp: &Path, book: &AddressBook) -> Result<()> {
    let mut file = create_private(tmp)?;
    // `mode` only applies when the file is created.
    restrict_file_permissions(tmp)?;
    serde_json::to_writer_pretty(&mut file, book)?;
    writeln!(file)?;
    file.sync_all()?;
    Ok(())
}

#[cfg(unix)]
fn create_private(path: &Path) -> io::Result<fs::File> {
    use std::os::unix::fs::OpenOptionsExt;
    fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)
}

#[cfg(not(unix))]
fn create_private(path: &Path) -> io::Result<fs::File> {
    fs::File::create(path)
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

#[cfg(unix)]
pub(crate) fn restrict_file_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    if path.exists() {
        let perms = fs::Permissions::from_mode(0o600);
        fs::set_permissions(path, perms)?;
    }
    Ok(())
}

#[cfg(not(unix))]
pub(crate) fn restrict_file_permissions(_path: &Path) -> Result<()> {
    Ok(())
}

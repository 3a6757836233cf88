pub mod backup;
pub mod error;
pub mod file;
pub mod paths;

use crate::error::{Result, StoreError};
use rolodex_core::AddressBook;
use std::cell::Cell;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// JSON-file persistence for a single [`AddressBook`].
pub struct Store {
    path: PathBuf,
    // Set when an unreadable file could not be moved out of the way.
    unreadable: Cell<bool>,
}

impl Store {
    pub fn open(path: &Path) -> Result<Self> {
        paths::ensure_parent_dir(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            unreadable: Cell::new(false),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the book, falling back to an empty one when the file is missing,
    /// unreadable or corrupt.
    ///
    /// An unreadable file is renamed to [`paths::unreadable_copy_path`] first.
    /// When that rename fails, [`Store::save`] refuses to write.
    pub fn load(&self) -> AddressBook {
        match self.try_load() {
            Ok(Some(book)) => {
                debug!(path = %self.path.display(), contacts = book.len(), "address book loaded");
                book
            }
            Ok(None) => {
                debug!(path = %self.path.display(), "no address book yet, starting empty");
                AddressBook::new()
            }
            Err(err) => {
                match self.set_aside() {
                    Ok(moved) => warn!(
                        path = %self.path.display(),
                        moved_to = %moved.display(),
                        error = %err,
                        "address book unreadable, moved aside; starting empty"
                    ),
                    Err(move_err) => {
                        self.unreadable.set(true);
                        warn!(
                            path = %self.path.display(),
                            error = %err,
                            move_error = %move_err,
                            "address book unreadable and left in place; saving is disabled"
                        );
                    }
                }
                AddressBook::new()
            }
        }
    }

    pub fn try_load(&self) -> Result<Option<AddressBook>> {
        file::read_book(&self.path)
    }

    pub fn save(&self, book: &AddressBook) -> Result<()> {
        if self.unreadable.get() {
            return Err(StoreError::UnreadableData(self.path.clone()));
        }
        file::write_book(&self.path, book)?;
        debug!(path = %self.path.display(), contacts = book.len(), "address book saved");
        Ok(())
    }

    pub fn backup_to(&self, path: &Path) -> Result<()> {
        backup::backup_to(&self.path, path)
    }

    fn set_aside(&self) -> Result<PathBuf> {
        let target = paths::unreadable_copy_path(&self.path);
        fs::rename(&self.path, &target)?;
        file::restrict_file_permissions(&target)?;
        Ok(target)
    }
}

use std::fs::OpenOptions;
use std::io::{Read, Write};
use std::path::Path;

use super::{Storage, StorageError, create_file_parent};
use crate::domain::AddressBook;

/// File backend persisting the whole book as one JSON document.
pub struct JsonStore {
    path: String,
}

impl JsonStore {
    /// Binds a store to `path`. The path must name a `.json` file and
    /// must not be an existing directory; a rejected path never yields
    /// a store.
    pub fn new(path: &str) -> Result<Self, StorageError> {
        let file_path = Path::new(path);

        if path.is_empty() || file_path.file_name().is_none() {
            return Err(StorageError::InvalidPath(format!(
                "'{}' does not name a file",
                path
            )));
        }

        if file_path.is_dir() {
            return Err(StorageError::InvalidPath(format!(
                "'{}' is a directory",
                path
            )));
        }

        if !file_path.extension().is_some_and(|ext| ext == "json") {
            return Err(StorageError::InvalidPath(format!(
                "'{}' must end with .json",
                path
            )));
        }

        Ok(Self {
            path: path.to_string(),
        })
    }
}

impl Storage for JsonStore {
    fn save(&self, book: &AddressBook) -> Result<(), StorageError> {
        let data = serde_json::to_string(book)?;

        create_file_parent(&self.path)?;

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)?;

        file.write_all(data.as_bytes())?;
        Ok(())
    }

    fn load(&self) -> Result<AddressBook, StorageError> {
        let path = Path::new(&self.path);
        if !path.exists() {
            return Err(StorageError::Operation(format!(
                "storage file not found: {}",
                self.path
            )));
        }

        let mut data = String::new();
        let mut file = OpenOptions::new().read(true).open(path)?;
        file.read_to_string(&mut data)?;

        // serde_json will give an error if data is empty
        if data.is_empty() {
            return Ok(AddressBook::new());
        }

        Ok(serde_json::from_str(&data)?)
    }

    fn path(&self) -> &str {
        &self.path
    }
}

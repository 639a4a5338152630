pub mod json;
pub mod memory;
pub mod plain;

use core::fmt;
use std::fs;
use std::path::Path;

use dotenv::dotenv;
use log::debug;

use crate::domain::AddressBook;
use crate::errors::AppError;

pub use json::JsonStore;
pub use memory::MemStore;
pub use plain::PlainStore;

pub const JSON_PATH_DEFAULT: &str = "./.instance/contacts.json";
pub const PLAIN_PATH_DEFAULT: &str = "./.instance/contacts.txt";

/// Persistence contract every storage backend fulfills.
///
/// A backend is bound to one path for its whole lifetime. `save` and
/// `load` are blocking one-shot calls with no ordering between them;
/// each fully succeeds or fully fails.
pub trait Storage {
    /// Writes the whole aggregate to the backing medium, replacing
    /// whatever was persisted before.
    fn save(&self, book: &AddressBook) -> Result<(), StorageError>;

    /// Reads the whole aggregate back from the backing medium.
    ///
    /// Absent or unreadable storage is an error; it is the caller's
    /// decision whether a missing file means "start empty".
    fn load(&self) -> Result<AddressBook, StorageError>;

    /// The identifier this instance was bound to at construction.
    fn path(&self) -> &str;
}

/// Failure signals of the storage contract. Both carry only a
/// human-readable message.
#[derive(Debug)]
pub enum StorageError {
    /// Reading, writing, or converting data failed at save/load time.
    Operation(String),
    /// The path given at construction violates the backend's path rules.
    InvalidPath(String),
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::Operation(format!("I/O error while accessing storage: {}", err))
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Operation(format!("Error converting contact data: {}", err))
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Operation(msg) => {
                write!(f, "Storage operation failed: {}", msg)
            }
            StorageError::InvalidPath(msg) => {
                write!(f, "Invalid storage path: {}", msg)
            }
        }
    }
}

impl std::error::Error for StorageError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Medium {
    Json,
    Plain,
    Mem,
}

impl Medium {
    pub fn parse(value: &str) -> Result<Self, AppError> {
        match value.to_lowercase().as_str() {
            "json" => Ok(Medium::Json),
            "txt" | "plain" => Ok(Medium::Plain),
            "mem" => Ok(Medium::Mem),
            _ => Err(AppError::Validation(
                "Not a recognized storage medium".to_string(),
            )),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Medium::Json => "json",
            Medium::Plain => "txt",
            Medium::Mem => "mem",
        }
    }
}

/// Builds the backend the caller asked for, falling back to the
/// `STORAGE_MEDIUM` environment variable (a `.env` file is honored)
/// and then to json. Callers get the contract, never a concrete type.
pub fn open_storage(medium: Option<Medium>) -> Result<Box<dyn Storage>, AppError> {
    let medium = match medium {
        Some(medium) => medium,
        None => {
            dotenv().ok();

            let choice = std::env::var("STORAGE_MEDIUM").unwrap_or("json".to_string());
            Medium::parse(&choice)?
        }
    };

    let store: Box<dyn Storage> = match medium {
        Medium::Json => {
            let path =
                std::env::var("ADDRBOOK_JSON_PATH").unwrap_or(JSON_PATH_DEFAULT.to_string());
            Box::new(JsonStore::new(&path)?)
        }
        Medium::Plain => {
            let path = std::env::var("ADDRBOOK_TXT_PATH").unwrap_or(PLAIN_PATH_DEFAULT.to_string());
            Box::new(PlainStore::new(&path)?)
        }
        Medium::Mem => Box::new(MemStore::new()),
    };

    debug!("opened {} storage bound to {}", medium.as_str(), store.path());
    Ok(store)
}

pub(crate) fn create_file_parent(path: &str) -> Result<(), StorageError> {
    let path = Path::new(path);

    if let Some(parent) = path.parent()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_mediums() -> Result<(), AppError> {
        assert_eq!(Medium::parse("json")?, Medium::Json);
        assert_eq!(Medium::parse("TXT")?, Medium::Plain);
        assert_eq!(Medium::parse("plain")?, Medium::Plain);
        assert_eq!(Medium::parse("mem")?, Medium::Mem);

        assert!(matches!(
            Medium::parse("floppy"),
            Err(AppError::Validation(_))
        ));
        Ok(())
    }

    #[test]
    fn explicit_medium_wins_over_environment() -> Result<(), AppError> {
        let store = open_storage(Some(Medium::Mem))?;

        assert_eq!(store.path(), memory::MEMORY_PATH);
        Ok(())
    }

    #[test]
    fn error_messages_name_the_failure() {
        let op = StorageError::Operation("file vanished".to_string());
        let path = StorageError::InvalidPath("no extension".to_string());

        assert_eq!(format!("{}", op), "Storage operation failed: file vanished");
        assert_eq!(format!("{}", path), "Invalid storage path: no extension");
    }
}

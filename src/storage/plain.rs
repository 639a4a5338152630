use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::{Storage, StorageError, create_file_parent};
use crate::domain::{AddressBook, Contact};

/// File backend with a line-oriented record format: each contact is a
/// brace-delimited block of `field value` lines.
///
/// ```text
/// {
/// id 7f8b6e2a-...
/// name Alice
/// phone 555-1234
/// ...
/// }
/// ```
pub struct PlainStore {
    path: String,
}

impl PlainStore {
    /// Binds a store to `path`. The path must name a file with a
    /// non-empty stem and some extension (any will do), and must not
    /// be an existing directory.
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

        let has_stem = file_path
            .file_stem()
            .is_some_and(|stem| !stem.is_empty());
        if !has_stem || file_path.extension().is_none() {
            return Err(StorageError::InvalidPath(format!(
                "'{}' must name a file with an extension",
                path
            )));
        }

        Ok(Self {
            path: path.to_string(),
        })
    }
}

impl Storage for PlainStore {
    fn save(&self, book: &AddressBook) -> Result<(), StorageError> {
        create_file_parent(&self.path)?;

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)?;

        file.write_all(serialize_book(book).as_bytes())?;
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

        let reader = BufReader::new(File::open(path)?);
        deserialize_book(reader)
    }

    fn path(&self) -> &str {
        &self.path
    }
}

fn serialize_book(book: &AddressBook) -> String {
    let mut data = String::new();

    for contact in book.iter() {
        let record = format!(
            "{{\nid {}\nname {}\nphone {}\nemail {}\ntag {}\ncreated_at {}\nupdated_at {}\n}}\n",
            contact.id,
            contact.name,
            contact.phone,
            contact.email,
            contact.tag,
            contact.created_at.to_rfc3339(),
            contact.updated_at.to_rfc3339(),
        );

        data.push_str(&record);
    }
    data
}

fn deserialize_book(reader: BufReader<File>) -> Result<AddressBook, StorageError> {
    let mut book = AddressBook::new();
    let mut current: Option<RecordBuilder> = None;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        match line {
            "{" => {
                if current.is_some() {
                    return Err(corrupt("record opened before the previous one closed"));
                }
                current = Some(RecordBuilder::default());
            }
            "}" => {
                let record = current
                    .take()
                    .ok_or_else(|| corrupt("record closed without an opening brace"))?;
                book.add(record.build()?);
            }
            _ => {
                let record = current
                    .as_mut()
                    .ok_or_else(|| corrupt("field outside of a record"))?;
                let (field, value) = line.split_once(' ').unwrap_or((line, ""));
                record.set(field, value)?;
            }
        }
    }

    if current.is_some() {
        return Err(corrupt("record never closed"));
    }

    Ok(book)
}

fn corrupt(detail: &str) -> StorageError {
    StorageError::Operation(format!("corrupt contact data: {}", detail))
}

#[derive(Default)]
struct RecordBuilder {
    id: Option<Uuid>,
    name: Option<String>,
    phone: Option<String>,
    email: String,
    tag: String,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
}

impl RecordBuilder {
    fn set(&mut self, field: &str, value: &str) -> Result<(), StorageError> {
        match field {
            "id" => {
                let id = Uuid::parse_str(value)
                    .map_err(|err| corrupt(&format!("bad contact id '{}': {}", value, err)))?;
                self.id = Some(id);
            }
            "name" => self.name = Some(value.to_string()),
            "phone" => self.phone = Some(value.to_string()),
            "email" => self.email = value.to_string(),
            "tag" => self.tag = value.to_string(),
            "created_at" => self.created_at = Some(parse_timestamp(value)?),
            "updated_at" => self.updated_at = Some(parse_timestamp(value)?),
            _ => return Err(corrupt(&format!("unknown field '{}'", field))),
        }
        Ok(())
    }

    fn build(self) -> Result<Contact, StorageError> {
        Ok(Contact {
            id: self.id.ok_or_else(|| corrupt("record is missing its id"))?,
            name: self
                .name
                .ok_or_else(|| corrupt("record is missing a name"))?,
            phone: self
                .phone
                .ok_or_else(|| corrupt("record is missing a phone number"))?,
            email: self.email,
            tag: self.tag,
            created_at: self
                .created_at
                .ok_or_else(|| corrupt("record is missing created_at"))?,
            updated_at: self
                .updated_at
                .ok_or_else(|| corrupt("record is missing updated_at"))?,
        })
    }
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, StorageError> {
    DateTime::parse_from_rfc3339(value)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|err| corrupt(&format!("bad timestamp '{}': {}", value, err)))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn store_in(dir: &TempDir, name: &str) -> (PlainStore, String) {
        let path = dir
            .path()
            .join(name)
            .to_str()
            .expect("tempdir path is valid UTF-8")
            .to_string();
        (
            PlainStore::new(&path).expect("path satisfies the plain rules"),
            path,
        )
    }

    fn sample_book() -> AddressBook {
        let mut book = AddressBook::new();
        book.add(Contact::new(
            "Uche".to_string(),
            "01234567890".to_string(),
            String::new(),
            String::new(),
        ));
        book.add(Contact::new(
            "Mom".to_string(),
            "98765432109".to_string(),
            "mom@example.com".to_string(),
            "family".to_string(),
        ));
        book
    }

    #[test]
    fn plain_store_is_persistent() -> Result<(), StorageError> {
        let dir = TempDir::new()?;
        let (store, _) = store_in(&dir, "contacts.txt");

        let book = sample_book();
        store.save(&book)?;
        let loaded = store.load()?;

        assert_eq!(loaded, book);
        // Empty email and tag survive the line format
        let mom = loaded
            .iter()
            .find(|cont| cont.name == "Mom")
            .expect("Mom was saved above");
        assert_eq!(mom.email, "mom@example.com");
        assert_eq!(mom.tag, "family");
        Ok(())
    }

    #[test]
    fn any_extension_is_accepted() -> Result<(), StorageError> {
        let dir = TempDir::new()?;
        let (store, _) = store_in(&dir, "contacts.store");

        store.save(&sample_book())?;
        assert_eq!(store.load()?.len(), 2);
        Ok(())
    }

    #[test]
    fn rejects_paths_without_extension() {
        for bad in ["", "contacts", "./.instance", ".txt"] {
            assert!(matches!(
                PlainStore::new(bad),
                Err(StorageError::InvalidPath(_))
            ));
        }
    }

    #[test]
    fn load_without_file_is_an_operation_error() -> Result<(), StorageError> {
        let dir = TempDir::new()?;
        let (store, _) = store_in(&dir, "contacts.txt");

        assert!(matches!(store.load(), Err(StorageError::Operation(_))));
        Ok(())
    }

    #[test]
    fn load_on_corrupt_data_is_an_operation_error() -> Result<(), StorageError> {
        let dir = TempDir::new()?;
        let (store, path) = store_in(&dir, "contacts.txt");

        fs::write(&path, "{\nbogus line\n}\n")?;
        assert!(matches!(store.load(), Err(StorageError::Operation(_))));

        fs::write(&path, "{\nname Uche\n")?;
        assert!(matches!(store.load(), Err(StorageError::Operation(_))));
        Ok(())
    }
}

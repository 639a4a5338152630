use std::cell::RefCell;

use super::{Storage, StorageError};
use crate::domain::AddressBook;

/// Path sentinel for storage that never touches disk.
pub const MEMORY_PATH: &str = ":memory:";

/// Backend for ephemeral runs and tests. Holds the last-saved book;
/// the contract is single-threaded, so a `RefCell` carries the state.
pub struct MemStore {
    data: RefCell<Option<AddressBook>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self {
            data: RefCell::new(None),
        }
    }
}

impl Default for MemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for MemStore {
    fn save(&self, book: &AddressBook) -> Result<(), StorageError> {
        *self.data.borrow_mut() = Some(book.clone());
        Ok(())
    }

    fn load(&self) -> Result<AddressBook, StorageError> {
        self.data.borrow().clone().ok_or_else(|| {
            StorageError::Operation("nothing has been saved to in-memory storage".to_string())
        })
    }

    fn path(&self) -> &str {
        MEMORY_PATH
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Contact;

    #[test]
    fn saved_book_loads_back() -> Result<(), StorageError> {
        let store = MemStore::new();

        let mut book = AddressBook::new();
        book.add(Contact::new(
            "Uche".to_string(),
            "01234567890".to_string(),
            String::new(),
            String::new(),
        ));

        store.save(&book)?;
        assert_eq!(store.load()?, book);
        Ok(())
    }

    #[test]
    fn load_before_any_save_is_an_operation_error() {
        let store = MemStore::new();

        assert!(matches!(store.load(), Err(StorageError::Operation(_))));
    }

    #[test]
    fn caller_keeps_ownership_of_the_saved_book() -> Result<(), StorageError> {
        let store = MemStore::new();

        let mut book = AddressBook::new();
        store.save(&book)?;

        // Mutating the caller's book must not leak into persisted state
        book.add(Contact::new(
            "Alex".to_string(),
            "08011122233".to_string(),
            String::new(),
            String::new(),
        ));

        assert!(store.load()?.is_empty());
        Ok(())
    }

    #[test]
    fn path_is_the_memory_sentinel() {
        assert_eq!(MemStore::new().path(), MEMORY_PATH);
    }
}

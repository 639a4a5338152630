pub use crate::cli::run_app;
pub use crate::domain::{
    book::AddressBook,
    contact::{self, Contact},
};
pub use crate::errors::AppError;
pub use crate::storage::{
    self, JsonStore, MemStore, Medium, PlainStore, Storage, StorageError, open_storage,
};

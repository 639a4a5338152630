use core::fmt;

use crate::storage::StorageError;

#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    Regex(regex::Error),
    Storage(StorageError),
    Validation(String),
}

impl From<regex::Error> for AppError {
    fn from(err: regex::Error) -> Self {
        AppError::Regex(err)
    }
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        AppError::Storage(err)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::NotFound(item) => {
                write!(f, "{} Not found", item)
            }
            AppError::Regex(e) => {
                write!(f, "Invalid pattern: {}", e)
            }
            AppError::Storage(e) => {
                write!(f, "{}", e)
            }
            AppError::Validation(msg) => {
                write!(f, "Validation failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn confirm_not_found_error_message() {
        let err = AppError::NotFound("Contact".to_string());

        assert_eq!(format!("{}", err), "Contact Not found");
    }

    #[test]
    fn confirm_validation_error() {
        let err = AppError::Validation("Invalid Number input.".to_string());

        assert_eq!(
            format!("{}", err),
            "Validation failed: Invalid Number input."
        );
    }

    #[test]
    fn storage_errors_pass_through_unchanged() {
        let err = AppError::from(StorageError::Operation("disk on fire".to_string()));

        assert_eq!(
            format!("{}", err),
            format!("{}", StorageError::Operation("disk on fire".to_string()))
        );
    }
}

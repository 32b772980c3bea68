//! Error type for catalog operations

/// Conditions raised by catalog operations before any processing happens.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Missing argument: {0} cannot be empty")]
    MissingArgument(String),

    #[error("Wrong type: {name} must be {expected}")]
    WrongType { name: String, expected: String },

    #[error("Book is missing required field: {0}")]
    MissingField(String),

    #[error("Unknown operation: {0}")]
    UnknownOperation(String),
}

impl CatalogError {
    pub fn missing_argument(name: &str) -> Self {
        CatalogError::MissingArgument(name.to_string())
    }

    pub fn wrong_type(name: &str, expected: &str) -> Self {
        CatalogError::WrongType {
            name: name.to_string(),
            expected: expected.to_string(),
        }
    }

    /// True for conditions caused by a bad argument rather than a bad record.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            CatalogError::MissingArgument(_) | CatalogError::WrongType { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;

//! Application-level error taxonomy returned by the catalog use cases.

use rust_decimal::Decimal;
use thiserror::Error;

use catalog_core::{DomainError, ItemId};

use crate::store::RepositoryError;

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Every way a catalog use case can fail.
///
/// Notifier failures never leave a use case, so they have no variant here.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Input violated an item rule; nothing was saved or published.
    #[error("invalid {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// The code is already registered.
    #[error("code already registered: {0}")]
    DuplicateCode(String),

    /// No item matches the given id or code.
    #[error("catalog item not found: {0}")]
    NotFound(String),

    /// Price range query with `min > max`.
    #[error("invalid price range: min {min} is greater than max {max}")]
    InvalidRange { min: Decimal, max: Decimal },

    /// The store could not be reached or failed mid-operation.
    #[error(transparent)]
    Repository(RepositoryError),
}

impl CatalogError {
    pub fn not_found_id(id: ItemId) -> Self {
        Self::NotFound(format!("id {id}"))
    }

    pub fn not_found_code(code: &str) -> Self {
        Self::NotFound(format!("code {code}"))
    }

    /// Offending field, for validation failures.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}

impl From<DomainError> for CatalogError {
    fn from(value: DomainError) -> Self {
        match value {
            DomainError::Validation { field, message } => CatalogError::Validation { field, message },
            DomainError::InvalidId(message) => CatalogError::Validation { field: "id", message },
            DomainError::InvariantViolation(message) => {
                CatalogError::Validation { field: "item", message }
            }
        }
    }
}

impl From<RepositoryError> for CatalogError {
    fn from(value: RepositoryError) -> Self {
        match value {
            RepositoryError::Conflict { code } => CatalogError::DuplicateCode(code),
            other => CatalogError::Repository(other),
        }
    }
}

use thiserror::Error;

/// Catalog-level errors raised by restaurant and menu operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Restaurant not found: {name}")]
    RestaurantNotFound { name: String },

    #[error("Item not found: {name}")]
    ItemNotFound { name: String },
}

/// Validation errors for catalog seed data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Required field missing: {field}")]
    RequiredField { field: String },

    #[error("Invalid field value: {field}={value}, reason={reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Field too long: {field}, max_length={max_length}, actual_length={actual_length}")]
    TooLong {
        field: String,
        max_length: usize,
        actual_length: usize,
    },
}

/// Result type alias for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Result type alias for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

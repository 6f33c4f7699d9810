use shared::{AppError, ErrorCode};
use thiserror::Error;

/// Catalog loading errors
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Menu item name must not be empty (position {0})")]
    EmptyName(usize),

    #[error("Duplicate menu item name: {0}")]
    DuplicateName(String),

    #[error("Invalid price for {name}: {price}")]
    InvalidPrice { name: String, price: f64 },

    #[error("Failed to read menu file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse menu file: {0}")]
    Parse(#[from] serde_json::Error),
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        let code = match &err {
            CatalogError::EmptyName(_) => ErrorCode::RequiredField,
            CatalogError::DuplicateName(_) => ErrorCode::ProductNameExists,
            CatalogError::InvalidPrice { .. } => ErrorCode::ProductInvalidPrice,
            CatalogError::Io(_) => ErrorCode::IoError,
            CatalogError::Parse(_) => ErrorCode::InvalidFormat,
        };
        AppError::with_message(code, err.to_string())
    }
}

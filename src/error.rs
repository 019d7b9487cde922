//! Error types for coffeeshop.
//!
//! Error codes are organized by category:
//!
//! - **CS-E001 to CS-E099**: Catalog errors (duplicates, missing items, prices)
//! - **CS-E900 to CS-E999**: I/O and encoding errors

use thiserror::Error;

/// Main error type for menu operations.
#[derive(Error, Debug)]
pub enum MenuError {
    /// An item with the same trimmed name is already on the menu.
    #[error("menu item already exists: {name}")]
    DuplicateItem { name: String },

    /// No item with this name is on the menu.
    #[error("menu item not found: {name}")]
    UnknownItem { name: String },

    /// Size label was blank after trimming.
    #[error("size cannot be empty")]
    EmptySize,

    /// Two size labels of one item are equal after trimming.
    #[error("size {size} listed twice for {name}")]
    DuplicateSize { name: String, size: String },

    /// Price was negative, not finite, or not a number at all.
    #[error("invalid price: {value}")]
    InvalidPrice { value: String },

    /// I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MenuError {
    /// Returns the error code for this error.
    pub const fn error_code(&self) -> &'static str {
        match self {
            MenuError::DuplicateItem { .. } => "CS-E001",
            MenuError::UnknownItem { .. } => "CS-E002",
            MenuError::EmptySize => "CS-E003",
            MenuError::InvalidPrice { .. } => "CS-E004",
            MenuError::DuplicateSize { .. } => "CS-E005",
            MenuError::Io(_) => "CS-E901",
            MenuError::Json(_) => "CS-E902",
        }
    }

    /// Returns the severity level for this error.
    ///
    /// Catalog rejections leave the menu untouched and the session carries
    /// on, so they are warnings.
    pub const fn severity(&self) -> &'static str {
        match self {
            MenuError::Io(_) | MenuError::Json(_) => "error",
            _ => "warning",
        }
    }

    /// Returns remediation hints for this error, if available.
    pub const fn remediation(&self) -> Option<&'static str> {
        match self {
            MenuError::DuplicateItem { .. } => {
                Some("Names are compared exactly after trimming. Pick a different name.")
            }
            MenuError::UnknownItem { .. } => {
                Some("Add the item first, or print the menu to check its spelling.")
            }
            MenuError::EmptySize => Some("Provide a size label such as small, medium or large."),
            MenuError::InvalidPrice { .. } => {
                Some("Prices must be non-negative decimal numbers, e.g. 1.95.")
            }
            MenuError::DuplicateSize { .. } => {
                Some("Each size label may appear once per item, ignoring surrounding spaces.")
            }
            MenuError::Io(_) => Some("Check that the menu file exists and is readable."),
            MenuError::Json(_) => {
                Some("Menu files hold a JSON array of {\"name\": ..., \"prices\": {...}} objects.")
            }
        }
    }

    /// Whether the interactive session can carry on after this error.
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, MenuError::Io(_))
    }
}

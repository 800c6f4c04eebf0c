//! Common error types for the IRL feedback wizard

use thiserror::Error;

/// Common result type for wizard operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error taxonomy shared by the core and the UI service
///
/// Two of the cases the original tool surfaces are deliberately *not* here:
/// a delete attempt that matches no (id, author) pair is a well-defined
/// `false` result from the store, and a missing child-attribute list
/// degenerates to the `"General"` sentinel. Neither is an error.
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation error (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid user input or request parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

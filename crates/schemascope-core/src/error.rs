use thiserror::Error;

/// Core error type shared across Schemascope crates.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A required field was empty or whitespace-only at construction.
    #[error("{entity}: {field} must not be blank")]
    BlankField {
        entity: &'static str,
        field: &'static str,
    },
}

/// Convenience alias for results returned by Schemascope crates.
pub type Result<T> = std::result::Result<T, Error>;

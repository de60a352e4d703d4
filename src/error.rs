use thiserror::Error;

/// Defines errors that may occur during translation lookup
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// Error when the requested identifier has no entry in the table
    #[error("unknown identifier {0}")]
    UnknownId(String),
    /// Error when the identifier exists but holds no translation for the
    /// requested language
    #[error("no translation for language {0}")]
    UnknownLanguage(String),
}

/// Error when the installed loader reports failure.
///
/// The display text doubles as the message passed to the error reporter, so
/// it must stay stable.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Failed to load localization data")]
pub struct LoadError;

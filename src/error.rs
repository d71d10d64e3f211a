//! Module containing the definition of error types.

use failure_derive::Fail;

/// Enumeration of the different error kinds.
#[derive(Debug, Fail)]
pub enum Kind {
    /// Configuration error.
    #[fail(display = "there was an error in the configuration: {}", message)]
    Config {
        /// Error message.
        message: String,
    },
    /// Parsing error.
    #[fail(display = "there was an error in the parsing process")]
    Parse,
    /// Invalid app permission model.
    #[fail(display = "invalid app permission model: {}", message)]
    AppModel {
        /// Error message.
        message: String,
    },
}

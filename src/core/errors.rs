//! Error types for parsing user-supplied names.

use thiserror::Error;

/// Error parsing a name given on the command line or in a config file.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown emit format `{0}` (expected `ruby` or `json`)")]
    UnknownFormat(String),
}

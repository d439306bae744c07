//! Error types for message decoding.
//!
//! All fallible codec functions return [`Result<T>`], which uses [`MsgError`]
//! as the error type. Every variant means the same thing at the call site: the
//! message is malformed and the request it carries cannot be serviced.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MsgError>;

/// A message failed to decode.
///
/// Decode failures are unrecoverable for the message that produced them; the
/// caller drops the request rather than retrying or partially applying it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MsgError {
    /// A required field was absent from the message.
    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    /// A field was present but held the wrong kind of value.
    #[error("field '{field}' is not a valid {expected}")]
    InvalidField {
        field: &'static str,
        expected: &'static str,
    },

    /// A string tag did not match any variant of a closed enum.
    #[error("unrecognized tag '{tag}' for field '{field}'")]
    UnknownTag { field: &'static str, tag: String },
}

//! Error types for Feature validation.
//!
//! Validation failures are terminal for the current document; the host
//! pipeline decides whether to drop, tag, or abort. Message texts are part
//! of the contract - callers match on substrings.

use thiserror::Error;

/// Errors raised when a document does not conform to the GeoJSON
/// `Feature` shape.
///
/// All variants map to the same invalid-argument category and are
/// distinguished by message text only.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required envelope key is absent.
    #[error("{0} cannot be null")]
    MissingField(&'static str),

    /// The `type` value is present but is not the string `"Feature"`.
    #[error("Only type Feature is supported")]
    UnsupportedType,

    /// An envelope value that must be a nested mapping is something else.
    #[error("{0} is not an instance of type Map")]
    NotAMap(&'static str),
}

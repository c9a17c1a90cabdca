//! Processor construction from pipeline configuration.
//!
//! The host pipeline hands each processor factory a configuration document
//! for its block; this factory reads the single `field` property and binds
//! a [`FeatureExtractor`] to it.

use thiserror::Error;
use tracing::trace;

use crate::document::Document;
use crate::processor::FeatureExtractor;

/// Configuration key naming the geometry destination field.
pub const FIELD_KEY: &str = "field";

/// Errors raised while reading processor configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FactoryError {
    /// A required configuration property is absent.
    #[error("[{0}] required property is missing")]
    MissingProperty(&'static str),

    /// A configuration property has the wrong JSON type.
    #[error("[{0}] property is not a string")]
    NotAString(&'static str),

    /// A configuration property is present but blank.
    #[error("[{0}] property cannot be empty")]
    EmptyProperty(&'static str),
}

/// Builds [`FeatureExtractor`] instances from configuration documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureExtractorFactory;

impl FeatureExtractorFactory {
    /// Creates an extractor from a processor configuration block.
    ///
    /// The configuration must carry a non-empty string under
    /// [`FIELD_KEY`]; `tag` and `description` are passed through to the
    /// extractor for diagnostics. The configuration document is read, not
    /// consumed.
    ///
    /// # Errors
    ///
    /// Returns [`FactoryError`] if `field` is missing, not a string, or
    /// empty after trimming.
    pub fn create(
        &self,
        tag: &str,
        description: &str,
        config: &Document,
    ) -> Result<FeatureExtractor, FactoryError> {
        let value = config
            .get(FIELD_KEY)
            .ok_or(FactoryError::MissingProperty(FIELD_KEY))?;
        let field = value
            .as_str()
            .ok_or(FactoryError::NotAString(FIELD_KEY))?;
        if field.trim().is_empty() {
            return Err(FactoryError::EmptyProperty(FIELD_KEY));
        }

        trace!(tag = %tag, field = %field, "created feature processor");
        Ok(FeatureExtractor::new(tag, description, field))
    }
}

//! Feature extraction processor.
//!
//! The extractor runs a document through two phases:
//! 1. Validate the GeoJSON `Feature` envelope (type, geometry, properties)
//! 2. Rewrite the document in place (geometry to the destination field,
//!    properties promoted to the root, envelope keys removed)
//!
//! Validation completes fully before any mutation begins, so a failed call
//! leaves the document unmodified.

use serde_json::Value;
use tracing::debug;

use crate::document::Document;
use crate::error::ValidationError;
use crate::feature::{FEATURE_TYPE, GEOMETRY_KEY, PROPERTIES_KEY, TYPE_KEY};

/// Registration identifier for the feature processor.
///
/// Hosts use this string to route pipeline configuration blocks to this
/// implementation; it must stay stable across releases.
pub const FEATURE_PROCESSOR_TYPE: &str = "feature";

/// A single per-document transform step in an ingestion pipeline.
///
/// Processors are immutable after construction and hold no per-call state,
/// so one instance can serve any number of documents. Concurrent calls
/// against the *same* document are the caller's responsibility to avoid.
pub trait Processor {
    /// Fixed type identifier used for pipeline registration.
    fn processor_type(&self) -> &'static str;

    /// Caller-assigned tag identifying this processor instance.
    fn tag(&self) -> &str;

    /// Human-readable description for diagnostics.
    fn description(&self) -> &str;

    /// Runs the transform against `document`, mutating it in place.
    fn process(&self, document: &mut Document) -> Result<(), ValidationError>;
}

/// Extracts GeoJSON `Feature` documents into indexable form.
///
/// # Flow
///
/// ```text
/// { type, geometry, properties, .. } → validate → { <field>: geometry, ..properties, .. }
/// ```
///
/// The geometry object is moved verbatim to the configured destination
/// field, every properties entry is promoted to the document root, and the
/// `type`, `geometry`, and `properties` envelope keys are removed.
#[derive(Debug, Clone)]
pub struct FeatureExtractor {
    tag: String,
    description: String,
    field: String,
}

impl FeatureExtractor {
    /// Creates an extractor writing geometry to `field`.
    ///
    /// `tag` and `description` are diagnostic metadata passed through
    /// unchanged; `field` names the destination of the geometry object.
    pub fn new(
        tag: impl Into<String>,
        description: impl Into<String>,
        field: impl Into<String>,
    ) -> Self {
        Self {
            tag: tag.into(),
            description: description.into(),
            field: field.into(),
        }
    }

    /// The destination field geometry is written to.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Validates the `Feature` envelope and rewrites `document` in place.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] on the first violated condition, checked
    /// in order: missing `type`, unsupported `type` value, missing
    /// `geometry`, non-object `geometry`, non-object `properties`. No
    /// mutation is visible after a failure.
    pub fn extract(&self, document: &mut Document) -> Result<(), ValidationError> {
        let feature_type = document
            .get(TYPE_KEY)
            .ok_or(ValidationError::MissingField(TYPE_KEY))?;
        if feature_type.as_str() != Some(FEATURE_TYPE) {
            return Err(ValidationError::UnsupportedType);
        }

        let geometry = document
            .get(GEOMETRY_KEY)
            .ok_or(ValidationError::MissingField(GEOMETRY_KEY))?;
        if !geometry.is_object() {
            return Err(ValidationError::NotAMap(GEOMETRY_KEY));
        }

        if let Some(properties) = document.get(PROPERTIES_KEY) {
            if !properties.is_object() {
                return Err(ValidationError::NotAMap(PROPERTIES_KEY));
            }
        }

        // Envelope keys come out first so the destination field survives
        // even when it is named "type", "geometry", or "properties".
        document.remove(TYPE_KEY);
        let geometry = document
            .remove(GEOMETRY_KEY)
            .ok_or(ValidationError::MissingField(GEOMETRY_KEY))?;
        let properties = document.remove(PROPERTIES_KEY);

        document.set(self.field.clone(), geometry);

        // Properties are written after geometry; on a name collision the
        // property value wins (last-write-wins).
        let mut promoted = 0usize;
        if let Some(Value::Object(properties)) = properties {
            promoted = properties.len();
            for (key, value) in properties {
                document.set(key, value);
            }
        }

        debug!(
            tag = %self.tag,
            field = %self.field,
            promoted_properties = promoted,
            "extracted feature geometry"
        );
        Ok(())
    }
}

impl Processor for FeatureExtractor {
    fn processor_type(&self) -> &'static str {
        FEATURE_PROCESSOR_TYPE
    }

    fn tag(&self) -> &str {
        &self.tag
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn process(&self, document: &mut Document) -> Result<(), ValidationError> {
        self.extract(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn point_feature() -> Document {
        Document::try_from(json!({
            "type": "Feature",
            "properties": { "name": "Dinagat Islands" },
            "geometry": { "type": "Point", "coordinates": [125.6, 10.1] },
        }))
        .unwrap()
    }

    fn extractor(field: &str) -> FeatureExtractor {
        FeatureExtractor::new("unit-test", "description", field)
    }

    #[test]
    fn test_extract_moves_geometry_and_promotes_properties() {
        let mut document = point_feature();
        extractor("location").extract(&mut document).unwrap();

        assert_eq!(
            document.get("location"),
            Some(&json!({ "type": "Point", "coordinates": [125.6, 10.1] }))
        );
        assert_eq!(document.get("name"), Some(&json!("Dinagat Islands")));
        assert!(!document.contains_key("type"));
        assert!(!document.contains_key("geometry"));
        assert!(!document.contains_key("properties"));
    }

    #[test]
    fn test_extract_overwrites_existing_destination_field() {
        let mut document = point_feature();
        document.set("location", json!("stale"));
        extractor("location").extract(&mut document).unwrap();

        assert_eq!(
            document.get("location"),
            Some(&json!({ "type": "Point", "coordinates": [125.6, 10.1] }))
        );
    }

    #[test]
    fn test_destination_named_geometry_survives_cleanup() {
        let mut document = point_feature();
        extractor("geometry").extract(&mut document).unwrap();

        assert_eq!(
            document.get("geometry"),
            Some(&json!({ "type": "Point", "coordinates": [125.6, 10.1] }))
        );
        assert!(!document.contains_key("type"));
        assert!(!document.contains_key("properties"));
    }

    #[test]
    fn test_destination_named_type_survives_cleanup() {
        let mut document = point_feature();
        extractor("type").extract(&mut document).unwrap();

        assert_eq!(
            document.get("type"),
            Some(&json!({ "type": "Point", "coordinates": [125.6, 10.1] }))
        );
        assert!(!document.contains_key("geometry"));
        assert!(!document.contains_key("properties"));
    }

    #[test]
    fn test_destination_named_properties_survives_cleanup() {
        let mut document = Document::try_from(json!({
            "type": "Feature",
            "geometry": { "type": "Point", "coordinates": [0.0, 0.0] },
        }))
        .unwrap();
        extractor("properties").extract(&mut document).unwrap();

        assert_eq!(
            document.get("properties"),
            Some(&json!({ "type": "Point", "coordinates": [0.0, 0.0] }))
        );
        assert!(!document.contains_key("type"));
        assert!(!document.contains_key("geometry"));
    }

    #[test]
    fn test_property_colliding_with_destination_wins() {
        let mut document = Document::try_from(json!({
            "type": "Feature",
            "properties": { "location": "from-properties" },
            "geometry": { "type": "Point", "coordinates": [0.0, 0.0] },
        }))
        .unwrap();
        extractor("location").extract(&mut document).unwrap();

        // Properties are merged after the geometry write.
        assert_eq!(document.get("location"), Some(&json!("from-properties")));
    }

    #[test]
    fn test_non_string_type_is_unsupported() {
        let mut document = point_feature();
        document.set("type", json!(42));
        let err = extractor("location").extract(&mut document).unwrap_err();
        assert_eq!(err, ValidationError::UnsupportedType);
    }

    #[test]
    fn test_failed_extract_leaves_document_unmodified() {
        let mut document = point_feature();
        document.set("geometry", json!("invalid-value"));
        let before = document.clone();

        let err = extractor("location").extract(&mut document).unwrap_err();
        assert_eq!(err, ValidationError::NotAMap(GEOMETRY_KEY));
        assert_eq!(document, before);
    }

    #[test]
    fn test_processor_trait_reports_identity() {
        let processor = extractor("location");
        assert_eq!(processor.processor_type(), FEATURE_PROCESSOR_TYPE);
        assert_eq!(processor.tag(), "unit-test");
        assert_eq!(processor.description(), "description");
        assert_eq!(processor.field(), "location");
    }
}

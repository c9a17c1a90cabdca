//! GeoFeature - GeoJSON Feature ingest processor
//!
//! This library provides a single document-transform step for ingestion
//! pipelines: given a document shaped like a GeoJSON `Feature`, it moves the
//! `geometry` member to a configured destination field, promotes every
//! `properties` member to the document root, and removes the GeoJSON
//! envelope keys (`type`, `geometry`, `properties`).
//!
//! # High-Level API
//!
//! ```
//! use geofeature::{Document, FeatureExtractor};
//! use serde_json::json;
//!
//! let mut document = Document::try_from(json!({
//!     "type": "Feature",
//!     "properties": { "name": "Dinagat Islands" },
//!     "geometry": { "type": "Point", "coordinates": [125.6, 10.1] },
//! }))?;
//!
//! let processor = FeatureExtractor::new("my-pipeline", "example", "location");
//! processor.extract(&mut document)?;
//!
//! assert_eq!(
//!     document.get("location"),
//!     Some(&json!({ "type": "Point", "coordinates": [125.6, 10.1] })),
//! );
//! assert_eq!(document.get("name"), Some(&json!("Dinagat Islands")));
//! assert!(document.get("geometry").is_none());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Validation is strict and fail-fast: a document that is not a well-formed
//! `Feature` is rejected with a [`ValidationError`] before any mutation, so
//! a failed call leaves the input untouched.

pub mod document;
pub mod error;
pub mod factory;
pub mod feature;
pub mod processor;

pub use document::Document;
pub use error::ValidationError;
pub use factory::{FactoryError, FeatureExtractorFactory};
pub use processor::{FeatureExtractor, Processor, FEATURE_PROCESSOR_TYPE};

/// Version of the GeoFeature library.
///
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

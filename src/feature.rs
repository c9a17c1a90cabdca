//! GeoJSON `Feature` envelope keys.
//!
//! A `Feature` document carries three well-known top-level members:
//! a `type` discriminator (always the string `"Feature"`), a `geometry`
//! object, and an optional `properties` object. The geometry payload is
//! opaque to this crate and copied verbatim.

/// Key holding the GeoJSON object type discriminator.
pub const TYPE_KEY: &str = "type";

/// Key holding the geometry object.
pub const GEOMETRY_KEY: &str = "geometry";

/// Key holding the optional properties object.
pub const PROPERTIES_KEY: &str = "properties";

/// The only supported value of [`TYPE_KEY`] (case-sensitive).
pub const FEATURE_TYPE: &str = "Feature";

//! Open, schema-less extension fields attached to entities.

/// Arbitrary string-keyed values stored as a JSONB document next to the
/// fixed columns of a record.
pub type ExtensionMap = serde_json::Map<String, serde_json::Value>;

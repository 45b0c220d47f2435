//! JSON Schema for `research.json`, for editor completion.

use crate::types::ResearchConfig;
use schemars::{Schema, generate::SchemaSettings};

/// Generate the JSON Schema for [`ResearchConfig`].
pub fn schema() -> Schema {
    SchemaSettings::default()
        .into_generator()
        .into_root_schema_for::<ResearchConfig>()
}

/// Generate the JSON Schema as a pretty-printed JSON string.
pub fn schema_json_pretty() -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(&schema())?)
}

use serde_json::Value;

use crate::core::{errors::AppResult, types::CatalogEntry};

/// JSON Schema for a catalog file: an array of tagged entries.
pub fn catalog_schema() -> AppResult<Value> {
    let schema = schemars::schema_for!(Vec<CatalogEntry>);
    Ok(serde_json::to_value(schema)?)
}

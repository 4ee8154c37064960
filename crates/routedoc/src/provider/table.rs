use std::path::Path;

use routedoc_core::ControllerMetadata;
use serde::{Deserialize, Serialize};

use super::MetadataProvider;
use crate::MergeResult;

/// Precomputed controller metadata
///
/// ```json
/// {
///   "controllers": [
///     {
///       "name": "UserController",
///       "mapping": { "path": ["/users"] },
///       "methods": [
///         {
///           "name": "find",
///           "mapping": { "path": ["/{id}"], "method": ["get"] },
///           "params": [{ "name": "user_id", "binding": { "kind": "path", "name": "id" } }],
///           "return_type": "ResponseEntity"
///         }
///       ]
///     }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataTable {
    #[serde(default)]
    controllers: Vec<ControllerMetadata>,
}

impl MetadataTable {
    pub fn new(controllers: Vec<ControllerMetadata>) -> Self {
        Self { controllers }
    }

    pub fn from_json_str(json: &str) -> MergeResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> MergeResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn to_json_string(&self) -> MergeResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl MetadataProvider for MetadataTable {
    fn controllers(&self) -> &[ControllerMetadata] {
        &self.controllers
    }
}

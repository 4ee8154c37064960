//! Merge configuration.

use serde::Deserialize;

use crate::MergeResult;

/// Settings for [`RequestMappingMerger`](crate::RequestMappingMerger)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MergeConfig {
    /// Return types that only wrap a body with status and headers. Their
    /// token is removed from the documented response type.
    pub envelope_types: Vec<String>,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            envelope_types: vec!["ResponseEntity".to_string()],
        }
    }
}

impl MergeConfig {
    pub fn from_json_str(json: &str) -> MergeResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Whether `type_name` names an envelope. Only the last `::` segment is
    /// compared, so `http::ResponseEntity` matches `ResponseEntity`.
    pub fn is_envelope(&self, type_name: &str) -> bool {
        let last = |name: &str| name.rsplit("::").next().unwrap_or(name).trim().to_string();
        let type_name = last(type_name);
        self.envelope_types.iter().any(|envelope| last(envelope) == type_name)
    }
}

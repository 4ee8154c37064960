//! Documentation records built by a scanner and enriched from routing metadata

use indexmap::IndexSet;
use serde::Serialize;

use crate::{ApiVerb, JsonDocType};

/// Controller-level documentation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiDoc {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub methods: Vec<ApiMethodDoc>,
}

impl ApiDoc {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Endpoint-level documentation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiMethodDoc {
    pub path: String,
    pub verb: ApiVerb,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Media types, insertion ordered and without duplicates
    pub produces: IndexSet<String>,
    pub consumes: IndexSet<String>,
    pub headers: IndexSet<ApiHeaderDoc>,
    pub path_parameters: Vec<ApiParamDoc>,
    pub query_parameters: Vec<ApiParamDoc>,
    pub response: ApiResponseObjectDoc,
}

/// Required request header.
///
/// Identity is the header name alone, so a set of headers holds one entry per
/// name whatever the descriptions say.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ApiHeaderDoc {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ApiHeaderDoc {
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        Self {
            name: name.into(),
            description,
        }
    }
}

impl PartialEq for ApiHeaderDoc {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for ApiHeaderDoc {}

impl std::hash::Hash for ApiHeaderDoc {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

/// Parameter documentation, one per declared handler parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiParamDoc {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// `"true"` or `"false"`
    pub required: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

impl ApiParamDoc {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            required: true.to_string(),
            default_value: None,
        }
    }
}

impl Default for ApiParamDoc {
    fn default() -> Self {
        Self::new("")
    }
}

/// Documented response body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponseObjectDoc {
    pub json_doc_type: JsonDocType,
}

impl ApiResponseObjectDoc {
    pub fn new(json_doc_type: JsonDocType) -> Self {
        Self { json_doc_type }
    }
}

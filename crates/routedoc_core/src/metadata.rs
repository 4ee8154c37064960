//! Routing metadata declared on controllers and their handler methods

use serde::{Deserialize, Serialize};

/// Route mapping declaration, on a controller or on a handler method.
///
/// Every list keeps declaration order; an empty list means "not declared".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestMapping {
    /// Route paths, only the first is documented
    pub path: Vec<String>,
    /// Raw verb tokens (`get`, `POST`, ...), only the first is documented
    pub method: Vec<String>,
    pub produces: Vec<String>,
    pub consumes: Vec<String>,
    /// Header constraints, `name=value` or bare `name`
    pub headers: Vec<String>,
}

/// How a handler parameter is extracted from the request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParamBinding {
    /// Path segment. An empty name means the declared identifier is used.
    Path {
        #[serde(default)]
        name: String,
    },
    /// Query string parameter
    Query {
        #[serde(default)]
        name: String,
        #[serde(default = "default_required")]
        required: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        default_value: Option<String>,
    },
    #[default]
    Unbound,
}

const fn default_required() -> bool {
    true
}

/// Handler parameter metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamMetadata {
    /// Declared identifier
    pub name: String,
    #[serde(default)]
    pub binding: ParamBinding,
}

/// Handler method metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodMetadata {
    /// Function name
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mapping: Option<RequestMapping>,
    /// Declared parameters in order, receiver excluded
    #[serde(default)]
    pub params: Vec<ParamMetadata>,
    /// Outermost name of the declared return type (`ResponseEntity` for
    /// `ResponseEntity<Order>`), `None` for unit or opaque types
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_type: Option<String>,
}

/// Controller metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControllerMetadata {
    /// Controller type name
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mapping: Option<RequestMapping>,
    #[serde(default)]
    pub methods: Vec<MethodMetadata>,
}

impl ControllerMetadata {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn method(&self, name: &str) -> Option<&MethodMetadata> {
        self.methods.iter().find(|m| m.name == name)
    }
}

/// Types that describe their own routing metadata.
///
/// Implemented by `#[routedoc::controller]` on an `impl` block.
pub trait DescribeController {
    fn describe() -> ControllerMetadata;
}

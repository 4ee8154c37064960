use routedoc_core::{ApiParamDoc, ParamBinding};

/// Apply a path binding to a parameter doc.
///
/// Only an explicit, non-empty binding name replaces the documented name.
/// Any other binding leaves the doc untouched.
pub fn merge_path_param(binding: &ParamBinding, mut doc: ApiParamDoc) -> ApiParamDoc {
    if let ParamBinding::Path { name } = binding
        && !name.is_empty()
    {
        doc.name.clone_from(name);
    }
    doc
}

/// Apply a query binding to a parameter doc.
///
/// The required flag is always overwritten; the name only when explicit and
/// the default value only when one is declared.
pub fn merge_query_param(binding: &ParamBinding, mut doc: ApiParamDoc) -> ApiParamDoc {
    if let ParamBinding::Query {
        name,
        required,
        default_value,
    } = binding
    {
        if !name.is_empty() {
            doc.name.clone_from(name);
        }
        doc.required = required.to_string();
        if let Some(default_value) = default_value {
            doc.default_value = Some(default_value.clone());
        }
    }
    doc
}

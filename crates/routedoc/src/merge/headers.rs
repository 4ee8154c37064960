use indexmap::IndexSet;
use routedoc_core::{ApiHeaderDoc, RequestMapping};

/// Required header names.
///
/// A constraint `name=value` documents `name`; a constraint without `=` is
/// taken whole. Method-level constraints discard the controller-level set.
pub fn resolve_headers(
    controller: Option<&RequestMapping>,
    method: Option<&RequestMapping>,
) -> IndexSet<ApiHeaderDoc> {
    [method, controller]
        .into_iter()
        .flatten()
        .map(|mapping| &mapping.headers)
        .find(|declared| !declared.is_empty())
        .map(|declared| {
            declared
                .iter()
                .map(|constraint| ApiHeaderDoc::new(header_name(constraint), None))
                .collect()
        })
        .unwrap_or_default()
}

fn header_name(constraint: &str) -> &str {
    constraint
        .split_once('=')
        .map_or(constraint, |(name, _)| name)
}

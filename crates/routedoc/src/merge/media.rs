use indexmap::IndexSet;
use routedoc_core::RequestMapping;

/// Media types produced by the endpoint.
///
/// Method-level declarations replace the controller-level ones entirely.
pub fn resolve_produces(
    controller: Option<&RequestMapping>,
    method: Option<&RequestMapping>,
) -> IndexSet<String> {
    resolve_override(controller, method, |mapping| &mapping.produces)
}

/// Media types consumed by the endpoint, resolved like [`resolve_produces`].
pub fn resolve_consumes(
    controller: Option<&RequestMapping>,
    method: Option<&RequestMapping>,
) -> IndexSet<String> {
    resolve_override(controller, method, |mapping| &mapping.consumes)
}

fn resolve_override(
    controller: Option<&RequestMapping>,
    method: Option<&RequestMapping>,
    select: impl Fn(&RequestMapping) -> &Vec<String>,
) -> IndexSet<String> {
    [method, controller]
        .into_iter()
        .flatten()
        .map(&select)
        .find(|declared| !declared.is_empty())
        .map(|declared| declared.iter().cloned().collect())
        .unwrap_or_default()
}

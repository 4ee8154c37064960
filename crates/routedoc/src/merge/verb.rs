use routedoc_core::{ApiVerb, RequestMapping};

use crate::{MergeError, MergeResult};

/// Resolve the single documented verb.
///
/// Only the first declared verb of a mapping is considered. A method-level
/// verb overrides the controller-level one; with none declared the verb is
/// GET. Unknown verb tokens are rejected at either level, even when the
/// controller verb would be overridden.
pub fn resolve_verb(
    controller: Option<&RequestMapping>,
    method: Option<&RequestMapping>,
) -> MergeResult<ApiVerb> {
    let controller_verb = first_verb(controller)?;
    let method_verb = first_verb(method)?;
    Ok(method_verb.or(controller_verb).unwrap_or_default())
}

fn first_verb(mapping: Option<&RequestMapping>) -> MergeResult<Option<ApiVerb>> {
    mapping
        .and_then(|mapping| mapping.method.first())
        .map(|token| {
            ApiVerb::try_from(token.as_str()).map_err(|_| MergeError::UnsupportedVerb(token.clone()))
        })
        .transpose()
}

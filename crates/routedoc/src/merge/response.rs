use routedoc_core::ApiResponseObjectDoc;

use crate::MergeConfig;

/// Remove the envelope token from a response descriptor.
///
/// When the declared return type is one of the configured envelope types the
/// outermost token is dropped, exposing the wrapped body type. Any other
/// return type leaves the descriptor unchanged, as does an empty descriptor.
pub fn adjust_response(
    return_type: Option<&str>,
    config: &MergeConfig,
    mut response: ApiResponseObjectDoc,
) -> ApiResponseObjectDoc {
    if return_type.is_some_and(|name| config.is_envelope(name)) {
        response.json_doc_type.remove_outermost();
    }
    response
}

//! Merge orchestration.
//!
//! A documentation scanner builds baseline records from documentation
//! metadata alone. A [`DocMerger`] then enriches them with what the routing
//! metadata declares. Records are taken by value and returned updated.

use routedoc_core::{
    ApiDoc, ApiMethodDoc, ApiParamDoc, ControllerMetadata, MethodMetadata, ParamBinding,
};
use tracing::{debug, trace};

use crate::{
    MergeConfig, MergeError, MergeResult,
    merge::{
        adjust_response, merge_path_param, merge_query_param, resolve_consumes, resolve_headers,
        resolve_path, resolve_produces, resolve_verb,
    },
};

/// Enrichment hooks applied to scanner-built documentation
pub trait DocMerger {
    /// Controller-level enrichment
    fn merge_api_doc(&self, controller: &ControllerMetadata, doc: ApiDoc) -> ApiDoc;

    /// Endpoint-level enrichment
    fn merge_api_method_doc(
        &self,
        method: &MethodMetadata,
        controller: &ControllerMetadata,
        doc: ApiMethodDoc,
    ) -> MergeResult<ApiMethodDoc>;

    /// Enrichment of the parameter at `index` when it is bound to a path segment
    fn merge_api_path_param_doc(
        &self,
        method: &MethodMetadata,
        index: usize,
        doc: ApiParamDoc,
    ) -> MergeResult<ApiParamDoc>;

    /// Enrichment of the parameter at `index` when it is bound to the query string
    fn merge_api_query_param_doc(
        &self,
        method: &MethodMetadata,
        index: usize,
        doc: ApiParamDoc,
    ) -> MergeResult<ApiParamDoc>;
}

/// [`DocMerger`] driven by [`RequestMapping`](routedoc_core::RequestMapping)
/// declarations.
///
/// - path: controller path followed by method path
/// - verb: method verb, else controller verb, else GET
/// - produces, consumes, headers: method declarations replace the
///   controller ones, and the result is added to what the baseline holds
/// - response: envelope return types lose their outermost token
#[derive(Debug, Clone, Default)]
pub struct RequestMappingMerger {
    config: MergeConfig,
}

impl RequestMappingMerger {
    pub fn new(config: MergeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MergeConfig {
        &self.config
    }
}

fn param_binding<'a>(method: &'a MethodMetadata, index: usize) -> MergeResult<&'a ParamBinding> {
    method
        .params
        .get(index)
        .map(|param| &param.binding)
        .ok_or_else(|| MergeError::ParamIndexOutOfRange {
            method: method.name.clone(),
            index,
            count: method.params.len(),
        })
}

impl DocMerger for RequestMappingMerger {
    fn merge_api_doc(&self, _controller: &ControllerMetadata, doc: ApiDoc) -> ApiDoc {
        doc
    }

    fn merge_api_method_doc(
        &self,
        method: &MethodMetadata,
        controller: &ControllerMetadata,
        mut doc: ApiMethodDoc,
    ) -> MergeResult<ApiMethodDoc> {
        let class_mapping = controller.mapping.as_ref();
        let method_mapping = method.mapping.as_ref();

        doc.path = resolve_path(class_mapping, method_mapping);
        doc.verb = resolve_verb(class_mapping, method_mapping)?;
        doc.produces
            .extend(resolve_produces(class_mapping, method_mapping));
        doc.consumes
            .extend(resolve_consumes(class_mapping, method_mapping));
        doc.headers
            .extend(resolve_headers(class_mapping, method_mapping));
        doc.response = adjust_response(method.return_type.as_deref(), &self.config, doc.response);

        debug!(
            controller = %controller.name,
            method = %method.name,
            path = %doc.path,
            verb = %doc.verb,
            "merged endpoint documentation"
        );
        Ok(doc)
    }

    fn merge_api_path_param_doc(
        &self,
        method: &MethodMetadata,
        index: usize,
        doc: ApiParamDoc,
    ) -> MergeResult<ApiParamDoc> {
        let binding = param_binding(method, index)?;
        trace!(method = %method.name, index, ?binding, "merging path parameter");
        Ok(merge_path_param(binding, doc))
    }

    fn merge_api_query_param_doc(
        &self,
        method: &MethodMetadata,
        index: usize,
        doc: ApiParamDoc,
    ) -> MergeResult<ApiParamDoc> {
        let binding = param_binding(method, index)?;
        trace!(method = %method.name, index, ?binding, "merging query parameter");
        Ok(merge_query_param(binding, doc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use routedoc_core::{
        ApiHeaderDoc, ApiResponseObjectDoc, ApiVerb, JsonDocType, ParamMetadata, RequestMapping,
    };

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    fn users_controller() -> ControllerMetadata {
        ControllerMetadata {
            name: "UserController".into(),
            mapping: Some(RequestMapping {
                path: strings(&["/users"]),
                method: strings(&["put"]),
                produces: strings(&["application/xml"]),
                consumes: strings(&["application/xml"]),
                headers: strings(&["X-Version=1"]),
            }),
            methods: Vec::new(),
        }
    }

    fn remove_method() -> MethodMetadata {
        MethodMetadata {
            name: "remove".into(),
            mapping: Some(RequestMapping {
                path: strings(&["/{id}"]),
                method: strings(&["delete"]),
                produces: strings(&["application/json"]),
                headers: strings(&["X-Auth=token"]),
                ..RequestMapping::default()
            }),
            params: vec![
                ParamMetadata {
                    name: "user_id".into(),
                    binding: ParamBinding::Path { name: "id".into() },
                },
                ParamMetadata {
                    name: "force".into(),
                    binding: ParamBinding::Query {
                        name: String::new(),
                        required: false,
                        default_value: None,
                    },
                },
                ParamMetadata {
                    name: "ctx".into(),
                    binding: ParamBinding::Unbound,
                },
            ],
            return_type: Some("ResponseEntity".into()),
        }
    }

    fn baseline() -> ApiMethodDoc {
        ApiMethodDoc {
            path: "/ignored".into(),
            verb: ApiVerb::Post,
            response: ApiResponseObjectDoc::new(["ResponseEntity", "User"].into_iter().collect()),
            ..ApiMethodDoc::default()
        }
    }

    #[test]
    fn test_merge_api_method_doc() {
        let merger = RequestMappingMerger::default();
        let doc = merger
            .merge_api_method_doc(&remove_method(), &users_controller(), baseline())
            .unwrap();

        assert_eq!(doc.path, "/users/{id}");
        assert_eq!(doc.verb, ApiVerb::Delete);
        assert_eq!(doc.produces.iter().collect::<Vec<_>>(), vec!["application/json"]);
        assert_eq!(doc.consumes.iter().collect::<Vec<_>>(), vec!["application/xml"]);
        assert_eq!(
            doc.headers.into_iter().collect::<Vec<_>>(),
            vec![ApiHeaderDoc::new("X-Auth", None)]
        );
        assert_eq!(doc.response.json_doc_type.rendered(), "User");
    }

    #[test]
    fn test_merge_api_method_doc_unions_into_baseline() {
        let mut baseline = baseline();
        baseline.produces.insert("text/plain".into());
        baseline.produces.insert("application/json".into());
        baseline.headers.insert(ApiHeaderDoc::new("X-Request-Id", None));

        let doc = RequestMappingMerger::default()
            .merge_api_method_doc(&remove_method(), &users_controller(), baseline)
            .unwrap();

        assert_eq!(
            doc.produces.iter().collect::<Vec<_>>(),
            vec!["text/plain", "application/json"]
        );
        let headers: Vec<_> = doc.headers.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(headers, vec!["X-Request-Id", "X-Auth"]);
    }

    #[test]
    fn test_merge_api_method_doc_keeps_documented_header() {
        let mut baseline = baseline();
        baseline
            .headers
            .insert(ApiHeaderDoc::new("X-Auth", Some("auth token".into())));

        let doc = RequestMappingMerger::default()
            .merge_api_method_doc(&remove_method(), &users_controller(), baseline)
            .unwrap();

        let headers: Vec<_> = doc
            .headers
            .iter()
            .map(|h| (h.name.as_str(), h.description.as_deref()))
            .collect();
        assert_eq!(headers, vec![("X-Auth", Some("auth token"))]);
    }

    #[test]
    fn test_merge_api_method_doc_without_mappings() {
        let controller = ControllerMetadata::new("Plain");
        let method = MethodMetadata {
            name: "index".into(),
            return_type: Some("Order".into()),
            ..MethodMetadata::default()
        };
        let doc = RequestMappingMerger::default()
            .merge_api_method_doc(&method, &controller, baseline())
            .unwrap();

        assert_eq!(doc.path, "");
        assert_eq!(doc.verb, ApiVerb::Get);
        assert!(doc.produces.is_empty());
        assert!(doc.consumes.is_empty());
        assert!(doc.headers.is_empty());
        assert_eq!(doc.response.json_doc_type.rendered(), "ResponseEntity of User");
    }

    #[test]
    fn test_merge_api_method_doc_unsupported_verb() {
        let mut method = remove_method();
        if let Some(mapping) = method.mapping.as_mut() {
            mapping.method = strings(&["connect"]);
        }
        let err = RequestMappingMerger::default()
            .merge_api_method_doc(&method, &users_controller(), baseline())
            .unwrap_err();
        assert!(matches!(err, MergeError::UnsupportedVerb(_)));
    }

    #[test]
    fn test_merge_api_doc_is_identity() {
        let mut doc = ApiDoc::new("users");
        doc.description = Some("User management".into());
        let merged = RequestMappingMerger::default().merge_api_doc(&users_controller(), doc.clone());
        assert_eq!(merged, doc);
    }

    #[test]
    fn test_merge_api_path_param_doc() {
        let merger = RequestMappingMerger::default();
        let method = remove_method();

        let doc = merger
            .merge_api_path_param_doc(&method, 0, ApiParamDoc::new("user_id"))
            .unwrap();
        assert_eq!(doc.name, "id");

        // query-bound parameter is left alone by the path merger
        let doc = merger
            .merge_api_path_param_doc(&method, 1, ApiParamDoc::new("force"))
            .unwrap();
        assert_eq!(doc, ApiParamDoc::new("force"));
    }

    #[test]
    fn test_merge_api_query_param_doc() {
        let merger = RequestMappingMerger::default();
        let method = remove_method();

        let doc = merger
            .merge_api_query_param_doc(&method, 1, ApiParamDoc::new("force"))
            .unwrap();
        assert_eq!(doc.name, "force");
        assert_eq!(doc.required, "false");
        assert!(doc.default_value.is_none());

        let doc = merger
            .merge_api_query_param_doc(&method, 2, ApiParamDoc::new("ctx"))
            .unwrap();
        assert_eq!(doc, ApiParamDoc::new("ctx"));
    }

    #[test]
    fn test_param_index_out_of_range() {
        let merger = RequestMappingMerger::default();
        let method = remove_method();

        let err = merger
            .merge_api_path_param_doc(&method, 3, ApiParamDoc::new("x"))
            .unwrap_err();
        assert!(matches!(
            err,
            MergeError::ParamIndexOutOfRange { index: 3, count: 3, .. }
        ));
        assert!(
            merger
                .merge_api_query_param_doc(&method, 7, ApiParamDoc::new("x"))
                .is_err()
        );
    }

    #[test]
    fn test_custom_envelope_config() {
        let merger = RequestMappingMerger::new(MergeConfig {
            envelope_types: vec!["Envelope".into()],
        });
        let mut method = remove_method();
        method.return_type = Some("Envelope".into());
        let mut doc = baseline();
        doc.response = ApiResponseObjectDoc::new(JsonDocType::from_iter(["Envelope", "User"]));

        let doc = merger
            .merge_api_method_doc(&method, &users_controller(), doc)
            .unwrap();
        assert_eq!(doc.response.json_doc_type.rendered(), "User");
        assert_eq!(merger.config().envelope_types, vec!["Envelope"]);
    }
}

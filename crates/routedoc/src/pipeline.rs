//! End-to-end documentation run over every known controller.

use routedoc_core::{
    ApiDoc, ApiMethodDoc, ApiParamDoc, ControllerMetadata, MethodMetadata, ParamBinding,
};
use tracing::{debug, info};

use crate::{DocMerger, MergeResult, MetadataProvider};

/// Where a parameter doc is listed on its endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamLocation {
    Path,
    Query,
}

/// Builds baseline records from documentation metadata alone, before any
/// routing information is merged in.
pub trait BaselineScanner {
    fn api_doc(&self, controller: &ControllerMetadata) -> ApiDoc;

    fn api_method_doc(&self, controller: &ControllerMetadata, method: &MethodMetadata)
    -> ApiMethodDoc;

    fn api_param_doc(
        &self,
        controller: &ControllerMetadata,
        method: &MethodMetadata,
        index: usize,
    ) -> ApiParamDoc;

    /// Where the parameter at `index` is documented, `None` to leave it out.
    ///
    /// Defaults to the routing binding; unbound parameters are left out.
    fn param_location(&self, method: &MethodMetadata, index: usize) -> Option<ParamLocation> {
        match method.params.get(index)?.binding {
            ParamBinding::Path { .. } => Some(ParamLocation::Path),
            ParamBinding::Query { .. } => Some(ParamLocation::Query),
            ParamBinding::Unbound => None,
        }
    }
}

/// Scanner that knows nothing beyond declared names
#[derive(Debug, Clone, Copy, Default)]
pub struct NameScanner;

impl BaselineScanner for NameScanner {
    fn api_doc(&self, controller: &ControllerMetadata) -> ApiDoc {
        ApiDoc::new(controller.name.clone())
    }

    fn api_method_doc(
        &self,
        _controller: &ControllerMetadata,
        _method: &MethodMetadata,
    ) -> ApiMethodDoc {
        ApiMethodDoc::default()
    }

    fn api_param_doc(
        &self,
        _controller: &ControllerMetadata,
        method: &MethodMetadata,
        index: usize,
    ) -> ApiParamDoc {
        method
            .params
            .get(index)
            .map_or_else(ApiParamDoc::default, |param| ApiParamDoc::new(param.name.clone()))
    }
}

/// Runs a scanner and a merger over all controllers of a provider.
///
/// The scanner decides where each parameter is listed (see
/// [`BaselineScanner::param_location`]). Listed parameters then go through the
/// matching merger hook, which leaves them unmodified when their routing
/// binding does not match.
#[derive(Debug, Clone, Default)]
pub struct DocumentationPipeline<M> {
    merger: M,
}

impl<M: DocMerger> DocumentationPipeline<M> {
    pub fn new(merger: M) -> Self {
        Self { merger }
    }

    pub fn merger(&self) -> &M {
        &self.merger
    }

    pub fn document<P, S>(&self, provider: &P, scanner: &S) -> MergeResult<Vec<ApiDoc>>
    where
        P: MetadataProvider + ?Sized,
        S: BaselineScanner + ?Sized,
    {
        let docs = provider
            .controllers()
            .iter()
            .map(|controller| self.document_controller(controller, scanner))
            .collect::<MergeResult<Vec<_>>>()?;
        info!(controllers = docs.len(), "documentation generated");
        Ok(docs)
    }

    pub fn document_controller<S>(
        &self,
        controller: &ControllerMetadata,
        scanner: &S,
    ) -> MergeResult<ApiDoc>
    where
        S: BaselineScanner + ?Sized,
    {
        let mut doc = self
            .merger
            .merge_api_doc(controller, scanner.api_doc(controller));
        for method in &controller.methods {
            doc.methods
                .push(self.document_method(controller, method, scanner)?);
        }
        debug!(
            controller = %controller.name,
            methods = doc.methods.len(),
            "documented controller"
        );
        Ok(doc)
    }

    fn document_method<S>(
        &self,
        controller: &ControllerMetadata,
        method: &MethodMetadata,
        scanner: &S,
    ) -> MergeResult<ApiMethodDoc>
    where
        S: BaselineScanner + ?Sized,
    {
        let baseline = scanner.api_method_doc(controller, method);
        let mut doc = self
            .merger
            .merge_api_method_doc(method, controller, baseline)?;

        for index in 0..method.params.len() {
            match scanner.param_location(method, index) {
                Some(ParamLocation::Path) => {
                    let param_doc = scanner.api_param_doc(controller, method, index);
                    doc.path_parameters.push(
                        self.merger
                            .merge_api_path_param_doc(method, index, param_doc)?,
                    );
                }
                Some(ParamLocation::Query) => {
                    let param_doc = scanner.api_param_doc(controller, method, index);
                    doc.query_parameters.push(
                        self.merger
                            .merge_api_query_param_doc(method, index, param_doc)?,
                    );
                }
                None => {}
            }
        }
        Ok(doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MetadataTable, RequestMappingMerger};

    const TABLE: &str = r#"{
        "controllers": [
            {
                "name": "OrderController",
                "mapping": { "path": ["/orders"], "produces": ["application/json"] },
                "methods": [
                    {
                        "name": "find",
                        "mapping": { "path": ["/{id}"] },
                        "params": [
                            { "name": "order_id", "binding": { "kind": "path", "name": "id" } },
                            { "name": "expand", "binding": { "kind": "query", "required": false, "default_value": "none" } },
                            { "name": "ctx" }
                        ]
                    },
                    {
                        "name": "create",
                        "mapping": { "method": ["post"], "consumes": ["application/json"] }
                    }
                ]
            },
            { "name": "PingController", "methods": [{ "name": "ping" }] }
        ]
    }"#;

    fn pipeline() -> DocumentationPipeline<RequestMappingMerger> {
        DocumentationPipeline::new(RequestMappingMerger::default())
    }

    #[test]
    fn test_document_all_controllers() {
        let table = MetadataTable::from_json_str(TABLE).unwrap();
        let docs = pipeline().document(&table, &NameScanner).unwrap();

        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].name, "OrderController");
        assert_eq!(docs[0].methods.len(), 2);
        assert_eq!(docs[1].methods[0].path, "");
        assert_eq!(docs[1].methods[0].verb, routedoc_core::ApiVerb::Get);
    }

    #[test]
    fn test_params_dispatched_by_binding() {
        let table = MetadataTable::from_json_str(TABLE).unwrap();
        let docs = pipeline().document(&table, &NameScanner).unwrap();
        let find = &docs[0].methods[0];

        assert_eq!(find.path, "/orders/{id}");
        assert_eq!(find.path_parameters.len(), 1);
        assert_eq!(find.path_parameters[0].name, "id");
        assert_eq!(find.query_parameters.len(), 1);
        assert_eq!(find.query_parameters[0].name, "expand");
        assert_eq!(find.query_parameters[0].required, "false");
        assert_eq!(find.query_parameters[0].default_value.as_deref(), Some("none"));
    }

    /// Lists every parameter as a query parameter
    struct QueryScanner;

    impl BaselineScanner for QueryScanner {
        fn api_doc(&self, controller: &ControllerMetadata) -> ApiDoc {
            NameScanner.api_doc(controller)
        }

        fn api_method_doc(
            &self,
            controller: &ControllerMetadata,
            method: &MethodMetadata,
        ) -> ApiMethodDoc {
            NameScanner.api_method_doc(controller, method)
        }

        fn api_param_doc(
            &self,
            controller: &ControllerMetadata,
            method: &MethodMetadata,
            index: usize,
        ) -> ApiParamDoc {
            let mut doc = NameScanner.api_param_doc(controller, method, index);
            doc.description = Some(format!("parameter {index}"));
            doc
        }

        fn param_location(&self, _method: &MethodMetadata, _index: usize) -> Option<ParamLocation> {
            Some(ParamLocation::Query)
        }
    }

    #[test]
    fn test_unbound_param_passes_through_unmodified() {
        let table = MetadataTable::from_json_str(TABLE).unwrap();
        let docs = pipeline().document(&table, &QueryScanner).unwrap();
        let find = &docs[0].methods[0];

        assert!(find.path_parameters.is_empty());
        assert_eq!(find.query_parameters.len(), 3);
        // path-bound and unbound parameters keep their scanner docs
        assert_eq!(find.query_parameters[0].name, "order_id");
        assert_eq!(find.query_parameters[0].required, "true");
        assert_eq!(find.query_parameters[1].name, "expand");
        assert_eq!(find.query_parameters[1].required, "false");
        let mut ctx = ApiParamDoc::new("ctx");
        ctx.description = Some("parameter 2".into());
        assert_eq!(find.query_parameters[2], ctx);
    }

    #[test]
    fn test_default_param_location_follows_binding() {
        let table = MetadataTable::from_json_str(TABLE).unwrap();
        let find = table.method("OrderController", "find").unwrap();

        assert_eq!(NameScanner.param_location(find, 0), Some(ParamLocation::Path));
        assert_eq!(NameScanner.param_location(find, 1), Some(ParamLocation::Query));
        assert_eq!(NameScanner.param_location(find, 2), None);
        assert_eq!(NameScanner.param_location(find, 3), None);
    }

    #[test]
    fn test_method_overrides_controller() {
        let table = MetadataTable::from_json_str(TABLE).unwrap();
        let docs = pipeline().document(&table, &NameScanner).unwrap();
        let create = &docs[0].methods[1];

        assert_eq!(create.path, "/orders");
        assert_eq!(create.verb, routedoc_core::ApiVerb::Post);
        assert!(create.produces.contains("application/json"));
        assert!(create.consumes.contains("application/json"));
    }

    #[test]
    fn test_unsupported_verb_aborts_run() {
        let table = MetadataTable::from_json_str(
            r#"{"controllers": [{"name": "C", "methods": [{"name": "m", "mapping": {"method": ["fetch"]}}]}]}"#,
        )
        .unwrap();
        let err = pipeline().document(&table, &NameScanner).unwrap_err();
        assert!(matches!(err, crate::MergeError::UnsupportedVerb(verb) if verb == "fetch"));
    }
}

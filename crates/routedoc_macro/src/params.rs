//! Handler signature analysis: parameter names, bindings and return type.

use syn::{FnArg, Pat, PatType, ReturnType, Type};

use crate::{
    args::{PathVariableArgs, RequestParamArgs},
    attrs::{HelperAttr, helper_kind, parse_helper_args},
    error::{MacroResult, err_spanned},
};

/// Binding declared on a handler parameter
#[derive(Debug, PartialEq, Eq)]
pub enum Binding {
    Path {
        name: String,
    },
    Query {
        name: String,
        required: bool,
        default_value: Option<String>,
    },
    Unbound,
}

/// Declared handler parameter
#[derive(Debug)]
pub struct ParamInfo {
    pub name: String,
    pub binding: Binding,
}

/// Collect the typed parameters of a handler, stripping binding helpers.
///
/// The receiver is skipped so that indices match the declared parameters.
pub fn collect_params<'a>(
    inputs: impl IntoIterator<Item = &'a mut FnArg>,
) -> MacroResult<Vec<ParamInfo>> {
    let mut params = Vec::new();
    for arg in inputs {
        let FnArg::Typed(pat_type) = arg else {
            continue;
        };
        let binding = resolve_binding(pat_type)?;
        pat_type.attrs.retain(|attr| {
            !matches!(
                helper_kind(attr),
                Some(HelperAttr::PathVariable | HelperAttr::RequestParam)
            )
        });
        let name = pattern_name(&pat_type.pat).unwrap_or_else(|| format!("arg{}", params.len()));
        params.push(ParamInfo { name, binding });
    }
    Ok(params)
}

/// Resolve the single binding of a parameter
fn resolve_binding(pat_type: &PatType) -> MacroResult<Binding> {
    let mut binding = Binding::Unbound;
    for attr in &pat_type.attrs {
        let resolved = match helper_kind(attr) {
            Some(HelperAttr::PathVariable) => {
                let args: PathVariableArgs = parse_helper_args(attr)?;
                Binding::Path { name: args.name }
            }
            Some(HelperAttr::RequestParam) => {
                let args: RequestParamArgs = parse_helper_args(attr)?;
                Binding::Query {
                    name: args.name,
                    required: args.required,
                    default_value: args.default_value,
                }
            }
            Some(HelperAttr::RequestMapping) => {
                return Err(err_spanned(
                    attr,
                    "#[request_mapping] belongs on a handler method, not on a parameter",
                ));
            }
            None => continue,
        };
        if binding != Binding::Unbound {
            return Err(err_spanned(
                attr,
                "a parameter can carry only one of #[path_variable] or #[request_param]",
            ));
        }
        binding = resolved;
    }
    Ok(binding)
}

/// Identifier bound by a parameter pattern: `id` or `Path(id)`
fn pattern_name(pat: &Pat) -> Option<String> {
    match pat {
        Pat::Ident(ident) => Some(ident.ident.to_string()),
        Pat::TupleStruct(tuple_struct) if tuple_struct.elems.len() == 1 => {
            match &tuple_struct.elems[0] {
                Pat::Ident(ident) => Some(ident.ident.to_string()),
                _ => None,
            }
        }
        Pat::Reference(reference) => pattern_name(&reference.pat),
        _ => None,
    }
}

/// Outermost type name of the handler return type
pub fn return_type_name(output: &ReturnType) -> Option<String> {
    match output {
        ReturnType::Default => None,
        ReturnType::Type(_, ty) => outer_type_name(ty),
    }
}

fn outer_type_name(ty: &Type) -> Option<String> {
    match ty {
        Type::Path(type_path) => type_path
            .path
            .segments
            .last()
            .map(|segment| segment.ident.to_string()),
        Type::Reference(reference) => outer_type_name(&reference.elem),
        Type::Paren(paren) => outer_type_name(&paren.elem),
        Type::Group(group) => outer_type_name(&group.elem),
        _ => None,
    }
}

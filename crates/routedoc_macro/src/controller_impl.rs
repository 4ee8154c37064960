//! `#[controller]` attribute macro implementation.
//!
//! The attribute is applied to an inherent `impl` block of a controller type.
//! It reads the controller-level mapping from its own arguments and the
//! handler-level metadata from inert helpers inside the block:
//!
//! - `#[request_mapping(...)]` on a method
//! - `#[path_variable(...)]` / `#[request_param(...)]` on a method parameter
//!
//! The helpers are stripped and the block is emitted unchanged otherwise,
//! followed by a generated `routedoc::DescribeController` impl.
//!
//! # Example
//!
//! ```ignore
//! #[routedoc::controller(path = "/users", produces = ["application/json"])]
//! impl UserController {
//!     #[request_mapping(path = "/{id}", method = delete)]
//!     pub fn remove(&self, #[path_variable("id")] user_id: u64) -> ResponseEntity<User> {
//!         todo!()
//!     }
//! }
//! ```

use proc_macro2::TokenStream;
use quote::quote;
use syn::{ImplItem, ImplItemFn, ItemImpl, Type};

use crate::{
    args::MappingArgs,
    attrs::{HelperAttr, helper_kind, parse_helper_args},
    error::{MacroResult, err_spanned},
    params::{Binding, ParamInfo, collect_params, return_type_name},
};

/// Handler metadata collected from one method of the impl block
#[derive(Debug)]
pub struct MethodInfo {
    pub name: String,
    pub mapping: Option<MappingArgs>,
    pub params: Vec<ParamInfo>,
    pub return_type: Option<String>,
}

/// Validate controller impl - must be an inherent impl of a named type
pub fn validate_controller_impl(item_impl: &ItemImpl) -> MacroResult<String> {
    if let Some((_, path, _)) = &item_impl.trait_ {
        return Err(err_spanned(
            path,
            "#[controller] attribute: must be applied to an inherent impl block, not a trait impl.",
        ));
    }
    match item_impl.self_ty.as_ref() {
        Type::Path(type_path) if type_path.qself.is_none() => type_path
            .path
            .segments
            .last()
            .map(|segment| segment.ident.to_string())
            .ok_or_else(|| err_spanned(type_path, "#[controller] attribute: empty type path")),
        other => Err(err_spanned(
            other,
            "#[controller] attribute: the implemented type must be a named type.",
        )),
    }
}

/// Process controller attribute - extracted for testability
pub fn process_controller_attribute(attr: TokenStream, item: TokenStream) -> MacroResult<TokenStream> {
    let mapping = if attr.is_empty() {
        None
    } else {
        Some(syn::parse2::<MappingArgs>(attr)?)
    };
    let mut item_impl: ItemImpl = syn::parse2(item).map_err(|e| {
        syn::Error::new(
            e.span(),
            "#[controller] attribute: can only be applied to impl blocks.",
        )
    })?;
    let name = validate_controller_impl(&item_impl)?;

    let mut methods = Vec::new();
    for impl_item in &mut item_impl.items {
        if let ImplItem::Fn(method) = impl_item {
            methods.push(collect_method(method)?);
        }
    }

    let describe = expand_describe(&item_impl, &name, mapping.as_ref(), &methods);
    Ok(quote! {
        #item_impl
        #describe
    })
}

/// Read and strip the helpers of one method
fn collect_method(method: &mut ImplItemFn) -> MacroResult<MethodInfo> {
    let mut mapping = None;
    for attr in &method.attrs {
        match helper_kind(attr) {
            Some(HelperAttr::RequestMapping) => {
                if mapping.is_some() {
                    return Err(err_spanned(
                        attr,
                        "duplicate #[request_mapping] on the same method",
                    ));
                }
                mapping = Some(parse_helper_args::<MappingArgs>(attr)?);
            }
            Some(kind @ (HelperAttr::PathVariable | HelperAttr::RequestParam)) => {
                return Err(err_spanned(
                    attr,
                    format!("#[{}] belongs on a method parameter", kind.name()),
                ));
            }
            None => {}
        }
    }
    method
        .attrs
        .retain(|attr| helper_kind(attr) != Some(HelperAttr::RequestMapping));

    Ok(MethodInfo {
        name: method.sig.ident.to_string(),
        mapping,
        params: collect_params(method.sig.inputs.iter_mut())?,
        return_type: return_type_name(&method.sig.output),
    })
}

fn expand_describe(
    item_impl: &ItemImpl,
    name: &str,
    mapping: Option<&MappingArgs>,
    methods: &[MethodInfo],
) -> TokenStream {
    let self_ty = &item_impl.self_ty;
    let (impl_generics, _, where_clause) = item_impl.generics.split_for_impl();
    let mapping = mapping_tokens(mapping);
    let methods = methods.iter().map(method_tokens);

    quote! {
        impl #impl_generics ::routedoc::DescribeController for #self_ty #where_clause {
            fn describe() -> ::routedoc::ControllerMetadata {
                ::routedoc::ControllerMetadata {
                    name: ::std::string::String::from(#name),
                    mapping: #mapping,
                    methods: ::std::vec![#(#methods),*],
                }
            }
        }
    }
}

fn strings_tokens(values: &[String]) -> TokenStream {
    quote! { ::std::vec![#(::std::string::String::from(#values)),*] }
}

fn option_string_tokens(value: Option<&String>) -> TokenStream {
    match value {
        Some(value) => quote! { ::core::option::Option::Some(::std::string::String::from(#value)) },
        None => quote! { ::core::option::Option::None },
    }
}

fn mapping_tokens(mapping: Option<&MappingArgs>) -> TokenStream {
    let Some(mapping) = mapping else {
        return quote! { ::core::option::Option::None };
    };
    let path = strings_tokens(&mapping.path);
    let method = strings_tokens(&mapping.method);
    let produces = strings_tokens(&mapping.produces);
    let consumes = strings_tokens(&mapping.consumes);
    let headers = strings_tokens(&mapping.headers);
    quote! {
        ::core::option::Option::Some(::routedoc::RequestMapping {
            path: #path,
            method: #method,
            produces: #produces,
            consumes: #consumes,
            headers: #headers,
        })
    }
}

fn binding_tokens(binding: &Binding) -> TokenStream {
    match binding {
        Binding::Path { name } => quote! {
            ::routedoc::ParamBinding::Path { name: ::std::string::String::from(#name) }
        },
        Binding::Query {
            name,
            required,
            default_value,
        } => {
            let default_value = option_string_tokens(default_value.as_ref());
            quote! {
                ::routedoc::ParamBinding::Query {
                    name: ::std::string::String::from(#name),
                    required: #required,
                    default_value: #default_value,
                }
            }
        }
        Binding::Unbound => quote! { ::routedoc::ParamBinding::Unbound },
    }
}

fn method_tokens(method: &MethodInfo) -> TokenStream {
    let name = &method.name;
    let mapping = mapping_tokens(method.mapping.as_ref());
    let params = method.params.iter().map(|param| {
        let name = &param.name;
        let binding = binding_tokens(&param.binding);
        quote! {
            ::routedoc::ParamMetadata {
                name: ::std::string::String::from(#name),
                binding: #binding,
            }
        }
    });
    let return_type = option_string_tokens(method.return_type.as_ref());
    quote! {
        ::routedoc::MethodMetadata {
            name: ::std::string::String::from(#name),
            mapping: #mapping,
            params: ::std::vec![#(#params),*],
            return_type: #return_type,
        }
    }
}

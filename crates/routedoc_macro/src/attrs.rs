//! Recognition and parsing of the inert routing helper attributes.
//!
//! Helpers may be written bare (`#[path_variable]`) or crate-qualified
//! (`#[routedoc::path_variable]`). `#[controller]` strips them from the
//! expanded item since they have no meaning to the compiler.

use quote::ToTokens;

use crate::error::MacroResult;

/// Helper attributes understood inside a `#[controller]` impl block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelperAttr {
    RequestMapping,
    PathVariable,
    RequestParam,
}

impl HelperAttr {
    const ALL: [Self; 3] = [Self::RequestMapping, Self::PathVariable, Self::RequestParam];

    pub const fn name(self) -> &'static str {
        match self {
            Self::RequestMapping => "request_mapping",
            Self::PathVariable => "path_variable",
            Self::RequestParam => "request_param",
        }
    }

    fn matches_path(self, path: &syn::Path) -> bool {
        let segments = &path.segments;
        (segments.len() == 2 && segments[0].ident == "routedoc" && segments[1].ident == self.name())
            || (segments.len() == 1 && segments[0].ident == self.name())
    }
}

/// Classify an attribute as one of the routing helpers
pub fn helper_kind(attr: &syn::Attribute) -> Option<HelperAttr> {
    HelperAttr::ALL
        .into_iter()
        .find(|kind| kind.matches_path(attr.path()))
}

/// Parse the arguments of a helper attribute.
///
/// `#[helper]` yields the default arguments, `#[helper(...)]` parses the
/// list and `#[helper = "value"]` is read like `#[helper("value")]`.
pub fn parse_helper_args<T>(attr: &syn::Attribute) -> MacroResult<T>
where
    T: syn::parse::Parse + Default,
{
    match &attr.meta {
        syn::Meta::Path(_) => Ok(T::default()),
        syn::Meta::List(meta_list) => meta_list.parse_args::<T>(),
        syn::Meta::NameValue(meta_nv) => match &meta_nv.value {
            syn::Expr::Lit(syn::ExprLit {
                lit: syn::Lit::Str(lit_str),
                ..
            }) => syn::parse2::<T>(lit_str.to_token_stream()),
            other => Err(syn::Error::new_spanned(
                other,
                format!("#[{}] expects a string literal", attr.path().to_token_stream()),
            )),
        },
    }
}

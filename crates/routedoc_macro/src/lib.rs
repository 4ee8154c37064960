//! Procedural macros for routedoc.
//!
//! `#[controller]` turns the routing declarations of a controller impl block
//! into a `routedoc::DescribeController` implementation, the metadata source
//! the documentation merger reads from.

mod args;
mod attrs;
mod controller_impl;
mod error;
mod http;
mod params;
mod parse_utils;
mod test_helpers;

use proc_macro::TokenStream;

/// Declare a controller and its handler routing metadata.
///
/// Arguments declare the controller-level mapping: an optional leading path
/// literal, then `path`, `method`, `produces`, `consumes` and `headers`.
/// Inside the block, methods may carry `#[request_mapping(...)]` with the same
/// arguments, and parameters `#[path_variable(...)]` or `#[request_param(...)]`.
#[proc_macro_attribute]
pub fn controller(attr: TokenStream, item: TokenStream) -> TokenStream {
    match controller_impl::process_controller_attribute(attr.into(), item.into()) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

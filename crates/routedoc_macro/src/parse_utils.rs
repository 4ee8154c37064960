//! Parsing utilities for helper attribute arguments.
//!
//! Reusable helpers for comma-separated lists, bracket-delimited lists and
//! the `key = "value"` / `key = ["a", "b"]` shape shared by the routing
//! attributes.

use syn::{LitStr, Token, parse::ParseStream, token::Bracket};

/// Parse a comma-separated list with optional trailing comma.
///
/// The provided parser function is called for each item.
///
/// # Example
/// ```ignore
/// let items: Vec<String> = parse_comma_list(input, |input| {
///     input.parse::<LitStr>().map(|lit| lit.value())
/// })?;
/// ```
pub fn parse_comma_list<T, F>(input: ParseStream, mut parser: F) -> syn::Result<Vec<T>>
where
    F: FnMut(ParseStream) -> syn::Result<T>,
{
    let mut items = Vec::new();

    while !input.is_empty() {
        items.push(parser(input)?);

        if input.peek(Token![,]) {
            input.parse::<Token![,]>()?;
        } else {
            break;
        }
    }

    Ok(items)
}

/// Parse a bracket-delimited comma-separated list.
pub fn parse_bracketed_list<T, F>(input: ParseStream, parser: F) -> syn::Result<Vec<T>>
where
    F: Fn(ParseStream) -> syn::Result<T>,
{
    let content;
    syn::bracketed!(content in input);
    parse_comma_list(&content, parser)
}

/// Parse either a single item or a bracketed list of items.
///
/// `"a"` and `["a", "b"]` both yield a `Vec`.
pub fn parse_one_or_list<T, F>(input: ParseStream, parser: F) -> syn::Result<Vec<T>>
where
    F: Fn(ParseStream) -> syn::Result<T>,
{
    if input.peek(Bracket) {
        parse_bracketed_list(input, parser)
    } else {
        parser(input).map(|item| vec![item])
    }
}

/// Parse a string literal into its value.
pub fn parse_lit_str(input: ParseStream) -> syn::Result<String> {
    input.parse::<LitStr>().map(|lit| lit.value())
}

/// Check if next token is a comma and consume it if present.
///
/// Returns `true` if comma was found and consumed, `false` otherwise.
pub fn try_consume_comma(input: ParseStream) -> bool {
    if input.peek(Token![,]) {
        let _ = input.parse::<Token![,]>();
        true
    } else {
        false
    }
}

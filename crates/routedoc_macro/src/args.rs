//! Arguments of the routing helper attributes.
//!
//! - `#[controller(...)]` / `#[request_mapping(...)]` → [`MappingArgs`]
//! - `#[path_variable(...)]` → [`PathVariableArgs`]
//! - `#[request_param(...)]` → [`RequestParamArgs`]
//!
//! Every argument type accepts a leading string literal as shorthand for its
//! primary value (`#[request_mapping("/{id}")]`, `#[path_variable("id")]`).

use syn::{Ident, LitBool, LitStr, Token, parse::ParseStream};

use crate::{
    http::is_http_method,
    parse_utils::{parse_comma_list, parse_lit_str, parse_one_or_list, try_consume_comma},
};

/// Route mapping declared on a controller or a handler
#[derive(Debug, Default)]
pub struct MappingArgs {
    pub path: Vec<String>,
    /// Lowercase verb names, in declaration order
    pub method: Vec<String>,
    pub produces: Vec<String>,
    pub consumes: Vec<String>,
    pub headers: Vec<String>,
}

impl syn::parse::Parse for MappingArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut args = Self::default();

        if input.peek(LitStr) {
            args.path.push(parse_lit_str(input)?);
            if !try_consume_comma(input) {
                return Ok(args);
            }
        }

        parse_comma_list(input, |input| {
            let ident: Ident = input.parse()?;
            let key = ident.to_string();

            // bare verb shorthand, e.g. `#[request_mapping(get, path = "/")]`
            if is_http_method(&key) && !input.peek(Token![=]) {
                args.method.push(key.to_lowercase());
                return Ok(());
            }

            match key.as_str() {
                "path" | "value" => {
                    input.parse::<Token![=]>()?;
                    args.path.extend(parse_one_or_list(input, parse_lit_str)?);
                }
                "method" => {
                    input.parse::<Token![=]>()?;
                    args.method.extend(parse_one_or_list(input, parse_method)?);
                }
                "produces" => {
                    input.parse::<Token![=]>()?;
                    args.produces.extend(parse_one_or_list(input, parse_lit_str)?);
                }
                "consumes" => {
                    input.parse::<Token![=]>()?;
                    args.consumes.extend(parse_one_or_list(input, parse_lit_str)?);
                }
                "headers" => {
                    input.parse::<Token![=]>()?;
                    args.headers.extend(parse_one_or_list(input, parse_lit_str)?);
                }
                _ => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!(
                            "unknown mapping argument `{key}`. Expected one of: path, method, produces, consumes, headers"
                        ),
                    ));
                }
            }
            Ok(())
        })?;

        Ok(args)
    }
}

/// Verb given as identifier (`get`) or string (`"GET"`)
fn parse_method(input: ParseStream) -> syn::Result<String> {
    let (value, span) = if input.peek(LitStr) {
        let lit: LitStr = input.parse()?;
        (lit.value(), lit.span())
    } else {
        let ident: Ident = input.parse()?;
        (ident.to_string(), ident.span())
    };

    if !is_http_method(&value) {
        return Err(syn::Error::new(
            span,
            format!("unsupported HTTP method `{value}`"),
        ));
    }
    Ok(value.to_lowercase())
}

/// `#[path_variable]`, `#[path_variable("id")]`, `#[path_variable(name = "id")]`
#[derive(Debug, Default)]
pub struct PathVariableArgs {
    /// Empty when the declared identifier should be used
    pub name: String,
}

impl syn::parse::Parse for PathVariableArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut args = Self::default();

        if input.peek(LitStr) {
            args.name = parse_lit_str(input)?;
            return Ok(args);
        }

        parse_comma_list(input, |input| {
            let ident: Ident = input.parse()?;
            match ident.to_string().as_str() {
                "name" | "value" => {
                    input.parse::<Token![=]>()?;
                    args.name = parse_lit_str(input)?;
                    Ok(())
                }
                other => Err(syn::Error::new(
                    ident.span(),
                    format!("unknown path_variable argument `{other}`. Expected: name"),
                )),
            }
        })?;

        Ok(args)
    }
}

/// `#[request_param(name = "q", required = false, default_value = "10")]`
#[derive(Debug)]
pub struct RequestParamArgs {
    pub name: String,
    pub required: bool,
    pub default_value: Option<String>,
}

impl Default for RequestParamArgs {
    fn default() -> Self {
        Self {
            name: String::new(),
            required: true,
            default_value: None,
        }
    }
}

impl syn::parse::Parse for RequestParamArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut args = Self::default();

        if input.peek(LitStr) {
            args.name = parse_lit_str(input)?;
            if !try_consume_comma(input) {
                return Ok(args);
            }
        }

        parse_comma_list(input, |input| {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;
            match ident.to_string().as_str() {
                "name" | "value" => args.name = parse_lit_str(input)?,
                "required" => args.required = input.parse::<LitBool>()?.value,
                "default_value" => args.default_value = Some(parse_lit_str(input)?),
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!(
                            "unknown request_param argument `{other}`. Expected one of: name, required, default_value"
                        ),
                    ));
                }
            }
            Ok(())
        })?;

        Ok(args)
    }
}

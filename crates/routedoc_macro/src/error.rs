//! Unified error handling for routedoc_macro.
//!
//! All expansion steps return [`MacroResult<T>`] instead of panicking, so the
//! compiler reports malformed routing declarations at their source location.

use quote::ToTokens;
use syn::Error;

/// Result type for all macro operations.
pub type MacroResult<T> = Result<T, Error>;

/// Create an error spanning the given tokens.
#[inline]
pub fn err_spanned<T: ToTokens, M: std::fmt::Display>(tokens: T, message: M) -> Error {
    Error::new_spanned(tokens, message)
}

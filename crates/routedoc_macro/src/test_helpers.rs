#![cfg(test)]
//! Shared test utilities for routedoc_macro tests.
//!
//! - [`test_impl!`] - Parse an impl block from Rust source code string

/// Parse an impl block from source code for testing
#[macro_export]
macro_rules! test_impl {
    ($code:expr) => {{
        let file: syn::File = syn::parse_str($code).expect("parse failed");
        file.items
            .into_iter()
            .find_map(|item| {
                if let syn::Item::Impl(i) = item {
                    Some(i)
                } else {
                    None
                }
            })
            .expect("no impl found")
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_test_impl_macro() {
        let i = test_impl!("impl Foo { fn bar() {} }");
        assert_eq!(i.items.len(), 1);
    }
}

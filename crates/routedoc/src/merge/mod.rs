//! Field mergers.
//!
//! Each merger resolves one documentation field from the controller-level and
//! the method-level [`RequestMapping`](routedoc_core::RequestMapping). They
//! share no state and can run in any order.

mod headers;
mod media;
mod params;
mod path;
mod response;
mod verb;

pub use headers::resolve_headers;
pub use media::{resolve_consumes, resolve_produces};
pub use params::{merge_path_param, merge_query_param};
pub use path::resolve_path;
pub use response::adjust_response;
pub use verb::resolve_verb;

#[cfg(test)]
pub(crate) fn mapping(
    configure: impl FnOnce(&mut routedoc_core::RequestMapping),
) -> routedoc_core::RequestMapping {
    let mut mapping = routedoc_core::RequestMapping::default();
    configure(&mut mapping);
    mapping
}

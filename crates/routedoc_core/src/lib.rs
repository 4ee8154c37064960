//! Routedoc Core - documentation record and routing metadata definitions
//!
//! Provides the records a documentation scanner builds per controller and per
//! endpoint, plus the routing metadata those records are enriched from.

pub mod doc;
pub mod json_doc_type;
pub mod metadata;
pub mod verb;

pub use doc::*;
pub use json_doc_type::JsonDocType;
pub use metadata::*;
pub use verb::ApiVerb;

//! Route-aware API documentation.
//!
//! Controllers declare their routing with `#[routedoc::controller]`:
//!
//! ```ignore
//! use routedoc::controller;
//!
//! struct UserController;
//!
//! #[controller("/users", produces = "application/json")]
//! impl UserController {
//!     #[request_mapping("/{id}", method = get)]
//!     fn find(&self, #[path_variable("id")] user_id: u64) -> ResponseEntity<User> {
//!         todo!()
//!     }
//! }
//! ```
//!
//! The generated [`DescribeController`] metadata, or a precomputed
//! [`MetadataTable`], is then merged into documentation built by a
//! [`BaselineScanner`] through a [`DocMerger`] such as
//! [`RequestMappingMerger`].

extern crate self as routedoc;

mod config;
mod error;
pub mod merge;
mod pipeline;
mod provider;
mod scanner;

pub use config::MergeConfig;
pub use error::{MergeError, MergeResult};
pub use pipeline::{BaselineScanner, DocumentationPipeline, NameScanner, ParamLocation};
pub use provider::{MetadataProvider, MetadataTable, TypeRegistry};
pub use routedoc_core::*;
pub use routedoc_macro::controller;
pub use scanner::{DocMerger, RequestMappingMerger};

//! Sources of controller routing metadata.
//!
//! The mergers only see [`ControllerMetadata`]; where it comes from is up to
//! the provider:
//!
//! - [`TypeRegistry`] - collected from types implementing `DescribeController`
//! - [`MetadataTable`] - a precomputed table, e.g. loaded from JSON

mod registry;
mod table;

pub use registry::TypeRegistry;
pub use table::MetadataTable;

use routedoc_core::{ControllerMetadata, MethodMetadata};

use crate::{MergeError, MergeResult};

pub trait MetadataProvider {
    /// All known controllers, in registration order
    fn controllers(&self) -> &[ControllerMetadata];

    fn controller(&self, name: &str) -> MergeResult<&ControllerMetadata> {
        self.controllers()
            .iter()
            .find(|controller| controller.name == name)
            .ok_or_else(|| MergeError::ControllerNotFound(name.to_string()))
    }

    fn method(&self, controller: &str, method: &str) -> MergeResult<&MethodMetadata> {
        self.controller(controller)?
            .method(method)
            .ok_or_else(|| MergeError::MethodNotFound {
                controller: controller.to_string(),
                method: method.to_string(),
            })
    }
}

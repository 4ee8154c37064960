use routedoc_core::{ControllerMetadata, DescribeController};
use tracing::debug;

use super::{MetadataProvider, MetadataTable};

/// Metadata described by the controller types themselves
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    controllers: Vec<ControllerMetadata>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a controller type. Registering the same name again replaces
    /// the earlier entry.
    pub fn register<T: DescribeController>(&mut self) -> &mut Self {
        let metadata = T::describe();
        debug!(
            controller = %metadata.name,
            methods = metadata.methods.len(),
            "registered controller"
        );
        if let Some(existing) = self
            .controllers
            .iter_mut()
            .find(|controller| controller.name == metadata.name)
        {
            *existing = metadata;
        } else {
            self.controllers.push(metadata);
        }
        self
    }

    /// Snapshot of the registered metadata, for ahead-of-time use
    pub fn to_table(&self) -> MetadataTable {
        MetadataTable::new(self.controllers.clone())
    }
}

impl MetadataProvider for TypeRegistry {
    fn controllers(&self) -> &[ControllerMetadata] {
        &self.controllers
    }
}

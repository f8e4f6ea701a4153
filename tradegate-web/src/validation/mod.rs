pub mod manager;
pub mod prelude;
pub mod validators;

use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use tradegate_error::WebResult;
use tradegate_models::entities::ContentEntity;
use tradegate_models::enums::common::{EntityType, Operation};
use std::sync::Arc;

/// Core trait for entity validators
#[async_trait]
pub trait EntityValidator: Send + Sync {
    /// Returns entity types supported by this validator
    fn supported_entity_types(&self) -> Vec<EntityType>;

    /// Returns operations supported by this validator
    fn supported_operations(&self) -> Vec<Operation>;

    /// Performs validation on the entity
    ///
    /// # Arguments
    /// * `entity` - Entity to validate
    /// * `operation` - Operation to validate
    /// * `db` - Connection for existence/uniqueness lookups
    ///
    /// # Returns
    /// * `WebResult<()>` - Success or validation error
    async fn validate(
        &self,
        entity: &dyn ContentEntity,
        operation: Operation,
        db: &DatabaseConnection,
    ) -> WebResult<()>;

    /// Checks if this validator applies to the given entity type and operation
    fn is_applicable(&self, entity_type: &EntityType, operation: &Operation) -> bool {
        self.supported_entity_types().contains(entity_type)
            && self.supported_operations().contains(operation)
    }
}

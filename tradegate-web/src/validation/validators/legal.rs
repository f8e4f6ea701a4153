use crate::validation::EntityValidator;
use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use tradegate_error::{web::WebError, WebResult};
use tradegate_models::{
    entities::{prelude::LegalPageActiveModel, ContentEntity},
    enums::common::{EntityType, Operation},
};
use tradegate_repository::LegalPageRepository;
use tracing::instrument;

/// Rejects a second legal page with an already-used key.
///
/// The unique index on `key` is the race-proof authority; this validator
/// exists for the descriptive, field-scoped error.
pub struct LegalPageKeyValidator;

#[async_trait]
impl EntityValidator for LegalPageKeyValidator {
    #[inline]
    fn supported_entity_types(&self) -> Vec<EntityType> {
        vec![EntityType::LegalPage]
    }

    #[inline]
    fn supported_operations(&self) -> Vec<Operation> {
        vec![Operation::Create, Operation::Write]
    }

    #[instrument(skip(self, entity, db))]
    async fn validate(
        &self,
        entity: &dyn ContentEntity,
        operation: Operation,
        db: &DatabaseConnection,
    ) -> WebResult<()> {
        let page = entity.downcast_ref::<LegalPageActiveModel>().unwrap();

        let key = page.key.to_owned().take().unwrap();
        let exclude_id = match operation {
            Operation::Write => page.id.to_owned().take(),
            _ => None,
        };

        if LegalPageRepository::exists_by_key_excluding(db, key, exclude_id).await? {
            return Err(WebError::field(
                "key",
                "This legal page key already exists. Please edit the existing page.",
            ));
        }

        Ok(())
    }
}

use crate::validation::EntityValidator;
use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use tradegate_error::{web::WebError, WebResult};
use tradegate_models::{
    constants::NAV_ANCHORS,
    entities::{prelude::NavigationItemActiveModel, ContentEntity},
    enums::{
        common::{EntityType, Operation},
        navigation::NavKind,
    },
};
use tradegate_repository::NavigationRepository;
use tracing::instrument;
use validator::ValidateUrl;

/// Enforces the navigation item invariants on create and update:
/// per-kind link target requirements, anchor allow-list membership and the
/// single-CTA rule.
pub struct NavigationRulesValidator;

#[async_trait]
impl EntityValidator for NavigationRulesValidator {
    #[inline]
    fn supported_entity_types(&self) -> Vec<EntityType> {
        vec![EntityType::NavigationItem]
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
        let item = entity.downcast_ref::<NavigationItemActiveModel>().unwrap();

        // Resolve the kind before enforcing any per-kind requirement.
        let kind = item.kind.to_owned().take().unwrap();
        match kind {
            NavKind::Anchor => {
                let anchor = item.anchor.to_owned().take().unwrap_or_default();
                if !NAV_ANCHORS.contains(&anchor.as_str()) {
                    return Err(WebError::field(
                        "anchor",
                        format!(
                            "anchor must be one of {:?} for anchor items",
                            NAV_ANCHORS
                        ),
                    ));
                }
            }
            NavKind::Internal => {
                let url_name = item.url_name.to_owned().take().unwrap_or_default();
                if url_name.trim().is_empty() {
                    return Err(WebError::field(
                        "url_name",
                        "urlName is required for internal items",
                    ));
                }
            }
            NavKind::External => {
                let external_url = item.external_url.to_owned().take().unwrap_or_default();
                if external_url.trim().is_empty() {
                    return Err(WebError::field(
                        "external_url",
                        "externalUrl is required for external items",
                    ));
                }
                if !external_url.validate_url() {
                    return Err(WebError::field(
                        "external_url",
                        "externalUrl must be a valid URL",
                    ));
                }
            }
        }

        // Single-CTA rule: only checked when this write sets the flag. The
        // row being updated is excluded so re-saving the current CTA passes.
        if item.is_cta.to_owned().take().unwrap_or(false) {
            let exclude_id = match operation {
                Operation::Write => item.id.to_owned().take(),
                _ => None,
            };
            if NavigationRepository::exists_cta_excluding(db, exclude_id).await? {
                return Err(WebError::field(
                    "is_cta",
                    "Only one navigation item can be the call-to-action at a time",
                ));
            }
        }

        Ok(())
    }
}

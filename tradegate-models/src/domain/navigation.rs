//! Navigation item domain models.

use crate::{
    entities::navigation_item::{
        ActiveModel, Entity as NavigationItemEntity,
    },
    enums::navigation::NavKind,
    initializer::SeedableTrait,
};
use sea_orm::{DeriveIntoActiveModel, IntoActiveModel};
use serde::Deserialize;
use validator::Validate;

fn default_visible() -> bool {
    true
}

/// Create payload for a navigation item.
///
/// Per-kind requirements (anchor / url name / external url) and the
/// single-CTA rule are enforced by the navigation write validator.
#[derive(Debug, Clone, Deserialize, Validate, DeriveIntoActiveModel)]
#[serde(rename_all = "camelCase")]
pub struct NewNavigationItem {
    #[validate(length(min = 1, max = 120, message = "label length must be 1..=120"))]
    pub label: String,
    pub kind: NavKind,
    #[validate(length(max = 40))]
    #[serde(default)]
    pub anchor: String,
    #[validate(length(max = 40))]
    #[serde(default)]
    pub url_name: String,
    #[validate(length(max = 200))]
    #[serde(default)]
    pub external_url: String,
    #[serde(default = "default_visible")]
    pub is_visible: bool,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub is_cta: bool,
}

/// Update payload for a navigation item.
#[derive(Debug, Clone, Deserialize, Validate, DeriveIntoActiveModel)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNavigationItem {
    #[validate(range(min = 1, message = "id is required"))]
    pub id: i32,
    #[validate(length(min = 1, max = 120, message = "label length must be 1..=120"))]
    pub label: String,
    pub kind: NavKind,
    #[validate(length(max = 40))]
    #[serde(default)]
    pub anchor: String,
    #[validate(length(max = 40))]
    #[serde(default)]
    pub url_name: String,
    #[validate(length(max = 200))]
    #[serde(default)]
    pub external_url: String,
    #[serde(default = "default_visible")]
    pub is_visible: bool,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub is_cta: bool,
}

/// Seed model for the default menu.
#[derive(Clone, Debug, PartialEq, DeriveIntoActiveModel)]
pub struct NewNavigationItemWithId {
    pub id: i32,
    pub label: String,
    pub kind: NavKind,
    pub anchor: String,
    pub url_name: String,
    pub external_url: String,
    pub is_visible: bool,
    pub order: i32,
    pub is_cta: bool,
}

impl Default for NewNavigationItemWithId {
    fn default() -> Self {
        Self {
            id: 0,
            label: String::new(),
            kind: NavKind::Anchor,
            anchor: String::new(),
            url_name: String::new(),
            external_url: String::new(),
            is_visible: true,
            order: 0,
            is_cta: false,
        }
    }
}

impl SeedableTrait for NewNavigationItemWithId {
    type ActiveModel = ActiveModel;
    type Entity = NavigationItemEntity;

    #[inline]
    fn get_active_model(&self) -> Self::ActiveModel {
        self.clone().into_active_model()
    }
}

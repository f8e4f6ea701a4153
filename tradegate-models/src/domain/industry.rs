//! Industry domain models.

use crate::entities::industry::ActiveModel;
use sea_orm::DeriveIntoActiveModel;
use serde::Deserialize;
use validator::Validate;

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Validate, DeriveIntoActiveModel)]
#[serde(rename_all = "camelCase")]
pub struct NewIndustry {
    #[validate(length(min = 1, max = 120, message = "name length must be 1..=120"))]
    pub name: String,
    #[validate(length(max = 220))]
    #[serde(default)]
    pub short_description: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub order: i32,
}

#[derive(Debug, Clone, Deserialize, Validate, DeriveIntoActiveModel)]
#[serde(rename_all = "camelCase")]
pub struct UpdateIndustry {
    #[validate(range(min = 1, message = "id is required"))]
    pub id: i32,
    #[validate(length(min = 1, max = 120, message = "name length must be 1..=120"))]
    pub name: String,
    #[validate(length(max = 220))]
    #[serde(default)]
    pub short_description: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub order: i32,
}

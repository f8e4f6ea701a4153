//! Service domain models.

use crate::entities::service::ActiveModel;
use sea_orm::DeriveIntoActiveModel;
use serde::Deserialize;
use validator::Validate;

fn default_active() -> bool {
    true
}

fn default_icon() -> String {
    "Briefcase".into()
}

#[derive(Debug, Clone, Deserialize, Validate, DeriveIntoActiveModel)]
#[serde(rename_all = "camelCase")]
pub struct NewService {
    #[validate(length(min = 1, max = 120, message = "title length must be 1..=120"))]
    pub title: String,
    #[validate(length(min = 1, max = 220, message = "shortDescription length must be 1..=220"))]
    pub short_description: String,
    #[validate(length(max = 40))]
    #[serde(default = "default_icon")]
    pub icon: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub order: i32,
}

#[derive(Debug, Clone, Deserialize, Validate, DeriveIntoActiveModel)]
#[serde(rename_all = "camelCase")]
pub struct UpdateService {
    #[validate(range(min = 1, message = "id is required"))]
    pub id: i32,
    #[validate(length(min = 1, max = 120, message = "title length must be 1..=120"))]
    pub title: String,
    #[validate(length(min = 1, max = 220, message = "shortDescription length must be 1..=220"))]
    pub short_description: String,
    #[validate(length(max = 40))]
    #[serde(default = "default_icon")]
    pub icon: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub order: i32,
}

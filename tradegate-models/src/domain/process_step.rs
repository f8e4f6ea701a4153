//! Process step domain models.

use crate::entities::process_step::ActiveModel;
use sea_orm::DeriveIntoActiveModel;
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate, DeriveIntoActiveModel)]
#[serde(rename_all = "camelCase")]
pub struct NewProcessStep {
    #[validate(length(min = 1, max = 120, message = "title length must be 1..=120"))]
    pub title: String,
    #[validate(length(min = 1, max = 240, message = "description length must be 1..=240"))]
    pub description: String,
    #[serde(default)]
    pub order: i32,
}

#[derive(Debug, Clone, Deserialize, Validate, DeriveIntoActiveModel)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProcessStep {
    #[validate(range(min = 1, message = "id is required"))]
    pub id: i32,
    #[validate(length(min = 1, max = 120, message = "title length must be 1..=120"))]
    pub title: String,
    #[validate(length(min = 1, max = 240, message = "description length must be 1..=240"))]
    pub description: String,
    #[serde(default)]
    pub order: i32,
}

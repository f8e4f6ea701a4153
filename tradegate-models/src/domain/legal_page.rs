//! Legal page domain models.

use crate::{entities::legal_page::ActiveModel, enums::legal::LegalKey};
use sea_orm::DeriveIntoActiveModel;
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate, DeriveIntoActiveModel)]
#[serde(rename_all = "camelCase")]
pub struct NewLegalPage {
    pub key: LegalKey,
    #[validate(length(min = 1, max = 120, message = "title length must be 1..=120"))]
    pub title: String,
    #[validate(length(min = 20, message = "content must be at least 20 characters"))]
    pub content: String,
    #[validate(length(max = 70))]
    #[serde(default)]
    pub meta_title: String,
    #[validate(length(max = 160))]
    #[serde(default)]
    pub meta_description: String,
}

#[derive(Debug, Clone, Deserialize, Validate, DeriveIntoActiveModel)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLegalPage {
    #[validate(range(min = 1, message = "id is required"))]
    pub id: i32,
    pub key: LegalKey,
    #[validate(length(min = 1, max = 120, message = "title length must be 1..=120"))]
    pub title: String,
    #[validate(length(min = 20, message = "content must be at least 20 characters"))]
    pub content: String,
    #[validate(length(max = 70))]
    #[serde(default)]
    pub meta_title: String,
    #[validate(length(max = 160))]
    #[serde(default)]
    pub meta_description: String,
}

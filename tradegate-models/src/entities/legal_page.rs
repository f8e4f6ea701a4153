//! `SeaORM` Entity for legal pages (Impressum, Datenschutz).

use crate::enums::legal::LegalKey;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "legal_page")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Unique; doubles as the public URL slug.
    pub key: LegalKey,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub meta_title: String,
    pub meta_description: String,
    pub created_at: Option<DateTimeUtc>,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

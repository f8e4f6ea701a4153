//! `SeaORM` Entity for admin-managed navigation items.

use crate::enums::navigation::NavKind;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "navigation_item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub label: String,
    pub kind: NavKind,
    /// In-page section id; meaningful only when `kind` is `anchor`.
    pub anchor: String,
    /// Internal route name; meaningful only when `kind` is `internal`.
    pub url_name: String,
    /// Absolute URL; meaningful only when `kind` is `external`.
    pub external_url: String,
    pub is_visible: bool,
    pub order: i32,
    /// At most one row carries this flag; see the navigation write validator
    /// and the partial unique index in the migration.
    pub is_cta: bool,
    pub created_at: Option<DateTimeUtc>,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

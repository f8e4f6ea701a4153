//! `SeaORM` Entity for the site settings table.
//!
//! Settings are stored as a **single row** (id = 1) seeded at migration
//! time; the admin surface only ever updates that row.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "site_settings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Brand name used in titles and the notification subject.
    pub site_name: String,
    pub tagline: String,
    /// Primary contact address; also the notification recipient fallback.
    pub primary_email: String,
    pub phone: String,
    /// Free-text address kept alongside the structured fields below.
    #[sea_orm(column_type = "Text")]
    pub address: String,
    pub address_line1: String,
    pub address_line2: String,
    pub postal_code: String,
    pub city: String,
    pub country: String,
    pub facebook_url: String,
    pub instagram_url: String,
    pub x_url: String,
    pub whatsapp_url: String,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub hero_cta_label: String,
    pub hero_cta_url: String,
    pub meta_title: String,
    pub meta_description: String,
    pub og_image_url: String,
    pub brand_primary: String,
    pub brand_accent: String,
    pub brand_muted: String,
    pub created_at: Option<DateTimeUtc>,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

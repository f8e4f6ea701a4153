//! Site settings domain models.
//!
//! # Design
//! Settings are persisted as a **single row** (id = 1) seeded during
//! database initialization. The admin API only updates that row; absence of
//! the row (possible on a pre-seed database) degrades to explicit defaults
//! via [`SiteContext`].

use crate::{
    constants::FALLBACK_SITE_NAME,
    entities::site_settings::{ActiveModel, Entity as SiteSettingsEntity, Model as SiteSettingsModel},
    initializer::SeedableTrait,
};
use sea_orm::{DeriveIntoActiveModel, IntoActiveModel};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Update payload for the settings singleton.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSiteSettings {
    #[validate(length(min = 1, max = 120, message = "siteName length must be 1..=120"))]
    pub site_name: String,
    #[validate(length(max = 180))]
    #[serde(default)]
    pub tagline: String,
    #[validate(email(message = "primaryEmail must be a valid email"))]
    #[serde(default, deserialize_with = "empty_as_none")]
    pub primary_email: Option<String>,
    #[validate(length(max = 40))]
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[validate(length(max = 160))]
    #[serde(default)]
    pub address_line1: String,
    #[validate(length(max = 160))]
    #[serde(default)]
    pub address_line2: String,
    #[validate(length(max = 20))]
    #[serde(default)]
    pub postal_code: String,
    #[validate(length(max = 80))]
    #[serde(default)]
    pub city: String,
    #[validate(length(max = 80))]
    #[serde(default)]
    pub country: String,
    #[validate(url(message = "facebookUrl must be a valid URL"))]
    #[serde(default, deserialize_with = "empty_as_none")]
    pub facebook_url: Option<String>,
    #[validate(url(message = "instagramUrl must be a valid URL"))]
    #[serde(default, deserialize_with = "empty_as_none")]
    pub instagram_url: Option<String>,
    #[validate(url(message = "xUrl must be a valid URL"))]
    #[serde(default, deserialize_with = "empty_as_none")]
    pub x_url: Option<String>,
    #[validate(url(message = "whatsappUrl must be a valid URL"))]
    #[serde(default, deserialize_with = "empty_as_none")]
    pub whatsapp_url: Option<String>,
    #[validate(length(min = 1, max = 120))]
    pub hero_title: String,
    #[validate(length(max = 220))]
    #[serde(default)]
    pub hero_subtitle: String,
    #[validate(length(max = 40))]
    #[serde(default)]
    pub hero_cta_label: String,
    #[validate(length(max = 200))]
    #[serde(default)]
    pub hero_cta_url: String,
    #[validate(length(max = 70))]
    #[serde(default)]
    pub meta_title: String,
    #[validate(length(max = 160))]
    #[serde(default)]
    pub meta_description: String,
    #[validate(url(message = "ogImageUrl must be a valid URL"))]
    #[serde(default, deserialize_with = "empty_as_none")]
    pub og_image_url: Option<String>,
    #[validate(length(max = 20))]
    #[serde(default)]
    pub brand_primary: String,
    #[validate(length(max = 20))]
    #[serde(default)]
    pub brand_accent: String,
    #[validate(length(max = 20))]
    #[serde(default)]
    pub brand_muted: String,
}

/// Deserialize an empty or missing string as `None` so the URL/email format
/// validators only run when a value was actually provided.
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// Render-side view of the settings row with explicit fallback values.
///
/// Every consumer (templates, notification subject, sitemap canonical URLs)
/// goes through this view, so the "no settings row yet" case has one
/// defined meaning instead of scattered `Option` handling.
#[derive(Debug, Clone, Serialize)]
pub struct SiteContext {
    pub site_name: String,
    pub tagline: String,
    pub primary_email: String,
    pub phone: String,
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
}

impl Default for SiteContext {
    fn default() -> Self {
        Self {
            site_name: FALLBACK_SITE_NAME.into(),
            tagline: String::new(),
            primary_email: String::new(),
            phone: String::new(),
            address: String::new(),
            address_line1: String::new(),
            address_line2: String::new(),
            postal_code: String::new(),
            city: String::new(),
            country: String::new(),
            facebook_url: String::new(),
            instagram_url: String::new(),
            x_url: String::new(),
            whatsapp_url: String::new(),
            hero_title: String::new(),
            hero_subtitle: String::new(),
            hero_cta_label: String::new(),
            hero_cta_url: String::new(),
            meta_title: String::new(),
            meta_description: String::new(),
            og_image_url: String::new(),
            brand_primary: String::new(),
            brand_accent: String::new(),
            brand_muted: String::new(),
        }
    }
}

impl SiteContext {
    /// Build the view from an optional settings row.
    pub fn from_model(model: Option<&SiteSettingsModel>) -> Self {
        let Some(m) = model else {
            return Self::default();
        };
        Self {
            site_name: if m.site_name.is_empty() {
                FALLBACK_SITE_NAME.into()
            } else {
                m.site_name.clone()
            },
            tagline: m.tagline.clone(),
            primary_email: m.primary_email.clone(),
            phone: m.phone.clone(),
            address: m.address.clone(),
            address_line1: m.address_line1.clone(),
            address_line2: m.address_line2.clone(),
            postal_code: m.postal_code.clone(),
            city: m.city.clone(),
            country: m.country.clone(),
            facebook_url: m.facebook_url.clone(),
            instagram_url: m.instagram_url.clone(),
            x_url: m.x_url.clone(),
            whatsapp_url: m.whatsapp_url.clone(),
            hero_title: m.hero_title.clone(),
            hero_subtitle: m.hero_subtitle.clone(),
            hero_cta_label: m.hero_cta_label.clone(),
            hero_cta_url: m.hero_cta_url.clone(),
            meta_title: m.meta_title.clone(),
            meta_description: m.meta_description.clone(),
            og_image_url: m.og_image_url.clone(),
            brand_primary: m.brand_primary.clone(),
            brand_accent: m.brand_accent.clone(),
            brand_muted: m.brand_muted.clone(),
        }
    }
}

/// Seed model for inserting the initial settings row.
#[derive(Clone, Debug, Default, PartialEq, DeriveIntoActiveModel)]
pub struct NewSiteSettingsWithId {
    pub id: i32,
    pub site_name: String,
    pub tagline: String,
    pub primary_email: String,
    pub phone: String,
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
}

impl SeedableTrait for NewSiteSettingsWithId {
    type ActiveModel = ActiveModel;
    type Entity = SiteSettingsEntity;

    #[inline]
    fn get_active_model(&self) -> Self::ActiveModel {
        self.clone().into_active_model()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn site_context_falls_back_without_row() {
        let ctx = SiteContext::from_model(None);
        assert_eq!(ctx.site_name, FALLBACK_SITE_NAME);
        assert!(ctx.primary_email.is_empty());
    }
}

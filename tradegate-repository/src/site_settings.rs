//! Repository for the site settings singleton.
//!
//! Settings are stored as a single row (id = 1) seeded by the migration.
//! This repository provides read/update helpers for that row; create and
//! delete intentionally do not exist.

use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, IntoActiveModel, Set};
use tradegate_error::{storage::StorageError, StorageResult};
use tradegate_models::{
    constants::SETTINGS_SINGLETON_ID,
    domain::prelude::UpdateSiteSettings,
    entities::prelude::{SiteSettings, SiteSettingsActiveModel, SiteSettingsModel},
};

pub struct SiteSettingsRepository;

impl SiteSettingsRepository {
    /// Load the settings singleton row.
    pub async fn get<C>(db: &C) -> StorageResult<Option<SiteSettingsModel>>
    where
        C: ConnectionTrait,
    {
        Ok(SiteSettings::find_by_id(SETTINGS_SINGLETON_ID)
            .one(db)
            .await?)
    }

    /// Apply an update payload to the singleton row.
    pub async fn update<C>(
        db: &C,
        payload: UpdateSiteSettings,
    ) -> StorageResult<SiteSettingsModel>
    where
        C: ConnectionTrait,
    {
        let mut active: SiteSettingsActiveModel = SiteSettings::find_by_id(SETTINGS_SINGLETON_ID)
            .one(db)
            .await?
            .ok_or_else(|| StorageError::EntityNotFound("site_settings".into()))?
            .into_active_model();

        active.site_name = Set(payload.site_name);
        active.tagline = Set(payload.tagline);
        active.primary_email = Set(payload.primary_email.unwrap_or_default());
        active.phone = Set(payload.phone);
        active.address = Set(payload.address);
        active.address_line1 = Set(payload.address_line1);
        active.address_line2 = Set(payload.address_line2);
        active.postal_code = Set(payload.postal_code);
        active.city = Set(payload.city);
        active.country = Set(payload.country);
        active.facebook_url = Set(payload.facebook_url.unwrap_or_default());
        active.instagram_url = Set(payload.instagram_url.unwrap_or_default());
        active.x_url = Set(payload.x_url.unwrap_or_default());
        active.whatsapp_url = Set(payload.whatsapp_url.unwrap_or_default());
        active.hero_title = Set(payload.hero_title);
        active.hero_subtitle = Set(payload.hero_subtitle);
        active.hero_cta_label = Set(payload.hero_cta_label);
        active.hero_cta_url = Set(payload.hero_cta_url);
        active.meta_title = Set(payload.meta_title);
        active.meta_description = Set(payload.meta_description);
        active.og_image_url = Set(payload.og_image_url.unwrap_or_default());
        active.brand_primary = Set(payload.brand_primary);
        active.brand_accent = Set(payload.brand_accent);
        active.brand_muted = Set(payload.brand_muted);

        Ok(active.update(db).await?)
    }
}

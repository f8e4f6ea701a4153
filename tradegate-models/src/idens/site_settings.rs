//! Migration identifiers and seeding for site settings.
//!
//! Settings are inserted as a **single row** (id = 1) during database
//! initialization; the admin surface only updates that row, so a second
//! settings row can never appear through the application.

use crate::{
    domain::prelude::NewSiteSettingsWithId,
    initializer::{
        DataSeederTrait, InitContext, SeedableInitializerTrait, SeedableTrait, TableInitializer,
    },
};
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};
use tradegate_macros::SeedableInitializer;

/// Default brand fields applied when the database is first created.
const DEFAULT_SITE_NAME: &str = "TradeGate Consultants";
const DEFAULT_TAGLINE: &str = "Strategy. Execution. Growth.";
const DEFAULT_HERO_TITLE: &str = "Cross-border growth with clarity.";
const DEFAULT_HERO_SUBTITLE: &str =
    "We help companies enter markets, build partnerships, and execute with confidence.";
const DEFAULT_HERO_CTA_LABEL: &str = "Contact us";
const DEFAULT_HERO_CTA_URL: &str = "/contact/";
const DEFAULT_BRAND_PRIMARY: &str = "#0B1220";
const DEFAULT_BRAND_ACCENT: &str = "#C6A15B";
const DEFAULT_BRAND_MUTED: &str = "#94A3B8";

#[derive(DeriveIden, SeedableInitializer)]
#[seedable(meta(
    model = NewSiteSettingsWithId,
    order = super::INIT_SYSTEM_ORDER,
    create_table = create_site_settings_table,
    seed_data = get_site_settings_seed_data
))]
pub enum SiteSettings {
    Table,
    Id,
    SiteName,
    Tagline,
    PrimaryEmail,
    Phone,
    Address,
    AddressLine1,
    AddressLine2,
    PostalCode,
    City,
    Country,
    FacebookUrl,
    InstagramUrl,
    XUrl,
    WhatsappUrl,
    HeroTitle,
    HeroSubtitle,
    HeroCtaLabel,
    HeroCtaUrl,
    MetaTitle,
    MetaDescription,
    OgImageUrl,
    BrandPrimary,
    BrandAccent,
    BrandMuted,
    CreatedAt,
    UpdatedAt,
}

fn create_site_settings_table(_: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(SiteSettings::Table)
        .if_not_exists()
        .col(pk_auto(SiteSettings::Id))
        .col(
            ColumnDef::new(SiteSettings::SiteName)
                .string_len(120)
                .not_null()
                .comment("Brand name"),
        )
        .col(
            ColumnDef::new(SiteSettings::Tagline)
                .string_len(180)
                .not_null()
                .default(""),
        )
        .col(
            ColumnDef::new(SiteSettings::PrimaryEmail)
                .string_len(254)
                .not_null()
                .default("")
                .comment("Contact email; notification recipient fallback"),
        )
        .col(
            ColumnDef::new(SiteSettings::Phone)
                .string_len(40)
                .not_null()
                .default(""),
        )
        .col(
            ColumnDef::new(SiteSettings::Address)
                .text()
                .not_null()
                .default(""),
        )
        .col(
            ColumnDef::new(SiteSettings::AddressLine1)
                .string_len(160)
                .not_null()
                .default(""),
        )
        .col(
            ColumnDef::new(SiteSettings::AddressLine2)
                .string_len(160)
                .not_null()
                .default(""),
        )
        .col(
            ColumnDef::new(SiteSettings::PostalCode)
                .string_len(20)
                .not_null()
                .default(""),
        )
        .col(
            ColumnDef::new(SiteSettings::City)
                .string_len(80)
                .not_null()
                .default(""),
        )
        .col(
            ColumnDef::new(SiteSettings::Country)
                .string_len(80)
                .not_null()
                .default(""),
        )
        .col(
            ColumnDef::new(SiteSettings::FacebookUrl)
                .string_len(200)
                .not_null()
                .default(""),
        )
        .col(
            ColumnDef::new(SiteSettings::InstagramUrl)
                .string_len(200)
                .not_null()
                .default(""),
        )
        .col(
            ColumnDef::new(SiteSettings::XUrl)
                .string_len(200)
                .not_null()
                .default(""),
        )
        .col(
            ColumnDef::new(SiteSettings::WhatsappUrl)
                .string_len(200)
                .not_null()
                .default(""),
        )
        .col(
            ColumnDef::new(SiteSettings::HeroTitle)
                .string_len(120)
                .not_null()
                .comment("Homepage hero headline"),
        )
        .col(
            ColumnDef::new(SiteSettings::HeroSubtitle)
                .string_len(220)
                .not_null(),
        )
        .col(
            ColumnDef::new(SiteSettings::HeroCtaLabel)
                .string_len(40)
                .not_null(),
        )
        .col(
            ColumnDef::new(SiteSettings::HeroCtaUrl)
                .string_len(200)
                .not_null(),
        )
        .col(
            ColumnDef::new(SiteSettings::MetaTitle)
                .string_len(70)
                .not_null()
                .default(""),
        )
        .col(
            ColumnDef::new(SiteSettings::MetaDescription)
                .string_len(160)
                .not_null()
                .default(""),
        )
        .col(
            ColumnDef::new(SiteSettings::OgImageUrl)
                .string_len(200)
                .not_null()
                .default(""),
        )
        .col(
            ColumnDef::new(SiteSettings::BrandPrimary)
                .string_len(20)
                .not_null(),
        )
        .col(
            ColumnDef::new(SiteSettings::BrandAccent)
                .string_len(20)
                .not_null(),
        )
        .col(
            ColumnDef::new(SiteSettings::BrandMuted)
                .string_len(20)
                .not_null(),
        )
        .col(
            ColumnDef::new(SiteSettings::CreatedAt)
                .timestamp()
                .default(Expr::current_timestamp())
                .comment("Created at"),
        )
        .col(
            ColumnDef::new(SiteSettings::UpdatedAt)
                .timestamp()
                .default(Expr::current_timestamp())
                .comment("Updated at"),
        )
        .to_owned()
}

async fn get_site_settings_seed_data(
    _: &mut InitContext,
) -> Result<Option<Vec<NewSiteSettingsWithId>>, DbErr> {
    Ok(Some(vec![NewSiteSettingsWithId {
        id: crate::constants::SETTINGS_SINGLETON_ID,
        site_name: DEFAULT_SITE_NAME.into(),
        tagline: DEFAULT_TAGLINE.into(),
        hero_title: DEFAULT_HERO_TITLE.into(),
        hero_subtitle: DEFAULT_HERO_SUBTITLE.into(),
        hero_cta_label: DEFAULT_HERO_CTA_LABEL.into(),
        hero_cta_url: DEFAULT_HERO_CTA_URL.into(),
        brand_primary: DEFAULT_BRAND_PRIMARY.into(),
        brand_accent: DEFAULT_BRAND_ACCENT.into(),
        brand_muted: DEFAULT_BRAND_MUTED.into(),
        ..Default::default()
    }]))
}

//! Migration identifiers and seeding for navigation items.
//!
//! The default menu mirrors the homepage sections plus the contact CTA.
//! The single-CTA rule is backstopped by a partial unique index created
//! with raw SQL in the migration (sqlite-specific), not here.

use crate::{
    domain::prelude::NewNavigationItemWithId,
    enums::navigation::NavKind,
    initializer::{
        DataSeederTrait, InitContext, SeedableInitializerTrait, SeedableTrait, TableInitializer,
    },
};
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};
use tradegate_macros::SeedableInitializer;

#[derive(DeriveIden, SeedableInitializer)]
#[seedable(meta(
    model = NewNavigationItemWithId,
    order = super::INIT_CONTENT_ORDER,
    create_table = create_navigation_item_table,
    seed_data = get_navigation_seed_data
))]
pub enum NavigationItem {
    Table,
    Id,
    Label,
    Kind,
    Anchor,
    UrlName,
    ExternalUrl,
    IsVisible,
    Order,
    IsCta,
    CreatedAt,
    UpdatedAt,
}

fn create_navigation_item_table(_: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(NavigationItem::Table)
        .if_not_exists()
        .col(pk_auto(NavigationItem::Id))
        .col(
            ColumnDef::new(NavigationItem::Label)
                .string_len(120)
                .not_null(),
        )
        .col(
            ColumnDef::new(NavigationItem::Kind)
                .string_len(20)
                .not_null()
                .comment("anchor | internal | external"),
        )
        .col(
            ColumnDef::new(NavigationItem::Anchor)
                .string_len(40)
                .not_null()
                .default("")
                .comment("In-page section id (kind=anchor)"),
        )
        .col(
            ColumnDef::new(NavigationItem::UrlName)
                .string_len(40)
                .not_null()
                .default("")
                .comment("Internal route name (kind=internal)"),
        )
        .col(
            ColumnDef::new(NavigationItem::ExternalUrl)
                .string_len(200)
                .not_null()
                .default("")
                .comment("Absolute URL (kind=external)"),
        )
        .col(
            ColumnDef::new(NavigationItem::IsVisible)
                .boolean()
                .not_null()
                .default(true),
        )
        .col(
            ColumnDef::new(NavigationItem::Order)
                .integer()
                .not_null()
                .default(0),
        )
        .col(
            ColumnDef::new(NavigationItem::IsCta)
                .boolean()
                .not_null()
                .default(false),
        )
        .col(
            ColumnDef::new(NavigationItem::CreatedAt)
                .timestamp()
                .default(Expr::current_timestamp()),
        )
        .col(
            ColumnDef::new(NavigationItem::UpdatedAt)
                .timestamp()
                .default(Expr::current_timestamp()),
        )
        .to_owned()
}

async fn get_navigation_seed_data(
    _: &mut InitContext,
) -> Result<Option<Vec<NewNavigationItemWithId>>, DbErr> {
    Ok(Some(vec![
        NewNavigationItemWithId {
            id: 1,
            label: "Services".into(),
            kind: NavKind::Anchor,
            anchor: "services".into(),
            order: 10,
            ..Default::default()
        },
        NewNavigationItemWithId {
            id: 2,
            label: "Industries".into(),
            kind: NavKind::Anchor,
            anchor: "industries".into(),
            order: 20,
            ..Default::default()
        },
        NewNavigationItemWithId {
            id: 3,
            label: "How we work".into(),
            kind: NavKind::Anchor,
            anchor: "process".into(),
            order: 30,
            ..Default::default()
        },
        NewNavigationItemWithId {
            id: 4,
            label: "Contact us".into(),
            kind: NavKind::Internal,
            url_name: "contact".into(),
            order: 40,
            is_cta: true,
            ..Default::default()
        },
    ]))
}

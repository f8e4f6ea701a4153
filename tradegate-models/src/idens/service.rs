//! Migration identifiers for services. Content is admin-managed, no seed.

use crate::initializer::{InitContext, TableInitializer};
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};
use tradegate_macros::UnseedableInitializer;

#[derive(DeriveIden, UnseedableInitializer)]
#[unseedable(meta(
    order = super::INIT_CONTENT_ORDER,
    create_table = create_service_table,
))]
pub enum Service {
    Table,
    Id,
    Title,
    ShortDescription,
    Icon,
    IsActive,
    Order,
    CreatedAt,
    UpdatedAt,
}

fn create_service_table(_: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(Service::Table)
        .if_not_exists()
        .col(pk_auto(Service::Id))
        .col(ColumnDef::new(Service::Title).string_len(120).not_null())
        .col(
            ColumnDef::new(Service::ShortDescription)
                .string_len(220)
                .not_null(),
        )
        .col(
            ColumnDef::new(Service::Icon)
                .string_len(40)
                .not_null()
                .default("Briefcase")
                .comment("Icon label for the template"),
        )
        .col(
            ColumnDef::new(Service::IsActive)
                .boolean()
                .not_null()
                .default(true),
        )
        .col(
            ColumnDef::new(Service::Order)
                .integer()
                .not_null()
                .default(0),
        )
        .col(
            ColumnDef::new(Service::CreatedAt)
                .timestamp()
                .default(Expr::current_timestamp()),
        )
        .col(
            ColumnDef::new(Service::UpdatedAt)
                .timestamp()
                .default(Expr::current_timestamp()),
        )
        .to_owned()
}

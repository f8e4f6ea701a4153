//! Migration identifiers for industries. Content is admin-managed, no seed.

use crate::initializer::{InitContext, TableInitializer};
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};
use tradegate_macros::UnseedableInitializer;

#[derive(DeriveIden, UnseedableInitializer)]
#[unseedable(meta(
    order = super::INIT_CONTENT_ORDER,
    create_table = create_industry_table,
))]
pub enum Industry {
    Table,
    Id,
    Name,
    ShortDescription,
    IsActive,
    Order,
    CreatedAt,
    UpdatedAt,
}

fn create_industry_table(_: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(Industry::Table)
        .if_not_exists()
        .col(pk_auto(Industry::Id))
        .col(ColumnDef::new(Industry::Name).string_len(120).not_null())
        .col(
            ColumnDef::new(Industry::ShortDescription)
                .string_len(220)
                .not_null()
                .default(""),
        )
        .col(
            ColumnDef::new(Industry::IsActive)
                .boolean()
                .not_null()
                .default(true),
        )
        .col(
            ColumnDef::new(Industry::Order)
                .integer()
                .not_null()
                .default(0),
        )
        .col(
            ColumnDef::new(Industry::CreatedAt)
                .timestamp()
                .default(Expr::current_timestamp()),
        )
        .col(
            ColumnDef::new(Industry::UpdatedAt)
                .timestamp()
                .default(Expr::current_timestamp()),
        )
        .to_owned()
}

//! Migration identifiers for process steps. Content is admin-managed, no seed.

use crate::initializer::{InitContext, TableInitializer};
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};
use tradegate_macros::UnseedableInitializer;

#[derive(DeriveIden, UnseedableInitializer)]
#[unseedable(meta(
    order = super::INIT_CONTENT_ORDER,
    create_table = create_process_step_table,
))]
pub enum ProcessStep {
    Table,
    Id,
    Title,
    Description,
    Order,
    CreatedAt,
    UpdatedAt,
}

fn create_process_step_table(_: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(ProcessStep::Table)
        .if_not_exists()
        .col(pk_auto(ProcessStep::Id))
        .col(ColumnDef::new(ProcessStep::Title).string_len(120).not_null())
        .col(
            ColumnDef::new(ProcessStep::Description)
                .string_len(240)
                .not_null(),
        )
        .col(
            ColumnDef::new(ProcessStep::Order)
                .integer()
                .not_null()
                .default(0),
        )
        .col(
            ColumnDef::new(ProcessStep::CreatedAt)
                .timestamp()
                .default(Expr::current_timestamp()),
        )
        .col(
            ColumnDef::new(ProcessStep::UpdatedAt)
                .timestamp()
                .default(Expr::current_timestamp()),
        )
        .to_owned()
}

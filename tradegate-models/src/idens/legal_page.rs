//! Migration identifiers for legal pages.
//!
//! The `key` column carries a unique index: duplicate keys are rejected at
//! validation time for the friendly error, and by the index for correctness
//! under concurrent writers.

use crate::initializer::{InitContext, TableInitializer};
use sea_orm::{
    sea_query::IndexCreateStatement, DatabaseBackend, DeriveIden,
};
use sea_orm_migration::{prelude::*, schema::pk_auto};
use tradegate_macros::UnseedableInitializer;

#[derive(DeriveIden, UnseedableInitializer)]
#[unseedable(meta(
    order = super::INIT_CONTENT_ORDER,
    create_table = create_legal_page_table,
    create_indexes = create_legal_page_indexes,
))]
pub enum LegalPage {
    Table,
    Id,
    Key,
    Title,
    Content,
    MetaTitle,
    MetaDescription,
    CreatedAt,
    UpdatedAt,
}

fn create_legal_page_table(_: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(LegalPage::Table)
        .if_not_exists()
        .col(pk_auto(LegalPage::Id))
        .col(
            ColumnDef::new(LegalPage::Key)
                .string_len(40)
                .not_null()
                .comment("impressum | datenschutz; public URL slug"),
        )
        .col(ColumnDef::new(LegalPage::Title).string_len(120).not_null())
        .col(ColumnDef::new(LegalPage::Content).text().not_null())
        .col(
            ColumnDef::new(LegalPage::MetaTitle)
                .string_len(70)
                .not_null()
                .default(""),
        )
        .col(
            ColumnDef::new(LegalPage::MetaDescription)
                .string_len(160)
                .not_null()
                .default(""),
        )
        .col(
            ColumnDef::new(LegalPage::CreatedAt)
                .timestamp()
                .default(Expr::current_timestamp()),
        )
        .col(
            ColumnDef::new(LegalPage::UpdatedAt)
                .timestamp()
                .default(Expr::current_timestamp()),
        )
        .to_owned()
}

fn create_legal_page_indexes(_: DatabaseBackend) -> Option<Vec<IndexCreateStatement>> {
    Some(vec![Index::create()
        .if_not_exists()
        .name("idx_legal_page_key")
        .table(LegalPage::Table)
        .col(LegalPage::Key)
        .unique()
        .to_owned()])
}

//! Migration identifiers for contact inquiries.

use crate::initializer::{InitContext, TableInitializer};
use sea_orm::{
    sea_query::IndexCreateStatement, DatabaseBackend, DeriveIden,
};
use sea_orm_migration::{prelude::*, schema::pk_auto};
use tradegate_macros::UnseedableInitializer;

#[derive(DeriveIden, UnseedableInitializer)]
#[unseedable(meta(
    order = super::INIT_INTAKE_ORDER,
    create_table = create_inquiry_table,
    create_indexes = create_inquiry_indexes,
))]
pub enum Inquiry {
    Table,
    Id,
    FullName,
    Email,
    Subject,
    Message,
    CompanyName,
    Website,
    Country,
    ServiceInterest,
    Timeline,
    BudgetRange,
    ContactMethod,
    Phone,
    Consent,
    IpAddress,
    UserAgent,
    IsHandled,
    CreatedAt,
    UpdatedAt,
}

fn create_inquiry_table(_: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(Inquiry::Table)
        .if_not_exists()
        .col(pk_auto(Inquiry::Id))
        .col(ColumnDef::new(Inquiry::FullName).string_len(120).not_null())
        .col(ColumnDef::new(Inquiry::Email).string_len(254).not_null())
        .col(ColumnDef::new(Inquiry::Subject).string_len(160).not_null())
        .col(ColumnDef::new(Inquiry::Message).text().not_null())
        .col(
            ColumnDef::new(Inquiry::CompanyName)
                .string_len(160)
                .not_null()
                .default(""),
        )
        .col(
            ColumnDef::new(Inquiry::Website)
                .string_len(200)
                .not_null()
                .default(""),
        )
        .col(
            ColumnDef::new(Inquiry::Country)
                .string_len(80)
                .not_null()
                .default(""),
        )
        .col(
            ColumnDef::new(Inquiry::ServiceInterest)
                .string_len(40)
                .not_null()
                .default(""),
        )
        .col(
            ColumnDef::new(Inquiry::Timeline)
                .string_len(40)
                .not_null()
                .default(""),
        )
        .col(
            ColumnDef::new(Inquiry::BudgetRange)
                .string_len(40)
                .not_null()
                .default(""),
        )
        .col(
            ColumnDef::new(Inquiry::ContactMethod)
                .string_len(20)
                .not_null()
                .default(""),
        )
        .col(
            ColumnDef::new(Inquiry::Phone)
                .string_len(40)
                .not_null()
                .default(""),
        )
        .col(
            ColumnDef::new(Inquiry::Consent)
                .boolean()
                .not_null()
                .default(false),
        )
        .col(
            ColumnDef::new(Inquiry::IpAddress)
                .string_len(45)
                .comment("Remote or forwarded address; nullable"),
        )
        .col(
            ColumnDef::new(Inquiry::UserAgent)
                .string_len(255)
                .not_null()
                .default(""),
        )
        .col(
            ColumnDef::new(Inquiry::IsHandled)
                .boolean()
                .not_null()
                .default(false),
        )
        .col(
            ColumnDef::new(Inquiry::CreatedAt)
                .timestamp()
                .default(Expr::current_timestamp()),
        )
        .col(
            ColumnDef::new(Inquiry::UpdatedAt)
                .timestamp()
                .default(Expr::current_timestamp()),
        )
        .to_owned()
}

fn create_inquiry_indexes(_: DatabaseBackend) -> Option<Vec<IndexCreateStatement>> {
    Some(vec![Index::create()
        .if_not_exists()
        .name("idx_inquiry_created_at")
        .table(Inquiry::Table)
        .col(Inquiry::CreatedAt)
        .to_owned()])
}

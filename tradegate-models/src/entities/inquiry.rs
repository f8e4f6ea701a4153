//! `SeaORM` Entity for persisted contact-form submissions.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "inquiry")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub full_name: String,
    pub email: String,
    pub subject: String,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    // Lead-qualification fields; empty string when the submitter left them out.
    pub company_name: String,
    pub website: String,
    pub country: String,
    pub service_interest: String,
    pub timeline: String,
    pub budget_range: String,
    pub contact_method: String,
    pub phone: String,
    pub consent: bool,
    // Request metadata captured server-side.
    pub ip_address: Option<String>,
    pub user_agent: String,
    pub is_handled: bool,
    pub created_at: Option<DateTimeUtc>,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

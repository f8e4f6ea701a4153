use sea_orm::{DeriveActiveEnum, EnumIter};
use sea_query::StringLen;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Error, Formatter};
use tradegate_macros::IntoActiveValue;

/// Link target resolution mode for a navigation item.
///
/// The per-kind field requirements (anchor / url name / external url) are
/// enforced by the navigation write validator, not by the column type.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
    IntoActiveValue,
)]
#[sea_orm(
    rs_type = "String",
    db_type = "String(StringLen::N(20))",
    rename_all = "snake_case"
)]
#[serde(rename_all = "snake_case")]
pub enum NavKind {
    /// Same-page section link (`/#services` style)
    Anchor,
    /// Named internal route (`about`, `faq`, `contact`, ...)
    Internal,
    /// Absolute external URL
    External,
}

impl NavKind {
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Anchor => "anchor",
            Self::Internal => "internal",
            Self::External => "external",
        }
    }
}

impl Display for NavKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "{}", self.as_str())
    }
}

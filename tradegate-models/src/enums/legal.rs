use sea_orm::{DeriveActiveEnum, EnumIter};
use sea_query::StringLen;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Error, Formatter};
use std::str::FromStr;
use tradegate_macros::IntoActiveValue;

/// Closed enumeration of legal page keys.
///
/// The key doubles as the public URL slug (`/legal/impressum/`), so parsing
/// an unknown slug is a lookup miss rather than a validation error.
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
    db_type = "String(StringLen::N(40))",
    rename_all = "snake_case"
)]
#[serde(rename_all = "snake_case")]
pub enum LegalKey {
    Impressum,
    Datenschutz,
}

impl LegalKey {
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Impressum => "impressum",
            Self::Datenschutz => "datenschutz",
        }
    }

    /// Human-readable title used as a display fallback.
    #[inline]
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Impressum => "Impressum",
            Self::Datenschutz => "Datenschutz",
        }
    }
}

impl Display for LegalKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LegalKey {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "impressum" => Ok(Self::Impressum),
            "datenschutz" => Ok(Self::Datenschutz),
            _ => Err(()),
        }
    }
}

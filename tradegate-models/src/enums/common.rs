use serde::{Deserialize, Serialize};
use std::fmt::{Display, Error, Formatter};

/// Entity kinds known to the write-time validation manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityType {
    SiteSettings,
    NavigationItem,
    Service,
    Industry,
    ProcessStep,
    LegalPage,
    Inquiry,
}

impl EntityType {
    /// Returns the string representation of the entity type
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SiteSettings => "SITE_SETTINGS",
            Self::NavigationItem => "NAVIGATION_ITEM",
            Self::Service => "SERVICE",
            Self::Industry => "INDUSTRY",
            Self::ProcessStep => "PROCESS_STEP",
            Self::LegalPage => "LEGAL_PAGE",
            Self::Inquiry => "INQUIRY",
        }
    }

    /// Returns the display name of the entity type
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::SiteSettings => "SiteSettings",
            Self::NavigationItem => "NavigationItem",
            Self::Service => "Service",
            Self::Industry => "Industry",
            Self::ProcessStep => "ProcessStep",
            Self::LegalPage => "LegalPage",
            Self::Inquiry => "Inquiry",
        }
    }
}

impl Display for EntityType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "{}", self.as_str())
    }
}

/// Operation enum representing different actions that can be performed on content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    /// Create a record
    Create,
    /// Read a record
    Read,
    /// Write/Update a record
    Write,
    /// Delete a record
    Delete,
}

impl Operation {
    /// Returns the string representation of the operation
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "CREATE",
            Self::Read => "READ",
            Self::Write => "WRITE",
            Self::Delete => "DELETE",
        }
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "{}", self.as_str())
    }
}

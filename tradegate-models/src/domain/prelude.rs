pub use super::common::{ChangeHandledPayload, PathId};
pub use super::industry::{NewIndustry, UpdateIndustry};
pub use super::inquiry::{
    FieldErrors, InquiryForm, NewInquiry, RequestMeta, FORM_ERROR_KEY,
};
pub use super::legal_page::{NewLegalPage, UpdateLegalPage};
pub use super::navigation::{NewNavigationItem, NewNavigationItemWithId, UpdateNavigationItem};
pub use super::process_step::{NewProcessStep, UpdateProcessStep};
pub use super::service::{NewService, UpdateService};
pub use super::site_settings::{NewSiteSettingsWithId, SiteContext, UpdateSiteSettings};

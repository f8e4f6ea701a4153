pub use super::industry::{
    ActiveModel as IndustryActiveModel, Column as IndustryColumn, Entity as Industry,
    Model as IndustryModel,
};
pub use super::inquiry::{
    ActiveModel as InquiryActiveModel, Column as InquiryColumn, Entity as Inquiry,
    Model as InquiryModel,
};
pub use super::legal_page::{
    ActiveModel as LegalPageActiveModel, Column as LegalPageColumn, Entity as LegalPage,
    Model as LegalPageModel,
};
pub use super::navigation_item::{
    ActiveModel as NavigationItemActiveModel, Column as NavigationItemColumn,
    Entity as NavigationItem, Model as NavigationItemModel,
};
pub use super::process_step::{
    ActiveModel as ProcessStepActiveModel, Column as ProcessStepColumn, Entity as ProcessStep,
    Model as ProcessStepModel,
};
pub use super::service::{
    ActiveModel as ServiceActiveModel, Column as ServiceColumn, Entity as Service,
    Model as ServiceModel,
};
pub use super::site_settings::{
    ActiveModel as SiteSettingsActiveModel, Column as SiteSettingsColumn, Entity as SiteSettings,
    Model as SiteSettingsModel,
};

pub use super::ContentEntity;

//! Per-entity repositories over an explicit connection.
//!
//! Every method takes the connection as its first argument so callers (and
//! tests) decide whether they hand in the pooled connection or an open
//! transaction.

pub mod industry;
pub mod inquiry;
pub mod legal_page;
pub mod navigation;
pub mod process_step;
pub mod service;
pub mod site_settings;

pub use industry::IndustryRepository;
pub use inquiry::InquiryRepository;
pub use legal_page::LegalPageRepository;
pub use navigation::NavigationRepository;
pub use process_step::ProcessStepRepository;
pub use service::ServiceRepository;
pub use site_settings::SiteSettingsRepository;

pub mod industry;
pub mod inquiry;
pub mod legal_page;
pub mod navigation_item;
pub mod process_step;
pub mod service;
pub mod site_settings;

pub mod prelude;

use crate::enums::common::EntityType;
use downcast_rs::{impl_downcast, DowncastSync};

/// Marker trait for active models that pass through the write-time
/// validation manager. Validators downcast to the concrete active model.
pub trait ContentEntity: DowncastSync {
    fn entity_type(&self) -> EntityType;
}

impl_downcast!(sync ContentEntity);

impl ContentEntity for site_settings::ActiveModel {
    fn entity_type(&self) -> EntityType {
        EntityType::SiteSettings
    }
}

impl ContentEntity for navigation_item::ActiveModel {
    fn entity_type(&self) -> EntityType {
        EntityType::NavigationItem
    }
}

impl ContentEntity for service::ActiveModel {
    fn entity_type(&self) -> EntityType {
        EntityType::Service
    }
}

impl ContentEntity for industry::ActiveModel {
    fn entity_type(&self) -> EntityType {
        EntityType::Industry
    }
}

impl ContentEntity for process_step::ActiveModel {
    fn entity_type(&self) -> EntityType {
        EntityType::ProcessStep
    }
}

impl ContentEntity for legal_page::ActiveModel {
    fn entity_type(&self) -> EntityType {
        EntityType::LegalPage
    }
}

impl ContentEntity for inquiry::ActiveModel {
    fn entity_type(&self) -> EntityType {
        EntityType::Inquiry
    }
}

use super::{
    manager::ValidationManager,
    validators::{legal::LegalPageKeyValidator, navigation::NavigationRulesValidator},
};
use std::sync::Arc;

/// Build the manager with the default validator set.
pub fn create_default_manager() -> ValidationManager {
    let mut manager = ValidationManager::new();
    manager.register(Arc::new(NavigationRulesValidator));
    manager.register(Arc::new(LegalPageKeyValidator));
    manager
}

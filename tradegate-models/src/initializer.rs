use crate::idens;
use async_trait::async_trait;
use sea_orm::{
    sea_query::{IndexCreateStatement, TableCreateStatement, TableDropStatement},
    ActiveModelTrait, DatabaseBackend, DatabaseTransaction, DbErr, EntityTrait,
};
use std::{any::Any, collections::HashMap};
use tradegate_error::{init::InitError, SiteError, SiteResult};

#[async_trait]
pub trait TableInitializer: Send + Sync {
    fn order(&self) -> i32;

    fn name(&self) -> &str;

    fn has_update_col(&self) -> bool;

    fn to_create_table_stmt(&self, backend: DatabaseBackend) -> TableCreateStatement;

    fn to_drop_table_stmt(&self, backend: DatabaseBackend) -> TableDropStatement;

    fn to_create_indexes_stmt(&self, backend: DatabaseBackend)
        -> Option<Vec<IndexCreateStatement>>;

    async fn seeding_data(
        &self,
        transaction: &DatabaseTransaction,
        ctx: &mut InitContext,
    ) -> Result<(), DbErr>;
}

/// Trait for types that can be seeded into the database
pub trait SeedableTrait: Send + Sync + 'static {
    /// The active model type for database insertion
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity>;
    /// The entity type for database operations
    type Entity: EntityTrait;

    /// Convert self into an active model
    fn get_active_model(&self) -> Self::ActiveModel;
}

/// Trait for database initializers that can seed data
#[async_trait]
pub trait DataSeederTrait<T: SeedableTrait + Clone> {
    /// Get the initial seed data
    async fn get_seed_data(&self, ctx: &mut InitContext) -> Result<Option<Vec<T>>, DbErr>;
}

/// Helper trait that combines TableInitializer and DataSeeder
#[async_trait]
pub trait SeedableInitializerTrait<T: SeedableTrait + Clone>:
    TableInitializer + DataSeederTrait<T>
{
    /// Default implementation for seeding data
    async fn seed_data(
        &self,
        transaction: &DatabaseTransaction,
        ctx: &mut InitContext,
    ) -> Result<(), DbErr> {
        if let Some(seed_data) = self.get_seed_data(ctx).await? {
            // Skip when there is no data to seed to avoid empty INSERTs
            if seed_data.is_empty() {
                return Ok(());
            }

            let active_models: Vec<T::ActiveModel> = seed_data
                .clone()
                .into_iter()
                .map(|d| d.get_active_model())
                .collect();

            T::Entity::insert_many(active_models)
                .exec(transaction)
                .await?;

            ctx.set(self.name(), seed_data);
        }
        Ok(())
    }
}

pub fn initializers() -> Vec<Box<dyn TableInitializer>> {
    let mut initializers: Vec<Box<dyn TableInitializer>> = vec![
        Box::new(idens::site_settings::SiteSettings::Table),
        Box::new(idens::navigation_item::NavigationItem::Table),
        Box::new(idens::service::Service::Table),
        Box::new(idens::industry::Industry::Table),
        Box::new(idens::process_step::ProcessStep::Table),
        Box::new(idens::legal_page::LegalPage::Table),
        Box::new(idens::inquiry::Inquiry::Table),
    ];

    initializers.sort_by_key(|init| init.order());
    initializers
}

/// A context for storing initialization data between different initializers
///
/// This struct provides a type-safe way to store and retrieve vectors of
/// initialization data that can be shared between different initialization steps
pub struct InitContext {
    /// Internal storage using type-erased vectors of data
    data: HashMap<String, Vec<Box<dyn Any + Send + Sync>>>,
}

impl InitContext {
    /// Creates a new empty initialization context
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }

    /// Stores a vector of initialization data under the specified key
    ///
    /// # Arguments
    /// * `key` - The key under which to store the data
    /// * `values` - A vector of values to store
    pub fn set<T: 'static + Send + Sync>(&mut self, key: &str, values: Vec<T>) {
        let boxed_values: Vec<Box<dyn Any + Send + Sync>> = values
            .into_iter()
            .map(|v| Box::new(v) as Box<dyn Any + Send + Sync>)
            .collect();
        self.data.insert(key.into(), boxed_values);
    }

    /// Retrieves a vector of previously stored data for the specified key and type
    ///
    /// # Arguments
    /// * `key` - The key to lookup
    ///
    /// # Returns
    /// * `SiteResult<Vec<&T>>` - References to the stored data if found and
    ///   all elements match the expected type
    pub fn get<T: 'static>(&self, key: &str) -> SiteResult<Vec<&T>> {
        let values = self
            .data
            .get(key)
            .ok_or(SiteError::InitError(InitError::ComponentUnavailable(
                key.into(),
            )))?;

        values
            .iter()
            .map(|value| {
                value
                    .downcast_ref::<T>()
                    .ok_or(SiteError::InitError(InitError::Primitive(format!(
                        "type mismatch for key: {key}"
                    ))))
            })
            .collect()
    }
}

impl Default for InitContext {
    fn default() -> Self {
        Self::new()
    }
}

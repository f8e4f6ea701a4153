use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel,
    QueryFilter, QueryOrder,
};
use tradegate_error::{storage::StorageError, StorageResult};
use tradegate_models::{
    domain::prelude::{NewService, UpdateService},
    entities::prelude::{Service, ServiceColumn, ServiceModel},
};

pub struct ServiceRepository;

impl ServiceRepository {
    pub async fn create<C>(db: &C, service: NewService) -> StorageResult<ServiceModel>
    where
        C: ConnectionTrait,
    {
        Ok(service.into_active_model().insert(db).await?)
    }

    pub async fn update<C>(db: &C, service: UpdateService) -> StorageResult<ServiceModel>
    where
        C: ConnectionTrait,
    {
        match service.into_active_model().update(db).await {
            Ok(model) => Ok(model),
            Err(DbErr::RecordNotUpdated) => Err(StorageError::EntityNotFound("service".into())),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn delete<C>(db: &C, id: i32) -> StorageResult<()>
    where
        C: ConnectionTrait,
    {
        let _ = Service::delete_by_id(id).exec(db).await?;
        Ok(())
    }

    pub async fn find_all<C>(db: &C) -> StorageResult<Vec<ServiceModel>>
    where
        C: ConnectionTrait,
    {
        Ok(Service::find()
            .order_by_asc(ServiceColumn::Order)
            .order_by_asc(ServiceColumn::Title)
            .all(db)
            .await?)
    }

    /// Homepage view: active services ordered `(order, title)`.
    pub async fn find_active<C>(db: &C) -> StorageResult<Vec<ServiceModel>>
    where
        C: ConnectionTrait,
    {
        Ok(Service::find()
            .filter(ServiceColumn::IsActive.eq(true))
            .order_by_asc(ServiceColumn::Order)
            .order_by_asc(ServiceColumn::Title)
            .all(db)
            .await?)
    }

    pub async fn find_by_id<C>(db: &C, id: i32) -> StorageResult<Option<ServiceModel>>
    where
        C: ConnectionTrait,
    {
        Ok(Service::find_by_id(id).one(db).await?)
    }
}

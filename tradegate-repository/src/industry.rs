use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel,
    QueryFilter, QueryOrder,
};
use tradegate_error::{storage::StorageError, StorageResult};
use tradegate_models::{
    domain::prelude::{NewIndustry, UpdateIndustry},
    entities::prelude::{Industry, IndustryColumn, IndustryModel},
};

pub struct IndustryRepository;

impl IndustryRepository {
    pub async fn create<C>(db: &C, industry: NewIndustry) -> StorageResult<IndustryModel>
    where
        C: ConnectionTrait,
    {
        Ok(industry.into_active_model().insert(db).await?)
    }

    pub async fn update<C>(db: &C, industry: UpdateIndustry) -> StorageResult<IndustryModel>
    where
        C: ConnectionTrait,
    {
        match industry.into_active_model().update(db).await {
            Ok(model) => Ok(model),
            Err(DbErr::RecordNotUpdated) => Err(StorageError::EntityNotFound("industry".into())),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn delete<C>(db: &C, id: i32) -> StorageResult<()>
    where
        C: ConnectionTrait,
    {
        let _ = Industry::delete_by_id(id).exec(db).await?;
        Ok(())
    }

    pub async fn find_all<C>(db: &C) -> StorageResult<Vec<IndustryModel>>
    where
        C: ConnectionTrait,
    {
        Ok(Industry::find()
            .order_by_asc(IndustryColumn::Order)
            .order_by_asc(IndustryColumn::Name)
            .all(db)
            .await?)
    }

    /// Homepage view: active industries ordered `(order, name)`.
    pub async fn find_active<C>(db: &C) -> StorageResult<Vec<IndustryModel>>
    where
        C: ConnectionTrait,
    {
        Ok(Industry::find()
            .filter(IndustryColumn::IsActive.eq(true))
            .order_by_asc(IndustryColumn::Order)
            .order_by_asc(IndustryColumn::Name)
            .all(db)
            .await?)
    }

    pub async fn find_by_id<C>(db: &C, id: i32) -> StorageResult<Option<IndustryModel>>
    where
        C: ConnectionTrait,
    {
        Ok(Industry::find_by_id(id).one(db).await?)
    }
}

use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel, QueryOrder,
};
use tradegate_error::{storage::StorageError, StorageResult};
use tradegate_models::{
    domain::prelude::{NewProcessStep, UpdateProcessStep},
    entities::prelude::{ProcessStep, ProcessStepColumn, ProcessStepModel},
};

pub struct ProcessStepRepository;

impl ProcessStepRepository {
    pub async fn create<C>(db: &C, step: NewProcessStep) -> StorageResult<ProcessStepModel>
    where
        C: ConnectionTrait,
    {
        Ok(step.into_active_model().insert(db).await?)
    }

    pub async fn update<C>(db: &C, step: UpdateProcessStep) -> StorageResult<ProcessStepModel>
    where
        C: ConnectionTrait,
    {
        match step.into_active_model().update(db).await {
            Ok(model) => Ok(model),
            Err(DbErr::RecordNotUpdated) => {
                Err(StorageError::EntityNotFound("process_step".into()))
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn delete<C>(db: &C, id: i32) -> StorageResult<()>
    where
        C: ConnectionTrait,
    {
        let _ = ProcessStep::delete_by_id(id).exec(db).await?;
        Ok(())
    }

    /// All steps in their global order.
    pub async fn find_all<C>(db: &C) -> StorageResult<Vec<ProcessStepModel>>
    where
        C: ConnectionTrait,
    {
        Ok(ProcessStep::find()
            .order_by_asc(ProcessStepColumn::Order)
            .all(db)
            .await?)
    }

    pub async fn find_by_id<C>(db: &C, id: i32) -> StorageResult<Option<ProcessStepModel>>
    where
        C: ConnectionTrait,
    {
        Ok(ProcessStep::find_by_id(id).one(db).await?)
    }
}

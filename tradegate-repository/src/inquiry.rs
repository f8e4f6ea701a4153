use sea_orm::{
    ActiveModelTrait, ConnectionTrait, EntityTrait, IntoActiveModel, QueryOrder, Set,
};
use tradegate_error::{storage::StorageError, StorageResult};
use tradegate_models::{
    domain::prelude::NewInquiry,
    entities::prelude::{Inquiry, InquiryColumn, InquiryModel},
};

pub struct InquiryRepository;

impl InquiryRepository {
    /// Persist a validated submission. A single INSERT, so the row exists
    /// fully or not at all.
    pub async fn create<C>(db: &C, inquiry: NewInquiry) -> StorageResult<InquiryModel>
    where
        C: ConnectionTrait,
    {
        Ok(inquiry.into_active_model().insert(db).await?)
    }

    /// Newest first, the operational triage order.
    pub async fn find_all<C>(db: &C) -> StorageResult<Vec<InquiryModel>>
    where
        C: ConnectionTrait,
    {
        Ok(Inquiry::find()
            .order_by_desc(InquiryColumn::CreatedAt)
            .order_by_desc(InquiryColumn::Id)
            .all(db)
            .await?)
    }

    pub async fn find_by_id<C>(db: &C, id: i32) -> StorageResult<Option<InquiryModel>>
    where
        C: ConnectionTrait,
    {
        Ok(Inquiry::find_by_id(id).one(db).await?)
    }

    /// Flip the handled flag.
    pub async fn set_handled<C>(db: &C, id: i32, is_handled: bool) -> StorageResult<InquiryModel>
    where
        C: ConnectionTrait,
    {
        let mut active = Inquiry::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| StorageError::EntityNotFound("inquiry".into()))?
            .into_active_model();

        active.is_handled = Set(is_handled);
        Ok(active.update(db).await?)
    }

    pub async fn delete<C>(db: &C, id: i32) -> StorageResult<()>
    where
        C: ConnectionTrait,
    {
        let _ = Inquiry::delete_by_id(id).exec(db).await?;
        Ok(())
    }
}

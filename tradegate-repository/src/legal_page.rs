use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryFilter, QueryOrder, SqlErr,
};
use tradegate_error::{storage::StorageError, StorageResult};
use tradegate_models::{
    domain::prelude::{NewLegalPage, UpdateLegalPage},
    entities::prelude::{LegalPage, LegalPageColumn, LegalPageModel},
    enums::legal::LegalKey,
};

pub struct LegalPageRepository;

impl LegalPageRepository {
    pub async fn create<C>(db: &C, page: NewLegalPage) -> StorageResult<LegalPageModel>
    where
        C: ConnectionTrait,
    {
        page.into_active_model()
            .insert(db)
            .await
            .map_err(map_key_conflict)
    }

    pub async fn update<C>(db: &C, page: UpdateLegalPage) -> StorageResult<LegalPageModel>
    where
        C: ConnectionTrait,
    {
        match page.into_active_model().update(db).await {
            Ok(model) => Ok(model),
            Err(DbErr::RecordNotUpdated) => Err(StorageError::EntityNotFound("legal_page".into())),
            Err(e) => Err(map_key_conflict(e)),
        }
    }

    pub async fn delete<C>(db: &C, id: i32) -> StorageResult<()>
    where
        C: ConnectionTrait,
    {
        let _ = LegalPage::delete_by_id(id).exec(db).await?;
        Ok(())
    }

    /// All pages, ordered by key for stable listings and the sitemap.
    pub async fn find_all<C>(db: &C) -> StorageResult<Vec<LegalPageModel>>
    where
        C: ConnectionTrait,
    {
        Ok(LegalPage::find()
            .order_by_asc(LegalPageColumn::Key)
            .all(db)
            .await?)
    }

    /// Exact-match lookup; an absent key is a not-found condition upstream.
    pub async fn find_by_key<C>(db: &C, key: LegalKey) -> StorageResult<Option<LegalPageModel>>
    where
        C: ConnectionTrait,
    {
        Ok(LegalPage::find()
            .filter(LegalPageColumn::Key.eq(key))
            .one(db)
            .await?)
    }

    pub async fn find_by_id<C>(db: &C, id: i32) -> StorageResult<Option<LegalPageModel>>
    where
        C: ConnectionTrait,
    {
        Ok(LegalPage::find_by_id(id).one(db).await?)
    }

    /// Whether a row with this key exists, optionally excluding the row
    /// being updated.
    pub async fn exists_by_key_excluding<C>(
        db: &C,
        key: LegalKey,
        exclude_id: Option<i32>,
    ) -> StorageResult<bool>
    where
        C: ConnectionTrait,
    {
        let mut query = LegalPage::find().filter(LegalPageColumn::Key.eq(key));
        if let Some(id) = exclude_id {
            query = query.filter(LegalPageColumn::Id.ne(id));
        }
        Ok(query.count(db).await? > 0)
    }
}

/// Writes that lose the race against the unique key index surface as the
/// field-scoped conflict, not a generic database error.
fn map_key_conflict(e: DbErr) -> StorageError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => StorageError::IntegrityConflict {
            field: "key".into(),
            message: "This legal page key already exists. Please edit the existing page.".into(),
        },
        _ => e.into(),
    }
}

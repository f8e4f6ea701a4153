use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryFilter, QueryOrder, SqlErr,
};
use tradegate_error::{storage::StorageError, StorageResult};
use tradegate_models::{
    domain::prelude::{NewNavigationItem, UpdateNavigationItem},
    entities::prelude::{NavigationItem, NavigationItemColumn, NavigationItemModel},
};

pub struct NavigationRepository;

impl NavigationRepository {
    pub async fn create<C>(db: &C, item: NewNavigationItem) -> StorageResult<NavigationItemModel>
    where
        C: ConnectionTrait,
    {
        item.into_active_model()
            .insert(db)
            .await
            .map_err(map_cta_conflict)
    }

    pub async fn update<C>(db: &C, item: UpdateNavigationItem) -> StorageResult<NavigationItemModel>
    where
        C: ConnectionTrait,
    {
        match item.into_active_model().update(db).await {
            Ok(model) => Ok(model),
            Err(DbErr::RecordNotUpdated) => {
                Err(StorageError::EntityNotFound("navigation_item".into()))
            }
            Err(e) => Err(map_cta_conflict(e)),
        }
    }

    pub async fn delete<C>(db: &C, id: i32) -> StorageResult<()>
    where
        C: ConnectionTrait,
    {
        let _ = NavigationItem::delete_by_id(id).exec(db).await?;
        Ok(())
    }

    pub async fn find_all<C>(db: &C) -> StorageResult<Vec<NavigationItemModel>>
    where
        C: ConnectionTrait,
    {
        Ok(NavigationItem::find()
            .order_by_asc(NavigationItemColumn::Order)
            .order_by_asc(NavigationItemColumn::Label)
            .all(db)
            .await?)
    }

    /// Visible menu entries ordered `(order, label)`.
    pub async fn find_visible<C>(db: &C) -> StorageResult<Vec<NavigationItemModel>>
    where
        C: ConnectionTrait,
    {
        Ok(NavigationItem::find()
            .filter(NavigationItemColumn::IsVisible.eq(true))
            .order_by_asc(NavigationItemColumn::Order)
            .order_by_asc(NavigationItemColumn::Label)
            .all(db)
            .await?)
    }

    /// The CTA entry within the visible set, if any.
    pub async fn find_visible_cta<C>(db: &C) -> StorageResult<Option<NavigationItemModel>>
    where
        C: ConnectionTrait,
    {
        Ok(NavigationItem::find()
            .filter(NavigationItemColumn::IsVisible.eq(true))
            .filter(NavigationItemColumn::IsCta.eq(true))
            .order_by_asc(NavigationItemColumn::Order)
            .one(db)
            .await?)
    }

    pub async fn find_by_id<C>(db: &C, id: i32) -> StorageResult<Option<NavigationItemModel>>
    where
        C: ConnectionTrait,
    {
        Ok(NavigationItem::find_by_id(id).one(db).await?)
    }

    /// Whether another row already carries the CTA flag.
    ///
    /// `exclude_id` skips the row being updated so re-saving the current CTA
    /// item does not trip its own invariant.
    pub async fn exists_cta_excluding<C>(db: &C, exclude_id: Option<i32>) -> StorageResult<bool>
    where
        C: ConnectionTrait,
    {
        let mut query = NavigationItem::find().filter(NavigationItemColumn::IsCta.eq(true));
        if let Some(id) = exclude_id {
            query = query.filter(NavigationItemColumn::Id.ne(id));
        }
        Ok(query.count(db).await? > 0)
    }
}

/// A write that loses the race against the partial unique index still comes
/// back as the field-scoped conflict, not a generic database error.
fn map_cta_conflict(e: DbErr) -> StorageError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => StorageError::IntegrityConflict {
            field: "is_cta".into(),
            message: "Only one navigation item can be the call-to-action at a time".into(),
        },
        _ => e.into(),
    }
}

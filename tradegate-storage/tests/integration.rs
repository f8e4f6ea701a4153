use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectOptions, Database, EntityTrait, PaginatorTrait,
    QueryFilter, Set,
};
use tradegate_models::{
    constants::SETTINGS_SINGLETON_ID,
    entities::prelude::{
        NavigationItem, NavigationItemActiveModel, NavigationItemColumn, SiteSettings,
    },
    enums::navigation::NavKind,
};
use tradegate_storage::{Migrator, MigratorTrait};

async fn fresh_db() -> sea_orm::DatabaseConnection {
    // A single pooled connection keeps every statement on the same
    // in-memory database.
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1);
    let db = Database::connect(opts).await.expect("in-memory sqlite");
    Migrator::up(&db, None).await.expect("migrations apply");
    db
}

#[tokio::test]
async fn migration_seeds_settings_singleton() {
    let db = fresh_db().await;

    let row = SiteSettings::find_by_id(SETTINGS_SINGLETON_ID)
        .one(&db)
        .await
        .unwrap()
        .expect("settings row seeded");
    assert_eq!(row.site_name, "TradeGate Consultants");
    assert!(row.created_at.is_some());

    let count = SiteSettings::find().count(&db).await.unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn migration_seeds_default_navigation_with_one_cta() {
    let db = fresh_db().await;

    let ctas = NavigationItem::find()
        .filter(NavigationItemColumn::IsCta.eq(true))
        .count(&db)
        .await
        .unwrap();
    assert_eq!(ctas, 1);

    let visible = NavigationItem::find()
        .filter(NavigationItemColumn::IsVisible.eq(true))
        .count(&db)
        .await
        .unwrap();
    assert_eq!(visible, 4);
}

#[tokio::test]
async fn partial_index_rejects_second_cta_row() {
    let db = fresh_db().await;

    let second_cta = NavigationItemActiveModel {
        label: Set("Book a call".into()),
        kind: Set(NavKind::External),
        external_url: Set("https://cal.example/tradegate".into()),
        is_cta: Set(true),
        ..Default::default()
    };

    let result = second_cta.insert(&db).await;
    assert!(result.is_err(), "unique partial index must reject a second CTA");
}

#[tokio::test]
async fn migration_is_idempotent() {
    let db = fresh_db().await;
    Migrator::up(&db, None).await.expect("re-running is a no-op");
}

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tradegate_repository::{
    IndustryRepository, InquiryRepository, LegalPageRepository, NavigationRepository,
    ServiceRepository, SiteSettingsRepository,
};
use tradegate_models::{
    domain::prelude::{
        NewIndustry, NewInquiry, NewLegalPage, NewNavigationItem, NewService, UpdateNavigationItem,
    },
    enums::{legal::LegalKey, navigation::NavKind},
};
use tradegate_storage::{Migrator, MigratorTrait};

async fn fresh_db() -> DatabaseConnection {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1);
    let db = Database::connect(opts).await.expect("in-memory sqlite");
    Migrator::up(&db, None).await.expect("migrations apply");
    db
}

fn service(title: &str, order: i32, active: bool) -> NewService {
    NewService {
        title: title.into(),
        short_description: "desc".into(),
        icon: "Briefcase".into(),
        is_active: active,
        order,
    }
}

#[tokio::test]
async fn active_services_are_filtered_and_ordered() {
    let db = fresh_db().await;

    ServiceRepository::create(&db, service("Beta", 1, true))
        .await
        .unwrap();
    ServiceRepository::create(&db, service("Alpha", 1, true))
        .await
        .unwrap();
    ServiceRepository::create(&db, service("First", 0, true))
        .await
        .unwrap();
    ServiceRepository::create(&db, service("Hidden", 0, false))
        .await
        .unwrap();

    let active = ServiceRepository::find_active(&db).await.unwrap();
    let titles: Vec<&str> = active.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["First", "Alpha", "Beta"]);
    assert!(active.iter().all(|s| s.is_active));
}

#[tokio::test]
async fn active_industries_are_ordered_by_order_then_name() {
    let db = fresh_db().await;

    for (name, order, active) in [
        ("Machinery", 5, true),
        ("Agritech", 5, true),
        ("Textiles", 1, true),
        ("Dormant", 0, false),
    ] {
        IndustryRepository::create(
            &db,
            NewIndustry {
                name: name.into(),
                short_description: String::new(),
                is_active: active,
                order,
            },
        )
        .await
        .unwrap();
    }

    let active = IndustryRepository::find_active(&db).await.unwrap();
    let names: Vec<&str> = active.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Textiles", "Agritech", "Machinery"]);
}

#[tokio::test]
async fn visible_navigation_and_cta_lookup() {
    let db = fresh_db().await;

    // Seeded menu: three anchors plus the contact CTA.
    let visible = NavigationRepository::find_visible(&db).await.unwrap();
    assert_eq!(visible.len(), 4);

    let cta = NavigationRepository::find_visible_cta(&db)
        .await
        .unwrap()
        .expect("seeded CTA entry");
    assert!(cta.is_cta);
    assert_eq!(cta.kind, NavKind::Internal);

    // Hiding the CTA removes it from the visible lookup.
    NavigationRepository::update(
        &db,
        UpdateNavigationItem {
            id: cta.id,
            label: cta.label.clone(),
            kind: cta.kind,
            anchor: cta.anchor.clone(),
            url_name: cta.url_name.clone(),
            external_url: cta.external_url.clone(),
            is_visible: false,
            order: cta.order,
            is_cta: true,
        },
    )
    .await
    .unwrap();

    assert!(NavigationRepository::find_visible_cta(&db)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn cta_existence_check_excludes_the_row_itself() {
    let db = fresh_db().await;

    let cta = NavigationRepository::find_visible_cta(&db)
        .await
        .unwrap()
        .expect("seeded CTA entry");

    assert!(NavigationRepository::exists_cta_excluding(&db, None)
        .await
        .unwrap());
    assert!(
        !NavigationRepository::exists_cta_excluding(&db, Some(cta.id))
            .await
            .unwrap(),
        "the row being updated must not trip its own invariant"
    );
}

#[tokio::test]
async fn navigation_create_is_visible_in_ordered_listing() {
    let db = fresh_db().await;

    NavigationRepository::create(
        &db,
        NewNavigationItem {
            label: "Blog".into(),
            kind: NavKind::External,
            anchor: String::new(),
            url_name: String::new(),
            external_url: "https://blog.example".into(),
            is_visible: true,
            order: 35,
            is_cta: false,
        },
    )
    .await
    .unwrap();

    let labels: Vec<String> = NavigationRepository::find_visible(&db)
        .await
        .unwrap()
        .into_iter()
        .map(|i| i.label)
        .collect();
    assert_eq!(
        labels,
        vec!["Services", "Industries", "How we work", "Blog", "Contact us"]
    );
}

#[tokio::test]
async fn legal_page_key_lookup_and_duplicate_check() {
    let db = fresh_db().await;

    assert!(LegalPageRepository::find_by_key(&db, LegalKey::Impressum)
        .await
        .unwrap()
        .is_none());

    let page = LegalPageRepository::create(
        &db,
        NewLegalPage {
            key: LegalKey::Impressum,
            title: "Impressum".into(),
            content: "Angaben gem. §5 TMG, TradeGate Consultants.".into(),
            meta_title: String::new(),
            meta_description: String::new(),
        },
    )
    .await
    .unwrap();

    assert!(
        LegalPageRepository::exists_by_key_excluding(&db, LegalKey::Impressum, None)
            .await
            .unwrap()
    );
    assert!(
        !LegalPageRepository::exists_by_key_excluding(&db, LegalKey::Impressum, Some(page.id))
            .await
            .unwrap()
    );
    assert!(
        !LegalPageRepository::exists_by_key_excluding(&db, LegalKey::Datenschutz, None)
            .await
            .unwrap()
    );

    let found = LegalPageRepository::find_by_key(&db, LegalKey::Impressum)
        .await
        .unwrap()
        .expect("created page");
    assert_eq!(found.id, page.id);
}

#[tokio::test]
async fn inquiry_create_captures_defaults_and_metadata() {
    let db = fresh_db().await;

    let created = InquiryRepository::create(
        &db,
        NewInquiry {
            full_name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            subject: "Market entry".into(),
            message: "We want to enter the EU market.".into(),
            company_name: String::new(),
            website: String::new(),
            country: String::new(),
            service_interest: "scouting".into(),
            timeline: String::new(),
            budget_range: String::new(),
            contact_method: "email".into(),
            phone: String::new(),
            consent: true,
            ip_address: Some("203.0.113.7".into()),
            user_agent: "integration-test".into(),
        },
    )
    .await
    .unwrap();

    assert!(!created.is_handled);
    assert!(created.created_at.is_some());
    assert_eq!(created.ip_address.as_deref(), Some("203.0.113.7"));
    assert_eq!(created.user_agent, "integration-test");

    let handled = InquiryRepository::set_handled(&db, created.id, true)
        .await
        .unwrap();
    assert!(handled.is_handled);
}

#[tokio::test]
async fn settings_update_round_trips() {
    let db = fresh_db().await;

    let current = SiteSettingsRepository::get(&db)
        .await
        .unwrap()
        .expect("seeded settings row");
    assert_eq!(current.site_name, "TradeGate Consultants");
}

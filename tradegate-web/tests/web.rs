use actix_web::{
    http::{header, StatusCode},
    middleware::NormalizePath,
    test,
    web::Data,
    App,
};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use serde_json::json;
use tradegate_models::{
    domain::prelude::{InquiryForm, NewLegalPage},
    enums::legal::LegalKey,
    settings::{Inner, Mail, MailEncryption, Settings, Web},
};
use tradegate_repository::{InquiryRepository, LegalPageRepository};
use tradegate_storage::{Migrator, MigratorTrait};
use tradegate_web::{configure_site, AppState};

const ADMIN_TOKEN: &str = "test-admin-token";

async fn fresh_db() -> DatabaseConnection {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1);
    let db = Database::connect(opts).await.expect("in-memory sqlite");
    Migrator::up(&db, None).await.expect("migrations apply");
    db
}

fn test_settings(mail: Mail) -> Settings {
    Settings::from_inner(Inner {
        web: Web {
            admin_token: ADMIN_TOKEN.into(),
            templates_dir: format!("{}/templates", env!("CARGO_MANIFEST_DIR")),
            ..Default::default()
        },
        mail,
        ..Default::default()
    })
}

async fn test_state(mail: Mail) -> Data<AppState> {
    let db = fresh_db().await;
    let state = AppState::build(test_settings(mail), db).expect("state builds");
    Data::new(state)
}

/// A mail section pointing at a closed port, so every send fails fast.
fn failing_mail() -> Mail {
    Mail {
        enabled: true,
        host: "127.0.0.1".into(),
        port: 1,
        encryption: MailEncryption::None,
        timeout_ms: 500,
        ..Default::default()
    }
}

fn valid_form() -> InquiryForm {
    InquiryForm {
        full_name: "Jane Doe".into(),
        email: "jane@example.com".into(),
        subject: "Market entry".into(),
        message: "We want to enter the EU market next spring.".into(),
        service_interest: "scouting".into(),
        contact_method: "email".into(),
        consent: Some("true".into()),
        ..Default::default()
    }
}

macro_rules! init_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .wrap(NormalizePath::trim())
                .configure(configure_site($state.clone())),
        )
        .await
    };
}

#[actix_web::test]
async fn health_returns_ok() {
    let state = test_state(Mail::default()).await;
    let app = init_app!(state);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    assert_eq!(&body[..], b"ok\n");
}

#[actix_web::test]
async fn robots_points_at_sitemap_and_blocks_admin() {
    let state = test_state(Mail::default()).await;
    let app = init_app!(state);

    let body =
        test::call_and_read_body(&app, test::TestRequest::get().uri("/robots.txt").to_request())
            .await;
    let text = String::from_utf8(body.to_vec()).unwrap();
    assert!(text.contains("Disallow: /admin/"));
    assert!(text.contains("Sitemap: "));
    assert!(text.contains("/sitemap.xml"));
}

#[actix_web::test]
async fn sitemap_lists_static_pages_and_legal_pages() {
    let state = test_state(Mail::default()).await;

    LegalPageRepository::create(
        &state.db,
        NewLegalPage {
            key: LegalKey::Impressum,
            title: "Impressum".into(),
            content: "Angaben gem. §5 TMG, TradeGate Consultants GmbH.".into(),
            meta_title: String::new(),
            meta_description: String::new(),
        },
    )
    .await
    .unwrap();

    let app = init_app!(state);
    let body =
        test::call_and_read_body(&app, test::TestRequest::get().uri("/sitemap.xml").to_request())
            .await;
    let xml = String::from_utf8(body.to_vec()).unwrap();

    for path in ["/</loc>", "/about/</loc>", "/faq/</loc>", "/contact/</loc>"] {
        assert!(xml.contains(path), "sitemap missing {path}: {xml}");
    }
    assert!(xml.contains("/legal/impressum/</loc>"));
    assert!(xml.contains("<lastmod>"));
}

#[actix_web::test]
async fn homepage_renders_with_seeded_settings() {
    let state = test_state(Mail::default()).await;
    let app = init_app!(state);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains("Cross-border growth with clarity."));
    assert!(html.contains("TradeGate Consultants"));
}

#[actix_web::test]
async fn unknown_legal_page_is_not_found() {
    let state = test_state(Mail::default()).await;
    let app = init_app!(state);

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/legal/doesnotexist/").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn seeded_legal_page_renders() {
    let state = test_state(Mail::default()).await;

    LegalPageRepository::create(
        &state.db,
        NewLegalPage {
            key: LegalKey::Impressum,
            title: "Impressum".into(),
            content: "Angaben gem. §5 TMG, TradeGate Consultants GmbH.".into(),
            meta_title: String::new(),
            meta_description: String::new(),
        },
    )
    .await
    .unwrap();

    let app = init_app!(state);
    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/legal/impressum/").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let html = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(html.contains("Angaben gem."));
}

#[actix_web::test]
async fn contact_form_renders() {
    let state = test_state(Mail::default()).await;
    let app = init_app!(state);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/contact/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let html = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(html.contains("name=\"website_url\""), "honeypot present");
    assert!(html.contains("Trade fair &amp; event representation"));
}

#[actix_web::test]
async fn valid_submission_persists_and_redirects() {
    let state = test_state(Mail::default()).await;
    let app = init_app!(state);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/contact/")
            .insert_header((header::USER_AGENT, "webtest/1.0"))
            .set_form(valid_form())
            .to_request(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let location = resp
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap();
    assert_eq!(location, "/contact/?sent=1");

    let rows = InquiryRepository::find_all(&state.db).await.unwrap();
    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row.full_name, "Jane Doe");
    assert!(!row.is_handled);
    assert!(row.created_at.is_some());
    assert_eq!(row.user_agent, "webtest/1.0");
}

#[actix_web::test]
async fn honeypot_submission_creates_no_row() {
    let state = test_state(Mail::default()).await;
    let app = init_app!(state);

    let mut form = valid_form();
    form.website_url = "http://spam.example".into();

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/contact/")
            .set_form(form)
            .to_request(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let html = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(html.contains("Spam detected."));

    assert!(InquiryRepository::find_all(&state.db)
        .await
        .unwrap()
        .is_empty());
}

#[actix_web::test]
async fn short_message_creates_no_row() {
    let state = test_state(Mail::default()).await;
    let app = init_app!(state);

    let mut form = valid_form();
    form.message = "too short".into();

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/contact/")
            .set_form(form)
            .to_request(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let html = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(html.contains("at least 10 characters"));

    assert!(InquiryRepository::find_all(&state.db)
        .await
        .unwrap()
        .is_empty());
}

#[actix_web::test]
async fn phone_contact_without_number_keeps_entered_values() {
    let state = test_state(Mail::default()).await;
    let app = init_app!(state);

    let mut form = valid_form();
    form.contact_method = "phone".into();
    form.phone = String::new();

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/contact/")
            .set_form(form)
            .to_request(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let html = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(html.contains("Please add a phone/WhatsApp number"));
    // Entered values survive the re-render.
    assert!(html.contains("value=\"Jane Doe\""));
    assert!(html.contains("value=\"jane@example.com\""));

    assert!(InquiryRepository::find_all(&state.db)
        .await
        .unwrap()
        .is_empty());
}

#[actix_web::test]
async fn notification_failure_keeps_row_and_warns() {
    let state = test_state(failing_mail()).await;
    let app = init_app!(state);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/contact/")
            .set_form(valid_form())
            .to_request(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let location = resp
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap();
    assert_eq!(location, "/contact/?sent=1&notice=mail");

    // The inquiry survives the transport failure.
    assert_eq!(InquiryRepository::find_all(&state.db).await.unwrap().len(), 1);
}

#[actix_web::test]
async fn admin_api_requires_token() {
    let state = test_state(Mail::default()).await;
    let app = init_app!(state);

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/admin/api/settings").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/admin/api/settings")
            .insert_header((header::AUTHORIZATION, "Bearer wrong"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/admin/api/settings")
            .insert_header((header::AUTHORIZATION, format!("Bearer {ADMIN_TOKEN}")))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn duplicate_legal_page_key_is_rejected_naming_the_field() {
    let state = test_state(Mail::default()).await;
    let app = init_app!(state);

    let payload = json!({
        "key": "impressum",
        "title": "Impressum",
        "content": "Angaben gem. §5 TMG, TradeGate Consultants GmbH."
    });

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/admin/api/legal")
            .insert_header((header::AUTHORIZATION, format!("Bearer {ADMIN_TOKEN}")))
            .set_json(&payload)
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/admin/api/legal")
            .insert_header((header::AUTHORIZATION, format!("Bearer {ADMIN_TOKEN}")))
            .set_json(&payload)
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["field"], "key");

    // A unique key from the allowed enumeration still works.
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/admin/api/legal")
            .insert_header((header::AUTHORIZATION, format!("Bearer {ADMIN_TOKEN}")))
            .set_json(&json!({
                "key": "datenschutz",
                "title": "Datenschutz",
                "content": "Hinweise zum Datenschutz nach Art. 13 DSGVO."
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn second_cta_is_rejected_naming_is_cta_but_same_row_update_passes() {
    let state = test_state(Mail::default()).await;
    let app = init_app!(state);

    // Seeded menu already contains a CTA; a second one must be rejected.
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/admin/api/navigation")
            .insert_header((header::AUTHORIZATION, format!("Bearer {ADMIN_TOKEN}")))
            .set_json(&json!({
                "label": "Book a call",
                "kind": "external",
                "externalUrl": "https://cal.example/tradegate",
                "isCta": true
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["field"], "is_cta");

    // Re-saving the existing CTA row keeps the flag without tripping the rule.
    let list = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/admin/api/navigation")
            .insert_header((header::AUTHORIZATION, format!("Bearer {ADMIN_TOKEN}")))
            .to_request(),
    )
    .await;
    let list: serde_json::Value = test::read_body_json(list).await;
    let cta = list["data"]
        .as_array()
        .unwrap()
        .iter()
        .find(|item| item["is_cta"] == true)
        .expect("seeded CTA entry")
        .clone();

    let resp = test::call_service(
        &app,
        test::TestRequest::put()
            .uri("/admin/api/navigation")
            .insert_header((header::AUTHORIZATION, format!("Bearer {ADMIN_TOKEN}")))
            .set_json(&json!({
                "id": cta["id"],
                "label": "Talk to us",
                "kind": "internal",
                "urlName": "contact",
                "isCta": true
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn anchor_items_must_use_known_sections() {
    let state = test_state(Mail::default()).await;
    let app = init_app!(state);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/admin/api/navigation")
            .insert_header((header::AUTHORIZATION, format!("Bearer {ADMIN_TOKEN}")))
            .set_json(&json!({
                "label": "Pricing",
                "kind": "anchor",
                "anchor": "pricing"
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["field"], "anchor");
}

//! sitemap.xml generation from two feeds: the named static pages and every
//! legal page row (with its update timestamp as lastmod).

use crate::{pages::context::request_base, AppState};
use actix_web::{web, HttpRequest, HttpResponse};
use tradegate_error::WebResult;
use tradegate_models::constants::STATIC_PAGES;
use tradegate_repository::LegalPageRepository;

pub fn configure_sitemap_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/sitemap.xml", web::get().to(sitemap_xml));
}

async fn sitemap_xml(req: HttpRequest, state: web::Data<AppState>) -> WebResult<HttpResponse> {
    let base = request_base(&state, &req);

    let mut entries = String::new();
    for (_, path) in STATIC_PAGES {
        push_url(&mut entries, &format!("{base}{path}"), None);
    }

    for page in LegalPageRepository::find_all(&state.db).await? {
        let lastmod = page.updated_at.map(|ts| ts.format("%Y-%m-%d").to_string());
        push_url(
            &mut entries,
            &format!("{base}/legal/{}/", page.key),
            lastmod.as_deref(),
        );
    }

    let body = format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n{entries}</urlset>\n"
    );

    Ok(HttpResponse::Ok()
        .content_type("application/xml; charset=utf-8")
        .body(body))
}

fn push_url(entries: &mut String, loc: &str, lastmod: Option<&str>) {
    entries.push_str("  <url>\n");
    entries.push_str(&format!("    <loc>{}</loc>\n", escape_xml(loc)));
    if let Some(lastmod) = lastmod {
        entries.push_str(&format!("    <lastmod>{lastmod}</lastmod>\n"));
    }
    entries.push_str("  </url>\n");
}

fn escape_xml(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

//! robots.txt generation.
//!
//! Allows normal crawling, discourages indexing of the admin surface and
//! points crawlers at the sitemap.

use crate::{pages::context::request_base, AppState};
use actix_web::{web, HttpRequest, HttpResponse};

pub fn configure_robots_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/robots.txt", web::get().to(robots_txt));
}

async fn robots_txt(req: HttpRequest, state: web::Data<AppState>) -> HttpResponse {
    let sitemap_url = format!("{}/sitemap.xml", request_base(&state, &req));

    let lines = [
        "User-agent: *".to_owned(),
        "Allow: /".to_owned(),
        "Disallow: /admin/".to_owned(),
        format!("Sitemap: {sitemap_url}"),
    ];

    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(lines.join("\n") + "\n")
}

//! Public root routes that are not HTML pages.
//!
//! These must live at the root (crawlers expect `/robots.txt` and
//! `/sitemap.xml` at fixed locations), so they are registered outside the
//! admin scope.

mod health;
mod robots;
mod sitemap;

use actix_web::web;

/// Configure all public root routes.
#[inline]
pub fn configure_public_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_health_routes)
        .configure(robots::configure_robots_routes)
        .configure(sitemap::configure_sitemap_routes);
}

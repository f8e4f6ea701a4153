//! Admin content-management API routes.
//!
//! Mounted under the configured admin prefix and wrapped with the
//! [`crate::middleware::AdminAuth`] capability check.

mod industries;
mod inquiries;
mod legal;
mod navigation;
mod process_steps;
mod services;
mod settings;

use actix_web::web;

/// Configure all admin routes within the admin scope.
pub(crate) fn configure_admin_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope(settings::ROUTER_PREFIX).configure(settings::configure_routes))
        .service(web::scope(navigation::ROUTER_PREFIX).configure(navigation::configure_routes))
        .service(web::scope(services::ROUTER_PREFIX).configure(services::configure_routes))
        .service(web::scope(industries::ROUTER_PREFIX).configure(industries::configure_routes))
        .service(
            web::scope(process_steps::ROUTER_PREFIX).configure(process_steps::configure_routes),
        )
        .service(web::scope(legal::ROUTER_PREFIX).configure(legal::configure_routes))
        .service(web::scope(inquiries::ROUTER_PREFIX).configure(inquiries::configure_routes));
}

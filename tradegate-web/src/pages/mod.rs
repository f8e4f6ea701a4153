//! Server-rendered public pages.

mod about;
mod contact;
pub(crate) mod context;
mod faq;
mod home;
mod legal;

use actix_web::web;

/// Configure all public HTML routes.
pub(crate) fn configure_page_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(home::home))
        .route("/about", web::get().to(about::about))
        .route("/faq", web::get().to(faq::faq))
        .route("/contact", web::get().to(contact::contact_form))
        .route("/contact", web::post().to(contact::contact_submit))
        .route("/legal/{key}", web::get().to(legal::legal_page));
}

//! Site settings management endpoints.
//!
//! The settings row is a singleton: it can be read and updated, never
//! created or deleted through the API.

use crate::AppState;
use actix_web::web;
use actix_web_validator::Json;
use tradegate_error::{web::WebError, WebResult};
use tradegate_models::{
    domain::prelude::UpdateSiteSettings, entities::prelude::SiteSettingsModel, web::WebResponse,
};
use tradegate_repository::SiteSettingsRepository;

pub(super) const ROUTER_PREFIX: &str = "/settings";

pub(crate) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(get))
        .route("", web::put().to(update));
}

async fn get(state: web::Data<AppState>) -> WebResult<WebResponse<SiteSettingsModel>> {
    let settings = SiteSettingsRepository::get(&state.db)
        .await?
        .ok_or_else(|| WebError::NotFound("site_settings".into()))?;
    Ok(WebResponse::ok(settings))
}

async fn update(
    payload: Json<UpdateSiteSettings>,
    state: web::Data<AppState>,
) -> WebResult<WebResponse<SiteSettingsModel>> {
    let updated = SiteSettingsRepository::update(&state.db, payload.into_inner()).await?;
    Ok(WebResponse::ok(updated))
}

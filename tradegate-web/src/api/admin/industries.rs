//! Industry management endpoints.

use crate::AppState;
use actix_web::web;
use actix_web_validator::{Json, Path};
use tradegate_error::{web::WebError, WebResult};
use tradegate_models::{
    domain::prelude::{NewIndustry, PathId, UpdateIndustry},
    entities::prelude::IndustryModel,
    enums::common::EntityType,
    web::WebResponse,
};
use tradegate_repository::IndustryRepository;

pub(super) const ROUTER_PREFIX: &str = "/industries";

pub(crate) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(list))
        .route("", web::post().to(create))
        .route("", web::put().to(update))
        .route("/detail/{id}", web::get().to(get_by_id))
        .route("/{id}", web::delete().to(delete));
}

async fn list(state: web::Data<AppState>) -> WebResult<WebResponse<Vec<IndustryModel>>> {
    Ok(WebResponse::ok(
        IndustryRepository::find_all(&state.db).await?,
    ))
}

async fn get_by_id(
    params: Path<PathId>,
    state: web::Data<AppState>,
) -> WebResult<WebResponse<IndustryModel>> {
    Ok(WebResponse::ok(
        IndustryRepository::find_by_id(&state.db, params.id)
            .await?
            .ok_or(WebError::NotFound(EntityType::Industry.to_string()))?,
    ))
}

async fn create(
    payload: Json<NewIndustry>,
    state: web::Data<AppState>,
) -> WebResult<WebResponse<IndustryModel>> {
    Ok(WebResponse::ok(
        IndustryRepository::create(&state.db, payload.into_inner()).await?,
    ))
}

async fn update(
    payload: Json<UpdateIndustry>,
    state: web::Data<AppState>,
) -> WebResult<WebResponse<IndustryModel>> {
    Ok(WebResponse::ok(
        IndustryRepository::update(&state.db, payload.into_inner()).await?,
    ))
}

async fn delete(params: Path<PathId>, state: web::Data<AppState>) -> WebResult<WebResponse<bool>> {
    IndustryRepository::delete(&state.db, params.id).await?;
    Ok(WebResponse::ok(true))
}

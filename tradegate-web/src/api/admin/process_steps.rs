//! Process step management endpoints.

use crate::AppState;
use actix_web::web;
use actix_web_validator::{Json, Path};
use tradegate_error::{web::WebError, WebResult};
use tradegate_models::{
    domain::prelude::{NewProcessStep, PathId, UpdateProcessStep},
    entities::prelude::ProcessStepModel,
    enums::common::EntityType,
    web::WebResponse,
};
use tradegate_repository::ProcessStepRepository;

pub(super) const ROUTER_PREFIX: &str = "/process-steps";

pub(crate) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(list))
        .route("", web::post().to(create))
        .route("", web::put().to(update))
        .route("/detail/{id}", web::get().to(get_by_id))
        .route("/{id}", web::delete().to(delete));
}

async fn list(state: web::Data<AppState>) -> WebResult<WebResponse<Vec<ProcessStepModel>>> {
    Ok(WebResponse::ok(
        ProcessStepRepository::find_all(&state.db).await?,
    ))
}

async fn get_by_id(
    params: Path<PathId>,
    state: web::Data<AppState>,
) -> WebResult<WebResponse<ProcessStepModel>> {
    Ok(WebResponse::ok(
        ProcessStepRepository::find_by_id(&state.db, params.id)
            .await?
            .ok_or(WebError::NotFound(EntityType::ProcessStep.to_string()))?,
    ))
}

async fn create(
    payload: Json<NewProcessStep>,
    state: web::Data<AppState>,
) -> WebResult<WebResponse<ProcessStepModel>> {
    Ok(WebResponse::ok(
        ProcessStepRepository::create(&state.db, payload.into_inner()).await?,
    ))
}

async fn update(
    payload: Json<UpdateProcessStep>,
    state: web::Data<AppState>,
) -> WebResult<WebResponse<ProcessStepModel>> {
    Ok(WebResponse::ok(
        ProcessStepRepository::update(&state.db, payload.into_inner()).await?,
    ))
}

async fn delete(params: Path<PathId>, state: web::Data<AppState>) -> WebResult<WebResponse<bool>> {
    ProcessStepRepository::delete(&state.db, params.id).await?;
    Ok(WebResponse::ok(true))
}

//! Legal page management endpoints.

use crate::AppState;
use actix_web::web;
use actix_web_validator::{Json, Path};
use sea_orm::IntoActiveModel;
use tradegate_error::{web::WebError, WebResult};
use tradegate_models::{
    domain::prelude::{NewLegalPage, PathId, UpdateLegalPage},
    entities::prelude::LegalPageModel,
    enums::common::{EntityType, Operation},
    web::WebResponse,
};
use tradegate_repository::LegalPageRepository;

pub(super) const ROUTER_PREFIX: &str = "/legal";

pub(crate) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(list))
        .route("", web::post().to(create))
        .route("", web::put().to(update))
        .route("/detail/{id}", web::get().to(get_by_id))
        .route("/{id}", web::delete().to(delete));
}

async fn list(state: web::Data<AppState>) -> WebResult<WebResponse<Vec<LegalPageModel>>> {
    Ok(WebResponse::ok(
        LegalPageRepository::find_all(&state.db).await?,
    ))
}

async fn get_by_id(
    params: Path<PathId>,
    state: web::Data<AppState>,
) -> WebResult<WebResponse<LegalPageModel>> {
    Ok(WebResponse::ok(
        LegalPageRepository::find_by_id(&state.db, params.id)
            .await?
            .ok_or(WebError::NotFound(EntityType::LegalPage.to_string()))?,
    ))
}

async fn create(
    payload: Json<NewLegalPage>,
    state: web::Data<AppState>,
) -> WebResult<WebResponse<LegalPageModel>> {
    let payload = payload.into_inner();
    state
        .validator
        .validate(
            &payload.clone().into_active_model(),
            Operation::Create,
            &state.db,
        )
        .await?;

    Ok(WebResponse::ok(
        LegalPageRepository::create(&state.db, payload).await?,
    ))
}

async fn update(
    payload: Json<UpdateLegalPage>,
    state: web::Data<AppState>,
) -> WebResult<WebResponse<LegalPageModel>> {
    let payload = payload.into_inner();
    state
        .validator
        .validate(
            &payload.clone().into_active_model(),
            Operation::Write,
            &state.db,
        )
        .await?;

    Ok(WebResponse::ok(
        LegalPageRepository::update(&state.db, payload).await?,
    ))
}

async fn delete(params: Path<PathId>, state: web::Data<AppState>) -> WebResult<WebResponse<bool>> {
    LegalPageRepository::delete(&state.db, params.id).await?;
    Ok(WebResponse::ok(true))
}

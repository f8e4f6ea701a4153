//! Navigation item management endpoints.

use crate::AppState;
use actix_web::web;
use actix_web_validator::{Json, Path};
use sea_orm::IntoActiveModel;
use tradegate_error::WebResult;
use tradegate_models::{
    domain::prelude::{NewNavigationItem, PathId, UpdateNavigationItem},
    entities::prelude::NavigationItemModel,
    enums::common::Operation,
    web::WebResponse,
};
use tradegate_repository::NavigationRepository;

pub(super) const ROUTER_PREFIX: &str = "/navigation";

pub(crate) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(list))
        .route("", web::post().to(create))
        .route("", web::put().to(update))
        .route("/{id}", web::delete().to(delete));
}

async fn list(state: web::Data<AppState>) -> WebResult<WebResponse<Vec<NavigationItemModel>>> {
    Ok(WebResponse::ok(
        NavigationRepository::find_all(&state.db).await?,
    ))
}

async fn create(
    payload: Json<NewNavigationItem>,
    state: web::Data<AppState>,
) -> WebResult<WebResponse<NavigationItemModel>> {
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
        NavigationRepository::create(&state.db, payload).await?,
    ))
}

async fn update(
    payload: Json<UpdateNavigationItem>,
    state: web::Data<AppState>,
) -> WebResult<WebResponse<NavigationItemModel>> {
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
        NavigationRepository::update(&state.db, payload).await?,
    ))
}

async fn delete(params: Path<PathId>, state: web::Data<AppState>) -> WebResult<WebResponse<bool>> {
    NavigationRepository::delete(&state.db, params.id).await?;
    Ok(WebResponse::ok(true))
}

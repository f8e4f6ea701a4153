//! Inquiry triage endpoints.

use crate::AppState;
use actix_web::web;
use actix_web_validator::{Json, Path};
use tradegate_error::{web::WebError, WebResult};
use tradegate_models::{
    domain::prelude::{ChangeHandledPayload, PathId},
    entities::prelude::InquiryModel,
    enums::common::EntityType,
    web::WebResponse,
};
use tradegate_repository::InquiryRepository;

pub(super) const ROUTER_PREFIX: &str = "/inquiries";

pub(crate) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(list))
        .route("/detail/{id}", web::get().to(get_by_id))
        .route("/change-handled", web::put().to(change_handled))
        .route("/{id}", web::delete().to(delete));
}

async fn list(state: web::Data<AppState>) -> WebResult<WebResponse<Vec<InquiryModel>>> {
    Ok(WebResponse::ok(
        InquiryRepository::find_all(&state.db).await?,
    ))
}

async fn get_by_id(
    params: Path<PathId>,
    state: web::Data<AppState>,
) -> WebResult<WebResponse<InquiryModel>> {
    Ok(WebResponse::ok(
        InquiryRepository::find_by_id(&state.db, params.id)
            .await?
            .ok_or(WebError::NotFound(EntityType::Inquiry.to_string()))?,
    ))
}

async fn change_handled(
    payload: Json<ChangeHandledPayload>,
    state: web::Data<AppState>,
) -> WebResult<WebResponse<InquiryModel>> {
    let payload = payload.into_inner();
    Ok(WebResponse::ok(
        InquiryRepository::set_handled(&state.db, payload.id, payload.is_handled).await?,
    ))
}

async fn delete(params: Path<PathId>, state: web::Data<AppState>) -> WebResult<WebResponse<bool>> {
    InquiryRepository::delete(&state.db, params.id).await?;
    Ok(WebResponse::ok(true))
}

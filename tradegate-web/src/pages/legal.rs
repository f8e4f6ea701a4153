use crate::{
    pages::context::{base_context, render_html, request_base, scaffold, PageMeta},
    AppState,
};
use actix_web::{web, HttpRequest, HttpResponse};
use std::str::FromStr;
use tradegate_error::{web::WebError, WebResult};
use tradegate_models::enums::legal::LegalKey;
use tradegate_repository::LegalPageRepository;

/// Render a legal page by its key. Unknown slugs and missing rows are both
/// not-found conditions.
pub async fn legal_page(
    req: HttpRequest,
    path: web::Path<String>,
    state: web::Data<AppState>,
) -> WebResult<HttpResponse> {
    let slug = path.into_inner();
    let key =
        LegalKey::from_str(&slug).map_err(|_| WebError::NotFound(format!("legal page {slug}")))?;

    let page = LegalPageRepository::find_by_key(&state.db, key)
        .await?
        .ok_or_else(|| WebError::NotFound(format!("legal page {slug}")))?;

    let scaffold = scaffold(&state.db).await?;

    let meta = PageMeta {
        title: if page.meta_title.is_empty() {
            page.title.clone()
        } else {
            page.meta_title.clone()
        },
        description: if page.meta_description.is_empty() {
            scaffold.site.meta_description.clone()
        } else {
            page.meta_description.clone()
        },
        og_image: scaffold.site.og_image_url.clone(),
        canonical: format!("{}/legal/{}/", request_base(&state, &req), key),
    };

    let mut ctx = base_context(&scaffold, &meta);
    ctx.insert("page", &page);

    render_html(&state, "legal_page.html", &ctx)
}

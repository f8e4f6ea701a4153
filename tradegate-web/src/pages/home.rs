use crate::{
    pages::context::{base_context, render_html, request_base, scaffold, PageMeta},
    AppState,
};
use actix_web::{web, HttpRequest, HttpResponse};
use tradegate_error::WebResult;
use tradegate_repository::{IndustryRepository, ProcessStepRepository, ServiceRepository};

/// Homepage: hero, active services, active industries and the process steps.
pub async fn home(req: HttpRequest, state: web::Data<AppState>) -> WebResult<HttpResponse> {
    let scaffold = scaffold(&state.db).await?;

    let services = ServiceRepository::find_active(&state.db).await?;
    let industries = IndustryRepository::find_active(&state.db).await?;
    let steps = ProcessStepRepository::find_all(&state.db).await?;

    let meta = PageMeta {
        title: if scaffold.site.meta_title.is_empty() {
            scaffold.site.site_name.clone()
        } else {
            scaffold.site.meta_title.clone()
        },
        description: scaffold.site.meta_description.clone(),
        og_image: scaffold.site.og_image_url.clone(),
        canonical: format!("{}/", request_base(&state, &req)),
    };

    let mut ctx = base_context(&scaffold, &meta);
    ctx.insert("services", &services);
    ctx.insert("industries", &industries);
    ctx.insert("steps", &steps);

    render_html(&state, "home.html", &ctx)
}

use crate::{
    pages::context::{base_context, render_html, request_base, scaffold, PageMeta},
    AppState,
};
use actix_web::{web, HttpRequest, HttpResponse};
use tradegate_error::WebResult;

pub async fn about(req: HttpRequest, state: web::Data<AppState>) -> WebResult<HttpResponse> {
    let scaffold = scaffold(&state.db).await?;

    let meta = PageMeta {
        title: "About".into(),
        description: format!(
            "Learn about {} and our EU business representation services.",
            scaffold.site.site_name
        ),
        og_image: scaffold.site.og_image_url.clone(),
        canonical: format!("{}/about/", request_base(&state, &req)),
    };

    let ctx = base_context(&scaffold, &meta);
    render_html(&state, "about.html", &ctx)
}

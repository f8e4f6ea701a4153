use crate::{
    pages::context::{base_context, render_html, request_base, scaffold, PageMeta},
    AppState,
};
use actix_web::{web, HttpRequest, HttpResponse};
use tradegate_error::WebResult;

pub async fn faq(req: HttpRequest, state: web::Data<AppState>) -> WebResult<HttpResponse> {
    let scaffold = scaffold(&state.db).await?;

    let meta = PageMeta {
        title: "FAQs".into(),
        description: format!(
            "Frequently asked questions about {}: EU representation, trade fairs, market entry, and deliverables.",
            scaffold.site.site_name
        ),
        og_image: scaffold.site.og_image_url.clone(),
        canonical: format!("{}/faq/", request_base(&state, &req)),
    };

    let ctx = base_context(&scaffold, &meta);
    render_html(&state, "faq.html", &ctx)
}

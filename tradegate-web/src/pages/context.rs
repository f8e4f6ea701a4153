//! Shared scaffolding for page rendering: site context, navigation links
//! and page metadata.

use crate::AppState;
use actix_web::{HttpRequest, HttpResponse};
use sea_orm::DatabaseConnection;
use serde::Serialize;
use tradegate_error::WebResult;
use tradegate_models::{
    domain::prelude::SiteContext,
    entities::prelude::NavigationItemModel,
    enums::navigation::NavKind,
};
use tradegate_repository::{NavigationRepository, SiteSettingsRepository};

/// A resolved navigation entry ready for the template.
#[derive(Debug, Clone, Serialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
    pub is_cta: bool,
}

impl NavLink {
    fn from_model(item: &NavigationItemModel) -> Self {
        let href = match item.kind {
            NavKind::Anchor => format!("/#{}", item.anchor),
            NavKind::Internal => {
                if item.url_name == "home" {
                    "/".to_owned()
                } else {
                    format!("/{}/", item.url_name)
                }
            }
            NavKind::External => item.external_url.clone(),
        };
        Self {
            label: item.label.clone(),
            href,
            is_cta: item.is_cta,
        }
    }
}

/// SEO metadata block rendered into the page head.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub og_image: String,
    pub canonical: String,
}

/// Everything every page needs: settings view plus the visible menu.
pub struct Scaffold {
    pub site: SiteContext,
    pub nav_items: Vec<NavLink>,
    pub nav_cta: Option<NavLink>,
}

/// Load the scaffold from the content store.
pub async fn scaffold(db: &DatabaseConnection) -> WebResult<Scaffold> {
    let settings = SiteSettingsRepository::get(db).await?;
    let site = SiteContext::from_model(settings.as_ref());

    let visible = NavigationRepository::find_visible(db).await?;
    let nav_cta = visible
        .iter()
        .find(|item| item.is_cta)
        .map(NavLink::from_model);
    let nav_items = visible.iter().map(NavLink::from_model).collect();

    Ok(Scaffold {
        site,
        nav_items,
        nav_cta,
    })
}

/// Base template context from the scaffold and page metadata.
pub fn base_context(scaffold: &Scaffold, meta: &PageMeta) -> tera::Context {
    let mut ctx = tera::Context::new();
    ctx.insert("site", &scaffold.site);
    ctx.insert("site_name", &scaffold.site.site_name);
    ctx.insert("nav_items", &scaffold.nav_items);
    ctx.insert("nav_cta", &scaffold.nav_cta);
    ctx.insert("page_meta", meta);
    ctx
}

/// Origin for absolute URL building.
///
/// When the proxy trust flag is set the forwarded scheme/host win, so
/// canonical URLs come out as https behind a TLS-terminating proxy.
pub fn request_base(state: &AppState, req: &HttpRequest) -> String {
    if state.settings.web.trust_proxy_header {
        let info = req.connection_info();
        format!("{}://{}", info.scheme(), info.host())
    } else {
        state.settings.general.base_url_trimmed().to_owned()
    }
}

/// Client address honoring the proxy trust flag.
pub fn client_ip(state: &AppState, req: &HttpRequest) -> Option<String> {
    if state.settings.web.trust_proxy_header {
        req.connection_info()
            .realip_remote_addr()
            .map(|s| s.to_owned())
    } else {
        req.peer_addr().map(|addr| addr.ip().to_string())
    }
}

/// Render a template into an HTML response.
pub fn render_html(
    state: &AppState,
    template: &str,
    ctx: &tera::Context,
) -> WebResult<HttpResponse> {
    let body = state.templates.render(template, ctx)?;
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body))
}

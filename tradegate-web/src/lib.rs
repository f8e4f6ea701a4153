//! Web server module for the tradegate website.

mod api;
mod middleware;
mod pages;
pub mod validation;

use actix_web::{
    dev::{Server, ServerHandle},
    middleware::{Compress, DefaultHeaders, Logger, NormalizePath},
    web::{self, Data},
    App, HttpServer,
};
use middleware::AdminAuth;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tera::Tera;
use tokio::sync::Mutex;
use tradegate_common::Mailer;
use tradegate_error::{SiteError, SiteResult};
use tradegate_models::settings::Settings;
use tracing::{error, info, instrument};
use validation::{manager::ValidationManager, prelude::create_default_manager};

/// Shared application state
pub struct AppState {
    pub db: DatabaseConnection,
    pub settings: Settings,
    pub templates: Tera,
    pub mailer: Arc<Mailer>,
    pub validator: Arc<ValidationManager>,
}

impl AppState {
    /// Assemble the state: load templates, build the mailer and register the
    /// default write-time validators.
    pub fn build(settings: Settings, db: DatabaseConnection) -> SiteResult<Self> {
        let pattern = format!(
            "{}/**/*.html",
            settings.web.templates_dir.trim_end_matches('/')
        );
        let templates = Tera::new(&pattern)?;

        let mailer = Mailer::from_settings(&settings.mail)
            .map_err(|e| SiteError::InitializationError(format!("mail transport: {e}")))?;

        Ok(Self {
            db,
            settings,
            templates,
            mailer: Arc::new(mailer),
            validator: Arc::new(create_default_manager()),
        })
    }
}

/// Register every route of the site onto a service config.
///
/// Shared between the real server and the handler tests so both exercise the
/// identical routing table.
pub fn configure_site(state: Data<AppState>) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        let admin_prefix = state.settings.web.admin_prefix.clone();
        let admin_token = state.settings.web.admin_token.clone();

        cfg.app_data(state)
            // Root utility routes (health, robots, sitemap).
            .configure(api::configure_public_routes)
            // Admin JSON API behind the capability check.
            .service(
                web::scope(&admin_prefix)
                    .wrap(AdminAuth::new(admin_token))
                    .configure(api::configure_admin_routes),
            )
            // Public HTML pages.
            .configure(pages::configure_page_routes);
    }
}

/// SiteServer handles the web server initialization and management
#[derive(Clone)]
pub struct SiteServer {
    /// Server handle for graceful shutdown
    server: Arc<Mutex<Option<ServerHandle>>>,
}

impl SiteServer {
    /// Create and configure the HTTP server
    async fn create_server(settings: &Settings, db: DatabaseConnection) -> SiteResult<Server> {
        let state = AppState::build(settings.clone(), db)?;
        let data = Data::new(state);

        let addr = format!("{}:{}", settings.web.host, settings.web.port);
        let worker_count = settings.web.workers;
        let hsts = settings.web.hsts_header_value();

        let mut server = HttpServer::new(move || {
            // Security headers mirror a hardened reverse-proxy deployment;
            // HSTS only when configured.
            let mut headers = DefaultHeaders::new()
                .add(("X-Content-Type-Options", "nosniff"))
                .add(("X-Frame-Options", "DENY"))
                .add(("Referrer-Policy", "strict-origin-when-cross-origin"));
            if let Some(hsts) = &hsts {
                headers = headers.add(("Strict-Transport-Security", hsts.clone()));
            }

            App::new()
                .wrap(headers)
                .wrap(Logger::default())
                .wrap(Compress::default())
                .wrap(NormalizePath::trim())
                .configure(configure_site(data.clone()))
        });

        if worker_count > 0 {
            server = server.workers(worker_count);
        }

        // Bind HTTP server; TLS termination is the reverse proxy's job.
        let server = server
            .bind(&addr)
            .map_err(|e| SiteError::from(format!("Failed to bind HTTP server to {addr}: {e}")))?;

        Ok(server.run())
    }

    #[inline]
    #[instrument(name = "init-web-server", skip_all)]
    /// Initialize and start the web server
    pub async fn init(settings: &Settings, db: DatabaseConnection) -> SiteResult<Arc<Self>> {
        let server = Self::create_server(settings, db).await?;
        let server_handle = server.handle();

        info!(
            host = %settings.web.host,
            port = settings.web.port,
            "Web server started"
        );

        // Spawn server task
        tokio::spawn(async move {
            if let Err(e) = server.await {
                error!(error=%e, "Web server failed to start");
            }
        });

        let web_server = SiteServer {
            server: Arc::new(Mutex::new(Some(server_handle))),
        };

        Ok(Arc::new(web_server))
    }

    #[inline]
    #[instrument(name = "web-server-stop", skip_all)]
    /// Gracefully stop the web server
    pub async fn stop(&self) -> SiteResult<()> {
        info!("Stopping web server...");
        let mut server_guard = self.server.lock().await;
        if let Some(handle) = server_guard.take() {
            handle.stop(true).await;
        }
        info!("Web server stopped successfully");

        Ok(())
    }
}

use config::{Config, File};
use serde::{self, Deserialize};
use std::{ops::Deref, sync::Arc};
use tradegate_error::SiteResult;

use crate::constants::DATA_DIR;

#[derive(Debug, Clone)]
pub struct Settings(Arc<Inner>);

impl Deref for Settings {
    type Target = Inner;
    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl Settings {
    /// Wrap an already-built configuration, e.g. in tests or embedding.
    pub fn from_inner(inner: Inner) -> Self {
        Self(Arc::new(inner))
    }

    pub fn new(config_path: String) -> SiteResult<Self> {
        let builder = Config::builder()
            .add_source(File::with_name(config_path.as_str()).required(false))
            .add_source(
                config::Environment::with_prefix("TRADEGATE")
                    .separator("__")
                    .try_parsing(true),
            );
        let inner: Inner = builder.build()?.try_deserialize()?;
        Ok(Self(Arc::new(inner)))
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Inner {
    #[serde(default)]
    pub general: General,
    #[serde(default)]
    pub web: Web,
    #[serde(default)]
    pub db: Db,
    #[serde(default)]
    pub mail: Mail,
    #[serde(default)]
    pub log: Log,
}

#[derive(Debug, Clone, Deserialize)]
pub struct General {
    /// Absolute origin used when building canonical and sitemap URLs.
    #[serde(default = "General::base_url_default")]
    pub base_url: String,
    #[serde(default)]
    pub debug: bool,
}

impl Default for General {
    fn default() -> Self {
        General {
            base_url: General::base_url_default(),
            debug: false,
        }
    }
}

impl General {
    fn base_url_default() -> String {
        "http://127.0.0.1:8088".into()
    }

    /// Base URL without a trailing slash, ready for path concatenation.
    pub fn base_url_trimmed(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Web {
    #[serde(default = "Web::host_default")]
    pub host: String,
    #[serde(default = "Web::port_default")]
    pub port: u16,
    /// 0 means one worker per CPU (actix default).
    #[serde(default)]
    pub workers: usize,
    /// Mount point of the admin JSON API.
    #[serde(default = "Web::admin_prefix_default")]
    pub admin_prefix: String,
    /// Static bearer token for the admin API; empty disables the API.
    #[serde(default)]
    pub admin_token: String,
    /// Directory containing the tera templates.
    #[serde(default = "Web::templates_dir_default")]
    pub templates_dir: String,
    /// Trust `X-Forwarded-For` / `X-Forwarded-Proto` from the reverse proxy.
    #[serde(default = "Web::trust_proxy_header_default")]
    pub trust_proxy_header: bool,
    /// HSTS max-age in seconds; 0 disables the header.
    #[serde(default)]
    pub hsts_seconds: u64,
    #[serde(default)]
    pub hsts_include_subdomains: bool,
    #[serde(default)]
    pub hsts_preload: bool,
}

impl Default for Web {
    fn default() -> Self {
        Web {
            host: Web::host_default(),
            port: Web::port_default(),
            workers: 0,
            admin_prefix: Web::admin_prefix_default(),
            admin_token: String::new(),
            templates_dir: Web::templates_dir_default(),
            trust_proxy_header: Web::trust_proxy_header_default(),
            hsts_seconds: 0,
            hsts_include_subdomains: false,
            hsts_preload: false,
        }
    }
}

impl Web {
    fn host_default() -> String {
        "0.0.0.0".into()
    }

    fn port_default() -> u16 {
        8088
    }

    fn admin_prefix_default() -> String {
        "/admin/api".into()
    }

    fn templates_dir_default() -> String {
        "./tradegate-web/templates".into()
    }

    fn trust_proxy_header_default() -> bool {
        true
    }

    /// Render the Strict-Transport-Security header value, if enabled.
    pub fn hsts_header_value(&self) -> Option<String> {
        if self.hsts_seconds == 0 {
            return None;
        }
        let mut value = format!("max-age={}", self.hsts_seconds);
        if self.hsts_include_subdomains {
            value.push_str("; includeSubDomains");
        }
        if self.hsts_preload {
            value.push_str("; preload");
        }
        Some(value)
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Db {
    /// Full connection URL override; when unset the embedded SQLite file
    /// configuration below applies.
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub sqlite: Sqlite,
}

impl Db {
    /// Resolve the effective connection URL.
    pub fn effective_url(&self) -> String {
        match &self.url {
            Some(url) if !url.trim().is_empty() => url.clone(),
            _ => self.sqlite.to_url(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Sqlite {
    #[serde(default = "Sqlite::path_default")]
    pub path: String,
    #[serde(default = "Sqlite::timeout_default")]
    pub timeout: u64,
    #[serde(default = "Sqlite::idle_timeout_default")]
    pub idle_timeout: u64,
    #[serde(default = "Sqlite::max_lifetime_default")]
    pub max_lifetime: u64,
    #[serde(default = "Sqlite::max_connections_default")]
    pub max_connections: u32,
    #[serde(default = "Sqlite::auto_create_default")]
    pub auto_create: bool,
}

impl Default for Sqlite {
    fn default() -> Self {
        Sqlite {
            path: Sqlite::path_default(),
            timeout: Sqlite::timeout_default(),
            idle_timeout: Sqlite::idle_timeout_default(),
            max_lifetime: Sqlite::max_lifetime_default(),
            max_connections: Sqlite::max_connections_default(),
            auto_create: Sqlite::auto_create_default(),
        }
    }
}

impl Sqlite {
    fn path_default() -> String {
        "tradegate.db".into()
    }

    fn timeout_default() -> u64 {
        5000
    }

    fn idle_timeout_default() -> u64 {
        5000
    }

    fn max_lifetime_default() -> u64 {
        5000
    }

    fn max_connections_default() -> u32 {
        100
    }

    fn auto_create_default() -> bool {
        true
    }

    /// Generate the SQLite connection URL.
    pub fn to_url(&self) -> String {
        if self.auto_create {
            // mode=rwc creates the file when missing (r = read, w = write, c = create)
            format!("sqlite:{}/{}?mode=rwc", DATA_DIR, self.path)
        } else {
            format!("sqlite:{}/{}", DATA_DIR, self.path)
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Mail {
    /// Master switch; when false the notification step is skipped entirely.
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "Mail::host_default")]
    pub host: String,
    #[serde(default = "Mail::port_default")]
    pub port: u16,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub encryption: MailEncryption,
    /// Upper bound on a single notification send, in milliseconds.
    #[serde(default = "Mail::timeout_ms_default")]
    pub timeout_ms: u64,
    #[serde(default = "Mail::from_address_default")]
    pub from_address: String,
    /// Explicit notification recipient; overrides the settings row.
    #[serde(default)]
    pub contact_recipient: String,
}

impl Default for Mail {
    fn default() -> Self {
        Mail {
            enabled: false,
            host: Mail::host_default(),
            port: Mail::port_default(),
            username: String::new(),
            password: String::new(),
            encryption: Default::default(),
            timeout_ms: Mail::timeout_ms_default(),
            from_address: Mail::from_address_default(),
            contact_recipient: String::new(),
        }
    }
}

impl Mail {
    fn host_default() -> String {
        "localhost".into()
    }

    fn port_default() -> u16 {
        587
    }

    fn timeout_ms_default() -> u64 {
        20_000
    }

    fn from_address_default() -> String {
        "webmaster@localhost".into()
    }
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MailEncryption {
    /// STARTTLS upgrade on a plaintext connection (port 587 style)
    #[default]
    Starttls,
    /// Implicit TLS (port 465 style)
    Tls,
    /// No transport security; local relays and tests only
    None,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Log {
    #[serde(default = "Log::level_default")]
    pub level: String,
    #[serde(default = "Log::directory_default")]
    pub directory: String,
}

impl Default for Log {
    fn default() -> Self {
        Log {
            level: Log::level_default(),
            directory: Log::directory_default(),
        }
    }
}

impl Log {
    fn level_default() -> String {
        "info".into()
    }

    fn directory_default() -> String {
        "logs".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqlite_url_uses_create_mode_by_default() {
        let db = Db::default();
        assert!(db.effective_url().ends_with("?mode=rwc"));
    }

    #[test]
    fn explicit_db_url_wins() {
        let db = Db {
            url: Some("postgres://app:secret@db/tradegate".into()),
            sqlite: Sqlite::default(),
        };
        assert_eq!(db.effective_url(), "postgres://app:secret@db/tradegate");
    }

    #[test]
    fn hsts_header_disabled_by_default() {
        assert!(Web::default().hsts_header_value().is_none());
    }

    #[test]
    fn hsts_header_renders_flags() {
        let web = Web {
            hsts_seconds: 31536000,
            hsts_include_subdomains: true,
            hsts_preload: true,
            ..Default::default()
        };
        assert_eq!(
            web.hsts_header_value().unwrap(),
            "max-age=31536000; includeSubDomains; preload"
        );
    }
}

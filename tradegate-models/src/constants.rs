/// Default configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE_NAME: &str = "tradegate.toml";

/// Directory containing the embedded SQLite database file.
pub const DATA_DIR: &str = "./data";

/// Site name used whenever the settings row is absent or blank.
pub const FALLBACK_SITE_NAME: &str = "TradeGate";

/// Last-resort recipient for inquiry notifications when neither the
/// configured override nor the settings row provide one.
pub const FALLBACK_CONTACT_EMAIL: &str = "inquiries@tradegate.example";

/// Fixed primary key of the site settings singleton row.
pub const SETTINGS_SINGLETON_ID: i32 = 1;

/// In-page section ids an anchor navigation item may point at.
pub const NAV_ANCHORS: [&str; 3] = ["services", "industries", "process"];

/// Minimum trimmed length of an inquiry message.
pub const MESSAGE_MIN_LEN: usize = 10;

/// Minimum length of legal page content.
pub const LEGAL_CONTENT_MIN_LEN: u64 = 20;

/// Captured User-Agent headers are truncated to this length.
pub const USER_AGENT_MAX_LEN: usize = 255;

/// Named static pages listed in the sitemap, as (name, path) pairs.
pub const STATIC_PAGES: [(&str, &str); 4] = [
    ("home", "/"),
    ("about", "/about/"),
    ("faq", "/faq/"),
    ("contact", "/contact/"),
];

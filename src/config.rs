use std::path::PathBuf;

use crate::search::routes::SiteRoutes;

#[derive(Debug, Clone)]
pub struct Config {
    /// Location of the SQLite index store (opened read-only)
    pub db_path: PathBuf,
    /// Server bind address
    pub bind_addr: String,
    /// Per-site URL routing exceptions
    pub site_routes: SiteRoutes,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from("./data/search.db"),
            bind_addr: "127.0.0.1:3000".to_string(),
            site_routes: SiteRoutes::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = lookup("DOCS_SEARCH_DB_PATH") {
            config.db_path = PathBuf::from(path);
        }
        if let Some(addr) = lookup("DOCS_SEARCH_BIND_ADDR") {
            config.bind_addr = addr;
        }
        if let Some(pairs) = lookup("DOCS_SEARCH_SITE_PREFIXES") {
            for pair in config.site_routes.extend_from_pairs(&pairs) {
                tracing::warn!("Ignoring malformed DOCS_SEARCH_SITE_PREFIXES entry: {pair:?}");
            }
        }

        config
    }
}

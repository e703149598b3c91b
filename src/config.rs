//! Command-line configuration

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::model::Route;

pub const DEFAULT_CATALOG_URL: &str = "https://www.googleapis.com/books/v1";
pub const DEFAULT_BROWSE_QUERY: &str = "subject:education";
pub const DEFAULT_LOG_DIR: &str = ".logs";

/// Browse free educational books from the terminal
#[derive(Parser, Debug, Clone)]
#[command(name = "buildup", author, version, about, long_about = None)]
pub struct Settings {
    /// Base URL of the book catalog API
    #[arg(long, env = "BUILDUP_CATALOG_URL", default_value = DEFAULT_CATALOG_URL)]
    pub catalog_url: String,

    /// Maximum results per search on the home screen
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..=40))]
    pub search_limit: u32,

    /// Query used by the categories screen
    #[arg(long, default_value = DEFAULT_BROWSE_QUERY)]
    pub browse_query: String,

    /// Maximum results on the categories screen
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u32).range(1..=40))]
    pub browse_limit: u32,

    /// Quiet period before a typed search is sent, in milliseconds
    #[arg(long, default_value_t = 300)]
    pub debounce_ms: u64,

    /// HTTP timeout for catalog requests, in seconds
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: u64,

    /// View to open on startup
    #[arg(long, value_enum, default_value_t = StartView::Landing)]
    pub start: StartView,

    /// Directory for the daily log files
    #[arg(long, env = "BUILDUP_LOG_DIR", default_value = DEFAULT_LOG_DIR)]
    pub log_dir: PathBuf,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StartView {
    Landing,
    Home,
    Categories,
}

impl From<StartView> for Route {
    fn from(view: StartView) -> Self {
        match view {
            StartView::Landing => Route::Landing,
            StartView::Home => Route::Home,
            StartView::Categories => Route::Categories,
        }
    }
}

impl Settings {
    pub fn debounce_window(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            search_limit: 10,
            browse_query: DEFAULT_BROWSE_QUERY.to_string(),
            browse_limit: 20,
            debounce_ms: 300,
            timeout_secs: 10,
            start: StartView::Landing,
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let settings = Settings::try_parse_from([
            "buildup",
            "--catalog-url",
            "http://localhost:8080/books/v1",
            "--search-limit",
            "15",
            "--start",
            "categories",
        ])
        .unwrap();

        assert_eq!(settings.catalog_url, "http://localhost:8080/books/v1");
        assert_eq!(settings.search_limit, 15);
        assert_eq!(settings.browse_limit, 20);
        assert_eq!(Route::from(settings.start), Route::Categories);
        assert_eq!(settings.debounce_window(), Duration::from_millis(300));
        assert_eq!(settings.log_dir, PathBuf::from(DEFAULT_LOG_DIR));
    }

    #[test]
    fn limit_outside_catalog_range_is_rejected() {
        assert!(Settings::try_parse_from(["buildup", "--search-limit", "0"]).is_err());
        assert!(Settings::try_parse_from(["buildup", "--browse-limit", "41"]).is_err());
    }
}

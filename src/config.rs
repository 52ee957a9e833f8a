use crate::api::{ApiConfig, DEFAULT_BASE_URL};

pub const BASE_URL_ENV: &str = "HTML_PDF_BASE_URL";
pub const AUTO_DOWNLOAD_ENV: &str = "HTML_PDF_AUTO_DOWNLOAD";

/// Application settings resolved at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api: ApiConfig,
    /// Open the save dialog as soon as a conversion succeeds.
    pub auto_download: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            auto_download: true,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve settings through `lookup`. The base URL falls back to the value
    /// captured at build time, then to the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = lookup(BASE_URL_ENV)
            .filter(|v| !v.trim().is_empty())
            .or_else(|| {
                option_env!("HTML_PDF_BASE_URL")
                    .filter(|v| !v.trim().is_empty())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let auto_download = lookup(AUTO_DOWNLOAD_ENV)
            .map(|v| parse_flag(&v))
            .unwrap_or(true);

        Self {
            api: ApiConfig::new(base_url),
            auto_download,
        }
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}

//! Feed Configuration
//!
//! Base URL and page size for the posts collection. The browser build has
//! no process environment, so overrides are baked in at compile time.

use serde::{Deserialize, Serialize};

use crate::error::{FeedError, FeedResult};

/// Public JSONPlaceholder endpoint
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Posts per page on the API Data page
pub const DEFAULT_PAGE_SIZE: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            page_size: default_page_size(),
        }
    }
}

impl FeedConfig {
    /// Build from `PLP_API_BASE_URL` / `PLP_PAGE_SIZE` captured at compile time
    pub fn from_env() -> FeedResult<Self> {
        Self::from_overrides(option_env!("PLP_API_BASE_URL"), option_env!("PLP_PAGE_SIZE"))
    }

    /// Parse a JSON override; missing fields fall back to defaults
    pub fn from_json(json: &str) -> FeedResult<Self> {
        let config: FeedConfig = serde_json::from_str(json)
            .map_err(|e| FeedError::Config(e.to_string()))?;
        config.validated()
    }

    fn from_overrides(base_url: Option<&str>, page_size: Option<&str>) -> FeedResult<Self> {
        let mut config = Self::default();
        if let Some(url) = base_url.map(str::trim).filter(|u| !u.is_empty()) {
            config.base_url = url.to_string();
        }
        if let Some(raw) = page_size {
            config.page_size = raw
                .trim()
                .parse()
                .map_err(|_| FeedError::Config(format!("invalid page size: {:?}", raw)))?;
        }
        config.validated()
    }

    fn validated(mut self) -> FeedResult<Self> {
        if self.page_size == 0 {
            return Err(FeedError::Config("page size must be at least 1".to_string()));
        }
        self.base_url = self.base_url.trim_end_matches('/').to_string();
        if self.base_url.is_empty() {
            return Err(FeedError::Config("base url is empty".to_string()));
        }
        Ok(self)
    }
}

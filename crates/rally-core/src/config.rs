use anyhow::{Context, Result};

/// Page size used when the caller supplies a non-positive limit.
pub const DEFAULT_PAGE_LIMIT: usize = 20;

// Core configuration sourced from environment variables.
#[derive(Debug, Clone)]
pub struct CoreConfig {
    pub default_page_limit: usize,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            default_page_limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

impl CoreConfig {
    pub fn from_env() -> Result<Self> {
        let default_page_limit = match std::env::var("RALLY_PAGE_LIMIT") {
            Ok(value) => value.parse().with_context(|| "parse RALLY_PAGE_LIMIT")?,
            Err(_) => DEFAULT_PAGE_LIMIT,
        };
        Ok(Self { default_page_limit })
    }
}

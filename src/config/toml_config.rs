use crate::core::rating::RatingParseMode;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Provider limit on results per search request.
pub const MAX_SEARCH_PAGE_SIZE: usize = 10;

/// Google refuses offsets past the first 100 results.
pub const MAX_SEARCH_RESULTS: usize = 10 * MAX_SEARCH_PAGE_SIZE;

/// Optional settings file. Every key has a default, so an empty file (or no
/// file at all) gives the stock endpoints and parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub search: SearchSettings,
    pub llm: LlmSettings,
    pub stats: StatsSettings,
    pub rating: RatingSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    pub endpoint: String,
    pub page_size: usize,
    /// How many headlines to collect.
    pub results: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            endpoint: "https://www.googleapis.com/customsearch/v1".to_string(),
            page_size: MAX_SEARCH_PAGE_SIZE,
            results: 20,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    pub endpoint: String,
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
    pub system_message: String,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            endpoint: "https://api.anthropic.com/v1/messages".to_string(),
            model: "claude-3-opus-20240229".to_string(),
            temperature: 0.3,
            max_tokens: 64,
            system_message:
                "You are a helpful assistant that can answer questions and help with tasks."
                    .to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsSettings {
    pub endpoint: String,
    pub user_agent: String,
    /// Visited first to pick up a session cookie.
    pub cookie_url: String,
    pub crumb_url: String,
}

impl Default for StatsSettings {
    fn default() -> Self {
        Self {
            endpoint: "https://query2.finance.yahoo.com/v10/finance/quoteSummary".to_string(),
            user_agent: "Mozilla/5.0".to_string(),
            cookie_url: "https://fc.yahoo.com".to_string(),
            crumb_url: "https://query2.finance.yahoo.com/v1/test/getcrumb".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingSettings {
    pub parse_mode: RatingParseMode,
}

impl Settings {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        tracing::debug!("Loaded settings from {}", path.as_ref().display());
        Self::from_toml_str(&content)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("search.endpoint", &self.search.endpoint)?;
        validate_range("search.page_size", self.search.page_size, 1, MAX_SEARCH_PAGE_SIZE)?;
        validate_range("search.results", self.search.results, 1, MAX_SEARCH_RESULTS)?;

        validate_url("llm.endpoint", &self.llm.endpoint)?;
        validate_non_empty_string("llm.model", &self.llm.model)?;
        validate_range("llm.temperature", self.llm.temperature, 0.0, 1.0)?;
        validate_range("llm.max_tokens", self.llm.max_tokens, 1, 4096)?;

        validate_url("stats.endpoint", &self.stats.endpoint)?;
        validate_url("stats.cookie_url", &self.stats.cookie_url)?;
        validate_url("stats.crumb_url", &self.stats.crumb_url)?;
        Ok(())
    }
}

use crate::domain::model::{CompanyStats, SearchResult};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Paginated web search that returns already-filtered news hits.
#[async_trait]
pub trait HeadlineSource: Send + Sync {
    async fn search(
        &self,
        query: &str,
        desired_count: usize,
        exclude_substring: &str,
    ) -> Result<Vec<SearchResult>>;
}

/// Single-turn chat: one user message in, free text out.
#[async_trait]
pub trait ChatAssistant: Send + Sync {
    async fn generate_reply(&self, prompt: &str) -> Result<String>;
}

#[async_trait]
pub trait StatsProvider: Send + Sync {
    async fn fetch_stats(&self, identifier: &str) -> Result<CompanyStats>;
}

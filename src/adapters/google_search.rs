use crate::config::toml_config::SearchSettings;
use crate::config::Credentials;
use crate::core::ranking::is_known_news_domain;
use crate::domain::model::SearchResult;
use crate::domain::ports::HeadlineSource;
use crate::utils::error::{PulseError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct SearchPage {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    #[serde(default)]
    title: String,
    #[serde(default)]
    link: String,
}

/// Whether a hit is kept: never when it points at the excluded site, otherwise
/// when the URL mentions "news" or a known news domain. All comparisons are
/// case-insensitive substring tests.
pub fn is_accepted(url: &str, exclude_substring: &str) -> bool {
    let url = url.to_lowercase();
    let exclude = exclude_substring.to_lowercase();

    if !exclude.is_empty() && url.contains(&exclude) {
        return false;
    }
    url.contains("news") || is_known_news_domain(&url)
}

/// Google Custom Search JSON API client.
pub struct GoogleSearchClient {
    client: Client,
    endpoint: String,
    api_key: String,
    context_id: String,
    max_page_size: usize,
}

impl GoogleSearchClient {
    pub fn new(credentials: &Credentials, settings: &SearchSettings) -> Self {
        Self {
            client: Client::new(),
            endpoint: settings.endpoint.clone(),
            api_key: credentials.search_api_key.clone(),
            context_id: credentials.search_context_id.clone(),
            max_page_size: settings.page_size,
        }
    }

    async fn fetch_page(&self, query: &str, num: usize, start: usize) -> Result<Vec<SearchItem>> {
        let num = num.to_string();
        let start = start.to_string();

        tracing::debug!("Search request: start={}, num={}", start, num);
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("q", query),
                ("key", self.api_key.as_str()),
                ("cx", self.context_id.as_str()),
                ("num", num.as_str()),
                ("start", start.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PulseError::SearchTransportError {
                status: status.as_u16(),
                body,
            });
        }

        let page: SearchPage = response.json().await?;
        Ok(page.items)
    }
}

#[async_trait]
impl HeadlineSource for GoogleSearchClient {
    async fn search(
        &self,
        query: &str,
        desired_count: usize,
        exclude_substring: &str,
    ) -> Result<Vec<SearchResult>> {
        let page_size = desired_count.min(self.max_page_size);
        let mut results = Vec::new();
        let mut start = 1;

        while results.len() < desired_count {
            let items = self.fetch_page(query, page_size, start).await?;
            let received = items.len();

            results.extend(
                items
                    .into_iter()
                    .filter(|item| is_accepted(&item.link, exclude_substring))
                    .map(|item| SearchResult::new(item.title, item.link)),
            );
            tracing::debug!(
                "Page at {} returned {} items, {} accepted so far",
                start,
                received,
                results.len()
            );

            // 不足一頁代表沒有更多結果
            if received < page_size {
                break;
            }
            start += page_size;
        }

        results.truncate(desired_count);
        Ok(results)
    }
}

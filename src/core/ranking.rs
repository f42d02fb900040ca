use crate::domain::model::{RankedHeadline, SearchResult};

/// Known news domain fragments, most to least popular.
///
/// Matching is a case-insensitive substring test against the whole URL, not
/// a host comparison, so short fragments like `"time"` or `"vox"` can match
/// unrelated URLs.
pub const NEWS_DOMAINS: [&str; 57] = [
    "cnn",
    "nytimes",
    "bbc",
    "reuters",
    "forbes",
    "bloomberg",
    "wsj",
    "cnbc",
    "guardian",
    "apnews",
    "npr",
    "foxnews",
    "abcnews",
    "usatoday",
    "latimes",
    "nbcnews",
    "newsweek",
    "time",
    "businessinsider",
    "marketwatch",
    "yahoo",
    "msnbc",
    "politico",
    "axios",
    "fortune",
    "barrons",
    "investopedia",
    "cbsnews",
    "washingtonpost",
    "theverge",
    "techcrunch",
    "wired",
    "engadget",
    "theatlantic",
    "slate",
    "huffpost",
    "vice",
    "buzzfeed",
    "vox",
    "aljazeera",
    "dw.com",
    "cbc.ca",
    "globalnews.ca",
    "ctvnews.ca",
    "sky.com",
    "independent.co.uk",
    "telegraph.co.uk",
    "ft.com",
    "economist.com",
    "scmp.com",
    "straitstimes.com",
    "japantimes.co.jp",
    "smh.com.au",
    "afr.com",
    "theage.com.au",
    "sbs.com.au",
    "abc.net.au",
];

/// Index of the first fragment found in `url`, or `NEWS_DOMAINS.len()`.
pub fn domain_rank(url: &str) -> usize {
    let url = url.to_lowercase();
    NEWS_DOMAINS
        .iter()
        .position(|domain| url.contains(domain))
        .unwrap_or(NEWS_DOMAINS.len())
}

pub fn is_known_news_domain(url: &str) -> bool {
    domain_rank(url) < NEWS_DOMAINS.len()
}

/// Ranks every result and sorts by rank. The sort is stable, so results with
/// equal rank keep the order the search returned them in.
pub fn build_table(results: Vec<SearchResult>) -> Vec<RankedHeadline> {
    let mut table: Vec<RankedHeadline> = results
        .into_iter()
        .map(|result| {
            let domain_rank = domain_rank(&result.url);
            RankedHeadline {
                result,
                domain_rank,
            }
        })
        .collect();
    table.sort_by_key(|row| row.domain_rank);
    table
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// One accepted search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub url: String,
}

impl SearchResult {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }
}

/// Splits results into the parallel `(titles, urls)` lists.
pub fn into_columns(results: Vec<SearchResult>) -> (Vec<String>, Vec<String>) {
    results.into_iter().map(|r| (r.title, r.url)).unzip()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedHeadline {
    pub result: SearchResult,
    /// Lower is more reputable; equal to the domain list length when unranked.
    pub domain_rank: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RatedHeadline {
    pub ranked: RankedHeadline,
    /// `None` when the assistant's reply could not be turned into a number.
    pub rating: Option<u64>,
}

impl RatedHeadline {
    pub fn headline(&self) -> &str {
        &self.ranked.result.title
    }

    pub fn url(&self) -> &str {
        &self.ranked.result.url
    }
}

/// A scalar returned by the market-data provider, or the "not available" marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum StatValue {
    Integer(i64),
    Float(f64),
    Text(String),
    NotAvailable,
}

impl StatValue {
    pub fn is_available(&self) -> bool {
        !matches!(self, StatValue::NotAvailable)
    }
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Integer(v) => write!(f, "{}", v),
            StatValue::Float(v) => write!(f, "{}", v),
            StatValue::Text(v) => write!(f, "{}", v),
            StatValue::NotAvailable => write!(f, "N/A"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyStats {
    pub market_cap: StatValue,
    pub revenue: StatValue,
    pub employees: StatValue,
    pub sector: StatValue,
    pub industry: StatValue,
    pub country: StatValue,
}

impl CompanyStats {
    /// Display label and value for each field, in report order.
    pub fn fields(&self) -> [(&'static str, &StatValue); 6] {
        [
            ("Market Cap", &self.market_cap),
            ("Revenue", &self.revenue),
            ("Employees", &self.employees),
            ("Sector", &self.sector),
            ("Industry", &self.industry),
            ("Country", &self.country),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RatingSummary {
    Mean(f64),
    NoValidRatings,
}

/// Everything the report step prints.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub company: String,
    pub table: Vec<RatedHeadline>,
    pub summary: RatingSummary,
    /// Stats failures are kept as their message; they never abort a run.
    pub stats: std::result::Result<CompanyStats, String>,
}

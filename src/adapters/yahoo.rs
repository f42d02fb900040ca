use crate::config::toml_config::StatsSettings;
use crate::domain::model::{CompanyStats, StatValue};
use crate::domain::ports::StatsProvider;
use crate::utils::error::{PulseError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use url::Url;

const MODULES: &str = "price,summaryProfile,financialData";

/// Yahoo Finance quoteSummary lookup.
///
/// quoteSummary only answers requests that carry a session cookie and the
/// matching crumb, so every lookup first visits the cookie endpoint and then
/// asks for a crumb with that cookie set.
pub struct YahooStatsClient {
    http: Client,
    endpoint: String,
    cookie_url: String,
    crumb_url: String,
}

impl YahooStatsClient {
    pub fn new(settings: &StatsSettings) -> Result<Self> {
        let http = Client::builder()
            .user_agent(&settings.user_agent)
            .cookie_store(true)
            .build()?;
        Ok(Self {
            http,
            endpoint: settings.endpoint.clone(),
            cookie_url: settings.cookie_url.clone(),
            crumb_url: settings.crumb_url.clone(),
        })
    }

    fn lookup_url(&self, identifier: &str, crumb: &str) -> Result<Url> {
        let mut url = Url::parse(&self.endpoint).map_err(|e| PulseError::ConfigError {
            message: format!("invalid stats endpoint {}: {}", self.endpoint, e),
        })?;
        url.path_segments_mut()
            .map_err(|_| PulseError::ConfigError {
                message: format!("stats endpoint {} cannot take a path", self.endpoint),
            })?
            .pop_if_empty()
            .push(identifier);
        url.query_pairs_mut()
            .append_pair("modules", MODULES)
            .append_pair("crumb", crumb);
        Ok(url)
    }

    async fn fetch_crumb(&self, identifier: &str) -> Result<String> {
        // The cookie endpoint usually answers 404; only its Set-Cookie matters
        let response = self.http.get(&self.cookie_url).send().await?;
        tracing::debug!("Cookie endpoint answered {}", response.status());

        let response = self.http.get(&self.crumb_url).send().await?;
        let status = response.status();
        let crumb = response.text().await?.trim().to_string();

        if !status.is_success() || crumb.is_empty() {
            return Err(lookup_error(
                identifier,
                format!("could not obtain a crumb (status {})", status.as_u16()),
            ));
        }
        Ok(crumb)
    }

    async fn lookup(&self, identifier: &str) -> Result<CompanyStats> {
        let crumb = self.fetch_crumb(identifier).await?;
        let url = self.lookup_url(identifier, &crumb)?;
        tracing::debug!("Stats request: {}", url);

        let response = self.http.get(url).send().await?;
        let status = response.status();
        let body: Value = match response.json().await {
            Ok(body) => body,
            Err(e) if status.is_success() => return Err(e.into()),
            Err(_) => Value::Null,
        };

        if let Some(message) = provider_error(&body) {
            return Err(lookup_error(identifier, message));
        }
        if !status.is_success() {
            return Err(lookup_error(identifier, format!("status {}", status.as_u16())));
        }

        let result = body["quoteSummary"]["result"]
            .as_array()
            .and_then(|results| results.first())
            .ok_or_else(|| lookup_error(identifier, "no quote data returned".to_string()))?;

        Ok(stats_from_summary(result))
    }
}

fn lookup_error(identifier: &str, message: String) -> PulseError {
    PulseError::StatsLookupError {
        identifier: identifier.to_string(),
        message,
    }
}

/// Lookup failures come back under `quoteSummary.error`; crumb and session
/// rejections come back under `finance.error`.
fn provider_error(body: &Value) -> Option<String> {
    let error = [&body["quoteSummary"]["error"], &body["finance"]["error"]]
        .into_iter()
        .find(|error| !error.is_null())?;
    let message = error["description"]
        .as_str()
        .or_else(|| error["code"].as_str())
        .unwrap_or("unknown provider error");
    Some(message.to_string())
}

/// Yahoo wraps numbers as `{"raw": .., "fmt": ..}` and sends `{}` for
/// fields it has no data for.
fn stat_value(value: Option<&Value>) -> StatValue {
    match value {
        Some(Value::Object(map)) => stat_value(map.get("raw")),
        Some(Value::Number(n)) => match n.as_i64() {
            Some(i) => StatValue::Integer(i),
            None => n.as_f64().map_or(StatValue::NotAvailable, StatValue::Float),
        },
        Some(Value::String(s)) if !s.is_empty() => StatValue::Text(s.clone()),
        _ => StatValue::NotAvailable,
    }
}

fn stats_from_summary(result: &Value) -> CompanyStats {
    let profile = &result["summaryProfile"];
    CompanyStats {
        market_cap: stat_value(result["price"].get("marketCap")),
        revenue: stat_value(result["financialData"].get("totalRevenue")),
        employees: stat_value(profile.get("fullTimeEmployees")),
        sector: stat_value(profile.get("sector")),
        industry: stat_value(profile.get("industry")),
        country: stat_value(profile.get("country")),
    }
}

#[async_trait]
impl StatsProvider for YahooStatsClient {
    async fn fetch_stats(&self, identifier: &str) -> Result<CompanyStats> {
        self.lookup(identifier).await.map_err(|e| match e {
            PulseError::StatsLookupError { .. } => e,
            other => lookup_error(identifier, other.to_string()),
        })
    }
}

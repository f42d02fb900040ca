use httpmock::prelude::*;
use news_pulse::config::toml_config::StatsSettings;
use news_pulse::domain::model::StatValue;
use news_pulse::domain::ports::StatsProvider;
use news_pulse::{PulseError, YahooStatsClient};
use serde_json::json;

fn client(server: &MockServer) -> YahooStatsClient {
    YahooStatsClient::new(&StatsSettings {
        endpoint: server.url("/v10/finance/quoteSummary"),
        cookie_url: server.url("/fc"),
        crumb_url: server.url("/v1/test/getcrumb"),
        ..StatsSettings::default()
    })
    .unwrap()
}

fn lookup_message(result: Result<news_pulse::domain::model::CompanyStats, PulseError>) -> String {
    match result {
        Err(PulseError::StatsLookupError { message, .. }) => message,
        other => panic!("expected a stats lookup error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_cookie_then_crumb_then_lookup() {
    let server = MockServer::start();

    let cookie = server.mock(|when, then| {
        when.method(GET).path("/fc");
        then.status(404).header("Set-Cookie", "A3=session; Path=/");
    });
    let crumb = server.mock(|when, then| {
        when.method(GET).path("/v1/test/getcrumb");
        then.status(200).body("Xy.1z/AbC\n");
    });
    let summary = server.mock(|when, then| {
        when.method(GET)
            .path("/v10/finance/quoteSummary/MSFT")
            .query_param("modules", "price,summaryProfile,financialData")
            .query_param("crumb", "Xy.1z/AbC");
        then.status(200).json_body(json!({
            "quoteSummary": {
                "result": [{
                    "price": {"marketCap": {"raw": 3100000000000i64, "fmt": "3.1T"}},
                    "financialData": {"totalRevenue": {}},
                    "summaryProfile": {"fullTimeEmployees": 228000, "sector": "Technology"}
                }],
                "error": null
            }
        }));
    });

    let stats = client(&server).fetch_stats("MSFT").await.unwrap();

    cookie.assert();
    crumb.assert();
    summary.assert();
    assert_eq!(stats.market_cap, StatValue::Integer(3_100_000_000_000));
    assert_eq!(stats.revenue, StatValue::NotAvailable);
    assert_eq!(stats.employees, StatValue::Integer(228_000));
    assert_eq!(stats.country, StatValue::NotAvailable);
}

#[tokio::test]
async fn test_invalid_crumb_reports_provider_description() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/fc");
        then.status(404);
    });
    server.mock(|when, then| {
        when.method(GET).path("/v1/test/getcrumb");
        then.status(200).body("stale-crumb");
    });
    let summary = server.mock(|when, then| {
        when.method(GET).path("/v10/finance/quoteSummary/AAPL");
        then.status(401).json_body(json!({
            "finance": {
                "result": null,
                "error": {"code": "Unauthorized", "description": "Invalid Crumb"}
            }
        }));
    });

    let result = client(&server).fetch_stats("AAPL").await;

    summary.assert();
    assert_eq!(lookup_message(result), "Invalid Crumb");
}

#[tokio::test]
async fn test_missing_crumb_stops_before_lookup() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/fc");
        then.status(404);
    });
    server.mock(|when, then| {
        when.method(GET).path("/v1/test/getcrumb");
        then.status(429).body("Too Many Requests");
    });
    let summary = server.mock(|when, then| {
        when.method(GET).path("/v10/finance/quoteSummary/AAPL");
        then.status(200).json_body(json!({"quoteSummary": {"result": [{}], "error": null}}));
    });

    let result = client(&server).fetch_stats("AAPL").await;

    summary.assert_hits(0);
    assert!(lookup_message(result).contains("could not obtain a crumb (status 429)"));
}

#[tokio::test]
async fn test_empty_crumb_is_rejected() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/fc");
        then.status(404);
    });
    server.mock(|when, then| {
        when.method(GET).path("/v1/test/getcrumb");
        then.status(200).body("");
    });

    let result = client(&server).fetch_stats("AAPL").await;
    assert!(lookup_message(result).contains("could not obtain a crumb"));
}

// Adapters layer: concrete implementations of the domain ports over HTTP.

pub mod anthropic;
pub mod google_search;
pub mod yahoo;

pub use anthropic::AnthropicAssistant;
pub use google_search::GoogleSearchClient;
pub use yahoo::YahooStatsClient;

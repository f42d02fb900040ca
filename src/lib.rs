pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{AnthropicAssistant, GoogleSearchClient, YahooStatsClient};
pub use config::{Credentials, Settings};
pub use core::report::render_report;
pub use core::workflow::{Workflow, WorkflowOptions};
pub use utils::error::{PulseError, Result};

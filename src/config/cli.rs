use crate::config::toml_config::Settings;
use crate::core::rating::RatingParseMode;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::io::{BufRead, Write};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "news-pulse")]
#[command(about = "Rank and rate news headlines about a company")]
pub struct CliConfig {
    /// Company name or ticker symbol; prompted for when omitted
    #[arg(long)]
    pub company: Option<String>,

    /// Search query; prompted for when omitted
    #[arg(long)]
    pub query: Option<String>,

    #[arg(long, default_value = ".env")]
    pub env_file: PathBuf,

    /// TOML settings file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of headlines to collect
    #[arg(long)]
    pub results: Option<usize>,

    #[arg(long, value_enum)]
    pub rating_parse: Option<RatingParseMode>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Settings file (if any) with command line overrides applied, then
    /// validated.
    pub fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::from_file(path)?,
            None => Settings::default(),
        };
        if let Some(results) = self.results {
            settings.search.results = results;
        }
        if let Some(mode) = self.rating_parse {
            settings.rating.parse_mode = mode;
        }
        settings.validate()?;
        Ok(settings)
    }
}

/// Writes `message`, then reads one line. The trailing newline is dropped.
pub fn prompt_line<R: BufRead, W: Write>(reader: &mut R, writer: &mut W, message: &str) -> Result<String> {
    write!(writer, "{}", message)?;
    writer.flush()?;

    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

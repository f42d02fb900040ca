use crate::core::rating::{rate_all, summarize, RatingParseMode};
use crate::core::ranking::build_table;
use crate::domain::model::RunReport;
use crate::domain::ports::{ChatAssistant, HeadlineSource, StatsProvider};
use crate::utils::error::Result;

#[derive(Debug, Clone, Copy)]
pub struct WorkflowOptions {
    pub results: usize,
    pub parse_mode: RatingParseMode,
}

impl Default for WorkflowOptions {
    fn default() -> Self {
        Self {
            results: 20,
            parse_mode: RatingParseMode::default(),
        }
    }
}

/// Search, rank, rate, summarize, fetch stats. Steps run one after another;
/// only a search failure ends the run early.
pub struct Workflow<S, A, P>
where
    S: HeadlineSource,
    A: ChatAssistant,
    P: StatsProvider,
{
    source: S,
    assistant: A,
    stats: P,
    options: WorkflowOptions,
}

impl<S, A, P> Workflow<S, A, P>
where
    S: HeadlineSource,
    A: ChatAssistant,
    P: StatsProvider,
{
    pub fn new(source: S, assistant: A, stats: P, options: WorkflowOptions) -> Self {
        Self {
            source,
            assistant,
            stats,
            options,
        }
    }

    pub async fn run(&self, company: &str, query: &str) -> Result<RunReport> {
        let search_query = format!("news {}", query);
        tracing::info!("Searching for '{}'", search_query);
        let results = self
            .source
            .search(&search_query, self.options.results, company)
            .await?;
        tracing::info!("Collected {} headlines", results.len());

        let table = build_table(results);

        tracing::info!("Rating {} headlines", table.len());
        let table = rate_all(table, &self.assistant, self.options.parse_mode).await;
        let summary = summarize(&table);

        tracing::info!("Fetching stats for {}", company);
        let stats = match self.stats.fetch_stats(company).await {
            Ok(stats) => Ok(stats),
            Err(e) => {
                tracing::warn!("Stats lookup failed: {}", e);
                Err(e.to_string())
            }
        };

        Ok(RunReport {
            company: company.to_string(),
            table,
            summary,
            stats,
        })
    }
}

pub mod ranking;
pub mod rating;
pub mod report;
pub mod workflow;

pub use crate::domain::model::{RankedHeadline, RatedHeadline, RunReport, SearchResult};
pub use crate::domain::ports::{ChatAssistant, HeadlineSource, StatsProvider};
pub use crate::utils::error::Result;

use crate::domain::model::{RankedHeadline, RatedHeadline, RatingSummary};
use crate::domain::ports::ChatAssistant;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

const PROMPT_PREAMBLE: &str = "You are an investor interested in innovation and stock prices. \
Rate the following news headline for the company on a scale of 1-10: \
1-4 = objectively bad for the company (1 is worst), 5-6 = neutral, \
7-10 = good for the company (10 is best). Only return the number.";

/// How a free-text reply is turned into a rating.
///
/// Neither mode clamps to the 1-10 scale the prompt asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum RatingParseMode {
    /// Every digit in the reply, concatenated: "7 out of 10" reads as 710.
    #[default]
    ConcatDigits,
    /// The first run of digits: "7 out of 10" reads as 7.
    FirstNumber,
}

pub fn build_prompt(headline: &str) -> String {
    format!("{}\nHeadline: {}", PROMPT_PREAMBLE, headline)
}

fn first_number_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // ASCII only; `\d` would also accept other scripts' digits
    RE.get_or_init(|| Regex::new("[0-9]+").expect("static pattern"))
}

pub fn parse_rating(reply: &str, mode: RatingParseMode) -> Option<u64> {
    match mode {
        RatingParseMode::ConcatDigits => {
            let digits: String = reply.chars().filter(char::is_ascii_digit).collect();
            // empty input and overflow both fail here
            digits.parse().ok()
        }
        RatingParseMode::FirstNumber => first_number_regex()
            .find(reply)
            .and_then(|m| m.as_str().parse().ok()),
    }
}

/// Rates every row in table order, one assistant round-trip per headline.
///
/// A failed call is logged and recorded as an absent rating; it never stops
/// the remaining rows from being rated.
pub async fn rate_all<A>(
    table: Vec<RankedHeadline>,
    assistant: &A,
    mode: RatingParseMode,
) -> Vec<RatedHeadline>
where
    A: ChatAssistant + ?Sized,
{
    let total = table.len();
    let mut rated = Vec::with_capacity(total);

    for (index, ranked) in table.into_iter().enumerate() {
        let prompt = build_prompt(&ranked.result.title);
        tracing::debug!("Prompt: {}", prompt);

        let rating = match assistant.generate_reply(&prompt).await {
            Ok(reply) => {
                tracing::debug!("Response: {}", reply);
                let rating = parse_rating(&reply, mode);
                if rating.is_none() {
                    tracing::warn!("No rating found in reply {:?}", reply);
                }
                rating
            }
            Err(e) => {
                tracing::warn!("Rating request for headline {} failed: {}", index + 1, e);
                None
            }
        };

        tracing::info!("Rated headline {}/{}: {:?}", index + 1, total, rating);
        rated.push(RatedHeadline { ranked, rating });
    }

    rated
}

/// Mean of the present ratings; absent ones are skipped, not counted as zero.
pub fn summarize(table: &[RatedHeadline]) -> RatingSummary {
    let present: Vec<f64> = table
        .iter()
        .filter_map(|row| row.rating)
        .map(|r| r as f64)
        .collect();

    if present.is_empty() {
        RatingSummary::NoValidRatings
    } else {
        RatingSummary::Mean(present.iter().sum::<f64>() / present.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::SearchResult;
    use crate::utils::error::{PulseError, Result};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct ScriptedAssistant {
        replies: Mutex<Vec<Result<String>>>,
        prompts: Mutex<Vec<String>>,
    }

    impl ScriptedAssistant {
        fn new(replies: Vec<Result<String>>) -> Self {
            Self {
                replies: Mutex::new(replies.into_iter().rev().collect()),
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ChatAssistant for ScriptedAssistant {
        async fn generate_reply(&self, prompt: &str) -> Result<String> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.replies
                .lock()
                .unwrap()
                .pop()
                .unwrap_or_else(|| Ok(String::new()))
        }
    }

    fn ranked(title: &str, rank: usize) -> RankedHeadline {
        RankedHeadline {
            result: SearchResult::new(title, format!("https://news.example/{}", rank)),
            domain_rank: rank,
        }
    }

    fn rated(rating: Option<u64>) -> RatedHeadline {
        RatedHeadline {
            ranked: ranked("h", 0),
            rating,
        }
    }

    #[test]
    fn test_prompt_embeds_headline() {
        let prompt = build_prompt("Acme beats earnings");
        assert!(prompt.starts_with("You are an investor interested in innovation"));
        assert!(prompt.contains("1-4 = objectively bad for the company (1 is worst)"));
        assert!(prompt.contains("Only return the number."));
        assert!(prompt.ends_with("\nHeadline: Acme beats earnings"));
    }

    #[test]
    fn test_concat_digits_parsing() {
        let mode = RatingParseMode::ConcatDigits;
        assert_eq!(parse_rating("8", mode), Some(8));
        assert_eq!(parse_rating("I'd say 8", mode), Some(8));
        assert_eq!(parse_rating("8/10", mode), Some(810));
        assert_eq!(parse_rating("Rating: 7/10", mode), Some(710));
        assert_eq!(parse_rating("no rating", mode), None);
        assert_eq!(parse_rating("", mode), None);
    }

    #[test]
    fn test_concat_digits_overflow_is_absent() {
        let reply = "9".repeat(40);
        assert_eq!(parse_rating(&reply, RatingParseMode::ConcatDigits), None);
    }

    #[test]
    fn test_first_number_parsing() {
        let mode = RatingParseMode::FirstNumber;
        assert_eq!(parse_rating("7 out of 10", mode), Some(7));
        assert_eq!(parse_rating("Rating: 12", mode), Some(12));
        assert_eq!(parse_rating("no rating", mode), None);
        assert_eq!(parse_rating("", mode), None);
    }

    #[test]
    fn test_parse_mode_names() {
        let mode: RatingParseMode = serde_json::from_str("\"first-number\"").unwrap();
        assert_eq!(mode, RatingParseMode::FirstNumber);
        assert_eq!(RatingParseMode::default(), RatingParseMode::ConcatDigits);
    }

    #[tokio::test]
    async fn test_rate_all_keeps_order_and_absorbs_failures() {
        let assistant = ScriptedAssistant::new(vec![
            Ok("9".to_string()),
            Err(PulseError::LlmError {
                message: "overloaded".to_string(),
            }),
            Ok("hard to say".to_string()),
            Ok("4".to_string()),
        ]);
        let table = vec![ranked("a", 0), ranked("b", 1), ranked("c", 2), ranked("d", 3)];

        let rows = rate_all(table, &assistant, RatingParseMode::ConcatDigits).await;

        let ratings: Vec<Option<u64>> = rows.iter().map(|r| r.rating).collect();
        assert_eq!(ratings, vec![Some(9), None, None, Some(4)]);
        assert_eq!(rows[3].headline(), "d");

        let prompts = assistant.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 4);
        assert!(prompts[1].ends_with("Headline: b"));
    }

    #[tokio::test]
    async fn test_rate_all_empty_table_makes_no_calls() {
        let assistant = ScriptedAssistant::new(vec![]);
        let rows = rate_all(Vec::new(), &assistant, RatingParseMode::default()).await;
        assert!(rows.is_empty());
        assert!(assistant.prompts.lock().unwrap().is_empty());
    }

    #[test]
    fn test_summarize_ignores_absent() {
        let table = vec![rated(Some(8)), rated(None), rated(Some(5))];
        assert_eq!(summarize(&table), RatingSummary::Mean(6.5));
    }

    #[test]
    fn test_summarize_without_ratings() {
        assert_eq!(summarize(&[]), RatingSummary::NoValidRatings);
        assert_eq!(
            summarize(&[rated(None), rated(None)]),
            RatingSummary::NoValidRatings
        );
    }
}

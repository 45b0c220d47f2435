//! Compiles raw search responses into a cited research report.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tavily_async::types::search::{SearchResponse, SearchResult};
use url::Url;

use crate::agent::ResearchInput;

/// Max chars for snippet trimming
const MAX_SNIPPET_CHARS: usize = 300;

/// Result of one research run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchReport {
    /// Subject of the research
    pub company: String,
    /// Guidance supplied by the caller
    pub user_notes: String,
    /// When the report was compiled
    pub generated_at: DateTime<Utc>,
    /// One entry per executed query
    pub findings: Vec<Finding>,
    /// Deduplicated sources, best first
    pub sources: Vec<Source>,
}

/// What a single query turned up.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    /// Query text
    pub query: String,
    /// Short answer synthesized by the search API, when requested
    pub answer: Option<String>,
    /// Number of results the query returned
    pub result_count: usize,
}

/// A citable source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Source {
    /// URL of the page
    pub url: String,
    /// Host extracted from the URL
    pub domain: String,
    /// Page title
    pub title: Option<String>,
    /// Trimmed excerpt
    pub snippet: Option<String>,
    /// Relevance score (0-100)
    pub score: u32,
    /// Publication date, when known
    pub published_date: Option<String>,
    /// Query that surfaced this source at its best score
    pub query: String,
}

impl ResearchReport {
    /// Build a report from `(query, response)` pairs.
    ///
    /// Sources seen under several queries are kept once, at their highest
    /// score. The list is ordered by score and capped at `max_sources`.
    pub fn compile<I>(input: ResearchInput, responses: I, max_sources: usize) -> Self
    where
        I: IntoIterator<Item = (String, SearchResponse)>,
    {
        let mut findings = Vec::new();
        let mut best: HashMap<String, (f64, String, SearchResult)> = HashMap::new();

        for (query, resp) in responses {
            findings.push(Finding {
                query: query.clone(),
                answer: resp.answer.filter(|a| !a.trim().is_empty()),
                result_count: resp.results.len(),
            });

            for hit in resp.results {
                let replace = best
                    .get(&hit.url)
                    .is_none_or(|(score, _, _)| hit.score > *score);
                if replace {
                    best.insert(hit.url.clone(), (hit.score, query.clone(), hit));
                }
            }
        }

        let mut ranked: Vec<_> = best.into_values().collect();
        ranked.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.2.url.cmp(&b.2.url)));
        ranked.truncate(max_sources);

        let sources = ranked
            .into_iter()
            .map(|(score, query, hit)| Source {
                domain: extract_domain(&hit.url),
                title: Some(hit.title).filter(|t| !t.trim().is_empty()),
                snippet: Some(hit.content)
                    .filter(|c| !c.trim().is_empty())
                    .map(|c| trim_chars(c.trim(), MAX_SNIPPET_CHARS)),
                score: scale_score(score),
                published_date: hit.published_date,
                url: hit.url,
                query,
            })
            .collect();

        Self {
            company: input.company,
            user_notes: input.user_notes,
            generated_at: Utc::now(),
            findings,
            sources,
        }
    }
}

/// Extract domain from a URL, falling back to the raw URL on parse failure.
fn extract_domain(url_str: &str) -> String {
    Url::parse(url_str)
        .ok()
        .and_then(|u| u.host_str().map(String::from))
        .unwrap_or_else(|| url_str.to_string())
}

/// Scale a 0.0-1.0 relevance score to a 0-100 integer.
fn scale_score(score: f64) -> u32 {
    let scaled = (score.clamp(0.0, 1.0) * 100.0).round() as u32;
    scaled.min(100)
}

/// Trim a string to `max` characters, appending an ellipsis if truncated.
fn trim_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &s[..idx]),
        None => s.to_string(),
    }
}

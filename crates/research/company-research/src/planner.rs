//! Turns a research request into concrete search queries.

use tavily_async::types::common::Topic;
use tavily_async::types::search::MAX_QUERY_CHARS;

use crate::agent::ResearchInput;

/// One search the agent intends to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedQuery {
    /// Query text sent to the search API
    pub text: String,
    /// Topic category for the search
    pub topic: Topic,
}

impl PlannedQuery {
    fn general(text: String) -> Self {
        Self {
            text,
            topic: Topic::General,
        }
    }
}

/// Plan up to `max` queries for the given input.
///
/// The notes-focused query comes first so it survives a tight cap, followed
/// by a general overview and a news sweep. At least one query is always
/// returned.
pub fn plan_queries(input: &ResearchInput, max: usize) -> Vec<PlannedQuery> {
    let company = input.company.trim();
    let notes = input.user_notes.trim();

    let mut plan = Vec::with_capacity(3);

    if !notes.is_empty() {
        plan.push(PlannedQuery::general(join_terms(&[company, notes])));
    }
    plan.push(PlannedQuery::general(join_terms(&[
        company,
        "company overview",
    ])));
    plan.push(PlannedQuery {
        text: join_terms(&[company, "latest news"]),
        topic: Topic::News,
    });

    plan.truncate(max.max(1));
    plan
}

fn join_terms(terms: &[&str]) -> String {
    let joined = terms
        .iter()
        .filter(|t| !t.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ");
    cap_chars(&joined, MAX_QUERY_CHARS)
}

fn cap_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => s[..idx].trim_end().to_string(),
        None => s.to_string(),
    }
}

//! Shared types used across Tavily API endpoints

use serde::{Deserialize, Serialize};

/// Depth of a search or extraction.
///
/// `Advanced` costs two API credits per call and returns richer content.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum SearchDepth {
    /// Fast, single-pass retrieval (default)
    #[default]
    Basic,
    /// Slower retrieval with more relevant snippets
    Advanced,
}

/// Search topic category
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    /// Broad web search (default)
    #[default]
    General,
    /// Recent news coverage
    News,
    /// Financial sources
    Finance,
}

/// Recency window applied to results
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum TimeRange {
    /// Past 24 hours
    Day,
    /// Past week
    Week,
    /// Past month
    Month,
    /// Past year
    Year,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enums_serialize_lowercase() {
        assert_eq!(serde_json::to_value(SearchDepth::Advanced).unwrap(), "advanced");
        assert_eq!(serde_json::to_value(Topic::News).unwrap(), "news");
        assert_eq!(serde_json::to_value(TimeRange::Week).unwrap(), "week");
    }

    #[test]
    fn defaults_match_api_defaults() {
        assert_eq!(SearchDepth::default(), SearchDepth::Basic);
        assert_eq!(Topic::default(), Topic::General);
    }
}

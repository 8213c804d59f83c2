/// Heuristic analysis: summary, keyword sentiment and insights.
///
/// Everything here is a pure function of the extracted [`PageContent`].
/// Keyword matching is plain substring search with no word boundaries, so
/// "challenge" also counts inside "unchallenged".
use regex::Regex;
use std::sync::OnceLock;

use crate::analysis_data::{AnalysisResult, SentimentLabel, SentimentResult};
use crate::page::{PageContent, PageType};
use crate::text::{sentences_longer_than, space_token_count};

pub const POSITIVE_WORDS: [&str; 10] = [
    "great",
    "excellent",
    "amazing",
    "successful",
    "achieved",
    "growth",
    "opportunity",
    "excited",
    "proud",
    "innovative",
];

pub const NEGATIVE_WORDS: [&str; 8] = [
    "difficult",
    "challenge",
    "problem",
    "unfortunately",
    "failed",
    "issue",
    "concern",
    "disappointing",
];

pub const PROFESSIONAL_TERMS: [&str; 23] = [
    "management",
    "leadership",
    "strategy",
    "marketing",
    "sales",
    "technology",
    "engineering",
    "design",
    "finance",
    "operations",
    "consulting",
    "innovation",
    "development",
    "analytics",
    "project",
    "team",
    "business",
    "startup",
    "entrepreneur",
    "ai",
    "machine learning",
    "data science",
    "software",
];

pub const LIMITED_PROFILE_SUMMARY: &str = "This LinkedIn profile contains limited information.";

/// How many matched terms make it into summaries and insights
const TOP_TERMS: usize = 3;

/// Run the full analysis over extracted content
pub fn analyze_content(content: &PageContent, timestamp: String) -> AnalysisResult {
    let lowered = content.text.to_lowercase();

    AnalysisResult {
        summary: generate_summary(content),
        sentiment: analyze_sentiment(&lowered),
        insights: generate_insights(content),
        timestamp,
    }
}

/// Professional terms found in `text`, in list order. Callers pass
/// lowercased text.
pub fn extract_professional_terms(text: &str) -> Vec<&'static str> {
    PROFESSIONAL_TERMS
        .iter()
        .copied()
        .filter(|term| text.contains(term))
        .collect()
}

fn top_terms(text: &str) -> Vec<&'static str> {
    extract_professional_terms(&text.to_lowercase())
        .into_iter()
        .take(TOP_TERMS)
        .collect()
}

pub fn generate_summary(content: &PageContent) -> String {
    let text = content.text.as_str();

    match content.page_type {
        PageType::Profile => summarize_profile(text),
        PageType::Feed => summarize_feed(text),
        PageType::Post => summarize_post(text),
        PageType::Other => summarize_general(text),
    }
}

fn summarize_profile(text: &str) -> String {
    if space_token_count(text) < 10 {
        return LIMITED_PROFILE_SUMMARY.to_string();
    }

    let first_sentence = text.split('.').next().unwrap_or_default();

    format!(
        "Professional profile featuring {}. {}.",
        top_terms(text).join(", "),
        first_sentence
    )
}

fn summarize_feed(text: &str) -> String {
    format!(
        "LinkedIn feed containing {} posts covering professional updates, industry insights, and networking activities.",
        feed_segment_count(text)
    )
}

fn summarize_post(text: &str) -> String {
    let first = sentences_longer_than(text, 5)
        .first()
        .map(|s| s.trim())
        .unwrap_or_default();

    format!("{}.", first)
}

fn summarize_general(text: &str) -> String {
    let joined = sentences_longer_than(text, 10)
        .into_iter()
        .take(2)
        .collect::<Vec<_>>()
        .join(". ");

    format!("{}.", joined.trim())
}

fn feed_break() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?:[A-Za-z0-9_]+\s+[A-Za-z0-9_]+\s+posted|shared)")
            .expect("feed break pattern is valid")
    })
}

/// Rough post count for a feed.
///
/// Splits before every position (other than the start) where two words
/// followed by "posted", or the word "shared", begin. Every character of the
/// first name in "John Smith posted" is such a position, so the count
/// overshoots; it is an approximation and is reported as-is.
pub fn feed_segment_count(text: &str) -> usize {
    let breaks = text
        .char_indices()
        .skip(1)
        .filter(|(idx, _)| feed_break().is_match(&text[*idx..]))
        .count();

    breaks + 1
}

/// Keyword sentiment over lowercased text. Scores grow with the number of
/// matched words and are deliberately left unclamped.
pub fn analyze_sentiment(text: &str) -> SentimentResult {
    let positive = POSITIVE_WORDS.iter().filter(|w| text.contains(*w)).count();
    let negative = NEGATIVE_WORDS.iter().filter(|w| text.contains(*w)).count();

    if positive > negative {
        SentimentResult {
            label: SentimentLabel::Positive,
            score: 0.7 + positive as f64 * 0.05,
        }
    } else if negative > positive {
        SentimentResult {
            label: SentimentLabel::Negative,
            score: 0.6 + negative as f64 * 0.05,
        }
    } else {
        SentimentResult {
            label: SentimentLabel::Neutral,
            score: 0.5,
        }
    }
}

pub fn generate_insights(content: &PageContent) -> Vec<String> {
    let text = content.text.to_lowercase();
    let mut insights = vec![
        format!("Page type: {}", content.page_type.capitalized()),
        format!("Content length: {} words", space_token_count(&content.text)),
    ];

    let terms = top_terms(&text);
    if !terms.is_empty() {
        insights.push(format!("Key topics: {}", terms.join(", ")));
    }

    if text.contains("posted") || text.contains("shared") {
        insights.push("Recent activity detected".to_string());
    }

    if text.contains("connection") || text.contains("network") {
        insights.push("Networking content present".to_string());
    }

    insights
}

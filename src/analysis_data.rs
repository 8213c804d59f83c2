/// Data structures for analysis results
use serde::{Deserialize, Serialize};

/// Sentiment polarity. Labels this build does not know decode as neutral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
        }
    }
}

impl From<String> for SentimentLabel {
    fn from(label: String) -> Self {
        match label.as_str() {
            "positive" => SentimentLabel::Positive,
            "negative" => SentimentLabel::Negative,
            "neutral" => SentimentLabel::Neutral,
            other => {
                log::warn!("Unknown sentiment label {:?}, treating as neutral", other);
                SentimentLabel::Neutral
            }
        }
    }
}

impl From<SentimentLabel> for &'static str {
    fn from(label: SentimentLabel) -> Self {
        label.as_str()
    }
}

/// Keyword sentiment. `score` is a heuristic confidence and is not clamped
/// to [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub label: SentimentLabel,
    pub score: f64,
}

/// One completed analysis; the unit cached by the popup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub summary: String,
    pub sentiment: SentimentResult,
    pub insights: Vec<String>,
    /// ISO-8601, e.g. "2024-10-28T10:30:00.000Z"
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> AnalysisResult {
        AnalysisResult {
            summary: "LinkedIn feed containing 3 posts.".to_string(),
            sentiment: SentimentResult {
                label: SentimentLabel::Positive,
                score: 0.8,
            },
            insights: vec!["Page type: Feed".to_string(), "Content length: 42 words".to_string()],
            timestamp: "2024-10-28T10:30:00.000Z".to_string(),
        }
    }

    #[test]
    fn test_wire_format() {
        let json = serde_json::to_value(sample_result()).unwrap();

        assert_eq!(json["summary"], "LinkedIn feed containing 3 posts.");
        assert_eq!(json["sentiment"]["label"], "positive");
        assert_eq!(json["sentiment"]["score"], 0.8);
        assert_eq!(json["insights"][1], "Content length: 42 words");
        assert_eq!(json["timestamp"], "2024-10-28T10:30:00.000Z");
    }

    #[test]
    fn test_serialization() {
        let result = sample_result();
        let json = serde_json::to_string(&result).unwrap();
        let deserialized: AnalysisResult = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, result);
    }

    #[test]
    fn test_unknown_label_decodes_as_neutral() {
        let sentiment: SentimentResult =
            serde_json::from_str(r#"{"label": "ecstatic", "score": 0.95}"#).unwrap();
        assert_eq!(sentiment.label, SentimentLabel::Neutral);
        assert_eq!(sentiment.score, 0.95);
    }
}

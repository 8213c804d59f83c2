/// Result widgets for the popup

use yew::prelude::*;
use crate::analysis_data::{SentimentLabel, SentimentResult};

/// How a sentiment label is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentimentDisplay {
    pub emoji: &'static str,
    pub text: &'static str,
    pub class: &'static str,
}

pub fn sentiment_display(label: SentimentLabel) -> SentimentDisplay {
    match label {
        SentimentLabel::Positive => SentimentDisplay {
            emoji: "😊",
            text: "Positive",
            class: "sentiment-positive",
        },
        SentimentLabel::Negative => SentimentDisplay {
            emoji: "😔",
            text: "Negative",
            class: "sentiment-negative",
        },
        SentimentLabel::Neutral => SentimentDisplay {
            emoji: "😐",
            text: "Neutral",
            class: "sentiment-neutral",
        },
    }
}

/// Score as a percentage with one decimal. Scores above 1.0 show as >100%.
pub fn confidence_text(score: f64) -> String {
    format!("Confidence: {:.1}%", score * 100.0)
}

#[derive(Properties, PartialEq)]
pub struct SentimentBadgeProps {
    pub sentiment: SentimentResult,
}

#[function_component(SentimentBadge)]
pub fn sentiment_badge(props: &SentimentBadgeProps) -> Html {
    let display = sentiment_display(props.sentiment.label);

    html! {
        <div class="sentiment-container">
            <span id="sentiment-badge" class={classes!("sentiment-badge", display.class)}>
                {format!("{} {}", display.emoji, display.text)}
            </span>
            <p id="sentiment-details" class="sentiment-details">
                {confidence_text(props.sentiment.score)}
            </p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct InsightListProps {
    pub insights: Vec<String>,
}

#[function_component(InsightList)]
pub fn insight_list(props: &InsightListProps) -> Html {
    html! {
        <ul id="insights" class="insights-list">
            {for props.insights.iter().map(|insight| html! {
                <li class="insight-item">{insight}</li>
            })}
        </ul>
    }
}

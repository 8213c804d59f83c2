/// CSS selector groups used to pull text out of LinkedIn markup.
///
/// These are the extension's only coupling to LinkedIn's DOM, so they live
/// in data rather than code. The defaults below can be overridden by writing
/// a JSON object under [`SELECTORS_STORAGE_KEY`] in `chrome.storage.local`;
/// groups missing from the override keep their defaults.
use serde::{Deserialize, Serialize};

use crate::error::AnalyzerError;
use crate::page::PageType;

pub const SELECTORS_STORAGE_KEY: &str = "linkedinSelectors";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    pub profile: Vec<String>,
    pub feed: Vec<String>,
    pub post: Vec<String>,
}

impl SelectorConfig {
    pub fn from_json(json: &str) -> Result<SelectorConfig, AnalyzerError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Selector list for a page type; `None` for pages that fall back to
    /// whole-page text
    pub fn for_page(&self, page_type: PageType) -> Option<&[String]> {
        match page_type {
            PageType::Profile => Some(&self.profile),
            PageType::Feed => Some(&self.feed),
            PageType::Post => Some(&self.post),
            PageType::Other => None,
        }
    }
}

fn owned(selectors: &[&str]) -> Vec<String> {
    selectors.iter().map(|s| s.to_string()).collect()
}

impl Default for SelectorConfig {
    fn default() -> Self {
        SelectorConfig {
            profile: owned(&[
                ".text-heading-xlarge",          // name
                ".text-body-medium.break-words", // headline
                ".display-flex.ph5.pv3",         // about
                ".pvs-list__outer-container",    // experience, education
                ".artdeco-card.pv3.ph3",         // skills
            ]),
            feed: owned(&[
                ".feed-shared-text span[dir=\"ltr\"]",
                ".feed-shared-header__title",
                ".feed-shared-text .break-words",
                ".feed-shared-article__title",
            ]),
            post: owned(&[
                ".feed-shared-text span[dir=\"ltr\"]",
                ".feed-shared-header__title",
                ".feed-shared-article__title",
                ".feed-shared-article__description",
            ]),
        }
    }
}

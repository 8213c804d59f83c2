/// Page location parsing and page-type detection for LinkedIn pages
use serde::{Deserialize, Serialize};
use url::Url;

/// Host substring that marks a page or tab as analyzable
pub const LINKEDIN_HOST: &str = "linkedin.com";

/// What kind of LinkedIn page we are looking at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageType {
    Profile,
    Feed,
    Post,
    Other,
}

impl PageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageType::Profile => "profile",
            PageType::Feed => "feed",
            PageType::Post => "post",
            PageType::Other => "other",
        }
    }

    /// Display form used in insights ("Profile", "Feed", ...)
    pub fn capitalized(&self) -> &'static str {
        match self {
            PageType::Profile => "Profile",
            PageType::Feed => "Feed",
            PageType::Post => "Post",
            PageType::Other => "Other",
        }
    }
}

/// Classify a page by its URL path
///
/// Rules, first match wins:
/// 1. path contains "/in/"    → profile
/// 2. path contains "/feed/"  → feed
/// 3. path contains "/posts/" → post
/// 4. path is "/" or "/feed"  → feed
/// 5. anything else           → other
pub fn detect_page_type(path: &str) -> PageType {
    if path.contains("/in/") {
        PageType::Profile
    } else if path.contains("/feed/") {
        PageType::Feed
    } else if path.contains("/posts/") {
        PageType::Post
    } else if path == "/" || path == "/feed" {
        PageType::Feed
    } else {
        PageType::Other
    }
}

/// Substring check used by both contexts; "linkedin.com.evil.io" passes too
pub fn is_linkedin(host_or_url: &str) -> bool {
    host_or_url.contains(LINKEDIN_HOST)
}

/// The parts of `window.location` the analyzer cares about
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLocation {
    pub href: String,
    pub hostname: String,
    pub path: String,
}

impl PageLocation {
    /// Parse a full href. Unparseable input keeps the href but has an empty
    /// hostname and path, so it is neither LinkedIn nor a known page type.
    pub fn parse(href: &str) -> PageLocation {
        match Url::parse(href.trim()) {
            Ok(parsed) => PageLocation {
                href: href.to_string(),
                hostname: parsed.host_str().unwrap_or_default().to_lowercase(),
                path: parsed.path().to_string(),
            },
            Err(e) => {
                log::warn!("Could not parse page URL {:?}: {}", href, e);
                PageLocation {
                    href: href.to_string(),
                    hostname: String::new(),
                    path: String::new(),
                }
            }
        }
    }

    pub fn is_linkedin(&self) -> bool {
        is_linkedin(&self.hostname)
    }

    pub fn page_type(&self) -> PageType {
        detect_page_type(&self.path)
    }
}

/// Text pulled from the page for one analysis run; never persisted
#[derive(Debug, Clone, PartialEq)]
pub struct PageContent {
    pub page_type: PageType,
    pub text: String,
    pub title: String,
    pub url: String,
}

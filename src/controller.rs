/// Popup flow: show the cached analysis or ask the active tab for a new one
use serde::Deserialize;

use crate::analysis_data::AnalysisResult;
use crate::error::AnalyzerError;
use crate::message::{Request, Response};
use crate::page::is_linkedin;

/// The subset of `chrome.tabs.Tab` the popup needs
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ActiveTab {
    pub id: i32,
    #[serde(default)]
    pub url: String,
}

/// Browser services the popup depends on
#[allow(async_fn_in_trait)]
pub trait ExtensionHost {
    async fn active_tab(&self) -> Result<Option<ActiveTab>, AnalyzerError>;

    async fn send_request(&self, tab_id: i32, request: Request) -> Result<Response, AnalyzerError>;

    async fn load_cached(&self) -> Result<Option<AnalysisResult>, AnalyzerError>;

    /// Overwrites any previously cached result
    async fn store_cached(&self, result: &AnalysisResult) -> Result<(), AnalyzerError>;
}

/// What the popup should display
#[derive(Debug, Clone, PartialEq)]
pub enum PopupView {
    Loading,
    Error,
    Results(AnalysisResult),
}

pub struct PopupController<H> {
    host: H,
}

impl<H: ExtensionHost> PopupController<H> {
    pub fn new(host: H) -> Self {
        PopupController { host }
    }

    /// Popup opened: cached result if there is one, fresh analysis otherwise
    pub async fn load(&self) -> PopupView {
        match self.host.load_cached().await {
            Ok(Some(cached)) => {
                log::debug!("Showing cached analysis from {}", cached.timestamp);
                PopupView::Results(cached)
            }
            Ok(None) => self.analyze_current_page().await,
            Err(e) => {
                log::error!("Error loading analysis: {}", e);
                PopupView::Error
            }
        }
    }

    /// Re-analyze. Errors are logged; the view only says that it failed.
    pub async fn analyze_current_page(&self) -> PopupView {
        match self.fresh_analysis().await {
            Ok(result) => PopupView::Results(result),
            Err(e) => {
                log::error!("Error analyzing page: {}", e);
                PopupView::Error
            }
        }
    }

    async fn fresh_analysis(&self) -> Result<AnalysisResult, AnalyzerError> {
        let tab = self
            .host
            .active_tab()
            .await?
            .ok_or_else(|| AnalyzerError::Channel("no active tab".to_string()))?;

        if !is_linkedin(&tab.url) {
            return Err(AnalyzerError::wrong_site(tab.url));
        }

        let result = self
            .host
            .send_request(tab.id, Request::Analyze)
            .await?
            .into_result()?;

        self.host.store_cached(&result).await?;

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis_data::{SentimentLabel, SentimentResult};
    use std::cell::{Cell, RefCell};
    use tokio_test::block_on;

    fn sample_result(summary: &str) -> AnalysisResult {
        AnalysisResult {
            summary: summary.to_string(),
            sentiment: SentimentResult {
                label: SentimentLabel::Positive,
                score: 0.85,
            },
            insights: vec!["Page type: Profile".to_string()],
            timestamp: "2024-10-28T10:30:00.000Z".to_string(),
        }
    }

    /// In-memory host that records what the controller asked for
    struct FakeHost {
        tab: Option<ActiveTab>,
        reply: Result<Response, AnalyzerError>,
        cache: RefCell<Option<AnalysisResult>>,
        fail_cache_read: bool,
        sends: Cell<usize>,
        writes: Cell<usize>,
    }

    impl FakeHost {
        fn on(url: &str) -> FakeHost {
            FakeHost {
                tab: Some(ActiveTab {
                    id: 7,
                    url: url.to_string(),
                }),
                reply: Ok(Response::Success(sample_result("fresh"))),
                cache: RefCell::new(None),
                fail_cache_read: false,
                sends: Cell::new(0),
                writes: Cell::new(0),
            }
        }
    }

    impl ExtensionHost for &FakeHost {
        async fn active_tab(&self) -> Result<Option<ActiveTab>, AnalyzerError> {
            Ok(self.tab.clone())
        }

        async fn send_request(&self, tab_id: i32, request: Request) -> Result<Response, AnalyzerError> {
            assert_eq!(tab_id, 7);
            assert_eq!(request, Request::Analyze);
            self.sends.set(self.sends.get() + 1);
            self.reply.clone()
        }

        async fn load_cached(&self) -> Result<Option<AnalysisResult>, AnalyzerError> {
            if self.fail_cache_read {
                return Err(AnalyzerError::Storage("quota".to_string()));
            }
            Ok(self.cache.borrow().clone())
        }

        async fn store_cached(&self, result: &AnalysisResult) -> Result<(), AnalyzerError> {
            self.writes.set(self.writes.get() + 1);
            *self.cache.borrow_mut() = Some(result.clone());
            Ok(())
        }
    }

    const PROFILE_URL: &str = "https://www.linkedin.com/in/jane-doe/";

    #[test]
    fn test_load_uses_cache_without_analyzing() {
        let host = FakeHost::on(PROFILE_URL);
        *host.cache.borrow_mut() = Some(sample_result("cached"));

        let view = block_on(PopupController::new(&host).load());

        assert_eq!(view, PopupView::Results(sample_result("cached")));
        assert_eq!(host.sends.get(), 0);
        assert_eq!(host.writes.get(), 0);
    }

    #[test]
    fn test_load_empty_cache_analyzes_and_stores() {
        let host = FakeHost::on(PROFILE_URL);

        let view = block_on(PopupController::new(&host).load());

        assert_eq!(view, PopupView::Results(sample_result("fresh")));
        assert_eq!(host.sends.get(), 1);
        assert_eq!(*host.cache.borrow(), Some(sample_result("fresh")));
    }

    #[test]
    fn test_cached_result_round_trips() {
        let host = FakeHost::on(PROFILE_URL);
        let controller = PopupController::new(&host);

        let first = block_on(controller.analyze_current_page());
        let reopened = block_on(controller.load());

        assert_eq!(first, reopened);
        assert_eq!(host.sends.get(), 1);
    }

    #[test]
    fn test_reanalyze_overwrites_cache() {
        let host = FakeHost::on(PROFILE_URL);
        *host.cache.borrow_mut() = Some(sample_result("stale"));

        let view = block_on(PopupController::new(&host).analyze_current_page());

        assert_eq!(view, PopupView::Results(sample_result("fresh")));
        assert_eq!(*host.cache.borrow(), Some(sample_result("fresh")));
        assert_eq!(host.writes.get(), 1);
    }

    #[test]
    fn test_non_linkedin_tab() {
        let host = FakeHost::on("https://github.com/rust-lang/rust");

        let view = block_on(PopupController::new(&host).analyze_current_page());

        assert_eq!(view, PopupView::Error);
        assert_eq!(host.sends.get(), 0);
        assert_eq!(host.writes.get(), 0);
    }

    #[test]
    fn test_no_active_tab() {
        let mut host = FakeHost::on(PROFILE_URL);
        host.tab = None;

        let view = block_on(PopupController::new(&host).analyze_current_page());

        assert_eq!(view, PopupView::Error);
        assert_eq!(host.sends.get(), 0);
    }

    #[test]
    fn test_failure_envelope() {
        let mut host = FakeHost::on(PROFILE_URL);
        host.reply = Ok(Response::Failure("Not a LinkedIn page".to_string()));

        let view = block_on(PopupController::new(&host).analyze_current_page());

        assert_eq!(view, PopupView::Error);
        assert_eq!(host.writes.get(), 0);
    }

    #[test]
    fn test_channel_failure() {
        let mut host = FakeHost::on(PROFILE_URL);
        host.reply = Err(AnalyzerError::Channel(
            "Could not establish connection. Receiving end does not exist.".to_string(),
        ));

        let view = block_on(PopupController::new(&host).analyze_current_page());

        assert_eq!(view, PopupView::Error);
        assert_eq!(host.writes.get(), 0);
    }

    #[test]
    fn test_cache_read_error_shows_error() {
        let mut host = FakeHost::on(PROFILE_URL);
        host.fail_cache_read = true;

        let view = block_on(PopupController::new(&host).load());

        assert_eq!(view, PopupView::Error);
        assert_eq!(host.sends.get(), 0);
    }

    #[test]
    fn test_active_tab_without_url() {
        let tab: ActiveTab = serde_json::from_str(r#"{"id": 3, "active": true}"#).unwrap();
        assert_eq!(tab.url, "");
    }
}

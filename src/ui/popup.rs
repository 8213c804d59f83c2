/// Popup UI for the LinkedIn analyzer extension

use yew::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use patternfly_yew::prelude::*;
use serde::Serialize;
use crate::analysis_data::AnalysisResult;
use crate::controller::{ActiveTab, ExtensionHost, PopupController, PopupView};
use crate::error::AnalyzerError;
use crate::message::{Request, Response};
use crate::storage::{self, ANALYSIS_STORAGE_KEY};
use crate::ui::components::{InsightList, SentimentBadge};

// Import JS bridge functions
#[wasm_bindgen(module = "/popup.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn getActiveTab() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn sendMessageToTab(tab_id: i32, message: JsValue) -> Result<JsValue, JsValue>;
}

/// [`ExtensionHost`] backed by the chrome.* APIs
#[derive(Clone, Copy)]
pub struct ChromeHost;

impl ExtensionHost for ChromeHost {
    async fn active_tab(&self) -> Result<Option<ActiveTab>, AnalyzerError> {
        let tab_js = getActiveTab()
            .await
            .map_err(|e| AnalyzerError::Channel(format!("tab query failed: {:?}", e)))?;

        if tab_js.is_null() || tab_js.is_undefined() {
            return Ok(None);
        }

        Ok(Some(serde_wasm_bindgen::from_value(tab_js)?))
    }

    async fn send_request(&self, tab_id: i32, request: Request) -> Result<Response, AnalyzerError> {
        let message = request.serialize(&serde_wasm_bindgen::Serializer::json_compatible())?;

        let reply = sendMessageToTab(tab_id, message)
            .await
            .map_err(|e| AnalyzerError::Channel(format!("{:?}", e)))?;

        if reply.is_null() || reply.is_undefined() {
            return Err(AnalyzerError::Channel("no response from page".to_string()));
        }

        Ok(serde_wasm_bindgen::from_value(reply)?)
    }

    async fn load_cached(&self) -> Result<Option<AnalysisResult>, AnalyzerError> {
        storage::load(ANALYSIS_STORAGE_KEY).await
    }

    async fn store_cached(&self, result: &AnalysisResult) -> Result<(), AnalyzerError> {
        storage::save(ANALYSIS_STORAGE_KEY, result).await
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let view = use_state(|| PopupView::Loading);

    // Show the cached analysis, or run one, on mount
    {
        let view = view.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                view.set(PopupController::new(ChromeHost).load().await);
            });
            || ()
        });
    }

    // Re-analyze handler
    let on_analyze = {
        let view = view.clone();

        Callback::from(move |_: MouseEvent| {
            let view = view.clone();

            view.set(PopupView::Loading);

            spawn_local(async move {
                view.set(PopupController::new(ChromeHost).analyze_current_page().await);
            });
        })
    };

    let is_busy = matches!(*view, PopupView::Loading);

    html! {
        <div class="padding-20">
            <h1 class="popup-title">{"LinkedIn Analyzer"}</h1>

            {match &*view {
                PopupView::Loading => html! {
                    <div id="loading" class="loading-text-center">
                        <Spinner />
                        <p class="loading-text">{"Analyzing page..."}</p>
                    </div>
                },
                PopupView::Error => html! {
                    <div id="error" class="message-top-margin">
                        <Alert r#type={AlertType::Danger} title={"Unable to analyze this page"} inline={true}>
                            {"Open a LinkedIn profile, feed or post and try again."}
                        </Alert>
                    </div>
                },
                PopupView::Results(result) => html! {
                    <div id="results" class="flex-column-gap">
                        <section>
                            <h2 class="section-title">{"Summary"}</h2>
                            <p id="summary" class="summary-text">{&result.summary}</p>
                        </section>
                        <section>
                            <h2 class="section-title">{"Sentiment"}</h2>
                            <SentimentBadge sentiment={result.sentiment.clone()} />
                        </section>
                        <section>
                            <h2 class="section-title">{"Insights"}</h2>
                            <InsightList insights={result.insights.clone()} />
                        </section>
                    </div>
                },
            }}

            <div class="analyze-action">
                <Button onclick={on_analyze} disabled={is_busy} variant={ButtonVariant::Primary} block={true}>
                    {"🔄 Re-analyze Page"}
                </Button>
            </div>

            <p class="footer-popup">
                {"LinkedIn Analyzer v0.1.0"}
            </p>
        </div>
    }
}

/// Content-script side: reads the LinkedIn page and answers analyze requests
use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::analysis::analyze_content;
use crate::analysis_data::AnalysisResult;
use crate::error::AnalyzerError;
use crate::extract::{PageSource, extract_page_content};
use crate::message::{Request, Response};
use crate::page::PageLocation;
use crate::selectors::{SELECTORS_STORAGE_KEY, SelectorConfig};
use crate::storage;

// Import JS bridge functions
#[wasm_bindgen(module = "/content.js")]
extern "C" {
    fn addMessageListener(handler: &Closure<dyn FnMut(JsValue) -> JsValue>);
}

/// Extracts and analyzes the current page
pub struct PageAnalyzer {
    selectors: SelectorConfig,
}

impl PageAnalyzer {
    pub fn new(selectors: SelectorConfig) -> PageAnalyzer {
        PageAnalyzer { selectors }
    }

    /// Fails only when the page is not on linkedin.com; an empty page still
    /// produces a (thin) result
    pub fn analyze<S: PageSource + ?Sized>(
        &self,
        source: &S,
        timestamp: String,
    ) -> Result<AnalysisResult, AnalyzerError> {
        let location = PageLocation::parse(&source.href());
        if !location.is_linkedin() {
            return Err(AnalyzerError::wrong_site(location.hostname));
        }

        let content = extract_page_content(source, &location, &self.selectors);
        let result = analyze_content(&content, timestamp);

        log::info!(
            "Analyzed {} page: {} sentiment, {} insights",
            content.page_type.as_str(),
            result.sentiment.label.as_str(),
            result.insights.len()
        );

        Ok(result)
    }
}

impl Default for PageAnalyzer {
    fn default() -> Self {
        Self::new(SelectorConfig::default())
    }
}

/// [`PageSource`] over the live DOM
pub struct DomPage {
    window: Window,
    document: Document,
}

impl DomPage {
    pub fn current() -> Result<DomPage, AnalyzerError> {
        let window = web_sys::window().ok_or(AnalyzerError::NoDocument)?;
        let document = window.document().ok_or(AnalyzerError::NoDocument)?;
        Ok(DomPage { window, document })
    }
}

/// innerText when rendered, textContent otherwise
fn element_text(element: &Element) -> String {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        let rendered = html.inner_text();
        if !rendered.is_empty() {
            return rendered;
        }
    }
    element.text_content().unwrap_or_default()
}

impl PageSource for DomPage {
    fn href(&self) -> String {
        self.window.location().href().unwrap_or_default()
    }

    fn title(&self) -> String {
        self.document.title()
    }

    fn select_texts(&self, selector: &str) -> Vec<String> {
        match self.document.query_selector_all(selector) {
            Ok(nodes) => (0..nodes.length())
                .filter_map(|i| nodes.item(i))
                .filter_map(|node| node.dyn_into::<Element>().ok())
                .map(|element| element_text(&element))
                .collect(),
            Err(e) => {
                log::warn!("Invalid selector {:?}: {:?}", selector, e);
                Vec::new()
            }
        }
    }

    fn main_text(&self) -> String {
        let main = self.document.query_selector("main").ok().flatten();
        let region: Option<Element> = main.or_else(|| self.document.body().map(Element::from));

        region
            .as_ref()
            .and_then(|el| el.dyn_ref::<HtmlElement>())
            .map(|el| el.inner_text())
            .unwrap_or_default()
    }
}

fn now_iso() -> String {
    js_sys::Date::new_0().to_iso_string().into()
}

async fn handle_request(request: Request) -> Response {
    match request {
        Request::Analyze => {
            let selectors = storage::selectors_or_default(storage::load(SELECTORS_STORAGE_KEY).await);
            let analyzer = PageAnalyzer::new(selectors);

            let result = DomPage::current().and_then(|page| analyzer.analyze(&page, now_iso()));
            if let Err(e) = &result {
                log::error!("Analysis error: {}", e);
            }

            result.into()
        }
    }
}

/// Register the runtime message listener. Lives for the page's lifetime.
///
/// Recognized requests get a Promise, which keeps the response channel
/// open until the analysis resolves; anything else gets `undefined` so other
/// listeners can answer.
pub fn listen() {
    let handler = Closure::<dyn FnMut(JsValue) -> JsValue>::new(|message: JsValue| {
        let request = match serde_wasm_bindgen::from_value::<Request>(message) {
            Ok(request) => request,
            Err(_) => return JsValue::UNDEFINED,
        };

        future_to_promise(async move {
            let response = handle_request(request).await;
            response
                .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
                .map_err(|e| JsValue::from_str(&e.to_string()))
        })
        .into()
    });

    addMessageListener(&handler);
    handler.forget();

    log::info!("LinkedIn analyzer listening for requests");
}

/// LinkedIn Analyzer - Chrome Extension that summarizes LinkedIn pages
/// Built with Rust + WASM + Yew

mod analysis;
mod analysis_data;
mod content;
mod controller;
mod error;
mod extract;
mod message;
mod page;
mod selectors;
mod storage;
mod text;
pub mod ui;

pub use analysis_data::{AnalysisResult, SentimentLabel, SentimentResult};
pub use content::{DomPage, PageAnalyzer};
pub use error::AnalyzerError;
pub use extract::PageSource;
pub use message::{Request, Response};
pub use page::{PageType, detect_page_type};
pub use selectors::SelectorConfig;

use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Re-export page classification for JavaScript access
#[wasm_bindgen]
pub fn page_type_for_path(path: &str) -> String {
    detect_page_type(path).as_str().to_string()
}

// Start the Yew app for the popup
#[wasm_bindgen]
pub fn start_popup() {
    yew::Renderer::<ui::popup::App>::new().render();
}

// Register the analyzer in a LinkedIn tab
#[wasm_bindgen]
pub fn start_content_script() {
    content::listen();
}

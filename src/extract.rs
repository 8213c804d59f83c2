/// Bounded text extraction from a page
use crate::page::{PageContent, PageLocation, PageType};
use crate::selectors::SelectorConfig;
use crate::text::{collapse_whitespace, truncate_utf16};

/// Hard cap on extracted text, in UTF-16 code units
pub const MAX_CONTENT_UNITS: usize = 3000;

/// Read-only view of the current document.
///
/// The content script implements this over `web_sys::Document`; tests back
/// it with static HTML.
pub trait PageSource {
    fn href(&self) -> String;

    fn title(&self) -> String;

    /// Text of every element matching `selector`, in document order.
    /// An invalid selector matches nothing.
    fn select_texts(&self, selector: &str) -> Vec<String>;

    /// Text of the `main` element, or of the body when there is none
    fn main_text(&self) -> String;
}

/// Concatenate the trimmed text of every match of every selector,
/// space-separated, then trim and cap the result
pub fn extract_text_from_selectors<S: PageSource + ?Sized>(source: &S, selectors: &[String]) -> String {
    let mut text = String::new();

    for selector in selectors {
        for element_text in source.select_texts(selector) {
            let trimmed = element_text.trim();
            if !trimmed.is_empty() {
                text.push_str(trimmed);
                text.push(' ');
            }
        }
    }

    truncate_utf16(text.trim(), MAX_CONTENT_UNITS).to_string()
}

/// Fallback for pages without a selector group
pub fn extract_general_content<S: PageSource + ?Sized>(source: &S) -> String {
    let collapsed = collapse_whitespace(&source.main_text());
    truncate_utf16(&collapsed, MAX_CONTENT_UNITS).to_string()
}

/// Build the [`PageContent`] for one analysis run
pub fn extract_page_content<S: PageSource + ?Sized>(
    source: &S,
    location: &PageLocation,
    selectors: &SelectorConfig,
) -> PageContent {
    let page_type = location.page_type();

    let text = match selectors.for_page(page_type) {
        Some(group) => extract_text_from_selectors(source, group),
        None => extract_general_content(source),
    };

    log::debug!(
        "Extracted {} chars from {} page",
        text.chars().count(),
        page_type.as_str()
    );

    PageContent {
        page_type,
        text,
        title: source.title(),
        url: location.href.clone(),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::PageSource;
    use scraper::{Html, Selector};

    /// `PageSource` over a static HTML string
    pub struct HtmlPage {
        pub href: String,
        pub document: Html,
    }

    impl HtmlPage {
        pub fn new(href: &str, html: &str) -> HtmlPage {
            HtmlPage {
                href: href.to_string(),
                document: Html::parse_document(html),
            }
        }

        fn element_text(&self, selector: &str) -> Option<String> {
            let sel = Selector::parse(selector).ok()?;
            let element = self.document.select(&sel).next()?;
            Some(element.text().collect())
        }
    }

    impl PageSource for HtmlPage {
        fn href(&self) -> String {
            self.href.clone()
        }

        fn title(&self) -> String {
            self.element_text("title").unwrap_or_default()
        }

        fn select_texts(&self, selector: &str) -> Vec<String> {
            match Selector::parse(selector) {
                Ok(sel) => self
                    .document
                    .select(&sel)
                    .map(|el| el.text().collect())
                    .collect(),
                Err(_) => Vec::new(),
            }
        }

        fn main_text(&self) -> String {
            self.element_text("main")
                .or_else(|| self.element_text("body"))
                .unwrap_or_default()
        }
    }
}

//! Parsed page handle and text helpers shared by every extraction stage.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::error::ExtractError;

static META_DESCRIPTION: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"meta[name="description"]"#).expect("META_DESCRIPTION should compile")
});
static SEARCH_INPUT: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"input[type="search"]"#).expect("SEARCH_INPUT should compile")
});

/// Immutable parsed document, alive for one extraction call.
pub struct Page {
    document: Html,
}

impl Page {
    pub fn parse(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
        }
    }

    pub fn document(&self) -> &Html {
        &self.document
    }

    /// First element matching `selector`
    pub fn select_first(&self, selector: &Selector) -> Option<ElementRef<'_>> {
        self.document.select(selector).next()
    }

    /// Raw `content` of `<meta name="description">`
    pub fn meta_description(&self) -> Option<&str> {
        self.select_first(&META_DESCRIPTION)
            .and_then(|meta| meta.value().attr("content"))
    }

    /// The word the page was generated for, as echoed by its search box.
    pub fn search_term(&self) -> Result<String, ExtractError> {
        self.select_first(&SEARCH_INPUT)
            .and_then(|input| input.value().attr("value"))
            .map(normalize_whitespace)
            .ok_or(ExtractError::MissingElement("search box value"))
    }

    /// For every text node containing `needle`, the element enclosing the
    /// text's parent element, in document order. The entry is `None` when
    /// the parent sits directly under the document root.
    pub fn blocks_around_text(&self, needle: &str) -> Vec<Option<ElementRef<'_>>> {
        self.document
            .root_element()
            .descendants()
            .filter(|node| node.value().as_text().is_some_and(|text| text.contains(needle)))
            .map(|node| {
                node.parent()
                    .and_then(|parent| parent.parent())
                    .and_then(ElementRef::wrap)
            })
            .collect()
    }
}

/// Collapse every whitespace run into one space and trim both ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// All text below `element`, whitespace-normalized
pub fn element_text(element: ElementRef<'_>) -> String {
    normalize_whitespace(&element.text().collect::<String>())
}

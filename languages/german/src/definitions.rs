use std::sync::LazyLock;

use scraper::{ElementRef, Selector};
use wort_core::{ExtractError, Page, normalize_whitespace};

static CONTENT_SECTION: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".rAbschnitt").expect("CONTENT_SECTION should compile"));
static ENGLISH_MARKER: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"img[alt="English"]"#).expect("ENGLISH_MARKER should compile")
});

/// English glosses, primary first. Empty when the page has none.
pub fn extract_definitions(page: &Page) -> Result<Vec<String>, ExtractError> {
    let section = page
        .select_first(&CONTENT_SECTION)
        .ok_or(ExtractError::MissingElement("content section"))?;

    let Some(marker) = section.select(&ENGLISH_MARKER).next() else {
        return Ok(Vec::new());
    };
    let Some(container) = marker.parent().and_then(ElementRef::wrap) else {
        return Ok(Vec::new());
    };

    Ok(container
        .text()
        .collect::<String>()
        .split(',')
        .map(normalize_whitespace)
        .filter(|gloss| !gloss.is_empty())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_glosses_on_commas() {
        let page = Page::parse(
            r#"<html><body><section class="rAbschnitt">
                <p lang="en"><img src="en.svg" alt="English"> <span>recommend to do,
                guess,  advise</span></p>
            </section></body></html>"#,
        );
        assert_eq!(
            extract_definitions(&page).unwrap(),
            ["recommend to do", "guess", "advise"]
        );
    }

    #[test]
    fn no_english_marker_means_no_glosses() {
        let page = Page::parse(
            r#"<html><body><section class="rAbschnitt"><p><img alt="Spanish"> chica</p></section></body></html>"#,
        );
        assert!(extract_definitions(&page).unwrap().is_empty());
    }

    #[test]
    fn content_section_is_required() {
        let page = Page::parse("<html><body><p>girl</p></body></html>");
        assert_eq!(
            extract_definitions(&page),
            Err(ExtractError::MissingElement("content section"))
        );
    }
}

use wort_core::{ExtractError, Page};
use wort_types::PartOfSpeech;

const NOT_FOUND_MARKER: &str = "List of all words starting with the text";

/// Metadata markers, tested in order after the not-found marker
const ENTRY_MARKERS: [(&str, PartOfSpeech); 3] = [
    ("Declension of noun", PartOfSpeech::Noun),
    ("Conjugation German verb", PartOfSpeech::Verb),
    ("Declension and comparison of", PartOfSpeech::Adjective),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    NotFound,
    Entry(PartOfSpeech),
}

/// Decide what kind of page this is from its description metadata.
pub fn classify(page: &Page) -> Result<PageKind, ExtractError> {
    let metadata = page
        .meta_description()
        .ok_or(ExtractError::MissingElement("description metadata"))?;

    if metadata.contains(NOT_FOUND_MARKER) {
        return Ok(PageKind::NotFound);
    }

    ENTRY_MARKERS
        .iter()
        .find(|(marker, _)| metadata.contains(marker))
        .map(|(_, pos)| PageKind::Entry(*pos))
        .ok_or_else(|| ExtractError::Classification {
            metadata: metadata.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_with_meta(content: &str) -> Page {
        Page::parse(&format!(
            r#"<html><head><meta name="description" content="{content}"></head><body></body></html>"#
        ))
    }

    #[test]
    fn classifies_by_metadata_marker() {
        let cases = [
            ("Declension of noun Mädchen with plural and article", PageKind::Entry(PartOfSpeech::Noun)),
            ("Conjugation German verb holen: present, past", PageKind::Entry(PartOfSpeech::Verb)),
            ("Declension and comparison of German adjective glücklich", PageKind::Entry(PartOfSpeech::Adjective)),
            ("List of all words starting with the text zzz", PageKind::NotFound),
        ];
        for (content, expected) in cases {
            assert_eq!(classify(&page_with_meta(content)).unwrap(), expected, "{content}");
        }
    }

    #[test]
    fn not_found_marker_wins() {
        let page = page_with_meta("List of all words starting with the text Declension of noun");
        assert_eq!(classify(&page).unwrap(), PageKind::NotFound);
    }

    #[test]
    fn unknown_metadata_is_an_error() {
        let page = page_with_meta("German grammar overview");
        assert_eq!(
            classify(&page),
            Err(ExtractError::Classification {
                metadata: "German grammar overview".to_string()
            })
        );
    }

    #[test]
    fn missing_metadata_is_an_error() {
        let page = Page::parse("<html><body></body></html>");
        assert_eq!(
            classify(&page),
            Err(ExtractError::MissingElement("description metadata"))
        );
    }
}

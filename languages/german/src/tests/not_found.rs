use wort_core::Page;
use wort_types::{NotFound, Record};

use super::{fixture, parse_fixture};
use crate::{PageKind, classify};

#[test]
fn zzz_is_not_found() {
    assert_eq!(
        parse_fixture("zzz"),
        Record::NotFound(NotFound {
            search: "zzz".to_string()
        })
    );
}

#[test]
fn not_found_page_has_no_description() {
    let page = Page::parse(&fixture("zzz"));
    assert_eq!(classify(&page).unwrap(), PageKind::NotFound);
    // would be a locator error if extraction went on
    assert!(crate::locate_description(&page, wort_types::PartOfSpeech::Noun).is_err());
}

mod not_found;
mod nouns;

use wort_core::PageParser;
use wort_types::Record;

use crate::VerbformenParser;

pub(crate) fn fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{name}.html"))
        .unwrap_or_else(|e| panic!("fixture {name} should be readable: {e}"))
}

pub(crate) fn parse_fixture(name: &str) -> Record {
    VerbformenParser::new()
        .parse_page(&fixture(name))
        .unwrap_or_else(|e| panic!("fixture {name} should parse: {e}"))
}

use wort_core::{ExtractError, Page, PageParser};
use wort_types::{NotFound, Record};

use crate::assembler::assemble;
use crate::classifier::{PageKind, classify};
use crate::definitions::extract_definitions;
use crate::grammar::extract_fields;
use crate::inflections::extract_inflections;
use crate::locator::locate_description;

/// Parser for verbformen.com word pages
#[derive(Debug, Default, Clone, Copy)]
pub struct VerbformenParser;

impl VerbformenParser {
    pub fn new() -> Self {
        Self
    }
}

impl PageParser for VerbformenParser {
    fn site(&self) -> &'static str {
        "verbformen"
    }

    fn parse_page(&self, html: &str) -> Result<Record, ExtractError> {
        let page = Page::parse(html);

        let pos = match classify(&page)? {
            PageKind::NotFound => {
                return Ok(Record::NotFound(NotFound {
                    search: page.search_term()?,
                }));
            }
            PageKind::Entry(pos) => pos,
        };

        let description = locate_description(&page, pos)?;
        let fields = extract_fields(&description, pos)?;
        let tables = extract_inflections(&page, pos)?;
        let definitions = extract_definitions(&page)?;

        assemble(pos, &fields, tables, definitions, &page.search_term()?)
    }
}

//! Inflection tables keyed by the heading text printed above them.

use std::sync::LazyLock;

use scraper::{ElementRef, Selector};
use wort_types::InflectionTable;

use crate::error::ExtractError;
use crate::page::{Page, element_text, normalize_whitespace};

static HEADING: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h2").expect("HEADING should compile"));
static ROW: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("tr").expect("ROW should compile"));
static HEADER_CELL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("th").expect("HEADER_CELL should compile"));
static DATA_CELL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("td").expect("DATA_CELL should compile"));

/// One table per requested title, in request order.
///
/// Each title selects the first `h2` whose normalized text equals it; the
/// table is the next `table` sibling of that heading.
pub fn extract_tables(page: &Page, titles: &[&str]) -> Result<Vec<InflectionTable>, ExtractError> {
    titles
        .iter()
        .map(|title| {
            let table = find_table(page, title).ok_or_else(|| ExtractError::TableNotFound {
                title: title.to_string(),
            })?;
            read_table(title, table)
        })
        .collect()
}

/// Every table must carry every key in `rows`.
pub fn require_rows(tables: &[InflectionTable], rows: &[&str]) -> Result<(), ExtractError> {
    for table in tables {
        if let Some(row) = table.missing_row(rows) {
            return Err(ExtractError::IncompleteTable {
                title: table.title.clone(),
                row: row.to_string(),
            });
        }
    }
    Ok(())
}

fn find_table<'a>(page: &'a Page, title: &str) -> Option<ElementRef<'a>> {
    let heading = page
        .document()
        .select(&HEADING)
        .find(|heading| element_text(*heading) == title)?;

    heading
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|sibling| sibling.value().name() == "table")
}

fn read_table(title: &str, table: ElementRef<'_>) -> Result<InflectionTable, ExtractError> {
    let mut inflection = InflectionTable::new(title);

    for row in table.select(&ROW) {
        let mut data = row.select(&DATA_CELL).map(element_text);

        let key = match row.select(&HEADER_CELL).next() {
            Some(header) => header
                .value()
                .attr("title")
                .map(normalize_whitespace)
                .ok_or(ExtractError::MissingElement("row label"))?,
            None => match data.next() {
                Some(key) => key,
                None => continue,
            },
        };

        let value = data.collect::<Vec<_>>().join(" ");
        inflection.rows.insert(key, value);
    }

    Ok(inflection)
}

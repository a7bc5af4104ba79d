use wort_core::{ExtractError, Page, extract_tables, require_rows};
use wort_types::{CASE_ROWS, InflectionTable, PERSON_ROWS, PartOfSpeech};

pub const NOUN_TABLES: [&str; 2] = ["Singular", "Plural"];
pub const ADJECTIVE_TABLES: [&str; 4] = ["Masculine", "Neutral", "Feminine", "Plural"];
pub const VERB_TABLES: [&str; 4] = ["Present", "Imperfect", "Present Subj.", "Imperf. Subj."];

/// Headings the page prints above each table of `pos`, and the row keys every
/// one of those tables carries.
pub fn layout(pos: PartOfSpeech) -> Result<(&'static [&'static str], &'static [&'static str]), ExtractError> {
    match pos {
        PartOfSpeech::Noun => Ok((&NOUN_TABLES, &CASE_ROWS)),
        PartOfSpeech::Adjective => Ok((&ADJECTIVE_TABLES, &CASE_ROWS)),
        PartOfSpeech::Verb => Ok((&VERB_TABLES, &PERSON_ROWS)),
        PartOfSpeech::Adverb => Err(ExtractError::UnsupportedPartOfSpeech(pos)),
    }
}

/// Declension or conjugation tables of `pos`, complete or not at all.
pub fn extract_inflections(page: &Page, pos: PartOfSpeech) -> Result<Vec<InflectionTable>, ExtractError> {
    let (titles, rows) = layout(pos)?;
    let tables = extract_tables(page, titles)?;
    require_rows(&tables, rows)?;
    Ok(tables)
}

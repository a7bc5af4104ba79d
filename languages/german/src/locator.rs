use wort_core::{ExtractError, Page, element_text};
use wort_types::PartOfSpeech;

/// Text the description paragraph of each part of speech starts with
pub fn marker(pos: PartOfSpeech) -> Result<&'static str, ExtractError> {
    match pos {
        PartOfSpeech::Noun => Ok("declension of the noun"),
        PartOfSpeech::Verb => Ok("conjugation of the verb"),
        PartOfSpeech::Adjective => Ok("declension of the adjective"),
        PartOfSpeech::Adverb => Err(ExtractError::UnsupportedPartOfSpeech(pos)),
    }
}

/// The single prose paragraph describing the word, whitespace-normalized.
pub fn locate_description(page: &Page, pos: PartOfSpeech) -> Result<String, ExtractError> {
    let marker = marker(pos)?;
    let blocks = page.blocks_around_text(marker);

    match blocks.as_slice() {
        [Some(block)] => Ok(element_text(*block)),
        _ => Err(ExtractError::Locator {
            marker,
            found: blocks.len(),
        }),
    }
}

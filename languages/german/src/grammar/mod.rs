//! Description templates, one per part of speech.
//!
//! Every template captures the headword as `text`; the noun and verb
//! templates also capture the optional vocabulary level as `level`. Marker clauses capture their own sentence,
//! so presence of the field means the marker was printed.

pub mod adjective;
pub mod noun;
pub mod verb;

use wort_core::{ExtractError, FieldMap};
use wort_types::PartOfSpeech;

pub const HEADWORD_FIELD: &str = "text";
pub const LEVEL_FIELD: &str = "level";

/// Match the description against the template of `pos`.
pub fn extract_fields(description: &str, pos: PartOfSpeech) -> Result<FieldMap, ExtractError> {
    match pos {
        PartOfSpeech::Noun => Ok(noun::NOUN.apply(description)?),
        PartOfSpeech::Verb => Ok(verb::VERB.apply(description)?),
        PartOfSpeech::Adjective => adjective::extract(description),
        PartOfSpeech::Adverb => Err(ExtractError::UnsupportedPartOfSpeech(pos)),
    }
}

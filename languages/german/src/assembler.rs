use wort_core::{ExtractError, FieldMap};
use wort_types::{Adjective, Entry, InflectionTable, Level, Noun, PartOfSpeech, Record, Verb};

use crate::grammar::adjective::{COMPARABLE, COMPARISON_FIELD};
use crate::grammar::{HEADWORD_FIELD, LEVEL_FIELD};

/// Merge template fields, tables and glosses into the record for `pos`.
pub fn assemble(
    pos: PartOfSpeech,
    fields: &FieldMap,
    tables: Vec<InflectionTable>,
    definitions: Vec<String>,
    search: &str,
) -> Result<Record, ExtractError> {
    let entry = Entry {
        search: search.to_string(),
        text: fields.require(HEADWORD_FIELD)?.to_string(),
        part_of_speech: pos,
        level: parse_level(fields)?,
        definitions,
    };

    let record = match pos {
        PartOfSpeech::Noun => Record::Noun(Noun {
            entry,
            genitive: required(fields, "genitive")?,
            plural: required(fields, "plural")?,
            genitive_ending: required(fields, "genitive_ending")?,
            plural_ending: required(fields, "plural_ending")?,
            gender: required(fields, "gender")?,
            article: required(fields, "article")?,
            possible_plural: fields.optional("possible_plural"),
            other_endings: fields.is_present("other_endings"),
            umlaut_in_plural: fields.is_present("umlaut_in_plural"),
            no_plural: fields.is_present("no_plural"),
            other_genus: fields.is_present("other_genus"),
            declensions: tables,
        }),
        PartOfSpeech::Verb => Record::Verb(Verb {
            entry,
            behavior: required(fields, "behavior")?,
            present: required(fields, "present")?,
            imperfect: required(fields, "imperfect")?,
            perfect: required(fields, "perfect")?,
            stem_vowels: fields.optional("stem_vowels"),
            auxiliary_verb: required(fields, "auxiliary_verb")?,
            secondary_auxiliary_verb: fields.optional("secondary_auxiliary_verb"),
            separable_prefix: fields.optional("separable_prefix"),
            also_non_separable: fields.is_present("also_non_separable"),
            non_separable_prefix: fields.optional("non_separable_prefix"),
            flection: required(fields, "flection")?,
            use_: required(fields, "use")?,
            conjugations: tables,
        }),
        PartOfSpeech::Adjective => Record::Adjective(Adjective {
            entry,
            is_comparable: fields.require(COMPARISON_FIELD)? == COMPARABLE,
            comparative: fields.optional("comparative"),
            superlative: fields.optional("superlative"),
            comparative_ending: fields.optional("comparative_ending"),
            superlative_ending: fields.optional("superlative_ending"),
            declensions: tables,
        }),
        PartOfSpeech::Adverb => return Err(ExtractError::UnsupportedPartOfSpeech(pos)),
    };

    Ok(record)
}

fn required(fields: &FieldMap, name: &str) -> Result<String, ExtractError> {
    fields.require(name).map(str::to_string)
}

fn parse_level(fields: &FieldMap) -> Result<Option<Level>, ExtractError> {
    fields
        .get(LEVEL_FIELD)
        .map(|code| Level::from_code(code).ok_or_else(|| ExtractError::UnknownLevelCode(code.to_string())))
        .transpose()
}

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::level::Level;
use crate::table::InflectionTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    /// Reserved; no page template produces it yet
    Adverb,
}

impl PartOfSpeech {
    pub fn as_str(&self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective => "adjective",
            PartOfSpeech::Adverb => "adverb",
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of looking up one word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Record {
    Noun(Noun),
    Verb(Verb),
    Adjective(Adjective),
    NotFound(NotFound),
}

impl Record {
    /// The lookup input as echoed by the page
    pub fn search(&self) -> &str {
        match self {
            Record::Noun(noun) => &noun.entry.search,
            Record::Verb(verb) => &verb.entry.search,
            Record::Adjective(adjective) => &adjective.entry.search,
            Record::NotFound(not_found) => &not_found.search,
        }
    }

    /// Shared dictionary fields, `None` for a miss
    pub fn entry(&self) -> Option<&Entry> {
        match self {
            Record::Noun(noun) => Some(&noun.entry),
            Record::Verb(verb) => Some(&verb.entry),
            Record::Adjective(adjective) => Some(&adjective.entry),
            Record::NotFound(_) => None,
        }
    }

    pub fn part_of_speech(&self) -> Option<PartOfSpeech> {
        self.entry().map(|entry| entry.part_of_speech)
    }

    pub fn is_found(&self) -> bool {
        !matches!(self, Record::NotFound(_))
    }
}

/// Fields every found word carries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Search term as shown in the page's search box
    pub search: String,
    /// German dictionary word (the headword)
    pub text: String,
    pub part_of_speech: PartOfSpeech,
    pub level: Option<Level>,
    /// English glosses, primary first
    pub definitions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Noun {
    #[serde(flatten)]
    pub entry: Entry,
    pub genitive: String,
    pub plural: String,
    /// `"-"` when the genitive takes no ending
    pub genitive_ending: String,
    /// `"-"` when the plural takes no ending
    pub plural_ending: String,
    pub gender: String,
    pub article: String,
    /// Alternate plural form the site says is also possible
    pub possible_plural: Option<String>,
    pub other_endings: bool,
    pub umlaut_in_plural: bool,
    pub no_plural: bool,
    pub other_genus: bool,
    pub declensions: Vec<InflectionTable>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verb {
    #[serde(flatten)]
    pub entry: Entry,
    /// "regular" or "irregular"
    pub behavior: String,
    pub present: String,
    pub imperfect: String,
    pub perfect: String,
    pub stem_vowels: Option<String>,
    pub auxiliary_verb: String,
    pub secondary_auxiliary_verb: Option<String>,
    /// e.g. "fern-" for fernsehen
    pub separable_prefix: Option<String>,
    pub also_non_separable: bool,
    /// e.g. "um-" for umfassen
    pub non_separable_prefix: Option<String>,
    pub flection: String,
    #[serde(rename = "use")]
    pub use_: String,
    pub conjugations: Vec<InflectionTable>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adjective {
    #[serde(flatten)]
    pub entry: Entry,
    pub is_comparable: bool,
    pub comparative: Option<String>,
    pub superlative: Option<String>,
    pub comparative_ending: Option<String>,
    pub superlative_ending: Option<String>,
    pub declensions: Vec<InflectionTable>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotFound {
    pub search: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> Entry {
        Entry {
            search: "endlich".into(),
            text: "endlich".into(),
            part_of_speech: PartOfSpeech::Adjective,
            level: Some(Level::B1),
            definitions: vec!["final".into(), "finite".into()],
        }
    }

    #[test]
    fn accessors_cover_every_variant() {
        let found = Record::Adjective(Adjective {
            entry: entry(),
            is_comparable: false,
            comparative: None,
            superlative: None,
            comparative_ending: None,
            superlative_ending: None,
            declensions: vec![],
        });
        assert_eq!(found.search(), "endlich");
        assert_eq!(found.part_of_speech(), Some(PartOfSpeech::Adjective));
        assert!(found.is_found());

        let miss = Record::NotFound(NotFound {
            search: "zzz".into(),
        });
        assert_eq!(miss.search(), "zzz");
        assert!(miss.entry().is_none());
        assert!(!miss.is_found());
    }

    #[test]
    fn json_carries_kind_tag_and_flattened_entry() {
        let record = Record::NotFound(NotFound {
            search: "zzz".into(),
        });
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["kind"], "not_found");
        assert_eq!(json["search"], "zzz");

        let adjective = Record::Adjective(Adjective {
            entry: entry(),
            is_comparable: false,
            comparative: None,
            superlative: None,
            comparative_ending: None,
            superlative_ending: None,
            declensions: vec![],
        });
        let json = serde_json::to_value(&adjective).unwrap();
        assert_eq!(json["kind"], "adjective");
        assert_eq!(json["text"], "endlich");
        assert_eq!(json["part_of_speech"], "adjective");
        assert_eq!(json["level"], "B1");
        assert!(json["comparative"].is_null());
    }
}

use wort_types::{CASE_ROWS, Level, PartOfSpeech, Record};

use super::parse_fixture;

#[test]
fn maedchen() {
    let Record::Noun(noun) = parse_fixture("maedchen") else {
        panic!("expected a noun");
    };

    assert_eq!(noun.entry.search, "Mädchen");
    assert_eq!(noun.entry.text, "Mädchen");
    assert_eq!(noun.entry.part_of_speech, PartOfSpeech::Noun);
    assert_eq!(noun.genitive, "Mädchens");
    assert_eq!(noun.plural, "Mädchen");
    assert_eq!(noun.genitive_ending, "s");
    assert_eq!(noun.plural_ending, "-");
    assert_eq!(noun.gender, "neutral");
    assert_eq!(noun.article, "das");
    assert_eq!(noun.entry.level, Some(Level::A1));
    assert_eq!(noun.entry.definitions[0], "girl");
    assert_eq!(noun.entry.definitions.len(), 4);
    assert!(!noun.no_plural);
    assert!(!noun.other_genus);
}

#[test]
fn maedchen_declensions() {
    let Record::Noun(noun) = parse_fixture("maedchen") else {
        panic!("expected a noun");
    };

    let titles: Vec<_> = noun.declensions.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, ["Singular", "Plural"]);
    for table in &noun.declensions {
        assert_eq!(table.missing_row(&CASE_ROWS), None, "{}", table.title);
        assert_eq!(table.rows.len(), 4);
    }
    assert_eq!(noun.declensions[0].get("Genitive"), Some("des Mädchens"));
    assert_eq!(noun.declensions[1].get("Dative"), Some("den Mädchen"));
}

#[test]
fn schlaf_has_no_plural() {
    let Record::Noun(noun) = parse_fixture("schlaf") else {
        panic!("expected a noun");
    };

    assert_eq!(noun.entry.text, "Schlaf");
    assert_eq!(noun.genitive, "Schlaf(e)s");
    assert_eq!(noun.plural, "-");
    assert_eq!(noun.genitive_ending, "es");
    assert_eq!(noun.plural_ending, "-");
    assert_eq!(noun.gender, "maskuline");
    assert_eq!(noun.article, "der");
    assert!(noun.no_plural);
    assert_eq!(noun.possible_plural, None);
    assert_eq!(noun.entry.level, Some(Level::A2));
    assert_eq!(noun.entry.definitions, ["sleep", "slumber"]);
    assert_eq!(noun.declensions[1].get("Nominative"), Some("- -"));
}

use colored::Colorize;
use wort_types::{
    Adjective, CASE_ROWS, Entry, InflectionTable, NotFound, Noun, PERSON_ROWS, Record, Verb,
};

const MAX_DEFINITIONS: usize = 5;
const SEPARATOR: &str = " • ";

#[derive(Clone, Copy)]
enum Style {
    Plain,
    Dim,
    Bold,
}

struct Line {
    text: String,
    style: Style,
}

impl Line {
    fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    fn paint(&self, width: usize) -> String {
        let padded = format!("{:<width$}", self.text);
        match self.style {
            Style::Plain => padded,
            Style::Dim => padded.dimmed().to_string(),
            Style::Bold => padded.bold().to_string(),
        }
    }
}

/// Summary panel for `record`, followed by its tables when `tables` is set.
pub fn render(record: &Record, tables: bool) -> String {
    let (lines, grid) = match record {
        Record::Noun(noun) => (noun_lines(noun), table_grid(&noun.declensions, &CASE_ROWS)),
        Record::Verb(verb) => (verb_lines(verb), table_grid(&verb.conjugations, &PERSON_ROWS)),
        Record::Adjective(adjective) => (
            adjective_lines(adjective),
            table_grid(&adjective.declensions, &CASE_ROWS),
        ),
        Record::NotFound(not_found) => (not_found_lines(not_found), String::new()),
    };

    let mut out = panel(record.search(), &lines);
    if tables && !grid.is_empty() {
        out.push('\n');
        out.push_str(&grid);
    }
    out
}

fn joined<'a>(parts: impl IntoIterator<Item = Option<&'a str>>) -> String {
    parts.into_iter().flatten().collect::<Vec<_>>().join(SEPARATOR)
}

fn noun_lines(noun: &Noun) -> Vec<Line> {
    let level = noun.entry.level.map(|level| level.as_str());
    let endings = format!("{}/{}", noun.genitive_ending, noun.plural_ending);

    let mut lines = vec![
        Line::new(
            joined([level, Some(noun.gender.as_str()), Some(endings.as_str())]),
            Style::Dim,
        ),
        Line::new(format!("{} {}", noun.article, noun.entry.text), Style::Bold),
        Line::new(joined([Some(noun.genitive.as_str()), Some(noun.plural.as_str())]), Style::Plain),
    ];
    lines.extend(definition_lines(&noun.entry));
    lines
}

fn verb_lines(verb: &Verb) -> Vec<Line> {
    let level = verb.entry.level.map(|level| level.as_str());
    let auxiliary = match &verb.secondary_auxiliary_verb {
        Some(secondary) => format!("{}/{}", verb.auxiliary_verb, secondary),
        None => verb.auxiliary_verb.clone(),
    };

    let mut lines = vec![
        Line::new(
            joined([level, Some(verb.behavior.as_str()), Some(auxiliary.as_str())]),
            Style::Dim,
        ),
        Line::new(verb.entry.text.clone(), Style::Bold),
        Line::new(
            joined([
                Some(verb.present.as_str()),
                Some(verb.imperfect.as_str()),
                Some(verb.perfect.as_str()),
            ]),
            Style::Plain,
        ),
    ];
    lines.extend(definition_lines(&verb.entry));
    lines
}

fn adjective_lines(adjective: &Adjective) -> Vec<Line> {
    let level = adjective.entry.level.map(|level| level.as_str());
    let endings = match (&adjective.comparative_ending, &adjective.superlative_ending) {
        (Some(comparative), Some(superlative)) => Some(format!("{comparative}/{superlative}")),
        _ => None,
    };
    let comparison = if adjective.is_comparable {
        joined([
            Some(adjective.entry.text.as_str()),
            adjective.comparative.as_deref(),
            adjective.superlative.as_deref(),
        ])
    } else {
        "--".to_string()
    };

    let mut lines = vec![
        Line::new(joined([level, endings.as_deref()]), Style::Dim),
        Line::new(adjective.entry.text.clone(), Style::Bold),
        Line::new(comparison, Style::Plain),
    ];
    lines.extend(definition_lines(&adjective.entry));
    lines
}

fn not_found_lines(not_found: &NotFound) -> Vec<Line> {
    vec![
        Line::new("No results found", Style::Bold),
        Line::new(format!("verbformen has no entry for {:?}", not_found.search), Style::Dim),
    ]
}

fn definition_lines(entry: &Entry) -> Vec<Line> {
    if entry.definitions.is_empty() {
        return Vec::new();
    }

    let mut lines = vec![Line::new("", Style::Plain)];
    lines.extend(
        entry
            .definitions
            .iter()
            .take(MAX_DEFINITIONS)
            .enumerate()
            .map(|(i, definition)| Line::new(format!("{}. {}", i + 1, definition), Style::Plain)),
    );
    lines
}

fn panel(title: &str, lines: &[Line]) -> String {
    let width = lines
        .iter()
        .map(|line| line.text.chars().count())
        .chain([title.chars().count() + 2])
        .max()
        .unwrap_or_default();

    let mut out = String::new();
    let rule = "─".repeat(width + 1 - (title.chars().count() + 2));
    out.push_str(&format!("╭─ {} {}╮\n", title.bold(), rule));
    for line in lines {
        out.push_str(&format!("│ {} │\n", line.paint(width)));
    }
    out.push_str(&format!("╰{}╯\n", "─".repeat(width + 2)));
    out
}

/// One row per required key, one column per table.
fn table_grid(tables: &[InflectionTable], rows: &[&str]) -> String {
    if tables.is_empty() {
        return String::new();
    }

    let key_width = rows.iter().map(|row| row.chars().count()).max().unwrap_or_default();
    let widths: Vec<usize> = tables
        .iter()
        .map(|table| {
            rows.iter()
                .map(|row| table.get(row).unwrap_or_default().chars().count())
                .chain([table.title.chars().count()])
                .max()
                .unwrap_or_default()
        })
        .collect();

    let mut out = String::new();

    let header: Vec<String> = tables
        .iter()
        .zip(&widths)
        .map(|(table, width)| format!("{:<width$}", table.title, width = *width))
        .collect();
    out.push_str(&format!(
        "{:<key_width$}  {}\n",
        "",
        header.join("  ").bold()
    ));

    for row in rows {
        let cells: Vec<String> = tables
            .iter()
            .zip(&widths)
            .map(|(table, width)| {
                format!("{:<width$}", table.get(row).unwrap_or_default(), width = *width)
            })
            .collect();
        out.push_str(&format!(
            "{}  {}\n",
            format!("{row:<key_width$}").dimmed(),
            cells.join("  ")
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use wort_types::{Level, PartOfSpeech};

    use super::*;

    fn plain(record: &Record, tables: bool) -> String {
        colored::control::set_override(false);
        render(record, tables)
    }

    fn entry(text: &str, pos: PartOfSpeech, definitions: &[&str]) -> Entry {
        Entry {
            search: text.to_string(),
            text: text.to_string(),
            part_of_speech: pos,
            level: Some(Level::A1),
            definitions: definitions.iter().map(|d| d.to_string()).collect(),
        }
    }

    fn maedchen() -> Record {
        let mut singular = InflectionTable::new("Singular");
        let mut plural = InflectionTable::new("Plural");
        for (case, one, many) in [
            ("Nominative", "das Mädchen", "die Mädchen"),
            ("Genitive", "des Mädchens", "der Mädchen"),
            ("Dative", "dem Mädchen", "den Mädchen"),
            ("Accusative", "das Mädchen", "die Mädchen"),
        ] {
            singular.rows.insert(case.into(), one.into());
            plural.rows.insert(case.into(), many.into());
        }

        Record::Noun(Noun {
            entry: entry(
                "Mädchen",
                PartOfSpeech::Noun,
                &["girl", "maid", "lass", "maiden", "wench", "damsel"],
            ),
            genitive: "Mädchens".into(),
            plural: "Mädchen".into(),
            genitive_ending: "s".into(),
            plural_ending: "-".into(),
            gender: "neutral".into(),
            article: "das".into(),
            possible_plural: None,
            other_endings: false,
            umlaut_in_plural: false,
            no_plural: false,
            other_genus: false,
            declensions: vec![singular, plural],
        })
    }

    #[test]
    fn noun_panel() {
        let out = plain(&maedchen(), false);

        assert!(out.starts_with("╭─ Mädchen ─"));
        assert!(out.contains("A1 • neutral • s/-"));
        assert!(out.contains("│ das Mädchen "));
        assert!(out.contains("Mädchens • Mädchen"));
        assert!(out.contains("5. wench"));
        assert!(!out.contains("damsel"));
        assert!(!out.contains("Nominative"));
    }

    #[test]
    fn panel_lines_share_one_width() {
        let out = plain(&maedchen(), false);
        let widths: Vec<usize> = out.lines().map(|line| line.chars().count()).collect();
        assert!(widths.windows(2).all(|pair| pair[0] == pair[1]), "{out}");
    }

    #[test]
    fn declension_grid() {
        let out = plain(&maedchen(), true);
        let grid: Vec<&str> = out.lines().skip_while(|line| !line.is_empty()).skip(1).collect();

        assert!(grid[0].contains("Singular"));
        assert!(grid[0].contains("Plural"));
        assert!(grid[1].starts_with("Nominative"));
        assert!(grid[4].starts_with("Genitive"));
        assert!(grid[4].contains("des Mädchens"));
        assert_eq!(grid.len(), 5);
    }

    #[test]
    fn incomparable_adjective() {
        let record = Record::Adjective(Adjective {
            entry: entry("endlich", PartOfSpeech::Adjective, &["final"]),
            is_comparable: false,
            comparative: None,
            superlative: None,
            comparative_ending: None,
            superlative_ending: None,
            declensions: vec![],
        });
        let out = plain(&record, true);
        assert!(out.contains("│ -- "));
        assert!(out.contains("1. final"));
    }

    #[test]
    fn verb_with_secondary_auxiliary() {
        let record = Record::Verb(Verb {
            entry: entry("fahren", PartOfSpeech::Verb, &[]),
            behavior: "irregular".into(),
            present: "fährt".into(),
            imperfect: "fuhr".into(),
            perfect: "ist gefahren".into(),
            stem_vowels: Some("a - u - a".into()),
            auxiliary_verb: "sein".into(),
            secondary_auxiliary_verb: Some("haben".into()),
            separable_prefix: None,
            also_non_separable: false,
            non_separable_prefix: None,
            flection: "Active".into(),
            use_: "Main".into(),
            conjugations: vec![],
        });
        let out = plain(&record, false);
        assert!(out.contains("A1 • irregular • sein/haben"));
        assert!(out.contains("fährt • fuhr • ist gefahren"));
    }

    #[test]
    fn not_found_panel() {
        let record = Record::NotFound(NotFound {
            search: "zzz".into(),
        });
        let out = plain(&record, true);
        assert!(out.contains("No results found"));
        assert!(out.starts_with("╭─ zzz ─"));
    }
}

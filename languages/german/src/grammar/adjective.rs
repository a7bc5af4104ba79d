use std::sync::LazyLock;

use wort_core::{Clause, ExtractError, FieldMap, Template, TemplateError};

/// Synthetic field naming which of the two templates matched
pub const COMPARISON_FIELD: &str = "comparison";
pub const COMPARABLE: &str = "comparable";
pub const INCOMPARABLE: &str = "incomparable";

const COMPARISON_FIELDS: [&str; 4] = [
    "comparative",
    "superlative",
    "comparative_ending",
    "superlative_ending",
];

const INCOMPARABLE_FORM: &str = "incomparable form";

const HEADWORD: Clause = Clause::required("headword", r"The declension of the adjective (?P<text>\S+) ");
const USAGE: Clause = Clause::required(
    "usage",
    r"The adjective {headword} can be used both attributively in front of a noun as well as predicative in conjunction with a verb\.",
);
// the page prints no space between the two sentences
const TRAILER: Clause = Clause::required(
    "trailer",
    r" ?One can not only inflect and compare {headword}, but all German adjectives\.",
);

pub static INCOMPARABLE_ADJECTIVE: LazyLock<Template> = LazyLock::new(|| {
    Template::new(
        "incomparable adjective",
        super::HEADWORD_FIELD,
        &[
            HEADWORD,
            Clause::required(INCOMPARABLE_FORM, r"uses the incomparable form {headword}\. "),
            Clause::required(
                "no comparison",
                r"The adjective has no forms for the comparative and superlative\. ",
            ),
            USAGE,
            TRAILER,
        ],
    )
    .expect("INCOMPARABLE_ADJECTIVE should compile")
});

pub static COMPARABLE_ADJECTIVE: LazyLock<Template> = LazyLock::new(|| {
    Template::new(
        "comparable adjective",
        super::HEADWORD_FIELD,
        &[
            HEADWORD,
            Clause::required(
                "comparison",
                r"uses these forms of the comparison {headword},(?P<comparative>[^,\s]+),(?P<superlative>[^,.]+)\. ",
            ),
            Clause::required(
                "endings",
                r"The endings for the comparison in the comparative and superlative are (?P<comparative_ending>[^\s/]+)/(?P<superlative_ending>\S+?)\. ",
            ),
            USAGE,
            TRAILER,
        ],
    )
    .expect("COMPARABLE_ADJECTIVE should compile")
});

/// Try the incomparable template, then the comparable one.
///
/// The result always defines the comparison fields; they are `None` for an
/// incomparable adjective. When neither template matches, the incomparable
/// template's error is returned if the page got past its incomparable form
/// clause, otherwise the comparable template's.
pub fn extract(description: &str) -> Result<FieldMap, ExtractError> {
    let incomparable = match INCOMPARABLE_ADJECTIVE.apply(description) {
        Ok(mut fields) => {
            fields.insert(COMPARISON_FIELD, Some(INCOMPARABLE.to_string()));
            for field in COMPARISON_FIELDS {
                fields.insert(field, None);
            }
            return Ok(fields);
        }
        Err(err) => err,
    };

    match COMPARABLE_ADJECTIVE.apply(description) {
        Ok(mut fields) => {
            fields.insert(COMPARISON_FIELD, Some(COMPARABLE.to_string()));
            Ok(fields)
        }
        Err(_) if is_incomparable_page(&incomparable) => Err(incomparable.into()),
        Err(err) => Err(err.into()),
    }
}

fn is_incomparable_page(err: &TemplateError) -> bool {
    match err {
        TemplateError::BackReference { .. } => true,
        TemplateError::Mismatch { clause, .. } => !matches!(*clause, "headword" | INCOMPARABLE_FORM),
    }
}

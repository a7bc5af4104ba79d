use wort_types::PartOfSpeech;

/// Extraction failures. All of them are fatal: they mean the page no longer
/// looks like the template it was classified as, never a transient fault.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractError {
    #[error("Unrecognized page metadata: {metadata:?}")]
    Classification { metadata: String },

    #[error("Expected exactly one description paragraph containing {marker:?}, found {found}")]
    Locator { marker: &'static str, found: usize },

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error("No inflection table under heading {title:?}")]
    TableNotFound { title: String },

    #[error("Inflection table {title:?} has no {row:?} row")]
    IncompleteTable { title: String, row: String },

    #[error("Unknown level code: {0:?}")]
    UnknownLevelCode(String),

    #[error("Page has no {0}")]
    MissingElement(&'static str),

    #[error("Template produced no `{0}` field")]
    MissingField(String),

    #[error("Part of speech not supported by any page template: {0}")]
    UnsupportedPartOfSpeech(PartOfSpeech),
}

/// Description text does not follow a template's clause sequence.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    #[error("{template} template does not match at clause `{clause}`:\n{description}")]
    Mismatch {
        template: &'static str,
        clause: &'static str,
        description: String,
    },

    #[error(
        "{template} template clause `{clause}` names {found:?} but the headword is {expected:?}:\n{description}"
    )]
    BackReference {
        template: &'static str,
        clause: &'static str,
        expected: String,
        found: String,
        description: String,
    },
}

impl TemplateError {
    pub fn clause(&self) -> &'static str {
        match self {
            TemplateError::Mismatch { clause, .. } => clause,
            TemplateError::BackReference { clause, .. } => clause,
        }
    }
}

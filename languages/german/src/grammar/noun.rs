use std::sync::LazyLock;

use wort_core::{Clause, Template};

pub static NOUN: LazyLock<Template> = LazyLock::new(|| {
    Template::new(
        "noun",
        super::HEADWORD_FIELD,
        &[
            Clause::required("headword", r"The declension of the noun (?P<text>\S+) "),
            Clause::required("genitive", r"is in singular genitive (?P<genitive>\S+) "),
            Clause::required("plural", r"and in the plural nominative (?P<plural>\S+?)\. "),
            Clause::required(
                "endings",
                r"The noun {headword} is declined with the declension endings (?P<genitive_ending>[^\s/]+)/(?P<plural_ending>\S+?)\. ",
            ),
            Clause::optional(
                "other endings",
                r"(?P<other_endings>It can also be used with other endings\.) ",
            ),
            Clause::optional("umlaut", r"(?P<umlaut_in_plural>In the plural is an umlaut\.) "),
            Clause::optional("no plural", r"(?P<no_plural>It does not form plurals\.) "),
            Clause::optional(
                "possible plural",
                r"In the plural forms of (?P<possible_plural>\S+?) are possible\. ",
            ),
            Clause::required(
                "gender",
                r#"The voice of {headword} is (?P<gender>[a-z]+) and the article "(?P<article>der|die|das)"\. "#,
            ),
            Clause::optional(
                "other genus",
                r"(?P<other_genus>The noun can also be used with other genus and other articles\.) ",
            ),
            Clause::required(
                "trailer",
                r"Here you can not only inflect {headword} but also all German nouns\.",
            ),
            Clause::optional(
                "level",
                r" The noun is part of the thesaurus of Zertifikat Deutsch respectivly Level (?P<level>\w{2})\.",
            ),
        ],
    )
    .expect("NOUN should compile")
});

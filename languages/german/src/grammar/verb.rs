use std::sync::LazyLock;

use wort_core::{Clause, Template};

pub static VERB: LazyLock<Template> = LazyLock::new(|| {
    Template::new(
        "verb",
        super::HEADWORD_FIELD,
        &[
            Clause::required("headword", r"The conjugation of the verb (?P<text>\S+) "),
            Clause::required("behavior", r"is (?P<behavior>regular|irregular)\. "),
            // separable verbs print two-word forms, e.g. "sieht fern"
            Clause::required(
                "basic forms",
                r"Basic forms are (?P<present>[^,.]+), (?P<imperfect>[^,.]+?) and (?P<perfect>[^,.]+)\. ",
            ),
            Clause::optional("stem vowels", r"The stem vowels are (?P<stem_vowels>[^.]+)\. "),
            Clause::required(
                "auxiliary",
                r"The auxiliary verb of {headword} is (?P<auxiliary_verb>\S+?)\. ",
            ),
            Clause::optional(
                "secondary auxiliary",
                r"(?P<secondary_auxiliary_verb>\S+) can be used as well\. ",
            ),
            Clause::optional(
                "separable prefix",
                r"First syllable (?P<separable_prefix>\S+) of {headword} is separable\. ",
            ),
            Clause::optional(
                "also not separable",
                r"(?P<also_non_separable>Can also be used not separable\.) ",
            ),
            Clause::optional(
                "non-separable prefix",
                r"Prefix (?P<non_separable_prefix>\S+) of {headword} is not separable\. ",
            ),
            Clause::required("flection", r"The flection is in (?P<flection>\S+) "),
            Clause::required("use", r"and the use as (?P<use>\S+?)\. "),
            Clause::required(
                "examples",
                r"For a better understanding, countless examples of the verb {headword} are available\. ",
            ),
            Clause::required(
                "worksheets",
                r"For practicing and consolidating, there are also free worksheets for {headword}\. ",
            ),
            Clause::required(
                "trailer",
                r"You can not just {headword} conjugate, but all German verbs\.",
            ),
            Clause::optional(
                "level",
                r" The verb is part of the thesaurus of Zertifikat Deutsch respectivly Level (?P<level>\w{2})\.",
            ),
        ],
    )
    .expect("VERB should compile")
});

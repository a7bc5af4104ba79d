use wort_types::PartOfSpeech;

/// Lookup URL for `word`. A noun or verb hint goes straight to that
/// dictionary; anything else lets the site pick.
pub fn search_url(base_url: &str, word: &str, hint: Option<PartOfSpeech>) -> String {
    let path = match hint {
        Some(PartOfSpeech::Noun) => "/declension/nouns/?w=",
        Some(PartOfSpeech::Verb) => "/conjugation/?w=",
        _ => "/?w=",
    };
    format!(
        "{}{}{}",
        base_url.trim_end_matches('/'),
        path,
        urlencoding::encode(word)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://www.verbformen.com";

    #[test]
    fn hint_selects_dictionary() {
        assert_eq!(
            search_url(BASE, "Hund", Some(PartOfSpeech::Noun)),
            "https://www.verbformen.com/declension/nouns/?w=Hund"
        );
        assert_eq!(
            search_url(BASE, "holen", Some(PartOfSpeech::Verb)),
            "https://www.verbformen.com/conjugation/?w=holen"
        );
        assert_eq!(
            search_url(BASE, "endlich", Some(PartOfSpeech::Adjective)),
            "https://www.verbformen.com/?w=endlich"
        );
        assert_eq!(search_url(BASE, "zzz", None), "https://www.verbformen.com/?w=zzz");
    }

    #[test]
    fn word_is_percent_encoded() {
        assert_eq!(
            search_url("http://localhost:8080/", "Mädchen", None),
            "http://localhost:8080/?w=M%C3%A4dchen"
        );
        assert_eq!(
            search_url(BASE, "sehen fern", None),
            "https://www.verbformen.com/?w=sehen%20fern"
        );
    }
}

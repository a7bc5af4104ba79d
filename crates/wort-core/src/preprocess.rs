use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    /// Default lookup-word preprocessor
    fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        // Composed umlauts, so "a\u{308}" and "ä" fetch the same page
        let text: String = text.nfc().collect();

        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_composes() {
        let pre = DefaultPreprocessor;
        assert_eq!(pre.process("  Ma\u{308}dchen \n"), "Mädchen");
        assert_eq!(pre.process("   "), "");
        assert_eq!(pre.process("sehen  fern"), "sehen fern");
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};

/// CEFR vocabulary level ("Zertifikat Deutsch" thesaurus)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Level {
    A1, // Beginner
    A2, // Elementary
    B1, // Intermediate
    B2, // Upper intermediate
    C1, // Advanced
    C2, // Proficient
}

impl Level {
    /// Parse the two-letter code as printed by the site.
    ///
    /// Codes are matched exactly; `"a1"` is not a level.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "A1" => Some(Level::A1),
            "A2" => Some(Level::A2),
            "B1" => Some(Level::B1),
            "B2" => Some(Level::B2),
            "C1" => Some(Level::C1),
            "C2" => Some(Level::C2),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::A1 => "A1",
            Level::A2 => "A2",
            Level::B1 => "B1",
            Level::B2 => "B2",
            Level::C1 => "C1",
            Level::C2 => "C2",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for level in [Level::A1, Level::A2, Level::B1, Level::B2, Level::C1, Level::C2] {
            assert_eq!(Level::from_code(level.as_str()), Some(level));
        }
    }

    #[test]
    fn unknown_and_lowercase_codes_are_rejected() {
        assert_eq!(Level::from_code("D1"), None);
        assert_eq!(Level::from_code("a1"), None);
        assert_eq!(Level::from_code(""), None);
    }
}

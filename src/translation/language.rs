//! The English/Nepali language pair and translation directions.

use std::fmt;
use std::str::FromStr;

use anyhow::{Result, bail};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use whatlang::Script;

/// One side of the translation pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum Language {
    #[value(name = "en", alias = "english")]
    #[serde(rename = "en", alias = "english")]
    English,
    #[value(name = "ne", alias = "nepali")]
    #[serde(rename = "ne", alias = "nepali")]
    Nepali,
}

impl Language {
    /// Returns the other side of the pair.
    pub const fn other(self) -> Self {
        match self {
            Self::English => Self::Nepali,
            Self::Nepali => Self::English,
        }
    }

    /// Human-readable name, as used in prompts.
    pub const fn name(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Nepali => "Nepali",
        }
    }

}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::English),
            "ne" | "nepali" => Ok(Self::Nepali),
            other => bail!("Unknown language '{other}': expected 'en' or 'ne'"),
        }
    }
}

/// A translation direction. The two sides are always different.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Direction {
    source: Language,
    target: Language,
}

impl Direction {
    /// Creates a direction from explicit endpoints.
    ///
    /// # Errors
    ///
    /// Returns an error if both sides are the same language.
    pub fn new(source: Language, target: Language) -> Result<Self> {
        if source == target {
            bail!("Source and target language must differ");
        }
        Ok(Self { source, target })
    }

    /// The direction that translates into `target` from the opposite language.
    pub const fn to(target: Language) -> Self {
        Self {
            source: target.other(),
            target,
        }
    }

    /// Guesses the direction from the text itself.
    ///
    /// Hindi and Marathi share the script, but for an en/ne tool any
    /// Devanagari input reads as Nepali.
    pub fn detect(text: &str) -> Self {
        match whatlang::detect_script(text) {
            Some(Script::Devanagari) => Self::to(Language::English),
            _ => Self::to(Language::Nepali),
        }
    }

    /// The same pair, travelled the other way.
    pub const fn flipped(self) -> Self {
        Self {
            source: self.target,
            target: self.source,
        }
    }

    pub const fn source(self) -> Language {
        self.source
    }

    pub const fn target(self) -> Language {
        self.target
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.source, self.target)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_other_is_involution() {
        assert_eq!(Language::English.other(), Language::Nepali);
        assert_eq!(Language::Nepali.other(), Language::English);
        assert_eq!(Language::English.other().other(), Language::English);
    }

    #[test]
    fn test_language_from_str() {
        assert_eq!(<Language as FromStr>::from_str("en").unwrap(), Language::English);
        assert_eq!(<Language as FromStr>::from_str("English").unwrap(), Language::English);
        assert_eq!(<Language as FromStr>::from_str("ne").unwrap(), Language::Nepali);
        assert_eq!(<Language as FromStr>::from_str("NEPALI").unwrap(), Language::Nepali);
        assert!(<Language as FromStr>::from_str("ja").is_err());
        assert!(<Language as FromStr>::from_str("").is_err());
    }

    #[test]
    fn test_direction_rejects_same_language() {
        assert!(Direction::new(Language::English, Language::English).is_err());
        assert!(Direction::new(Language::Nepali, Language::Nepali).is_err());
        assert!(Direction::new(Language::English, Language::Nepali).is_ok());
    }

    #[test]
    fn test_direction_to_target() {
        let direction = Direction::to(Language::Nepali);
        assert_eq!(direction.source(), Language::English);
        assert_eq!(direction.target(), Language::Nepali);
    }

    #[test]
    fn test_flipped_is_involution() {
        let direction = Direction::to(Language::Nepali);
        assert_eq!(direction.flipped().target(), Language::English);
        assert_eq!(direction.flipped().flipped(), direction);
    }

    #[test]
    fn test_detect_devanagari_reads_as_nepali() {
        let direction = Direction::detect("नमस्ते, तपाईंलाई कस्तो छ?");
        assert_eq!(direction.source(), Language::Nepali);
        assert_eq!(direction.target(), Language::English);
    }

    #[test]
    fn test_detect_latin_reads_as_english() {
        let direction = Direction::detect("Good morning, how are you?");
        assert_eq!(direction.source(), Language::English);
        assert_eq!(direction.target(), Language::Nepali);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Direction::to(Language::Nepali).to_string(),
            "English → Nepali"
        );
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
}

pub const AUTO_DETECT: &str = "auto";

/// Languages offered by the text translation panel, auto-detect first.
pub const TRANSLATION_LANGUAGES: &[Language] = &[
    Language { code: AUTO_DETECT, name: "Auto-detect" },
    Language { code: "en", name: "English" },
    Language { code: "sw", name: "Kiswahili" },
    Language { code: "fr", name: "French" },
    Language { code: "es", name: "Spanish" },
    Language { code: "ar", name: "Arabic" },
    Language { code: "zh", name: "Chinese" },
    Language { code: "hi", name: "Hindi" },
    Language { code: "pt", name: "Portuguese" },
    Language { code: "ru", name: "Russian" },
    Language { code: "de", name: "German" },
    Language { code: "ja", name: "Japanese" },
];

/// Shorter list used by the media, summary and OCR panels.
pub const MEDIA_LANGUAGES: &[Language] = &[
    Language { code: "en", name: "English" },
    Language { code: "sw", name: "Kiswahili" },
    Language { code: "fr", name: "French" },
    Language { code: "es", name: "Spanish" },
    Language { code: "ar", name: "Arabic" },
];

/// Target languages for translation: everything except auto-detect.
pub fn translation_targets() -> impl Iterator<Item = &'static Language> {
    TRANSLATION_LANGUAGES.iter().filter(|l| l.code != AUTO_DETECT)
}

pub fn language_name(code: &str) -> Option<&'static str> {
    TRANSLATION_LANGUAGES
        .iter()
        .find(|l| l.code == code)
        .map(|l| l.name)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthHint {
    Short,
    #[default]
    Medium,
    Long,
}

impl LengthHint {
    pub const ALL: [LengthHint; 3] = [LengthHint::Short, LengthHint::Medium, LengthHint::Long];

    pub fn key(self) -> &'static str {
        match self {
            LengthHint::Short => "short",
            LengthHint::Medium => "medium",
            LengthHint::Long => "long",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            LengthHint::Short => "Short (1-2 sentences)",
            LengthHint::Medium => "Medium (3-5 sentences)",
            LengthHint::Long => "Long (6-10 sentences)",
        }
    }

    /// Rough share of the source text the summary aims for.
    pub fn ratio(self) -> &'static str {
        match self {
            LengthHint::Short => "10%",
            LengthHint::Medium => "25%",
            LengthHint::Long => "40%",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_resolve_from_codes() {
        assert_eq!(language_name("sw"), Some("Kiswahili"));
        assert_eq!(language_name("auto"), Some("Auto-detect"));
        assert_eq!(language_name("xx"), None);
    }

    #[test]
    fn targets_exclude_auto_detect() {
        assert!(translation_targets().all(|l| l.code != AUTO_DETECT));
        assert_eq!(translation_targets().count(), TRANSLATION_LANGUAGES.len() - 1);
    }
}

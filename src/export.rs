use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::error::ExportError;

/// A plain-text download assembled from a panel's results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportDocument {
    /// File name stem, e.g. `transcription`.
    pub kind: &'static str,
    pub body: String,
}

impl ExportDocument {
    pub fn transcription(
        transcription: &str,
        translation: Option<(&str, &str)>,
        summary: Option<&str>,
    ) -> Self {
        let mut body = format!("TRANSCRIPTION\n\n{transcription}\n\n");
        if let Some((language, text)) = translation {
            body.push_str(&format!("TRANSLATION ({language})\n\n{text}\n\n"));
        }
        if let Some(summary) = summary {
            body.push_str(&format!("SUMMARY\n\n{summary}"));
        }
        Self {
            kind: "transcription",
            body,
        }
    }

    pub fn summary(input: &str, language: &str, length: &str, summary: &str) -> Self {
        Self {
            kind: "summary",
            body: format!(
                "ORIGINAL TEXT\n\n{input}\n\n\nSUMMARY ({language} - {length})\n\n{summary}"
            ),
        }
    }

    pub fn ocr(extracted: &str, translation: Option<(&str, &str)>, summary: Option<&str>) -> Self {
        let mut body = format!("IMAGE OCR RESULTS\n\nEXTRACTED TEXT:\n{extracted}\n\n");
        if let Some((language, text)) = translation {
            body.push_str(&format!("TRANSLATION ({language}):\n{text}\n\n"));
        }
        if let Some(summary) = summary {
            body.push_str(&format!("SUMMARY:\n{summary}"));
        }
        Self {
            kind: "ocr-results",
            body,
        }
    }

    pub fn file_name(&self, epoch_millis: i64) -> String {
        format!("{}-{epoch_millis}.txt", self.kind)
    }

    /// Write into `dir`, creating it if needed. Returns the full path.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf, ExportError> {
        if self.body.trim().is_empty() {
            return Err(ExportError::Empty);
        }
        let path = dir.join(self.file_name(Utc::now().timestamp_millis()));
        fs::create_dir_all(dir)
            .and_then(|()| fs::write(&path, &self.body))
            .map_err(|source| ExportError::Write {
                path: path.clone(),
                source,
            })?;
        log::info!("Exported {}", path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transcription_sections_are_optional() {
        let doc = ExportDocument::transcription("spoken words", None, Some("gist"));
        assert_eq!(doc.body, "TRANSCRIPTION\n\nspoken words\n\nSUMMARY\n\ngist");

        let doc = ExportDocument::transcription("t", Some(("Kiswahili", "tr")), None);
        assert_eq!(doc.body, "TRANSCRIPTION\n\nt\n\nTRANSLATION (Kiswahili)\n\ntr\n\n");
    }

    #[test]
    fn summary_layout() {
        let doc = ExportDocument::summary("in", "English", "Short (1-2 sentences)", "out");
        assert_eq!(
            doc.body,
            "ORIGINAL TEXT\n\nin\n\n\nSUMMARY (English - Short (1-2 sentences))\n\nout"
        );
    }

    #[test]
    fn file_names_carry_kind_and_millis() {
        let doc = ExportDocument::ocr("x", None, None);
        assert_eq!(doc.file_name(1734256800000), "ocr-results-1734256800000.txt");
    }

    #[test]
    fn writes_into_nested_directory() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("exports");
        let doc = ExportDocument::ocr("PRESS RELEASE", None, None);

        let path = doc.write_to(&target).unwrap();
        assert!(path.file_name().unwrap().to_string_lossy().starts_with("ocr-results-"));
        assert_eq!(fs::read_to_string(path).unwrap(), doc.body);
    }

    #[test]
    fn empty_documents_are_refused() {
        let dir = tempfile::tempdir().unwrap();
        let doc = ExportDocument {
            kind: "summary",
            body: " \n".into(),
        };
        assert!(matches!(doc.write_to(dir.path()), Err(ExportError::Empty)));
    }
}

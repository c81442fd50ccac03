use super::{Activity, Outcome, PanelKind, Phase, Work};
use crate::activity::ActivityKind;
use crate::export::ExportDocument;
use crate::language::{language_name, LengthHint};
use crate::processor::{Operation, ProcessRequest};
use crate::upload::{UploadCandidate, UploadConfig, UploadWidget};

const WORDS_PER_MINUTE: usize = 200;

/// Figures shown under a finished summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryStats {
    pub characters: usize,
    pub words: usize,
    /// Summary length as a rounded percentage of the input length.
    pub compression_percent: u32,
    pub minutes_to_read: usize,
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[derive(Debug)]
pub struct SummarizePanel {
    pub upload: UploadWidget,
    pub file: Option<UploadCandidate>,
    pub input_text: String,
    pub summary: String,
    pub language: String,
    pub length: LengthHint,
    pub phase: Phase,
    pub copied: bool,
}

impl SummarizePanel {
    pub fn new(upload: UploadConfig) -> Self {
        Self {
            upload: UploadWidget::new(upload),
            file: None,
            input_text: String::new(),
            summary: String::new(),
            language: "en".into(),
            length: LengthHint::Medium,
            phase: Phase::Idle,
            copied: false,
        }
    }

    pub fn offer_file(&mut self, candidate: UploadCandidate) -> Option<UploadCandidate> {
        self.upload.submit(candidate)
    }

    /// Take an accepted document. Plain-text contents replace the input;
    /// other formats are only listed, their text is not extracted.
    pub fn select_file(&mut self, file: UploadCandidate, contents: Option<String>) {
        if file.mime_type == "text/plain" {
            if let Some(text) = contents {
                self.input_text = text;
            }
        }
        self.file = Some(file);
    }

    pub fn can_summarize(&self) -> bool {
        !self.phase.is_pending() && !self.input_text.trim().is_empty()
    }

    pub fn begin_summarize(&mut self) -> Option<Work> {
        if !self.can_summarize() {
            return None;
        }
        self.phase = Phase::Pending;
        Some(Work::Process(
            ProcessRequest::text(PanelKind::Summarize, Operation::Summarize, self.input_text.clone())
                .target(&self.language)
                .length(self.length),
        ))
    }

    pub fn finish(&mut self, outcome: Outcome) -> Option<Activity> {
        let Outcome::Text(result) = outcome else {
            log::warn!("Summarize panel got an unrelated outcome");
            return None;
        };
        match result {
            Ok(summary) => {
                self.phase = Phase::Idle;
                self.summary = summary;
                self.copied = false;
                Some(Activity::new(
                    ActivityKind::Summary,
                    format!("{} summary generated", self.language_name()),
                ))
            }
            Err(e) => {
                log::error!("Summarization failed: {e}");
                self.phase = Phase::Failed(e);
                None
            }
        }
    }

    pub fn language_name(&self) -> &str {
        language_name(&self.language).unwrap_or(&self.language)
    }

    pub fn input_stats(&self) -> (usize, usize) {
        (self.input_text.chars().count(), word_count(&self.input_text))
    }

    pub fn stats(&self) -> Option<SummaryStats> {
        if self.summary.is_empty() {
            return None;
        }
        let characters = self.summary.chars().count();
        let words = word_count(&self.summary);
        let input_chars = self.input_text.chars().count();
        let compression_percent = if input_chars == 0 {
            0
        } else {
            (characters as f64 / input_chars as f64 * 100.0).round() as u32
        };
        Some(SummaryStats {
            characters,
            words,
            compression_percent,
            minutes_to_read: words.div_ceil(WORDS_PER_MINUTE),
        })
    }

    pub fn export_document(&self) -> Option<ExportDocument> {
        if self.summary.is_empty() {
            return None;
        }
        Some(ExportDocument::summary(
            &self.input_text,
            self.language_name(),
            self.length.display_name(),
            &self.summary,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::config::UploadLimits;

    fn panel() -> SummarizePanel {
        SummarizePanel::new(UploadLimits::default().summarize)
    }

    #[test]
    fn plain_text_document_replaces_input() {
        let mut panel = panel();
        panel.input_text = "typed".into();
        let doc = panel.offer_file(file("story.txt", "text/plain", 2048)).unwrap();
        panel.select_file(doc, Some("from file".into()));
        assert_eq!(panel.input_text, "from file");
    }

    #[test]
    fn other_documents_keep_typed_text() {
        let mut panel = panel();
        panel.input_text = "typed".into();
        let doc = panel.offer_file(file("story.pdf", "application/pdf", 2048)).unwrap();
        panel.select_file(doc, None);
        assert_eq!(panel.input_text, "typed");
        assert_eq!(panel.file.as_ref().map(|f| f.name.as_str()), Some("story.pdf"));
    }

    #[test]
    fn images_are_not_documents() {
        let mut panel = panel();
        assert!(panel.offer_file(file("scan.png", "image/png", 2048)).is_none());
    }

    #[tokio::test]
    async fn summary_and_stats() {
        let mut panel = panel();
        panel.input_text = "word ".repeat(400);
        panel.length = LengthHint::Short;

        let work = panel.begin_summarize().unwrap();
        assert!(panel.begin_summarize().is_none());
        panel.finish(work.run(instant()).await);

        let stats = panel.stats().unwrap();
        assert_eq!(stats.characters, panel.summary.chars().count());
        assert_eq!(stats.words, word_count(&panel.summary));
        assert_eq!(stats.minutes_to_read, 1);
        let expected = (stats.characters as f64 / 2000.0 * 100.0).round() as u32;
        assert_eq!(stats.compression_percent, expected);
    }

    #[test]
    fn reading_time_rounds_up() {
        let mut panel = panel();
        panel.input_text = "x".into();
        panel.summary = "w ".repeat(201);
        assert_eq!(panel.stats().unwrap().minutes_to_read, 2);
    }

    #[test]
    fn export_names_language_and_length() {
        let mut panel = panel();
        panel.input_text = "original".into();
        panel.summary = "short".into();
        panel.language = "sw".into();
        let doc = panel.export_document().unwrap();
        assert!(doc.body.contains("SUMMARY (Kiswahili - Medium (3-5 sentences))"));
    }
}

use super::{Activity, Outcome, Phase, Work};
use crate::activity::ActivityKind;
use crate::export::ExportDocument;
use crate::language::language_name;
use crate::upload::{UploadCandidate, UploadConfig, UploadWidget};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MediaResults {
    pub transcription: String,
    pub translation: Option<String>,
    pub summary: Option<String>,
}

#[derive(Debug)]
pub struct TranscribePanel {
    pub upload: UploadWidget,
    pub file: Option<UploadCandidate>,
    pub target_lang: String,
    pub results: Option<MediaResults>,
    pub phase: Phase,
}

impl TranscribePanel {
    pub fn new(upload: UploadConfig) -> Self {
        Self {
            upload: UploadWidget::new(upload),
            file: None,
            target_lang: "en".into(),
            results: None,
            phase: Phase::Idle,
        }
    }

    /// No file changes while a run is pending.
    pub fn accepts_files(&self) -> bool {
        !self.phase.is_pending()
    }

    /// Run a candidate through the drop zone. Returns whether it was taken.
    pub fn offer_file(&mut self, candidate: UploadCandidate) -> bool {
        if !self.accepts_files() {
            return false;
        }
        match self.upload.submit(candidate) {
            Some(file) => {
                self.select_file(file);
                true
            }
            None => false,
        }
    }

    /// Replace the current media file and clear earlier results.
    pub fn select_file(&mut self, file: UploadCandidate) {
        if !self.accepts_files() {
            log::debug!("Ignoring {} while processing", file.name);
            return;
        }
        self.file = Some(file);
        self.results = None;
    }

    pub fn can_process(&self) -> bool {
        self.file.is_some() && !self.phase.is_pending()
    }

    pub fn begin_process(&mut self) -> Option<Work> {
        if !self.can_process() {
            return None;
        }
        let file = self.file.clone()?;
        self.phase = Phase::Pending;
        Some(Work::Media {
            file,
            target: self.target_lang.clone(),
        })
    }

    pub fn finish(&mut self, outcome: Outcome) -> Option<Activity> {
        let Outcome::Media(result) = outcome else {
            log::warn!("Transcribe panel got an unrelated outcome");
            return None;
        };
        match result {
            Ok(results) => {
                self.phase = Phase::Idle;
                self.results = Some(results);
                let name = self.file.as_ref().map(|f| f.name.as_str()).unwrap_or("Media");
                Some(Activity::new(
                    ActivityKind::Transcription,
                    format!("{name} transcribed"),
                ))
            }
            Err(e) => {
                log::error!("Transcription failed: {e}");
                self.phase = Phase::Failed(e);
                None
            }
        }
    }

    pub fn target_name(&self) -> &str {
        language_name(&self.target_lang).unwrap_or(&self.target_lang)
    }

    pub fn export_document(&self) -> Option<ExportDocument> {
        let results = self.results.as_ref()?;
        Some(ExportDocument::transcription(
            &results.transcription,
            results
                .translation
                .as_deref()
                .map(|t| (self.target_name(), t)),
            results.summary.as_deref(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::config::UploadLimits;
    use crate::upload::UploadState;

    fn panel() -> TranscribePanel {
        TranscribePanel::new(UploadLimits::default().transcribe)
    }

    #[test]
    fn rejects_non_media_files() {
        let mut panel = panel();
        assert!(!panel.offer_file(file("notes.pdf", "application/pdf", 10)));
        assert!(panel.file.is_none());
        assert!(matches!(panel.upload.state(), UploadState::Error(_)));
    }

    #[test]
    fn nothing_to_process_without_a_file() {
        let mut panel = panel();
        assert!(panel.begin_process().is_none());
    }

    #[tokio::test]
    async fn full_run_then_new_file_clears_results() {
        let mut panel = panel();
        assert!(panel.offer_file(file("presser.mp4", "video/mp4", 50 * 1024 * 1024)));
        panel.target_lang = "sw".into();

        let work = panel.begin_process().unwrap();
        assert!(panel.begin_process().is_none());
        let activity = panel.finish(work.run(instant()).await).unwrap();
        assert_eq!(activity.title, "presser.mp4 transcribed");

        let doc = panel.export_document().unwrap();
        assert!(doc.body.contains("TRANSLATION (Kiswahili)"));

        panel.offer_file(file("interview.mp3", "audio/mpeg", 1024));
        assert!(panel.results.is_none());
        assert!(panel.export_document().is_none());
    }

    #[tokio::test]
    async fn media_cannot_change_while_processing() {
        let mut panel = panel();
        assert!(panel.offer_file(file("first.mp3", "audio/mpeg", 1024)));
        let work = panel.begin_process().unwrap();

        assert!(!panel.offer_file(file("second.wav", "audio/wav", 1024)));
        panel.select_file(file("third.mp4", "video/mp4", 1024));
        assert_eq!(panel.file.as_ref().map(|f| f.name.as_str()), Some("first.mp3"));
        assert!(panel.upload.error().is_none());

        let activity = panel.finish(work.run(instant()).await).unwrap();
        assert_eq!(activity.title, "first.mp3 transcribed");
        assert!(panel.offer_file(file("second.wav", "audio/wav", 1024)));
        assert!(panel.results.is_none());
    }

    #[test]
    fn oversized_media_is_rejected() {
        let mut panel = panel();
        assert!(!panel.offer_file(file("raw.mov", "video/quicktime", 101 * 1024 * 1024)));
    }
}

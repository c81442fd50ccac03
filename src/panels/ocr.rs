use super::{Activity, Outcome, PanelKind, Phase, Work};
use crate::activity::ActivityKind;
use crate::export::ExportDocument;
use crate::language::language_name;
use crate::processor::{Operation, ProcessRequest};
use crate::upload::{UploadCandidate, UploadConfig, UploadWidget};

/// The three things the OCR panel can do, which double as its result tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OcrAction {
    #[default]
    Extract,
    Translate,
    Summarize,
}

impl OcrAction {
    pub const ALL: [OcrAction; 3] = [OcrAction::Extract, OcrAction::Translate, OcrAction::Summarize];

    pub fn tab_title(self) -> &'static str {
        match self {
            OcrAction::Extract => "Extracted Text",
            OcrAction::Translate => "Translation",
            OcrAction::Summarize => "Summary",
        }
    }

    pub fn busy_label(self) -> &'static str {
        match self {
            OcrAction::Extract => "Extracting\u{2026}",
            OcrAction::Translate => "Translating\u{2026}",
            OcrAction::Summarize => "Summarizing\u{2026}",
        }
    }
}

#[derive(Debug)]
pub struct OcrPanel {
    pub upload: UploadWidget,
    pub file: Option<UploadCandidate>,
    pub extracted: String,
    pub translated: String,
    pub summary: String,
    pub target_lang: String,
    pub phase: Phase,
    pub running: Option<OcrAction>,
    pub active_tab: OcrAction,
    pub copied: Option<OcrAction>,
}

impl OcrPanel {
    pub fn new(upload: UploadConfig) -> Self {
        Self {
            upload: UploadWidget::new(upload),
            file: None,
            extracted: String::new(),
            translated: String::new(),
            summary: String::new(),
            target_lang: "sw".into(),
            phase: Phase::Idle,
            running: None,
            active_tab: OcrAction::Extract,
            copied: None,
        }
    }

    /// The image stays fixed while an action runs, so its result lands on the file it came from.
    pub fn accepts_files(&self) -> bool {
        !self.phase.is_pending()
    }

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

    pub fn select_file(&mut self, file: UploadCandidate) {
        if !self.accepts_files() {
            log::debug!("Ignoring {} while OCR is running", file.name);
            return;
        }
        self.file = Some(file);
        self.extracted.clear();
        self.translated.clear();
        self.summary.clear();
        self.copied = None;
    }

    pub fn can_start(&self, action: OcrAction) -> bool {
        if self.phase.is_pending() {
            return false;
        }
        match action {
            OcrAction::Extract => self.file.is_some(),
            OcrAction::Translate | OcrAction::Summarize => !self.extracted.is_empty(),
        }
    }

    pub fn begin(&mut self, action: OcrAction) -> Option<Work> {
        if !self.can_start(action) {
            return None;
        }
        let panel = PanelKind::Ocr;
        let request = match action {
            OcrAction::Extract => {
                ProcessRequest::file(panel, Operation::ExtractText, self.file.clone()?)
            }
            OcrAction::Translate => {
                ProcessRequest::text(panel, Operation::Translate, self.extracted.clone())
                    .target(&self.target_lang)
            }
            OcrAction::Summarize => {
                ProcessRequest::text(panel, Operation::Summarize, self.extracted.clone())
            }
        };
        self.phase = Phase::Pending;
        self.running = Some(action);
        self.active_tab = action;
        Some(Work::Process(request))
    }

    pub fn finish(&mut self, outcome: Outcome) -> Option<Activity> {
        let Outcome::Text(result) = outcome else {
            log::warn!("OCR panel got an unrelated outcome");
            return None;
        };
        let Some(action) = self.running.take() else {
            log::warn!("OCR result arrived with nothing running");
            return None;
        };
        let text = match result {
            Ok(text) => text,
            Err(e) => {
                log::error!("OCR {action:?} failed: {e}");
                self.phase = Phase::Failed(e);
                return None;
            }
        };
        self.phase = Phase::Idle;

        let name = self.file.as_ref().map(|f| f.name.clone()).unwrap_or_default();
        match action {
            OcrAction::Extract => {
                self.extracted = text;
                Some(Activity::new(
                    ActivityKind::Ocr,
                    format!("Text extracted from {name}"),
                ))
            }
            OcrAction::Translate => {
                self.translated = text;
                Some(Activity::new(
                    ActivityKind::Translation,
                    format!("{name} translated to {}", self.target_name()),
                ))
            }
            OcrAction::Summarize => {
                self.summary = text;
                Some(Activity::new(
                    ActivityKind::Summary,
                    format!("{name} summarized"),
                ))
            }
        }
    }

    pub fn is_running(&self, action: OcrAction) -> bool {
        self.running == Some(action)
    }

    pub fn result(&self, action: OcrAction) -> &str {
        match action {
            OcrAction::Extract => &self.extracted,
            OcrAction::Translate => &self.translated,
            OcrAction::Summarize => &self.summary,
        }
    }

    pub fn target_name(&self) -> &str {
        language_name(&self.target_lang).unwrap_or(&self.target_lang)
    }

    pub fn export_document(&self) -> Option<ExportDocument> {
        if self.extracted.is_empty() {
            return None;
        }
        let translation = (!self.translated.is_empty())
            .then(|| (self.target_name(), self.translated.as_str()));
        let summary = (!self.summary.is_empty()).then_some(self.summary.as_str());
        Some(ExportDocument::ocr(&self.extracted, translation, summary))
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::config::UploadLimits;

    fn panel_with_image() -> OcrPanel {
        let mut panel = OcrPanel::new(UploadLimits::default().ocr);
        assert!(panel.offer_file(file("minutes.jpg", "image/jpeg", 300_000)));
        panel
    }

    async fn run(panel: &mut OcrPanel, action: OcrAction) -> Option<Activity> {
        let work = panel.begin(action).expect("action should be enabled");
        panel.finish(work.run(instant()).await)
    }

    #[test]
    fn translate_and_summary_need_extracted_text() {
        let mut panel = panel_with_image();
        assert!(panel.begin(OcrAction::Translate).is_none());
        assert!(panel.begin(OcrAction::Summarize).is_none());
        assert!(panel.can_start(OcrAction::Extract));
    }

    #[test]
    fn one_action_at_a_time() {
        let mut panel = panel_with_image();
        assert!(panel.begin(OcrAction::Extract).is_some());
        assert!(panel.is_running(OcrAction::Extract));
        assert!(panel.begin(OcrAction::Extract).is_none());
    }

    #[tokio::test]
    async fn extract_translate_summarize() {
        let mut panel = panel_with_image();
        let extracted = run(&mut panel, OcrAction::Extract).await.unwrap();
        assert_eq!(extracted.kind, ActivityKind::Ocr);
        assert!(panel.extracted.starts_with("PRESS RELEASE"));

        panel.target_lang = "fr".into();
        run(&mut panel, OcrAction::Translate).await;
        assert_eq!(panel.active_tab, OcrAction::Translate);
        assert!(panel.translated.starts_with("COMMUNIQU"));

        run(&mut panel, OcrAction::Summarize).await;
        assert!(panel.result(OcrAction::Summarize).starts_with("KEY POINTS"));

        let doc = panel.export_document().unwrap();
        assert!(doc.body.contains("TRANSLATION (French):"));
        assert!(doc.body.contains("SUMMARY:\nKEY POINTS"));
    }

    #[tokio::test]
    async fn new_image_clears_results() {
        let mut panel = panel_with_image();
        run(&mut panel, OcrAction::Extract).await;
        panel.offer_file(file("second.png", "image/png", 1000));
        assert!(panel.extracted.is_empty());
        assert!(panel.export_document().is_none());
    }

    #[tokio::test]
    async fn image_cannot_change_while_extracting() {
        let mut panel = OcrPanel::new(UploadLimits::default().ocr);
        assert!(panel.offer_file(file("first.jpg", "image/jpeg", 1000)));
        let work = panel.begin(OcrAction::Extract).unwrap();

        assert!(!panel.accepts_files());
        assert!(!panel.offer_file(file("second.png", "image/png", 1000)));
        panel.select_file(file("third.png", "image/png", 1000));
        assert_eq!(panel.file.as_ref().map(|f| f.name.as_str()), Some("first.jpg"));

        let activity = panel.finish(work.run(instant()).await).unwrap();
        assert_eq!(activity.title, "Text extracted from first.jpg");
        assert!(panel.accepts_files());
        assert!(panel.offer_file(file("second.png", "image/png", 1000)));
        assert!(panel.extracted.is_empty());
    }

    #[tokio::test]
    async fn failure_keeps_existing_results() {
        let mut panel = panel_with_image();
        run(&mut panel, OcrAction::Extract).await;

        let work = panel.begin(OcrAction::Summarize).unwrap();
        assert!(panel.finish(work.run(unreachable()).await).is_none());
        assert!(panel.phase.error().is_some());
        assert!(panel.extracted.starts_with("PRESS RELEASE"));
        assert!(panel.running.is_none());
    }
}

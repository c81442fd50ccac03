//! Boundary between the panels and whatever turns content into text.
//!
//! Panels never produce results themselves: they build a [`ProcessRequest`]
//! and hand it to a [`ContentProcessor`]. The shipped implementation,
//! [`MockProcessor`], waits a configured delay and answers from static tables.
//! A real speech-to-text, translation, OCR or summarization backend only has
//! to implement the trait.

mod mock_data;

use std::sync::Arc;

use chrono::Utc;
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use serde::Serialize;

use crate::config::ProcessingDelays;
use crate::error::ServiceError;
use crate::language::{LengthHint, AUTO_DETECT};
use crate::panels::report::{Report, ReportReceipt};
use crate::panels::PanelKind;
use crate::upload::UploadCandidate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Operation {
    Translate,
    Transcribe,
    Summarize,
    ExtractText,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProcessInput {
    Text(String),
    File(UploadCandidate),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessOptions {
    pub source_language: Option<String>,
    pub target_language: Option<String>,
    pub length_hint: Option<LengthHint>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProcessRequest {
    pub panel: PanelKind,
    pub operation: Operation,
    pub input: ProcessInput,
    pub options: ProcessOptions,
}

impl ProcessRequest {
    pub fn text(panel: PanelKind, operation: Operation, text: impl Into<String>) -> Self {
        Self {
            panel,
            operation,
            input: ProcessInput::Text(text.into()),
            options: ProcessOptions::default(),
        }
    }

    pub fn file(panel: PanelKind, operation: Operation, file: UploadCandidate) -> Self {
        Self {
            panel,
            operation,
            input: ProcessInput::File(file),
            options: ProcessOptions::default(),
        }
    }

    pub fn source(mut self, code: &str) -> Self {
        self.options.source_language = Some(code.to_string());
        self
    }

    pub fn target(mut self, code: &str) -> Self {
        self.options.target_language = Some(code.to_string());
        self
    }

    pub fn length(mut self, hint: LengthHint) -> Self {
        self.options.length_hint = Some(hint);
        self
    }
}

/// Content-processing backend. Futures are `'static` so they can be spawned
/// on the runtime while the panel keeps ownership of its state.
pub trait ContentProcessor: Send + Sync {
    fn name(&self) -> &'static str;

    fn process(&self, request: ProcessRequest) -> BoxFuture<'static, Result<String, ServiceError>>;

    fn submit_report(
        &self,
        report: Report,
    ) -> BoxFuture<'static, Result<ReportReceipt, ServiceError>>;
}

pub type SharedProcessor = Arc<dyn ContentProcessor>;

/// Placeholder backend: fixed delay, then a static-table answer.
#[derive(Debug, Clone, Default)]
pub struct MockProcessor {
    delays: ProcessingDelays,
}

impl MockProcessor {
    pub fn new(delays: ProcessingDelays) -> Self {
        Self { delays }
    }

    fn delay_ms(&self, panel: PanelKind, operation: Operation) -> u64 {
        match (panel, operation) {
            (PanelKind::Translate, _) => self.delays.translate_ms,
            // One media run covers transcription, translation and summary.
            (PanelKind::Transcribe, Operation::Transcribe) => self.delays.transcribe_ms,
            (PanelKind::Transcribe, _) => 0,
            (PanelKind::Summarize, _) => self.delays.summarize_ms,
            (PanelKind::Ocr, Operation::ExtractText) => self.delays.ocr_extract_ms,
            (PanelKind::Ocr, Operation::Translate) => self.delays.ocr_translate_ms,
            (PanelKind::Ocr, _) => self.delays.ocr_summarize_ms,
            (PanelKind::Report, _) => self.delays.report_ms,
        }
    }

    /// Table lookup for a request, without the delay.
    pub fn answer(request: &ProcessRequest) -> Result<String, ServiceError> {
        let opts = &request.options;
        let target = opts.target_language.as_deref().unwrap_or("en");

        match (request.panel, request.operation, &request.input) {
            (PanelKind::Translate, Operation::Translate, ProcessInput::Text(text)) => {
                let source = opts.source_language.as_deref().unwrap_or(AUTO_DETECT);
                let effective = if source == AUTO_DETECT { "en" } else { source };
                let key = format!("{effective}-{target}");
                Ok(mock_data::lookup(mock_data::TEXT_TRANSLATIONS, &key)
                    .map(str::to_string)
                    .unwrap_or_else(|| {
                        format!("Translated text from {source} to {target}: {text}")
                    }))
            }
            (PanelKind::Transcribe, Operation::Transcribe, ProcessInput::File(_)) => {
                Ok(mock_data::TRANSCRIPT.to_string())
            }
            (PanelKind::Transcribe, Operation::Translate, ProcessInput::Text(_)) => {
                // Only a Kiswahili rendering exists; anything else means "no translation".
                Ok(if target == "sw" {
                    mock_data::TRANSCRIPT_SWAHILI.to_string()
                } else {
                    String::new()
                })
            }
            (PanelKind::Transcribe, Operation::Summarize, ProcessInput::Text(_)) => {
                Ok(mock_data::TRANSCRIPT_SUMMARY.to_string())
            }
            (PanelKind::Summarize, Operation::Summarize, ProcessInput::Text(text)) => {
                let language = target;
                let length = opts.length_hint.unwrap_or_default().key();
                let key = format!("{language}-{length}");
                Ok(mock_data::lookup(mock_data::SUMMARIES, &key)
                    .map(str::to_string)
                    .unwrap_or_else(|| {
                        let head: String = text.chars().take(200).collect();
                        format!("Summary in {language} ({length} length): {head}...")
                    }))
            }
            (PanelKind::Ocr, Operation::ExtractText, ProcessInput::File(_)) => {
                Ok(mock_data::OCR_TEXT.to_string())
            }
            (PanelKind::Ocr, Operation::Translate, ProcessInput::Text(_)) => Ok(match target {
                "fr" => mock_data::OCR_TRANSLATION_FRENCH,
                _ => mock_data::OCR_TRANSLATION_SWAHILI,
            }
            .to_string()),
            (PanelKind::Ocr, Operation::Summarize, ProcessInput::Text(_)) => {
                Ok(mock_data::OCR_SUMMARY.to_string())
            }
            (panel, operation, _) => Err(ServiceError::UnsupportedInput(format!(
                "{operation:?} is not available for the {panel:?} panel"
            ))),
        }
    }
}

impl ContentProcessor for MockProcessor {
    fn name(&self) -> &'static str {
        "Placeholder (simulated)"
    }

    fn process(&self, request: ProcessRequest) -> BoxFuture<'static, Result<String, ServiceError>> {
        let delay = ProcessingDelays::duration(self.delay_ms(request.panel, request.operation));
        async move {
            log::info!(
                "Simulating {:?} for {:?} ({} ms)",
                request.operation,
                request.panel,
                delay.as_millis()
            );
            tokio::time::sleep(delay).await;
            Self::answer(&request)
        }
        .boxed()
    }

    fn submit_report(
        &self,
        report: Report,
    ) -> BoxFuture<'static, Result<ReportReceipt, ServiceError>> {
        let delay = ProcessingDelays::duration(self.delays.report_ms);
        async move {
            tokio::time::sleep(delay).await;
            let now = Utc::now();
            let receipt = ReportReceipt {
                id: now.timestamp_millis(),
                timestamp: now.to_rfc3339(),
            };
            match serde_json::to_string(&report.submission(&receipt)) {
                Ok(json) => log::info!("Report submitted: {json}"),
                Err(e) => log::warn!("Could not serialize report for logging: {e}"),
            }
            Ok(receipt)
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn media() -> UploadCandidate {
        UploadCandidate {
            name: "briefing.mp3".into(),
            size_bytes: 4096,
            mime_type: "audio/mpeg".into(),
            path: PathBuf::from("briefing.mp3"),
        }
    }

    #[test]
    fn auto_detect_translates_as_english() {
        let req = ProcessRequest::text(PanelKind::Translate, Operation::Translate, "Hello")
            .source("auto")
            .target("sw");
        let out = MockProcessor::answer(&req).unwrap();
        assert!(out.starts_with("Habari za haraka"));
    }

    #[test]
    fn unknown_pair_echoes_source() {
        let req = ProcessRequest::text(PanelKind::Translate, Operation::Translate, "Hallo")
            .source("de")
            .target("ja");
        assert_eq!(
            MockProcessor::answer(&req).unwrap(),
            "Translated text from de to ja: Hallo"
        );
    }

    #[test]
    fn summary_fallback_truncates_to_200_chars() {
        let text = "x".repeat(300);
        let req = ProcessRequest::text(PanelKind::Summarize, Operation::Summarize, text)
            .target("fr")
            .length(LengthHint::Short);
        let out = MockProcessor::answer(&req).unwrap();
        assert_eq!(out, format!("Summary in fr (short length): {}...", "x".repeat(200)));
    }

    #[test]
    fn summary_table_keys_on_language_and_length() {
        let req = ProcessRequest::text(PanelKind::Summarize, Operation::Summarize, "text")
            .target("sw")
            .length(LengthHint::Short);
        assert!(MockProcessor::answer(&req).unwrap().starts_with("Baraza la jiji"));
    }

    #[test]
    fn media_translation_is_empty_unless_swahili() {
        let en = ProcessRequest::text(PanelKind::Transcribe, Operation::Translate, "t").target("en");
        assert_eq!(MockProcessor::answer(&en).unwrap(), "");
        let sw = ProcessRequest::text(PanelKind::Transcribe, Operation::Translate, "t").target("sw");
        assert!(MockProcessor::answer(&sw).unwrap().starts_with("Mkutano"));
    }

    #[test]
    fn ocr_translation_defaults_to_swahili() {
        let es = ProcessRequest::text(PanelKind::Ocr, Operation::Translate, "t").target("es");
        assert!(MockProcessor::answer(&es).unwrap().starts_with("TAARIFA"));
        let fr = ProcessRequest::text(PanelKind::Ocr, Operation::Translate, "t").target("fr");
        assert!(MockProcessor::answer(&fr).unwrap().starts_with("COMMUNIQU"));
    }

    #[test]
    fn mismatched_input_is_unsupported() {
        let req = ProcessRequest::text(PanelKind::Ocr, Operation::ExtractText, "not a file");
        assert!(matches!(
            MockProcessor::answer(&req),
            Err(ServiceError::UnsupportedInput(_))
        ));
    }

    #[tokio::test]
    async fn process_waits_then_answers() {
        let processor = MockProcessor::new(ProcessingDelays::zero());
        let out = processor
            .process(ProcessRequest::file(PanelKind::Transcribe, Operation::Transcribe, media()))
            .await
            .unwrap();
        assert!(out.starts_with("Today's press conference"));
    }

    #[tokio::test]
    async fn report_receipt_carries_timestamp() {
        let processor = MockProcessor::new(ProcessingDelays::zero());
        let report = Report {
            title: "Election night".into(),
            content: "Turnout was high.".into(),
            ..Report::default()
        };
        let receipt = processor.submit_report(report).await.unwrap();
        assert!(receipt.id > 0);
        assert!(chrono::DateTime::parse_from_rfc3339(&receipt.timestamp).is_ok());
    }
}

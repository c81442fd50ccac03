//! Toolkit-free panel controllers.
//!
//! Each controller owns its form and result state. Starting an action hands
//! back a [`Work`] item (or nothing, when the action is disabled); the caller
//! runs it against a processor and feeds the [`Outcome`] to `finish`.

pub mod ocr;
pub mod report;
pub mod summarize;
pub mod transcribe;
pub mod translate;

use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use serde::Serialize;

use crate::activity::ActivityKind;
use crate::error::ServiceError;
use crate::processor::{Operation, ProcessRequest, SharedProcessor};
use crate::upload::UploadCandidate;

use self::report::{Report, ReportReceipt};
use self::transcribe::MediaResults;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PanelKind {
    Report,
    Translate,
    Transcribe,
    Summarize,
    Ocr,
}

/// Processing status shared by all panels.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Phase {
    #[default]
    Idle,
    Pending,
    Failed(ServiceError),
}

impl Phase {
    pub fn is_pending(&self) -> bool {
        matches!(self, Phase::Pending)
    }

    pub fn error(&self) -> Option<&ServiceError> {
        match self {
            Phase::Failed(e) => Some(e),
            _ => None,
        }
    }

    /// Clear a service error. Results already on screen are untouched.
    pub fn dismiss(&mut self) {
        if matches!(self, Phase::Failed(_)) {
            *self = Phase::Idle;
        }
    }
}

/// One unit of background work requested by a panel.
#[derive(Debug, Clone)]
pub enum Work {
    Process(ProcessRequest),
    /// Transcribe a media file, then translate and summarize the transcript.
    Media { file: UploadCandidate, target: String },
    Report(Report),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Text(Result<String, ServiceError>),
    Media(Result<MediaResults, ServiceError>),
    Report(Result<ReportReceipt, ServiceError>),
}

impl Work {
    pub fn run(self, processor: SharedProcessor) -> BoxFuture<'static, Outcome> {
        async move {
            match self {
                Work::Process(request) => Outcome::Text(processor.process(request).await),
                Work::Media { file, target } => {
                    Outcome::Media(run_media(processor, file, target).await)
                }
                Work::Report(report) => Outcome::Report(processor.submit_report(report).await),
            }
        }
        .boxed()
    }
}

async fn run_media(
    processor: SharedProcessor,
    file: UploadCandidate,
    target: String,
) -> Result<MediaResults, ServiceError> {
    let panel = PanelKind::Transcribe;
    let transcription = processor
        .process(ProcessRequest::file(panel, Operation::Transcribe, file))
        .await?;
    let translation = processor
        .process(
            ProcessRequest::text(panel, Operation::Translate, transcription.clone())
                .target(&target),
        )
        .await?;
    let summary = processor
        .process(ProcessRequest::text(
            panel,
            Operation::Summarize,
            transcription.clone(),
        ))
        .await?;

    Ok(MediaResults {
        transcription,
        translation: (!translation.trim().is_empty()).then_some(translation),
        summary: (!summary.trim().is_empty()).then_some(summary),
    })
}

/// A successfully finished action, for the dashboard's activity feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub kind: ActivityKind,
    pub title: String,
}

impl Activity {
    pub fn new(kind: ActivityKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::path::PathBuf;
    use std::sync::Arc;

    use futures_util::future::BoxFuture;
    use futures_util::FutureExt;

    use crate::config::ProcessingDelays;
    use crate::error::ServiceError;
    use crate::processor::{ContentProcessor, MockProcessor, ProcessRequest, SharedProcessor};
    use crate::upload::UploadCandidate;

    use super::report::{Report, ReportReceipt};

    pub fn instant() -> SharedProcessor {
        Arc::new(MockProcessor::new(ProcessingDelays::zero()))
    }

    /// Backend that is always down.
    pub struct Unreachable;

    impl ContentProcessor for Unreachable {
        fn name(&self) -> &'static str {
            "unreachable"
        }

        fn process(&self, _: ProcessRequest) -> BoxFuture<'static, Result<String, ServiceError>> {
            async { Err(ServiceError::Network("connection refused".into())) }.boxed()
        }

        fn submit_report(
            &self,
            _: Report,
        ) -> BoxFuture<'static, Result<ReportReceipt, ServiceError>> {
            async { Err(ServiceError::Timeout) }.boxed()
        }
    }

    pub fn unreachable() -> SharedProcessor {
        Arc::new(Unreachable)
    }

    pub fn file(name: &str, mime: &str, size: u64) -> UploadCandidate {
        UploadCandidate {
            name: name.into(),
            size_bytes: size,
            mime_type: mime.into(),
            path: PathBuf::from(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn dismiss_only_clears_failures() {
        let mut phase = Phase::Pending;
        phase.dismiss();
        assert!(phase.is_pending());

        let mut phase = Phase::Failed(ServiceError::Timeout);
        phase.dismiss();
        assert_eq!(phase, Phase::Idle);
    }

    #[tokio::test]
    async fn media_work_chains_three_calls() {
        let work = Work::Media {
            file: file("presser.wav", "audio/wav", 1024),
            target: "sw".into(),
        };
        let Outcome::Media(Ok(results)) = work.run(instant()).await else {
            panic!("expected media results");
        };
        assert!(results.transcription.starts_with("Today's press conference"));
        assert!(results.translation.is_some());
        assert!(results.summary.is_some());
    }

    #[tokio::test]
    async fn media_work_without_translation() {
        let work = Work::Media {
            file: file("presser.wav", "audio/wav", 1024),
            target: "en".into(),
        };
        let Outcome::Media(Ok(results)) = work.run(instant()).await else {
            panic!("expected media results");
        };
        assert_eq!(results.translation, None);
    }

    #[tokio::test]
    async fn service_failures_surface_as_outcomes() {
        let work = Work::Media {
            file: file("presser.wav", "audio/wav", 1024),
            target: "sw".into(),
        };
        assert_eq!(
            work.run(unreachable()).await,
            Outcome::Media(Err(ServiceError::Network("connection refused".into())))
        );
    }
}

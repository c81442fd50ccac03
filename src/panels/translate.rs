use super::{Activity, Outcome, PanelKind, Phase, Work};
use crate::activity::ActivityKind;
use crate::language::{language_name, AUTO_DETECT};
use crate::processor::{Operation, ProcessRequest};

#[derive(Debug)]
pub struct TranslatePanel {
    pub source_text: String,
    pub translated_text: String,
    pub source_lang: String,
    pub target_lang: String,
    pub phase: Phase,
    pub copied: bool,
}

impl Default for TranslatePanel {
    fn default() -> Self {
        Self {
            source_text: String::new(),
            translated_text: String::new(),
            source_lang: AUTO_DETECT.into(),
            target_lang: "sw".into(),
            phase: Phase::Idle,
            copied: false,
        }
    }
}

impl TranslatePanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn can_translate(&self) -> bool {
        !self.phase.is_pending() && !self.source_text.trim().is_empty()
    }

    pub fn begin_translate(&mut self) -> Option<Work> {
        if !self.can_translate() {
            return None;
        }
        self.phase = Phase::Pending;
        Some(Work::Process(
            ProcessRequest::text(PanelKind::Translate, Operation::Translate, self.source_text.clone())
                .source(&self.source_lang)
                .target(&self.target_lang),
        ))
    }

    pub fn finish(&mut self, outcome: Outcome) -> Option<Activity> {
        let Outcome::Text(result) = outcome else {
            log::warn!("Translate panel got an unrelated outcome");
            return None;
        };
        match result {
            Ok(text) => {
                self.phase = Phase::Idle;
                self.translated_text = text;
                self.copied = false;
                let target = language_name(&self.target_lang).unwrap_or(&self.target_lang);
                Some(Activity::new(
                    ActivityKind::Translation,
                    format!("Text translated to {target}"),
                ))
            }
            Err(e) => {
                log::error!("Translation failed: {e}");
                self.phase = Phase::Failed(e);
                None
            }
        }
    }

    pub fn can_swap(&self) -> bool {
        self.source_lang != AUTO_DETECT
    }

    /// Swap the language pair and the two texts. Not possible from auto-detect.
    pub fn swap_languages(&mut self) -> bool {
        if !self.can_swap() {
            return false;
        }
        std::mem::swap(&mut self.source_lang, &mut self.target_lang);
        std::mem::swap(&mut self.source_text, &mut self.translated_text);
        self.copied = false;
        true
    }

    pub fn source_chars(&self) -> usize {
        self.source_text.chars().count()
    }

    pub fn translated_chars(&self) -> usize {
        self.translated_text.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;

    #[test]
    fn blank_input_is_a_no_op() {
        let mut panel = TranslatePanel::new();
        panel.source_text = " \n ".into();
        assert!(panel.begin_translate().is_none());
        assert_eq!(panel.phase, Phase::Idle);
    }

    #[test]
    fn second_request_while_pending_is_ignored() {
        let mut panel = TranslatePanel::new();
        panel.source_text = "Breaking news".into();
        assert!(panel.begin_translate().is_some());
        assert!(panel.begin_translate().is_none());
    }

    #[tokio::test]
    async fn translation_lands_in_result() {
        let mut panel = TranslatePanel::new();
        panel.source_text = "Breaking news".into();
        let work = panel.begin_translate().unwrap();
        let activity = panel.finish(work.run(instant()).await).unwrap();

        assert!(panel.translated_text.starts_with("Habari"));
        assert_eq!(activity.title, "Text translated to Kiswahili");
        assert_eq!(panel.phase, Phase::Idle);
    }

    #[tokio::test]
    async fn failure_keeps_previous_translation() {
        let mut panel = TranslatePanel::new();
        panel.source_text = "Breaking news".into();
        panel.translated_text = "earlier result".into();
        let work = panel.begin_translate().unwrap();
        panel.finish(work.run(unreachable()).await);

        assert_eq!(panel.translated_text, "earlier result");
        assert!(panel.phase.error().is_some());
        panel.phase.dismiss();
        assert_eq!(panel.phase, Phase::Idle);
    }

    #[test]
    fn swap_requires_explicit_source() {
        let mut panel = TranslatePanel::new();
        assert!(!panel.swap_languages());

        panel.source_lang = "en".into();
        panel.source_text = "hello".into();
        panel.translated_text = "habari".into();
        assert!(panel.swap_languages());
        assert_eq!(panel.source_lang, "sw");
        assert_eq!(panel.target_lang, "en");
        assert_eq!(panel.source_text, "habari");
        assert_eq!(panel.translated_text, "hello");
    }

    #[test]
    fn counts_characters_not_bytes() {
        let mut panel = TranslatePanel::new();
        panel.source_text = "réunion".into();
        assert_eq!(panel.source_chars(), 7);
    }
}

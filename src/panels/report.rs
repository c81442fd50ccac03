use serde::{Deserialize, Serialize};

use super::{Activity, Outcome, Phase, Work};
use crate::activity::ActivityKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    News,
    Interview,
    Investigation,
    Sports,
    Politics,
    Business,
    Technology,
    Health,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::News,
        Category::Interview,
        Category::Investigation,
        Category::Sports,
        Category::Politics,
        Category::Business,
        Category::Technology,
        Category::Health,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            Category::News => "Breaking News",
            Category::Interview => "Interview",
            Category::Investigation => "Investigation",
            Category::Sports => "Sports",
            Category::Politics => "Politics",
            Category::Business => "Business",
            Category::Technology => "Technology",
            Category::Health => "Health",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl Priority {
    pub const ALL: [Priority; 4] = [Priority::Low, Priority::Medium, Priority::High, Priority::Urgent];

    pub fn display_name(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Urgent => "Urgent",
        }
    }
}

/// The report form as the user fills it in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub title: String,
    pub content: String,
    pub category: Category,
    /// Comma separated, as typed.
    pub tags: String,
    pub priority: Priority,
}

impl Report {
    pub fn tag_list(&self) -> Vec<String> {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty() && !self.content.trim().is_empty()
    }

    pub fn submission<'a>(&'a self, receipt: &'a ReportReceipt) -> Submission<'a> {
        Submission {
            id: receipt.id,
            timestamp: &receipt.timestamp,
            title: &self.title,
            content: &self.content,
            category: self.category,
            tags: self.tag_list(),
            priority: self.priority,
        }
    }
}

/// Acknowledgement of an accepted report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportReceipt {
    /// Epoch milliseconds at submission.
    pub id: i64,
    /// RFC 3339.
    pub timestamp: String,
}

/// Record of a submitted report, as logged.
#[derive(Debug, Serialize)]
pub struct Submission<'a> {
    pub id: i64,
    pub timestamp: &'a str,
    pub title: &'a str,
    pub content: &'a str,
    pub category: Category,
    pub tags: Vec<String>,
    pub priority: Priority,
}

#[derive(Debug, Default)]
pub struct ReportPanel {
    pub form: Report,
    pub phase: Phase,
    pub submitted: Option<ReportReceipt>,
}

impl ReportPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn can_submit(&self) -> bool {
        !self.phase.is_pending() && self.form.is_complete()
    }

    pub fn begin_submit(&mut self) -> Option<Work> {
        if !self.can_submit() {
            return None;
        }
        self.phase = Phase::Pending;
        Some(Work::Report(self.form.clone()))
    }

    pub fn finish(&mut self, outcome: Outcome) -> Option<Activity> {
        let Outcome::Report(result) = outcome else {
            log::warn!("Report panel got an unrelated outcome");
            return None;
        };
        match result {
            Ok(receipt) => {
                self.phase = Phase::Idle;
                self.submitted = Some(receipt);
                Some(Activity::new(ActivityKind::Report, self.form.title.clone()))
            }
            Err(e) => {
                log::error!("Report submission failed: {e}");
                self.phase = Phase::Failed(e);
                None
            }
        }
    }

    /// Back to an empty form after the confirmation has been shown.
    pub fn reset(&mut self) {
        self.form = Report::default();
        self.submitted = None;
        self.phase = Phase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;

    fn filled() -> ReportPanel {
        let mut panel = ReportPanel::new();
        panel.form.title = "Budget vote".into();
        panel.form.content = "Council passed the budget 7-2.".into();
        panel.form.tags = " politics, , local ,budget".into();
        panel
    }

    #[test]
    fn blank_fields_disable_submit() {
        let mut panel = ReportPanel::new();
        panel.form.title = "Title only".into();
        panel.form.content = "   ".into();
        assert!(!panel.can_submit());
        assert!(panel.begin_submit().is_none());
    }

    #[test]
    fn tags_are_trimmed_and_blank_ones_dropped() {
        assert_eq!(filled().form.tag_list(), vec!["politics", "local", "budget"]);
    }

    #[test]
    fn submit_is_single_flight() {
        let mut panel = filled();
        assert!(panel.begin_submit().is_some());
        assert!(panel.begin_submit().is_none());
    }

    #[tokio::test]
    async fn successful_submit_then_reset() {
        let mut panel = filled();
        let work = panel.begin_submit().unwrap();
        let activity = panel.finish(work.run(instant()).await);

        assert_eq!(
            activity,
            Some(Activity::new(ActivityKind::Report, "Budget vote"))
        );
        assert!(panel.submitted.is_some());
        assert_eq!(panel.phase, Phase::Idle);

        panel.reset();
        assert_eq!(panel.form, Report::default());
        assert!(panel.submitted.is_none());
    }

    #[tokio::test]
    async fn failed_submit_keeps_form() {
        let mut panel = filled();
        let work = panel.begin_submit().unwrap();
        assert!(panel.finish(work.run(unreachable()).await).is_none());
        assert!(panel.phase.error().is_some());
        assert_eq!(panel.form.title, "Budget vote");
        assert!(panel.can_submit());
    }

    #[test]
    fn submission_serializes_lowercase_enums() {
        let panel = filled();
        let receipt = ReportReceipt {
            id: 1,
            timestamp: "2024-12-15T10:00:00+00:00".into(),
        };
        let json = serde_json::to_value(panel.form.submission(&receipt)).unwrap();
        assert_eq!(json["category"], "news");
        assert_eq!(json["priority"], "medium");
        assert_eq!(json["tags"][2], "budget");
    }
}

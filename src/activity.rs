use std::collections::VecDeque;

use chrono::{DateTime, Local};

use crate::panels::Activity;

const MAX_RECENT: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityKind {
    Report,
    Translation,
    Transcription,
    Summary,
    Ocr,
}

impl ActivityKind {
    pub fn label(self) -> &'static str {
        match self {
            ActivityKind::Report => "Report",
            ActivityKind::Translation => "Translation",
            ActivityKind::Transcription => "Transcription",
            ActivityKind::Summary => "Summary",
            ActivityKind::Ocr => "OCR",
        }
    }
}

/// A finished action with the time it completed.
#[derive(Debug, Clone)]
pub struct ActivityRecord {
    pub kind: ActivityKind,
    pub title: String,
    pub at: DateTime<Local>,
}

/// Session-only usage counters and recent activity for the dashboard.
#[derive(Debug, Clone, Default)]
pub struct ActivityLog {
    pub reports: usize,
    pub translations: usize,
    pub transcriptions: usize,
    pub summaries: usize,
    pub extractions: usize,
    recent: VecDeque<ActivityRecord>,
}

impl ActivityLog {
    pub fn record(&mut self, activity: Activity) {
        self.record_at(activity, Local::now());
    }

    pub fn record_at(&mut self, activity: Activity, at: DateTime<Local>) {
        match activity.kind {
            ActivityKind::Report => self.reports += 1,
            ActivityKind::Translation => self.translations += 1,
            ActivityKind::Transcription => self.transcriptions += 1,
            ActivityKind::Summary => self.summaries += 1,
            ActivityKind::Ocr => self.extractions += 1,
        }
        if self.recent.len() >= MAX_RECENT {
            self.recent.pop_back();
        }
        self.recent.push_front(ActivityRecord {
            kind: activity.kind,
            title: activity.title,
            at,
        });
    }

    /// Newest first.
    pub fn recent(&self) -> impl Iterator<Item = &ActivityRecord> {
        self.recent.iter()
    }
}

/// "just now", "5 minutes ago", "1 day ago".
pub fn relative_time(at: DateTime<Local>, now: DateTime<Local>) -> String {
    let secs = (now - at).num_seconds().max(0);
    let (count, unit) = match secs {
        0..=59 => return "just now".to_string(),
        60..=3599 => (secs / 60, "minute"),
        3600..=86_399 => (secs / 3600, "hour"),
        _ => (secs / 86_400, "day"),
    };
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn counts_by_kind_and_keeps_newest_first() {
        let mut log = ActivityLog::default();
        log.record(Activity::new(ActivityKind::Report, "Election results"));
        log.record(Activity::new(ActivityKind::Ocr, "Text extracted from scan.png"));
        log.record(Activity::new(ActivityKind::Ocr, "Text extracted from memo.jpg"));

        assert_eq!(log.reports, 1);
        assert_eq!(log.extractions, 2);
        assert_eq!(
            log.recent().next().map(|r| r.title.as_str()),
            Some("Text extracted from memo.jpg")
        );
    }

    #[test]
    fn recent_list_is_capped() {
        let mut log = ActivityLog::default();
        for i in 0..(MAX_RECENT + 5) {
            log.record(Activity::new(ActivityKind::Translation, format!("#{i}")));
        }
        assert_eq!(log.recent().count(), MAX_RECENT);
        assert_eq!(log.translations, MAX_RECENT + 5);
    }

    #[test]
    fn relative_times() {
        let now = Local::now();
        assert_eq!(relative_time(now - Duration::seconds(10), now), "just now");
        assert_eq!(relative_time(now - Duration::minutes(1), now), "1 minute ago");
        assert_eq!(relative_time(now - Duration::minutes(5), now), "5 minutes ago");
        assert_eq!(relative_time(now - Duration::hours(2), now), "2 hours ago");
        assert_eq!(relative_time(now - Duration::days(1), now), "1 day ago");
        assert_eq!(relative_time(now + Duration::minutes(3), now), "just now");
    }
}

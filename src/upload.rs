use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// One entry of an accepted-type list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeMatcher {
    /// `image/png`
    Exact(String),
    /// `audio/*`, holds the part before the slash
    Wildcard(String),
    /// `.pdf`, stored lowercased with the dot
    Extension(String),
}

impl TypeMatcher {
    pub fn parse(pattern: &str) -> Self {
        let pattern = pattern.trim();
        if pattern.starts_with('.') {
            return TypeMatcher::Extension(pattern.to_lowercase());
        }
        match pattern.split_once('/') {
            Some((major, "*")) => TypeMatcher::Wildcard(major.to_string()),
            _ => TypeMatcher::Exact(pattern.to_string()),
        }
    }

    pub fn matches(&self, candidate: &UploadCandidate) -> bool {
        match self {
            TypeMatcher::Exact(mime) => candidate.mime_type == *mime,
            TypeMatcher::Wildcard(major) => candidate
                .mime_type
                .split_once('/')
                .is_some_and(|(m, _)| m == major),
            TypeMatcher::Extension(ext) => candidate.name.to_lowercase().ends_with(ext.as_str()),
        }
    }
}

impl fmt::Display for TypeMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeMatcher::Exact(mime) => f.write_str(mime),
            TypeMatcher::Wildcard(major) => write!(f, "{major}/*"),
            TypeMatcher::Extension(ext) => f.write_str(ext),
        }
    }
}

/// A file the user selected or dropped, before or after validation.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadCandidate {
    pub name: String,
    pub size_bytes: u64,
    pub mime_type: String,
    pub path: PathBuf,
}

impl UploadCandidate {
    pub fn is_video(&self) -> bool {
        self.mime_type.starts_with("video/")
    }
}

/// Caller-supplied constraints and display text for an upload widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    pub accepted_types: Vec<String>,
    pub max_size_mib: f64,
    pub label: String,
    pub description: String,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            accepted_types: Vec::new(),
            max_size_mib: 10.0,
            label: "Upload File".into(),
            description: "Drag and drop or click to select files".into(),
        }
    }
}

impl UploadConfig {
    pub fn new(accepted_types: &[&str], max_size_mib: f64) -> Self {
        Self {
            accepted_types: accepted_types.iter().map(|s| s.to_string()).collect(),
            max_size_mib,
            ..Self::default()
        }
    }

    pub fn with_text(mut self, label: &str, description: &str) -> Self {
        self.label = label.into();
        self.description = description.into();
        self
    }

    pub fn max_size_bytes(&self) -> f64 {
        self.max_size_mib * 1024.0 * 1024.0
    }

    pub fn matchers(&self) -> Vec<TypeMatcher> {
        self.accepted_types.iter().map(|t| TypeMatcher::parse(t)).collect()
    }

    /// Size first, then type; the first failing check wins.
    pub fn validate(&self, candidate: &UploadCandidate) -> Result<(), ValidationError> {
        if candidate.size_bytes as f64 > self.max_size_bytes() {
            return Err(ValidationError::TooLarge {
                max_mib: self.max_size_mib,
            });
        }

        if !self.accepted_types.is_empty()
            && !self.matchers().iter().any(|m| m.matches(candidate))
        {
            return Err(ValidationError::InvalidType {
                accepted: self.accepted_types.clone(),
            });
        }

        Ok(())
    }

    /// Hint line shown under the drop zone.
    pub fn hint(&self) -> String {
        if self.accepted_types.is_empty() {
            format!("Max size: {}MB", self.max_size_mib)
        } else {
            format!(
                "Max size: {}MB \u{2022} Types: {}",
                self.max_size_mib,
                self.accepted_types.join(", ")
            )
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum UploadState {
    Idle,
    Error(ValidationError),
    Accepted,
}

/// Drop-zone state machine. Toolkit code feeds it pointer and drag events
/// and forwards whatever `submit` accepts to the host panel.
#[derive(Debug, Clone)]
pub struct UploadWidget {
    config: UploadConfig,
    state: UploadState,
    highlighted: bool,
}

impl UploadWidget {
    pub fn new(config: UploadConfig) -> Self {
        Self {
            config,
            state: UploadState::Idle,
            highlighted: false,
        }
    }

    pub fn config(&self) -> &UploadConfig {
        &self.config
    }

    pub fn state(&self) -> &UploadState {
        &self.state
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    pub fn error(&self) -> Option<&ValidationError> {
        match &self.state {
            UploadState::Error(e) => Some(e),
            _ => None,
        }
    }

    pub fn drag_enter(&mut self) {
        self.highlighted = true;
    }

    pub fn drag_leave(&mut self) {
        self.highlighted = false;
    }

    /// Validate and, on success, hand the candidate back for emission.
    pub fn submit(&mut self, candidate: UploadCandidate) -> Option<UploadCandidate> {
        match self.config.validate(&candidate) {
            Ok(()) => {
                log::info!(
                    "Accepted {} ({} bytes, {})",
                    candidate.name,
                    candidate.size_bytes,
                    candidate.mime_type
                );
                self.state = UploadState::Accepted;
                Some(candidate)
            }
            Err(e) => {
                log::debug!("Rejected {}: {e}", candidate.name);
                self.state = UploadState::Error(e);
                None
            }
        }
    }

    /// Only the first dropped file is considered. An empty drop just ends the drag.
    pub fn drop_files(&mut self, files: Vec<UploadCandidate>) -> Option<UploadCandidate> {
        self.drag_leave();
        let first = files.into_iter().next()?;
        self.submit(first)
    }

    pub fn dismiss_error(&mut self) {
        if matches!(self.state, UploadState::Error(_)) {
            self.state = UploadState::Idle;
        }
    }
}

/// Human-readable size in base-1024 units.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    let rounded = format!("{value:.2}");
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed} {}", UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(name: &str, mime: &str, size: u64) -> UploadCandidate {
        UploadCandidate {
            name: name.into(),
            size_bytes: size,
            mime_type: mime.into(),
            path: PathBuf::from(name),
        }
    }

    #[test]
    fn image_png_is_accepted_under_image_wildcard() {
        let mut widget = UploadWidget::new(UploadConfig::new(&["image/*"], 10.0));
        let file = candidate("photo.png", "image/png", 1_000_000);

        let emitted = widget.submit(file.clone());
        assert_eq!(emitted, Some(file));
        assert_eq!(widget.state(), &UploadState::Accepted);
    }

    #[test]
    fn pdf_is_rejected_naming_accepted_types() {
        let mut widget = UploadWidget::new(UploadConfig::new(&["image/*"], 10.0));

        let emitted = widget.submit(candidate("minutes.pdf", "application/pdf", 1_000_000));
        assert!(emitted.is_none());
        let err = widget.error().expect("type error");
        assert!(matches!(err, ValidationError::InvalidType { .. }));
        assert!(err.to_string().contains("image/*"));
    }

    #[test]
    fn oversize_fails_before_type_check() {
        let mut widget = UploadWidget::new(UploadConfig::new(&["image/*"], 1.0));

        let emitted = widget.submit(candidate("clip.exe", "application/x-dosexec", 2_000_000));
        assert!(emitted.is_none());
        assert_eq!(
            widget.error(),
            Some(&ValidationError::TooLarge { max_mib: 1.0 })
        );
        assert_eq!(
            widget.error().map(|e| e.to_string()).as_deref(),
            Some("File size must be less than 1MB")
        );
    }

    #[test]
    fn size_limit_is_inclusive() {
        let config = UploadConfig::new(&[], 1.0);
        assert!(config.validate(&candidate("a", "x/y", 1024 * 1024)).is_ok());
        assert!(config.validate(&candidate("a", "x/y", 1024 * 1024 + 1)).is_err());
    }

    #[test]
    fn empty_accept_list_accepts_any_type() {
        let config = UploadConfig::default();
        assert!(config
            .validate(&candidate("blob.bin", "application/octet-stream", 10))
            .is_ok());
    }

    #[test]
    fn extension_matchers_ignore_case() {
        let config = UploadConfig::new(&[".txt", ".docx", ".pdf"], 10.0);
        assert!(config.validate(&candidate("NOTES.TXT", "", 10)).is_ok());
        assert!(config.validate(&candidate("draft.Docx", "", 10)).is_ok());
        assert!(config.validate(&candidate("photo.png", "image/png", 10)).is_err());
    }

    #[test]
    fn exact_matcher_requires_full_mime() {
        let config = UploadConfig::new(&["text/plain"], 10.0);
        assert!(config.validate(&candidate("a.txt", "text/plain", 10)).is_ok());
        assert!(config.validate(&candidate("a.html", "text/html", 10)).is_err());
    }

    #[test]
    fn wildcard_compares_major_type_only() {
        let m = TypeMatcher::parse("audio/*");
        assert!(m.matches(&candidate("a.mp3", "audio/mpeg", 1)));
        assert!(!m.matches(&candidate("a.mp4", "video/mp4", 1)));
        assert!(!m.matches(&candidate("a", "audio", 1)));
        assert_eq!(m.to_string(), "audio/*");
    }

    #[test]
    fn dismiss_returns_to_idle_without_emitting() {
        let mut widget = UploadWidget::new(UploadConfig::new(&["image/*"], 10.0));
        widget.submit(candidate("a.pdf", "application/pdf", 10));
        assert!(widget.error().is_some());

        widget.dismiss_error();
        assert_eq!(widget.state(), &UploadState::Idle);
    }

    #[test]
    fn dismiss_outside_error_is_a_no_op() {
        let mut widget = UploadWidget::new(UploadConfig::default());
        widget.submit(candidate("a", "x/y", 1));
        widget.dismiss_error();
        assert_eq!(widget.state(), &UploadState::Accepted);
    }

    #[test]
    fn drag_only_toggles_highlight() {
        let mut widget = UploadWidget::new(UploadConfig::new(&["image/*"], 10.0));
        widget.submit(candidate("a.pdf", "application/pdf", 10));

        widget.drag_enter();
        assert!(widget.is_highlighted());
        assert!(widget.error().is_some());
        widget.drag_leave();
        assert!(!widget.is_highlighted());
        assert!(widget.error().is_some());
    }

    #[test]
    fn accepted_state_survives_a_drag() {
        let mut widget = UploadWidget::new(UploadConfig::default());
        widget.submit(candidate("a", "x/y", 1));

        widget.drag_enter();
        assert_eq!(widget.state(), &UploadState::Accepted);
        widget.drag_leave();
        assert_eq!(widget.state(), &UploadState::Accepted);
    }

    #[test]
    fn empty_drop_leaves_state_unchanged() {
        let mut widget = UploadWidget::new(UploadConfig::default());
        widget.drag_enter();
        assert!(widget.drop_files(Vec::new()).is_none());
        assert!(!widget.is_highlighted());
        assert_eq!(widget.state(), &UploadState::Idle);
    }

    #[test]
    fn multi_file_drop_uses_only_the_first() {
        let mut widget = UploadWidget::new(UploadConfig::new(&["image/*"], 10.0));
        let files = vec![
            candidate("first.png", "image/png", 10),
            candidate("second.pdf", "application/pdf", 10),
        ];
        let emitted = widget.drop_files(files);
        assert_eq!(emitted.map(|c| c.name), Some("first.png".to_string()));
        assert_eq!(widget.state(), &UploadState::Accepted);
    }

    #[test]
    fn valid_submission_clears_previous_error() {
        let mut widget = UploadWidget::new(UploadConfig::new(&["image/*"], 10.0));
        widget.submit(candidate("a.pdf", "application/pdf", 10));
        assert!(widget.submit(candidate("a.jpg", "image/jpeg", 10)).is_some());
        assert!(widget.error().is_none());
    }

    #[test]
    fn hint_lists_types_when_restricted() {
        assert_eq!(UploadConfig::new(&[], 10.0).hint(), "Max size: 10MB");
        assert_eq!(
            UploadConfig::new(&["audio/*", "video/*"], 100.0).hint(),
            "Max size: 100MB \u{2022} Types: audio/*, video/*"
        );
    }

    #[test]
    fn file_sizes_format_like_the_drop_zone() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(2 * 1024 * 1024), "2 MB");
        assert_eq!(format_file_size(1_342_177_280), "1.25 GB");
    }
}

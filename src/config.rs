use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::upload::UploadConfig;

/// Simulated latency of each placeholder operation, in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingDelays {
    pub translate_ms: u64,
    pub transcribe_ms: u64,
    pub summarize_ms: u64,
    pub ocr_extract_ms: u64,
    pub ocr_translate_ms: u64,
    pub ocr_summarize_ms: u64,
    pub report_ms: u64,
}

impl Default for ProcessingDelays {
    fn default() -> Self {
        Self {
            translate_ms: 2000,
            transcribe_ms: 3000,
            summarize_ms: 2500,
            ocr_extract_ms: 3000,
            ocr_translate_ms: 2000,
            ocr_summarize_ms: 1500,
            report_ms: 2000,
        }
    }
}

impl ProcessingDelays {
    /// No waiting at all. Used by tests.
    pub fn zero() -> Self {
        Self {
            translate_ms: 0,
            transcribe_ms: 0,
            summarize_ms: 0,
            ocr_extract_ms: 0,
            ocr_translate_ms: 0,
            ocr_summarize_ms: 0,
            report_ms: 0,
        }
    }

    pub fn duration(ms: u64) -> Duration {
        Duration::from_millis(ms)
    }
}

/// Upload constraints for the panels that take files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadLimits {
    pub transcribe: UploadConfig,
    pub summarize: UploadConfig,
    pub ocr: UploadConfig,
}

impl Default for UploadLimits {
    fn default() -> Self {
        Self {
            transcribe: UploadConfig::new(&["audio/*", "video/*"], 100.0).with_text(
                "Upload Audio or Video File",
                "Drag and drop or click to select audio/video files (MP3, MP4, WAV, etc.)",
            ),
            summarize: UploadConfig::new(&[".txt", ".docx", ".pdf"], 10.0).with_text(
                "Upload Text Document",
                "Drag and drop or click to select text files (TXT, DOCX, PDF)",
            ),
            ocr: UploadConfig::new(&["image/*"], 10.0).with_text(
                "Upload Image File",
                "Drag and drop or click to select images (JPG, PNG, etc.)",
            ),
        }
    }
}

impl UploadLimits {
    /// Put back the default size limit wherever the configured one is not positive.
    fn sanitize(&mut self) {
        let defaults = Self::default();
        for (name, config, fallback) in [
            ("transcribe", &mut self.transcribe, defaults.transcribe.max_size_mib),
            ("summarize", &mut self.summarize, defaults.summarize.max_size_mib),
            ("ocr", &mut self.ocr, defaults.ocr.max_size_mib),
        ] {
            if !(config.max_size_mib.is_finite() && config.max_size_mib > 0.0) {
                log::warn!(
                    "uploads.{name}.max_size_mib must be positive, got {}; using {fallback}",
                    config.max_size_mib
                );
                config.max_size_mib = fallback;
            }
        }
    }
}

/// Top-level application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub processing: ProcessingDelays,
    pub uploads: UploadLimits,
    /// Where exports are written. Defaults to the download directory.
    pub export_dir: Option<PathBuf>,
}

impl Config {
    /// Directory: ~/.config/newsdesk/
    fn dir() -> PathBuf {
        let mut p = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        p.push("newsdesk");
        p
    }

    fn path() -> PathBuf {
        Self::dir().join("config.json")
    }

    /// Load from the default location, returning defaults if the file doesn't exist or is invalid.
    pub fn load() -> Self {
        Self::load_from(&Self::path())
    }

    pub fn load_from(path: &Path) -> Self {
        let mut config: Self = match fs::read_to_string(path) {
            Ok(data) => serde_json::from_str(&data).unwrap_or_else(|e| {
                log::warn!("Ignoring invalid config {}: {e}", path.display());
                Self::default()
            }),
            Err(_) => Self::default(),
        };
        config.uploads.sanitize();
        config
    }

    pub fn export_dir(&self) -> PathBuf {
        self.export_dir
            .clone()
            .or_else(dirs::download_dir)
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("nope.json"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{ "processing": { "translate_ms": 5 }, "export_dir": "/tmp/out" }"#,
        )
        .unwrap();

        let config = Config::load_from(&path);
        assert_eq!(config.processing.translate_ms, 5);
        assert_eq!(config.processing.transcribe_ms, 3000);
        assert_eq!(config.uploads.ocr.accepted_types, vec!["image/*".to_string()]);
        assert_eq!(config.export_dir(), PathBuf::from("/tmp/out"));
    }

    #[test]
    fn non_positive_size_limits_fall_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{ "uploads": { "ocr": { "max_size_mib": -1 }, "summarize": { "max_size_mib": 0 },
                 "transcribe": { "max_size_mib": 250 } } }"#,
        )
        .unwrap();

        let uploads = Config::load_from(&path).uploads;
        assert_eq!(uploads.ocr.max_size_mib, 10.0);
        assert_eq!(uploads.summarize.max_size_mib, 10.0);
        assert_eq!(uploads.transcribe.max_size_mib, 250.0);
    }

    #[test]
    fn invalid_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();
        assert_eq!(Config::load_from(&path), Config::default());
    }

    #[test]
    fn default_upload_limits() {
        let limits = UploadLimits::default();
        assert_eq!(limits.transcribe.max_size_mib, 100.0);
        assert_eq!(limits.summarize.accepted_types.len(), 3);
        assert_eq!(limits.ocr.max_size_mib, 10.0);
    }
}

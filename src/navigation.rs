use crate::panels::PanelKind;

/// Entries of the navigation sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Dashboard,
    Panel(PanelKind),
}

impl Tab {
    pub const ALL: [Tab; 6] = [
        Tab::Dashboard,
        Tab::Panel(PanelKind::Report),
        Tab::Panel(PanelKind::Translate),
        Tab::Panel(PanelKind::Transcribe),
        Tab::Panel(PanelKind::Summarize),
        Tab::Panel(PanelKind::Ocr),
    ];

    pub fn id(self) -> &'static str {
        match self {
            Tab::Dashboard => "dashboard",
            Tab::Panel(PanelKind::Report) => "reports",
            Tab::Panel(PanelKind::Translate) => "translate",
            Tab::Panel(PanelKind::Transcribe) => "transcribe",
            Tab::Panel(PanelKind::Summarize) => "summarize",
            Tab::Panel(PanelKind::Ocr) => "ocr",
        }
    }

    /// Unknown ids fall back to the dashboard.
    pub fn from_id(id: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|t| t.id() == id)
            .unwrap_or_default()
    }

    pub fn name(self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Panel(PanelKind::Report) => "Submit Report",
            Tab::Panel(PanelKind::Translate) => "Translate Text",
            Tab::Panel(PanelKind::Transcribe) => "Audio/Video",
            Tab::Panel(PanelKind::Summarize) => "Summarize",
            Tab::Panel(PanelKind::Ocr) => "Image OCR",
        }
    }

    pub fn icon_name(self) -> &'static str {
        match self {
            Tab::Dashboard => "view-grid-symbolic",
            Tab::Panel(PanelKind::Report) => "document-edit-symbolic",
            Tab::Panel(PanelKind::Translate) => "preferences-desktop-locale-symbolic",
            Tab::Panel(PanelKind::Transcribe) => "audio-input-microphone-symbolic",
            Tab::Panel(PanelKind::Summarize) => "view-list-bullet-symbolic",
            Tab::Panel(PanelKind::Ocr) => "camera-photo-symbolic",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_and_unknown_falls_back() {
        for tab in Tab::ALL {
            assert_eq!(Tab::from_id(tab.id()), tab);
        }
        assert_eq!(Tab::from_id("settings"), Tab::Dashboard);
    }
}

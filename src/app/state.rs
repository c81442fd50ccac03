use std::cell::RefCell;
use std::rc::Rc;

use newsdesk::activity::ActivityLog;
use newsdesk::config::Config;
use newsdesk::navigation::Tab;
use newsdesk::panels::{Activity, Outcome};
use newsdesk::processor::{MockProcessor, SharedProcessor};
use newsdesk::task::TaskSlot;

use crate::ui::dashboard::DashboardView;
use crate::ui::ocr::OcrView;
use crate::ui::report::ReportView;
use crate::ui::shell::ShellWidgets;
use crate::ui::summarize::SummarizeView;
use crate::ui::transcribe::TranscribeView;
use crate::ui::translate::TranslateView;

/// Events sent from background tasks to the GTK main thread.
#[derive(Debug)]
pub enum BackendEvent {
    /// A panel's processing finished. `mount_id` names the panel instance that asked.
    WorkFinished { mount_id: u64, outcome: Outcome },
}

/// The view currently shown in the content area.
#[derive(Clone)]
pub enum PanelView {
    Dashboard(Rc<DashboardView>),
    Report(Rc<ReportView>),
    Translate(Rc<TranslateView>),
    Transcribe(Rc<TranscribeView>),
    Summarize(Rc<SummarizeView>),
    Ocr(Rc<OcrView>),
}

impl PanelView {
    pub fn root(&self) -> gtk4::Widget {
        use gtk4::prelude::*;
        match self {
            PanelView::Dashboard(v) => v.root.clone().upcast(),
            PanelView::Report(v) => v.root.clone().upcast(),
            PanelView::Translate(v) => v.root.clone().upcast(),
            PanelView::Transcribe(v) => v.root.clone().upcast(),
            PanelView::Summarize(v) => v.root.clone().upcast(),
            PanelView::Ocr(v) => v.root.clone().upcast(),
        }
    }

    /// Hand a finished result to the view. Returns what to record on the dashboard.
    pub fn finish(&self, outcome: Outcome) -> Option<Activity> {
        match self {
            PanelView::Dashboard(_) => {
                log::warn!("Dashboard received a processing result");
                None
            }
            PanelView::Report(v) => v.finish(outcome),
            PanelView::Translate(v) => v.finish(outcome),
            PanelView::Transcribe(v) => v.finish(outcome),
            PanelView::Summarize(v) => v.finish(outcome),
            PanelView::Ocr(v) => v.finish(outcome),
        }
    }
}

/// One mounting of a view. Dropping it aborts the view's pending work.
pub struct MountedPanel {
    pub id: u64,
    pub tab: Tab,
    pub view: PanelView,
    pub task: TaskSlot,
}

/// Central application state. Lives on the GTK main thread inside Rc<RefCell<>>.
pub struct AppState {
    pub config: Config,
    pub activity: ActivityLog,
    pub processor: SharedProcessor,
    pub tokio_rt: tokio::runtime::Runtime,
    pub backend_sender: async_channel::Sender<BackendEvent>,
    pub next_mount_id: u64,
    pub mounted: Option<MountedPanel>,

    // UI handles
    pub shell: Option<ShellWidgets>,
}

impl AppState {
    pub fn new(sender: async_channel::Sender<BackendEvent>) -> Self {
        let config = Config::load();
        let processor: SharedProcessor =
            std::sync::Arc::new(MockProcessor::new(config.processing.clone()));
        let tokio_rt = tokio::runtime::Runtime::new()
            .expect("Failed to create tokio runtime");
        log::info!("Using content processor: {}", processor.name());

        Self {
            config,
            activity: ActivityLog::default(),
            processor,
            tokio_rt,
            backend_sender: sender,
            next_mount_id: 0,
            mounted: None,
            shell: None,
        }
    }
}

pub type SharedState = Rc<RefCell<AppState>>;

/// Show a short message at the bottom of the window.
pub fn notify(state: &SharedState, message: &str) {
    if let Some(ref shell) = state.borrow().shell {
        let toast = libadwaita::Toast::new(message);
        toast.set_timeout(3);
        shell.toast_overlay.add_toast(toast);
    }
}

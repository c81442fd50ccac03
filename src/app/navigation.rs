use std::rc::Rc;

use newsdesk::navigation::Tab;
use newsdesk::panels::{PanelKind, Work};
use newsdesk::task::TaskSlot;

use super::pipeline::dispatch_work;
use super::state::{notify, MountedPanel, PanelView, SharedState};
use crate::ui::{self, ViewContext};

/// Unmount the current view and mount `tab`. Selecting the mounted tab again is a no-op.
pub fn navigate(state: &SharedState, tab: Tab) {
    if state
        .borrow()
        .mounted
        .as_ref()
        .is_some_and(|m| m.tab == tab)
    {
        return;
    }

    // Dropping the old mounting aborts its pending work.
    let mount_id = {
        let mut s = state.borrow_mut();
        if let Some(old) = s.mounted.take() {
            log::info!("Unmounting {} (#{})", old.tab.id(), old.id);
        }
        s.next_mount_id += 1;
        s.next_mount_id
    };

    let view = build_view(state, tab, mount_id);
    let root = view.root();
    {
        let mut s = state.borrow_mut();
        let task = TaskSlot::new(s.tokio_rt.handle().clone());
        s.mounted = Some(MountedPanel {
            id: mount_id,
            tab,
            view,
            task,
        });
    }
    log::info!("Mounted {} (#{mount_id})", tab.id());

    // Selecting the row re-enters here and returns early on the tab check.
    let s = state.borrow();
    if let Some(ref shell) = s.shell {
        shell.set_content(&root);
        shell.select_tab(tab);
    }
}

fn build_view(state: &SharedState, tab: Tab, mount_id: u64) -> PanelView {
    let ctx = view_context(state, mount_id);
    let uploads = state.borrow().config.uploads.clone();

    match tab {
        Tab::Dashboard => {
            let weak = Rc::downgrade(state);
            let on_navigate = Rc::new(move |tab: Tab| {
                if let Some(state) = weak.upgrade() {
                    navigate(&state, tab);
                }
            });
            let activity = state.borrow().activity.clone();
            PanelView::Dashboard(Rc::new(ui::dashboard::build_dashboard(
                &activity,
                on_navigate,
            )))
        }
        Tab::Panel(PanelKind::Report) => PanelView::Report(ui::report::build_report(ctx)),
        Tab::Panel(PanelKind::Translate) => {
            PanelView::Translate(ui::translate::build_translate(ctx))
        }
        Tab::Panel(PanelKind::Transcribe) => PanelView::Transcribe(
            ui::transcribe::build_transcribe(ctx, uploads.transcribe),
        ),
        Tab::Panel(PanelKind::Summarize) => PanelView::Summarize(
            ui::summarize::build_summarize(ctx, uploads.summarize),
        ),
        Tab::Panel(PanelKind::Ocr) => PanelView::Ocr(ui::ocr::build_ocr(ctx, uploads.ocr)),
    }
}

fn view_context(state: &SharedState, mount_id: u64) -> ViewContext {
    let run = {
        let weak = Rc::downgrade(state);
        Rc::new(move |work: Work| {
            if let Some(state) = weak.upgrade() {
                dispatch_work(&state, mount_id, work);
            }
        })
    };
    let notify = {
        let weak = Rc::downgrade(state);
        Rc::new(move |message: &str| {
            if let Some(state) = weak.upgrade() {
                notify(&state, message);
            }
        })
    };

    ViewContext {
        run,
        notify,
        export_dir: state.borrow().config.export_dir(),
    }
}

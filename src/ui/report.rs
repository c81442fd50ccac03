use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use chrono::{DateTime, Local};
use gtk4::glib;
use gtk4::prelude::*;
use libadwaita::prelude::*;

use newsdesk::panels::report::{Category, Priority, ReportPanel};
use newsdesk::panels::{Activity, Outcome};

use super::widgets::{self, ActionButton};
use super::ViewContext;

const TIMESTAMP_FORMAT: &str = "%b %-d, %Y, %-I:%M:%S %p";
const RESET_AFTER: Duration = Duration::from_secs(3);

pub struct ReportView {
    pub root: gtk4::ScrolledWindow,
    panel: RefCell<ReportPanel>,
    ctx: ViewContext,
    stack: gtk4::Stack,
    title_row: libadwaita::EntryRow,
    category_row: libadwaita::ComboRow,
    priority_row: libadwaita::ComboRow,
    tags_row: libadwaita::EntryRow,
    content_view: gtk4::TextView,
    submit: ActionButton,
    banner: libadwaita::Banner,
    submitted_label: gtk4::Label,
    reset_source: RefCell<Option<glib::SourceId>>,
}

pub fn build_report(ctx: ViewContext) -> Rc<ReportView> {
    let content = widgets::page();
    content.append(&widgets::page_header(
        "Submit Report",
        "Create a new report with automatic timestamp recording",
    ));

    let banner = widgets::error_banner();
    content.append(&banner);

    // --- Form ---
    let form = gtk4::Box::new(gtk4::Orientation::Vertical, 18);

    let now_row = libadwaita::ActionRow::builder()
        .title("Current Timestamp")
        .subtitle(Local::now().format(TIMESTAMP_FORMAT).to_string())
        .build();
    now_row.add_prefix(&gtk4::Image::from_icon_name("x-office-calendar-symbolic"));

    let details = libadwaita::PreferencesGroup::new();
    details.add(&now_row);

    let title_row = libadwaita::EntryRow::builder().title("Report Title").build();
    details.add(&title_row);

    let category_names: Vec<&str> = Category::ALL.iter().map(|c| c.display_name()).collect();
    let category_row = widgets::combo_row("Category", &category_names, 0);
    details.add(&category_row);

    let priority_names: Vec<&str> = Priority::ALL.iter().map(|p| p.display_name()).collect();
    let priority_default = Priority::ALL
        .iter()
        .position(|p| *p == Priority::default())
        .unwrap_or(0) as u32;
    let priority_row = widgets::combo_row("Priority", &priority_names, priority_default);
    details.add(&priority_row);

    let tags_row = libadwaita::EntryRow::builder()
        .title("Tags (comma-separated)")
        .build();
    details.add(&tags_row);
    form.append(&details);

    let content_label = gtk4::Label::new(Some("Report Content"));
    content_label.add_css_class("heading");
    content_label.set_xalign(0.0);
    form.append(&content_label);
    let (content_scrolled, content_view) = widgets::text_area(true, 12);
    form.append(&content_scrolled);

    let submit = ActionButton::new("Submit Report");
    submit.button.set_halign(gtk4::Align::End);
    form.append(&submit.button);

    // --- Confirmation ---
    let submitted_label = gtk4::Label::new(None);
    submitted_label.add_css_class("submitted-time");
    let done = libadwaita::StatusPage::builder()
        .icon_name("emblem-ok-symbolic")
        .title("Report Submitted Successfully!")
        .description("Your report has been timestamped and saved to the system.")
        .child(&submitted_label)
        .build();

    let stack = gtk4::Stack::new();
    stack.set_transition_type(gtk4::StackTransitionType::Crossfade);
    stack.add_named(&form, Some("form"));
    stack.add_named(&done, Some("done"));
    content.append(&stack);

    let root = gtk4::ScrolledWindow::builder()
        .hscrollbar_policy(gtk4::PolicyType::Never)
        .child(&content)
        .build();

    let view = Rc::new(ReportView {
        root,
        panel: RefCell::new(ReportPanel::new()),
        ctx,
        stack,
        title_row,
        category_row,
        priority_row,
        tags_row,
        content_view,
        submit,
        banner,
        submitted_label,
        reset_source: RefCell::new(None),
    });
    view.connect_signals();
    view.sync();
    view
}

impl ReportView {
    fn connect_signals(self: &Rc<Self>) {
        let weak = Rc::downgrade(self);
        self.title_row.connect_changed(move |row| {
            if let Some(view) = weak.upgrade() {
                view.panel.borrow_mut().form.title = row.text().to_string();
                view.sync();
            }
        });

        let weak = Rc::downgrade(self);
        self.tags_row.connect_changed(move |row| {
            if let Some(view) = weak.upgrade() {
                view.panel.borrow_mut().form.tags = row.text().to_string();
            }
        });

        let weak = Rc::downgrade(self);
        self.content_view.buffer().connect_changed(move |buffer| {
            if let Some(view) = weak.upgrade() {
                view.panel.borrow_mut().form.content = widgets::buffer_text(buffer);
                view.sync();
            }
        });

        let weak = Rc::downgrade(self);
        self.category_row.connect_selected_notify(move |row| {
            if let Some(view) = weak.upgrade() {
                let category = Category::ALL
                    .get(row.selected() as usize)
                    .copied()
                    .unwrap_or_default();
                view.panel.borrow_mut().form.category = category;
            }
        });

        let weak = Rc::downgrade(self);
        self.priority_row.connect_selected_notify(move |row| {
            if let Some(view) = weak.upgrade() {
                let priority = Priority::ALL
                    .get(row.selected() as usize)
                    .copied()
                    .unwrap_or_default();
                view.panel.borrow_mut().form.priority = priority;
            }
        });

        let weak = Rc::downgrade(self);
        self.submit.button.connect_clicked(move |_| {
            if let Some(view) = weak.upgrade() {
                view.start_submit();
            }
        });

        let weak = Rc::downgrade(self);
        self.banner.connect_button_clicked(move |_| {
            if let Some(view) = weak.upgrade() {
                view.panel.borrow_mut().phase.dismiss();
                view.sync();
            }
        });
    }

    fn start_submit(&self) {
        let work = self.panel.borrow_mut().begin_submit();
        if let Some(work) = work {
            log::info!("Submitting report");
            (self.ctx.run)(work);
        }
        self.sync();
    }

    pub fn finish(self: &Rc<Self>, outcome: Outcome) -> Option<Activity> {
        let activity = self.panel.borrow_mut().finish(outcome);
        let receipt = self.panel.borrow().submitted.clone();

        if let Some(receipt) = receipt {
            let at = DateTime::parse_from_rfc3339(&receipt.timestamp)
                .map(|t| t.with_timezone(&Local))
                .unwrap_or_else(|_| Local::now());
            self.submitted_label
                .set_text(&format!("Submitted at: {}", at.format(TIMESTAMP_FORMAT)));
            self.stack.set_visible_child_name("done");

            let weak = Rc::downgrade(self);
            let source = glib::timeout_add_local_once(RESET_AFTER, move || {
                if let Some(view) = weak.upgrade() {
                    view.reset_source.borrow_mut().take();
                    view.reset_form();
                }
            });
            self.reset_source.replace(Some(source));
        }
        self.sync();
        activity
    }

    fn reset_form(&self) {
        self.panel.borrow_mut().reset();
        // Setting the widgets re-enters the change handlers, so no borrow is held here.
        self.title_row.set_text("");
        self.tags_row.set_text("");
        self.content_view.buffer().set_text("");
        self.category_row.set_selected(0);
        self.priority_row.set_selected(
            Priority::ALL
                .iter()
                .position(|p| *p == Priority::default())
                .unwrap_or(0) as u32,
        );
        self.stack.set_visible_child_name("form");
        self.sync();
    }

    fn sync(&self) {
        let panel = self.panel.borrow();
        let pending = panel.phase.is_pending();
        self.submit.button.set_sensitive(panel.can_submit());
        self.submit.set_busy(pending.then_some("Submitting\u{2026}"));
        widgets::show_error(&self.banner, panel.phase.error().map(|e| e.to_string()));
    }
}

impl Drop for ReportView {
    fn drop(&mut self) {
        if let Some(source) = self.reset_source.get_mut().take() {
            source.remove();
        }
    }
}

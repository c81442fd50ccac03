use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gtk4::prelude::*;
use libadwaita::prelude::*;

use newsdesk::language::{Language, MEDIA_LANGUAGES};
use newsdesk::panels::ocr::{OcrAction, OcrPanel};
use newsdesk::panels::{Activity, Outcome};
use newsdesk::upload::{format_file_size, UploadConfig};

use super::upload::{self, UploadEvent, UploadZone};
use super::widgets::{self, ActionButton};
use super::ViewContext;

fn page_name(action: OcrAction) -> &'static str {
    match action {
        OcrAction::Extract => "extract",
        OcrAction::Translate => "translate",
        OcrAction::Summarize => "summarize",
    }
}

fn action_for_page(name: &str) -> Option<OcrAction> {
    OcrAction::ALL.into_iter().find(|a| page_name(*a) == name)
}

/// One results tab: its action button, text and copy button.
struct ResultTab {
    action: OcrAction,
    button: ActionButton,
    text: gtk4::Label,
    copy_button: gtk4::Button,
}

pub struct OcrView {
    pub root: gtk4::ScrolledWindow,
    panel: RefCell<OcrPanel>,
    ctx: ViewContext,
    languages: Vec<&'static Language>,
    zone: UploadZone,
    preview: gtk4::Box,
    file_row: libadwaita::ActionRow,
    banner: libadwaita::Banner,
    export_error: RefCell<Option<String>>,
    results: gtk4::Box,
    stack: gtk4::Stack,
    tabs: Vec<ResultTab>,
}

pub fn build_ocr(ctx: ViewContext, config: UploadConfig) -> Rc<OcrView> {
    let view = Rc::new_cyclic(|weak: &Weak<OcrView>| {
        let panel = OcrPanel::new(config);
        let languages: Vec<&'static Language> = MEDIA_LANGUAGES.iter().collect();

        let content = widgets::page();
        content.append(&widgets::page_header(
            "Image OCR & Text Extraction",
            "Extract text from photos and scanned documents, then translate or summarize it",
        ));

        let banner = widgets::error_banner();
        content.append(&banner);

        let on_event = {
            let weak = weak.clone();
            Rc::new(move |event: UploadEvent| {
                if let Some(view) = weak.upgrade() {
                    view.on_upload(event);
                }
            })
        };
        let zone = upload::build_upload_zone(
            panel.upload.config(),
            "image-x-generic-symbolic",
            on_event,
        );
        content.append(&zone.root);

        // --- Preview ---
        let preview = gtk4::Box::new(gtk4::Orientation::Vertical, 8);
        content.append(&preview);

        let file_group = libadwaita::PreferencesGroup::new();
        let file_row = libadwaita::ActionRow::builder().build();
        file_group.add(&file_row);
        content.append(&file_group);

        // --- Results ---
        let results = gtk4::Box::new(gtk4::Orientation::Vertical, 12);
        let results_header = gtk4::Box::new(gtk4::Orientation::Horizontal, 8);
        let results_title = gtk4::Label::new(Some("Extracted Results"));
        results_title.add_css_class("title-2");
        results_title.set_xalign(0.0);
        results_title.set_hexpand(true);
        results_header.append(&results_title);
        let export_button = gtk4::Button::builder()
            .icon_name("document-save-symbolic")
            .tooltip_text("Download all results")
            .build();
        export_button.add_css_class("flat");
        results_header.append(&export_button);
        results.append(&results_header);

        let stack = gtk4::Stack::new();
        stack.set_transition_type(gtk4::StackTransitionType::Crossfade);
        let switcher = gtk4::StackSwitcher::new();
        switcher.set_stack(Some(&stack));
        switcher.set_halign(gtk4::Align::Start);
        results.append(&switcher);
        results.append(&stack);

        let mut tabs = Vec::with_capacity(OcrAction::ALL.len());
        for action in OcrAction::ALL {
            let page = gtk4::Box::new(gtk4::Orientation::Vertical, 8);

            let header = gtk4::Box::new(gtk4::Orientation::Horizontal, 8);
            let title = gtk4::Label::new(Some(action.tab_title()));
            title.add_css_class("heading");
            title.set_xalign(0.0);
            title.set_hexpand(true);
            header.append(&title);

            if action == OcrAction::Translate {
                let target = gtk4::DropDown::builder()
                    .model(&widgets::language_model(&languages))
                    .selected(widgets::language_index(&languages, &panel.target_lang))
                    .valign(gtk4::Align::Center)
                    .build();
                let w = weak.clone();
                target.connect_selected_notify(move |dropdown| {
                    if let Some(view) = w.upgrade() {
                        if let Some(code) = widgets::language_at(&view.languages, dropdown.selected())
                        {
                            view.panel.borrow_mut().target_lang = code.to_string();
                        }
                    }
                });
                header.append(&target);
            }

            let button = ActionButton::new(match action {
                OcrAction::Extract => "Extract Text",
                OcrAction::Translate => "Translate",
                OcrAction::Summarize => "Summarize",
            });
            button.button.set_valign(gtk4::Align::Center);
            header.append(&button.button);

            let copy_button = widgets::copy_button();
            header.append(&copy_button);
            page.append(&header);

            let text = widgets::result_label();
            text.add_css_class("card");
            page.append(&text);

            stack.add_titled(&page, Some(page_name(action)), action.tab_title());

            let w = weak.clone();
            button.button.connect_clicked(move |_| {
                if let Some(view) = w.upgrade() {
                    view.start(action);
                }
            });
            let w = weak.clone();
            copy_button.connect_clicked(move |_| {
                if let Some(view) = w.upgrade() {
                    view.copy_result(action);
                }
            });

            tabs.push(ResultTab {
                action,
                button,
                text,
                copy_button,
            });
        }
        content.append(&results);

        let root = gtk4::ScrolledWindow::builder()
            .hscrollbar_policy(gtk4::PolicyType::Never)
            .child(&content)
            .build();

        let w = weak.clone();
        stack.connect_visible_child_name_notify(move |stack| {
            let (Some(view), Some(name)) = (w.upgrade(), stack.visible_child_name()) else {
                return;
            };
            if let Some(action) = action_for_page(&name) {
                view.panel.borrow_mut().active_tab = action;
            }
        });

        let w = weak.clone();
        export_button.connect_clicked(move |_| {
            if let Some(view) = w.upgrade() {
                let document = view.panel.borrow().export_document();
                if let Err(e) = view.ctx.export(document) {
                    view.export_error.replace(Some(e));
                    view.sync();
                }
            }
        });

        let w = weak.clone();
        banner.connect_button_clicked(move |_| {
            if let Some(view) = w.upgrade() {
                view.panel.borrow_mut().phase.dismiss();
                view.export_error.replace(None);
                view.sync();
            }
        });

        OcrView {
            root,
            panel: RefCell::new(panel),
            ctx,
            languages,
            zone,
            preview,
            file_row,
            banner,
            export_error: RefCell::new(None),
            results,
            stack,
            tabs,
        }
    });
    view.sync();
    view
}

impl OcrView {
    fn on_upload(&self, event: UploadEvent) {
        let accepted = {
            let mut panel = self.panel.borrow_mut();
            if !panel.accepts_files() {
                return;
            }
            let accepted = upload::apply(&mut panel.upload, event);
            if let Some(file) = &accepted {
                panel.select_file(file.clone());
            }
            accepted
        };

        if let Some(file) = accepted {
            while let Some(child) = self.preview.first_child() {
                self.preview.remove(&child);
            }
            self.preview.append(&upload::picture_for(&file));
        }
        self.sync();
    }

    fn start(&self, action: OcrAction) {
        let work = self.panel.borrow_mut().begin(action);
        if let Some(work) = work {
            log::info!("OCR {action:?} started");
            (self.ctx.run)(work);
        }
        self.sync();
    }

    fn copy_result(self: &Rc<Self>, action: OcrAction) {
        let text = self.panel.borrow().result(action).to_string();
        if text.is_empty() || !widgets::copy_text(&text) {
            return;
        }
        self.panel.borrow_mut().copied = Some(action);
        self.sync();

        let weak = Rc::downgrade(self);
        widgets::after_copied_timeout(move || {
            if let Some(view) = weak.upgrade() {
                let mut panel = view.panel.borrow_mut();
                if panel.copied == Some(action) {
                    panel.copied = None;
                }
                drop(panel);
                view.sync();
            }
        });
    }

    pub fn finish(&self, outcome: Outcome) -> Option<Activity> {
        let activity = self.panel.borrow_mut().finish(outcome);
        self.sync();
        activity
    }

    fn sync(&self) {
        let panel = self.panel.borrow();
        self.zone.render(&panel.upload);
        self.zone.set_enabled(panel.accepts_files());

        match &panel.file {
            Some(file) => {
                self.file_row.set_title(&gtk4::glib::markup_escape_text(&file.name));
                self.file_row.set_subtitle(&format_file_size(file.size_bytes));
            }
            None => {
                self.file_row.set_title("No image selected");
                self.file_row.set_subtitle("");
            }
        }
        self.results.set_visible(panel.file.is_some());

        for tab in &self.tabs {
            let result = panel.result(tab.action);
            tab.text.set_text(if result.is_empty() {
                "Nothing here yet."
            } else {
                result
            });
            tab.button.button.set_sensitive(panel.can_start(tab.action));
            tab.button.set_busy(
                panel
                    .is_running(tab.action)
                    .then_some(tab.action.busy_label()),
            );
            tab.copy_button.set_sensitive(!result.is_empty());
            if panel.copied == Some(tab.action) {
                tab.copy_button.set_icon_name("object-select-symbolic");
                tab.copy_button.set_tooltip_text(Some("Copied"));
            } else {
                tab.copy_button.set_icon_name("edit-copy-symbolic");
                tab.copy_button.set_tooltip_text(Some("Copy to clipboard"));
            }
        }

        let error = panel
            .phase
            .error()
            .map(|e| e.to_string())
            .or_else(|| self.export_error.borrow().clone());
        widgets::show_error(&self.banner, error);

        let active = page_name(panel.active_tab);
        drop(panel);
        // Switching pages re-enters the notify handler, which borrows the panel.
        if self.stack.visible_child_name().as_deref() != Some(active) {
            self.stack.set_visible_child_name(active);
        }
    }
}

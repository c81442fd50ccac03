use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gtk4::prelude::*;
use libadwaita::prelude::*;

use newsdesk::language::{Language, MEDIA_LANGUAGES};
use newsdesk::panels::transcribe::TranscribePanel;
use newsdesk::panels::{Activity, Outcome};
use newsdesk::upload::{format_file_size, UploadConfig};

use super::upload::{self, UploadEvent, UploadZone};
use super::widgets::{self, ActionButton};
use super::ViewContext;

pub struct TranscribeView {
    pub root: gtk4::ScrolledWindow,
    panel: RefCell<TranscribePanel>,
    ctx: ViewContext,
    languages: Vec<&'static Language>,
    zone: UploadZone,
    file_row: libadwaita::ActionRow,
    options: libadwaita::PreferencesGroup,
    process: ActionButton,
    banner: libadwaita::Banner,
    export_error: RefCell<Option<String>>,
    results: gtk4::Box,
    transcription_label: gtk4::Label,
    translation_group: libadwaita::PreferencesGroup,
    translation_label: gtk4::Label,
    summary_group: libadwaita::PreferencesGroup,
    summary_label: gtk4::Label,
}

pub fn build_transcribe(ctx: ViewContext, config: UploadConfig) -> Rc<TranscribeView> {
    let view = Rc::new_cyclic(|weak: &Weak<TranscribeView>| {
        let panel = TranscribePanel::new(config);
        let languages: Vec<&'static Language> = MEDIA_LANGUAGES.iter().collect();

        let content = widgets::page();
        content.append(&widgets::page_header(
            "Audio/Video Processing",
            "Transcribe recordings, then translate and summarize the transcript",
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
            "audio-x-generic-symbolic",
            on_event,
        );
        content.append(&zone.root);

        // --- Selected file and options ---
        let options = libadwaita::PreferencesGroup::new();
        options.set_title("Processing Options");

        let file_row = libadwaita::ActionRow::builder().title("No file selected").build();
        options.add(&file_row);

        let target_row = libadwaita::ComboRow::builder()
            .title("Translate to")
            .model(&widgets::language_model(&languages))
            .selected(widgets::language_index(&languages, &panel.target_lang))
            .build();
        options.add(&target_row);
        content.append(&options);

        let process = ActionButton::new("Transcribe & Process");
        content.append(&process.button);

        // --- Results ---
        let results = gtk4::Box::new(gtk4::Orientation::Vertical, 18);

        let results_header = gtk4::Box::new(gtk4::Orientation::Horizontal, 8);
        let results_title = gtk4::Label::new(Some("Results"));
        results_title.add_css_class("title-2");
        results_title.set_xalign(0.0);
        results_title.set_hexpand(true);
        results_header.append(&results_title);
        let export_button = gtk4::Button::builder()
            .icon_name("document-save-symbolic")
            .tooltip_text("Download results")
            .build();
        results_header.append(&export_button);
        results.append(&results_header);

        let transcription_group = libadwaita::PreferencesGroup::new();
        transcription_group.set_title("Transcription");
        let transcription_label = widgets::result_label();
        transcription_group.add(&transcription_label);
        results.append(&transcription_group);

        let translation_group = libadwaita::PreferencesGroup::new();
        let translation_label = widgets::result_label();
        translation_group.add(&translation_label);
        results.append(&translation_group);

        let summary_group = libadwaita::PreferencesGroup::new();
        summary_group.set_title("Summary");
        let summary_label = widgets::result_label();
        summary_group.add(&summary_label);
        results.append(&summary_group);

        content.append(&results);

        let root = gtk4::ScrolledWindow::builder()
            .hscrollbar_policy(gtk4::PolicyType::Never)
            .child(&content)
            .build();

        connect_signals(weak, &target_row, &process, &banner, &export_button);

        TranscribeView {
            root,
            panel: RefCell::new(panel),
            ctx,
            languages,
            zone,
            file_row,
            options,
            process,
            banner,
            export_error: RefCell::new(None),
            results,
            transcription_label,
            translation_group,
            translation_label,
            summary_group,
            summary_label,
        }
    });
    view.sync();
    view
}

fn connect_signals(
    weak: &Weak<TranscribeView>,
    target_row: &libadwaita::ComboRow,
    process: &ActionButton,
    banner: &libadwaita::Banner,
    export_button: &gtk4::Button,
) {
    let w = weak.clone();
    target_row.connect_selected_notify(move |row| {
        if let Some(view) = w.upgrade() {
            if let Some(code) = widgets::language_at(&view.languages, row.selected()) {
                view.panel.borrow_mut().target_lang = code.to_string();
            }
        }
    });

    let w = weak.clone();
    process.button.connect_clicked(move |_| {
        if let Some(view) = w.upgrade() {
            let work = view.panel.borrow_mut().begin_process();
            if let Some(work) = work {
                (view.ctx.run)(work);
            }
            view.sync();
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
}

impl TranscribeView {
    fn on_upload(&self, event: UploadEvent) {
        {
            let mut panel = self.panel.borrow_mut();
            if !panel.accepts_files() {
                return;
            }
            if let Some(file) = upload::apply(&mut panel.upload, event) {
                panel.select_file(file);
            }
        }
        self.sync();
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
                self.file_row.set_subtitle(&format!(
                    "{} \u{2022} {}",
                    format_file_size(file.size_bytes),
                    if file.is_video() { "Video" } else { "Audio" }
                ));
            }
            None => {
                self.file_row.set_title("No file selected");
                self.file_row.set_subtitle("");
            }
        }
        self.options.set_visible(panel.file.is_some());

        self.process.button.set_sensitive(panel.can_process());
        self.process.button.set_visible(panel.file.is_some());
        self.process
            .set_busy(panel.phase.is_pending().then_some("Processing\u{2026}"));

        let error = panel
            .phase
            .error()
            .map(|e| e.to_string())
            .or_else(|| self.export_error.borrow().clone());
        widgets::show_error(&self.banner, error);

        let Some(results) = &panel.results else {
            self.results.set_visible(false);
            return;
        };
        self.results.set_visible(true);
        self.transcription_label.set_text(&results.transcription);

        self.translation_group.set_visible(results.translation.is_some());
        self.translation_group
            .set_title(&format!("Translation ({})", panel.target_name()));
        self.translation_label
            .set_text(results.translation.as_deref().unwrap_or_default());

        self.summary_group.set_visible(results.summary.is_some());
        self.summary_label
            .set_text(results.summary.as_deref().unwrap_or_default());
    }
}

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gtk4::prelude::*;
use libadwaita::prelude::*;

use newsdesk::language::{Language, LengthHint, MEDIA_LANGUAGES};
use newsdesk::panels::summarize::SummarizePanel;
use newsdesk::panels::{Activity, Outcome};
use newsdesk::upload::{format_file_size, UploadCandidate, UploadConfig};

use super::upload::{self, UploadEvent, UploadZone};
use super::widgets::{self, ActionButton};
use super::ViewContext;

/// Value labels for characters, words, compression and reading time.
struct StatCells {
    root: gtk4::Box,
    characters: gtk4::Label,
    words: gtk4::Label,
    compression: gtk4::Label,
    minutes: gtk4::Label,
}

fn stat_cells() -> StatCells {
    let root = gtk4::Box::new(gtk4::Orientation::Horizontal, 12);
    root.set_homogeneous(true);

    let cell = |caption: &str| {
        let cell = gtk4::Box::new(gtk4::Orientation::Vertical, 2);
        cell.add_css_class("card");
        cell.set_margin_top(4);
        let value = gtk4::Label::new(Some("0"));
        value.add_css_class("stat-value");
        value.set_margin_top(8);
        let label = gtk4::Label::new(Some(caption));
        label.add_css_class("dim-label");
        label.set_margin_bottom(8);
        cell.append(&value);
        cell.append(&label);
        root.append(&cell);
        value
    };

    let characters = cell("Characters");
    let words = cell("Words");
    let compression = cell("Compression");
    let minutes = cell("Min Read");

    StatCells {
        root,
        characters,
        words,
        compression,
        minutes,
    }
}

pub struct SummarizeView {
    pub root: gtk4::ScrolledWindow,
    panel: RefCell<SummarizePanel>,
    ctx: ViewContext,
    languages: Vec<&'static Language>,
    zone: UploadZone,
    file_row: libadwaita::ActionRow,
    input_view: gtk4::TextView,
    input_stats: gtk4::Label,
    length_hint: gtk4::Label,
    summarize: ActionButton,
    banner: libadwaita::Banner,
    export_error: RefCell<Option<String>>,
    results: gtk4::Box,
    summary_label: gtk4::Label,
    copy_button: gtk4::Button,
    stats: StatCells,
}

pub fn build_summarize(ctx: ViewContext, config: UploadConfig) -> Rc<SummarizeView> {
    let view = Rc::new_cyclic(|weak: &Weak<SummarizeView>| {
        let panel = SummarizePanel::new(config);
        let languages: Vec<&'static Language> = MEDIA_LANGUAGES.iter().collect();

        let content = widgets::page();
        content.append(&widgets::page_header(
            "Text Summarization",
            "Upload documents or paste text to get AI-powered summaries",
        ));

        let banner = widgets::error_banner();
        content.append(&banner);

        // --- Optional document ---
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
            "x-office-document-symbolic",
            on_event,
        );
        content.append(&zone.root);

        let file_row = libadwaita::ActionRow::builder().build();
        file_row.add_prefix(&gtk4::Image::from_icon_name("x-office-document-symbolic"));
        file_row.add_css_class("card");
        content.append(&file_row);

        // --- Input ---
        let input_title = gtk4::Label::new(Some("Text to Summarize"));
        input_title.add_css_class("heading");
        input_title.set_xalign(0.0);
        content.append(&input_title);
        let (input_scrolled, input_view) = widgets::text_area(true, 12);
        content.append(&input_scrolled);
        let input_stats = gtk4::Label::new(None);
        input_stats.add_css_class("dim-label");
        input_stats.set_xalign(0.0);
        content.append(&input_stats);

        // --- Settings ---
        let settings = libadwaita::PreferencesGroup::new();
        settings.set_title("Summary Settings");

        let language_row = libadwaita::ComboRow::builder()
            .title("Summary Language")
            .model(&widgets::language_model(&languages))
            .selected(widgets::language_index(&languages, &panel.language))
            .build();
        settings.add(&language_row);

        let length_names: Vec<&str> = LengthHint::ALL.iter().map(|l| l.display_name()).collect();
        let length_row = widgets::combo_row(
            "Summary Length",
            &length_names,
            LengthHint::ALL
                .iter()
                .position(|l| *l == panel.length)
                .unwrap_or(0) as u32,
        );
        let length_hint = gtk4::Label::new(None);
        length_hint.add_css_class("dim-label");
        length_row.add_suffix(&length_hint);
        settings.add(&length_row);
        content.append(&settings);

        let summarize = ActionButton::new("Generate Summary");
        content.append(&summarize.button);

        // --- Result ---
        let results = gtk4::Box::new(gtk4::Orientation::Vertical, 12);
        let results_header = gtk4::Box::new(gtk4::Orientation::Horizontal, 8);
        let results_title = gtk4::Label::new(Some("Summary"));
        results_title.add_css_class("title-2");
        results_title.set_xalign(0.0);
        results_title.set_hexpand(true);
        results_header.append(&results_title);
        let copy_button = widgets::copy_button();
        results_header.append(&copy_button);
        let export_button = gtk4::Button::builder()
            .icon_name("document-save-symbolic")
            .tooltip_text("Download summary")
            .build();
        export_button.add_css_class("flat");
        results_header.append(&export_button);
        results.append(&results_header);

        let summary_label = widgets::result_label();
        summary_label.add_css_class("card");
        results.append(&summary_label);
        let stats = stat_cells();
        results.append(&stats.root);
        content.append(&results);

        let root = gtk4::ScrolledWindow::builder()
            .hscrollbar_policy(gtk4::PolicyType::Never)
            .child(&content)
            .build();

        connect_settings(weak, &language_row, &length_row);
        connect_actions(weak, &input_view, &summarize, &copy_button, &export_button, &banner);

        SummarizeView {
            root,
            panel: RefCell::new(panel),
            ctx,
            languages,
            zone,
            file_row,
            input_view,
            input_stats,
            length_hint,
            summarize,
            banner,
            export_error: RefCell::new(None),
            results,
            summary_label,
            copy_button,
            stats,
        }
    });
    view.sync();
    view
}

fn connect_settings(
    weak: &Weak<SummarizeView>,
    language_row: &libadwaita::ComboRow,
    length_row: &libadwaita::ComboRow,
) {
    let w = weak.clone();
    language_row.connect_selected_notify(move |row| {
        if let Some(view) = w.upgrade() {
            if let Some(code) = widgets::language_at(&view.languages, row.selected()) {
                view.panel.borrow_mut().language = code.to_string();
            }
        }
    });

    let w = weak.clone();
    length_row.connect_selected_notify(move |row| {
        if let Some(view) = w.upgrade() {
            if let Some(length) = LengthHint::ALL.get(row.selected() as usize) {
                view.panel.borrow_mut().length = *length;
            }
            view.sync();
        }
    });
}

fn connect_actions(
    weak: &Weak<SummarizeView>,
    input_view: &gtk4::TextView,
    summarize: &ActionButton,
    copy_button: &gtk4::Button,
    export_button: &gtk4::Button,
    banner: &libadwaita::Banner,
) {
    let w = weak.clone();
    input_view.buffer().connect_changed(move |buffer| {
        if let Some(view) = w.upgrade() {
            view.panel.borrow_mut().input_text = widgets::buffer_text(buffer);
            view.sync();
        }
    });

    let w = weak.clone();
    summarize.button.connect_clicked(move |_| {
        if let Some(view) = w.upgrade() {
            let work = view.panel.borrow_mut().begin_summarize();
            if let Some(work) = work {
                (view.ctx.run)(work);
            }
            view.sync();
        }
    });

    let w = weak.clone();
    copy_button.connect_clicked(move |_| {
        if let Some(view) = w.upgrade() {
            view.copy_summary();
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
}

/// Plain-text documents are read so their contents can fill the input.
fn read_plain_text(file: &UploadCandidate) -> Option<String> {
    if file.mime_type != "text/plain" {
        return None;
    }
    match std::fs::read_to_string(&file.path) {
        Ok(text) => Some(text),
        Err(e) => {
            log::warn!("Could not read {}: {e}", file.path.display());
            None
        }
    }
}

impl SummarizeView {
    fn on_upload(&self, event: UploadEvent) {
        let filled = {
            let mut panel = self.panel.borrow_mut();
            upload::apply(&mut panel.upload, event).map(|file| {
                let contents = read_plain_text(&file);
                panel.select_file(file, contents);
                panel.input_text.clone()
            })
        };
        if let Some(text) = filled {
            // Re-enters the buffer handler, which stores the same text.
            if text != widgets::buffer_text(&self.input_view.buffer()) {
                self.input_view.buffer().set_text(&text);
            }
        }
        self.sync();
    }

    fn copy_summary(self: &Rc<Self>) {
        let text = self.panel.borrow().summary.clone();
        if text.is_empty() || !widgets::copy_text(&text) {
            return;
        }
        self.panel.borrow_mut().copied = true;
        self.sync();

        let weak = Rc::downgrade(self);
        widgets::after_copied_timeout(move || {
            if let Some(view) = weak.upgrade() {
                view.panel.borrow_mut().copied = false;
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

        match &panel.file {
            Some(file) => {
                self.file_row.set_visible(true);
                self.file_row.set_title(&gtk4::glib::markup_escape_text(&file.name));
                let note = if file.mime_type == "text/plain" {
                    "text loaded into the editor"
                } else {
                    "paste the text you want summarized below"
                };
                self.file_row
                    .set_subtitle(&format!("{} \u{2022} {note}", format_file_size(file.size_bytes)));
            }
            None => self.file_row.set_visible(false),
        }

        let (chars, words) = panel.input_stats();
        self.input_stats
            .set_text(&format!("{chars} characters \u{2022} {words} words"));
        self.length_hint
            .set_text(&format!("~{} of original", panel.length.ratio()));

        self.summarize.button.set_sensitive(panel.can_summarize());
        self.summarize
            .set_busy(panel.phase.is_pending().then_some("Summarizing\u{2026}"));

        let error = panel
            .phase
            .error()
            .map(|e| e.to_string())
            .or_else(|| self.export_error.borrow().clone());
        widgets::show_error(&self.banner, error);

        if panel.copied {
            self.copy_button.set_icon_name("object-select-symbolic");
            self.copy_button.set_tooltip_text(Some("Copied"));
        } else {
            self.copy_button.set_icon_name("edit-copy-symbolic");
            self.copy_button.set_tooltip_text(Some("Copy to clipboard"));
        }

        let Some(stats) = panel.stats() else {
            self.results.set_visible(false);
            return;
        };
        self.results.set_visible(true);
        self.summary_label.set_text(&panel.summary);
        self.stats.characters.set_text(&stats.characters.to_string());
        self.stats.words.set_text(&stats.words.to_string());
        self.stats
            .compression
            .set_text(&format!("{}%", stats.compression_percent));
        self.stats
            .minutes
            .set_text(&stats.minutes_to_read.to_string());
    }
}

use std::cell::RefCell;
use std::rc::Rc;

use gtk4::prelude::*;
use libadwaita::prelude::*;

use newsdesk::language::{translation_targets, Language, TRANSLATION_LANGUAGES};
use newsdesk::panels::translate::TranslatePanel;
use newsdesk::panels::{Activity, Outcome};

use super::widgets::{self, ActionButton};
use super::ViewContext;

pub struct TranslateView {
    pub root: gtk4::ScrolledWindow,
    panel: RefCell<TranslatePanel>,
    ctx: ViewContext,
    sources: Vec<&'static Language>,
    targets: Vec<&'static Language>,
    source_row: libadwaita::ComboRow,
    target_row: libadwaita::ComboRow,
    swap_button: gtk4::Button,
    source_view: gtk4::TextView,
    source_count: gtk4::Label,
    result_view: gtk4::TextView,
    result_count: gtk4::Label,
    copy_button: gtk4::Button,
    translate: ActionButton,
    banner: libadwaita::Banner,
}

pub fn build_translate(ctx: ViewContext) -> Rc<TranslateView> {
    let panel = TranslatePanel::new();
    let sources: Vec<&'static Language> = TRANSLATION_LANGUAGES.iter().collect();
    let targets: Vec<&'static Language> = translation_targets().collect();

    let content = widgets::page();
    content.append(&widgets::page_header(
        "Translate Text",
        "Translate news content between languages",
    ));

    let banner = widgets::error_banner();
    content.append(&banner);

    // --- Language pair ---
    let languages = libadwaita::PreferencesGroup::new();
    let source_row = libadwaita::ComboRow::builder()
        .title("From")
        .model(&widgets::language_model(&sources))
        .selected(widgets::language_index(&sources, &panel.source_lang))
        .build();
    let target_row = libadwaita::ComboRow::builder()
        .title("To")
        .model(&widgets::language_model(&targets))
        .selected(widgets::language_index(&targets, &panel.target_lang))
        .build();

    let swap_button = gtk4::Button::from_icon_name("object-flip-horizontal-symbolic");
    swap_button.set_tooltip_text(Some("Swap languages"));
    swap_button.set_valign(gtk4::Align::Center);
    swap_button.add_css_class("flat");
    source_row.add_suffix(&swap_button);

    languages.add(&source_row);
    languages.add(&target_row);
    content.append(&languages);

    // --- Source and result side by side ---
    let columns = gtk4::Box::new(gtk4::Orientation::Horizontal, 18);
    columns.set_homogeneous(true);

    let source_column = gtk4::Box::new(gtk4::Orientation::Vertical, 8);
    let source_title = gtk4::Label::new(Some("Source Text"));
    source_title.add_css_class("heading");
    source_title.set_xalign(0.0);
    source_column.append(&source_title);
    let (source_scrolled, source_view) = widgets::text_area(true, 12);
    source_column.append(&source_scrolled);

    let source_footer = gtk4::Box::new(gtk4::Orientation::Horizontal, 8);
    let source_count = gtk4::Label::new(None);
    source_count.add_css_class("dim-label");
    source_count.set_hexpand(true);
    source_count.set_xalign(0.0);
    source_footer.append(&source_count);
    let translate = ActionButton::new("Translate");
    source_footer.append(&translate.button);
    source_column.append(&source_footer);

    let result_column = gtk4::Box::new(gtk4::Orientation::Vertical, 8);
    let result_header = gtk4::Box::new(gtk4::Orientation::Horizontal, 8);
    let result_title = gtk4::Label::new(Some("Translation"));
    result_title.add_css_class("heading");
    result_title.set_xalign(0.0);
    result_title.set_hexpand(true);
    result_header.append(&result_title);
    let copy_button = widgets::copy_button();
    result_header.append(&copy_button);
    result_column.append(&result_header);
    let (result_scrolled, result_view) = widgets::text_area(false, 12);
    result_column.append(&result_scrolled);
    let result_count = gtk4::Label::new(None);
    result_count.add_css_class("dim-label");
    result_count.set_xalign(0.0);
    result_column.append(&result_count);

    columns.append(&source_column);
    columns.append(&result_column);
    content.append(&columns);

    let root = gtk4::ScrolledWindow::builder()
        .hscrollbar_policy(gtk4::PolicyType::Never)
        .child(&content)
        .build();

    let view = Rc::new(TranslateView {
        root,
        panel: RefCell::new(panel),
        ctx,
        sources,
        targets,
        source_row,
        target_row,
        swap_button,
        source_view,
        source_count,
        result_view,
        result_count,
        copy_button,
        translate,
        banner,
    });
    view.connect_signals();
    view.sync();
    view
}

impl TranslateView {
    fn connect_signals(self: &Rc<Self>) {
        let weak = Rc::downgrade(self);
        self.source_view.buffer().connect_changed(move |buffer| {
            if let Some(view) = weak.upgrade() {
                view.panel.borrow_mut().source_text = widgets::buffer_text(buffer);
                view.sync();
            }
        });

        let weak = Rc::downgrade(self);
        self.source_row.connect_selected_notify(move |row| {
            if let Some(view) = weak.upgrade() {
                if let Some(code) = widgets::language_at(&view.sources, row.selected()) {
                    view.panel.borrow_mut().source_lang = code.to_string();
                }
                view.sync();
            }
        });

        let weak = Rc::downgrade(self);
        self.target_row.connect_selected_notify(move |row| {
            if let Some(view) = weak.upgrade() {
                if let Some(code) = widgets::language_at(&view.targets, row.selected()) {
                    view.panel.borrow_mut().target_lang = code.to_string();
                }
            }
        });

        let weak = Rc::downgrade(self);
        self.swap_button.connect_clicked(move |_| {
            if let Some(view) = weak.upgrade() {
                view.swap();
            }
        });

        let weak = Rc::downgrade(self);
        self.translate.button.connect_clicked(move |_| {
            if let Some(view) = weak.upgrade() {
                let work = view.panel.borrow_mut().begin_translate();
                if let Some(work) = work {
                    (view.ctx.run)(work);
                }
                view.sync();
            }
        });

        let weak = Rc::downgrade(self);
        self.copy_button.connect_clicked(move |_| {
            if let Some(view) = weak.upgrade() {
                view.copy_result();
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

    fn swap(&self) {
        let swapped = {
            let mut panel = self.panel.borrow_mut();
            panel.swap_languages().then(|| {
                (
                    panel.source_lang.clone(),
                    panel.target_lang.clone(),
                    panel.source_text.clone(),
                    panel.translated_text.clone(),
                )
            })
        };
        let Some((source_lang, target_lang, source_text, translated_text)) = swapped else {
            return;
        };

        // The change handlers write these same values back into the panel.
        self.source_row
            .set_selected(widgets::language_index(&self.sources, &source_lang));
        self.target_row
            .set_selected(widgets::language_index(&self.targets, &target_lang));
        self.source_view.buffer().set_text(&source_text);
        self.result_view.buffer().set_text(&translated_text);
        self.sync();
    }

    fn copy_result(self: &Rc<Self>) {
        let text = self.panel.borrow().translated_text.clone();
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
        let translated = self.panel.borrow().translated_text.clone();
        self.result_view.buffer().set_text(&translated);
        self.sync();
        activity
    }

    fn sync(&self) {
        let panel = self.panel.borrow();
        self.source_count
            .set_text(&format!("{} characters", panel.source_chars()));
        self.result_count
            .set_text(&format!("{} characters", panel.translated_chars()));

        self.translate.button.set_sensitive(panel.can_translate());
        self.translate
            .set_busy(panel.phase.is_pending().then_some("Translating\u{2026}"));
        self.swap_button.set_sensitive(panel.can_swap());

        self.copy_button
            .set_sensitive(!panel.translated_text.is_empty());
        if panel.copied {
            self.copy_button.set_icon_name("object-select-symbolic");
            self.copy_button.set_tooltip_text(Some("Copied"));
        } else {
            self.copy_button.set_icon_name("edit-copy-symbolic");
            self.copy_button.set_tooltip_text(Some("Copy to clipboard"));
        }

        widgets::show_error(&self.banner, panel.phase.error().map(|e| e.to_string()));
    }
}

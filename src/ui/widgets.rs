use std::time::Duration;

use gtk4::glib;
use gtk4::prelude::*;

use newsdesk::language::Language;

/// A button that can show a spinner and a busy label while work is pending.
#[derive(Clone)]
pub struct ActionButton {
    pub button: gtk4::Button,
    spinner: gtk4::Spinner,
    label: gtk4::Label,
    idle_text: String,
}

impl ActionButton {
    pub fn new(text: &str) -> Self {
        let spinner = gtk4::Spinner::new();
        spinner.set_visible(false);
        let label = gtk4::Label::new(Some(text));

        let content = gtk4::Box::new(gtk4::Orientation::Horizontal, 8);
        content.set_halign(gtk4::Align::Center);
        content.append(&spinner);
        content.append(&label);

        let button = gtk4::Button::builder()
            .child(&content)
            .halign(gtk4::Align::Start)
            .build();
        button.add_css_class("suggested-action");
        button.add_css_class("pill");

        Self {
            button,
            spinner,
            label,
            idle_text: text.to_string(),
        }
    }

    /// Busy shows the spinner and `busy_text`; idle restores the original label.
    pub fn set_busy(&self, busy: Option<&str>) {
        match busy {
            Some(text) => {
                self.spinner.set_visible(true);
                self.spinner.set_spinning(true);
                self.label.set_text(text);
            }
            None => {
                self.spinner.set_spinning(false);
                self.spinner.set_visible(false);
                self.label.set_text(&self.idle_text);
            }
        }
    }
}

/// Dismissible inline error, hidden until revealed.
pub fn error_banner() -> libadwaita::Banner {
    let banner = libadwaita::Banner::new("");
    banner.set_button_label(Some("Dismiss"));
    banner.set_revealed(false);
    banner
}

pub fn show_error(banner: &libadwaita::Banner, message: Option<String>) {
    match message {
        Some(text) => {
            banner.set_title(&text);
            banner.set_revealed(true);
        }
        None => banner.set_revealed(false),
    }
}

pub fn page_header(title: &str, subtitle: &str) -> gtk4::Box {
    let header = gtk4::Box::new(gtk4::Orientation::Vertical, 4);
    header.set_margin_bottom(12);

    let title_label = gtk4::Label::new(Some(title));
    title_label.add_css_class("title-1");
    title_label.set_xalign(0.0);
    header.append(&title_label);

    let subtitle_label = gtk4::Label::new(Some(subtitle));
    subtitle_label.add_css_class("dim-label");
    subtitle_label.set_xalign(0.0);
    subtitle_label.set_wrap(true);
    header.append(&subtitle_label);

    header
}

/// Vertical page container with the usual margins.
pub fn page() -> gtk4::Box {
    let content = gtk4::Box::new(gtk4::Orientation::Vertical, 18);
    content.set_margin_start(16);
    content.set_margin_end(16);
    content.set_margin_top(12);
    content.set_margin_bottom(24);
    content
}

pub fn text_area(editable: bool, placeholder_rows: i32) -> (gtk4::ScrolledWindow, gtk4::TextView) {
    let view = gtk4::TextView::builder()
        .editable(editable)
        .cursor_visible(editable)
        .wrap_mode(gtk4::WrapMode::WordChar)
        .top_margin(8)
        .bottom_margin(8)
        .left_margin(8)
        .right_margin(8)
        .build();
    view.add_css_class("card");

    let scrolled = gtk4::ScrolledWindow::builder()
        .hscrollbar_policy(gtk4::PolicyType::Never)
        .min_content_height(placeholder_rows * 20)
        .child(&view)
        .build();
    (scrolled, view)
}

pub fn buffer_text(buffer: &gtk4::TextBuffer) -> String {
    buffer
        .text(&buffer.start_iter(), &buffer.end_iter(), false)
        .to_string()
}

/// Read-only, selectable block of result text.
pub fn result_label() -> gtk4::Label {
    let label = gtk4::Label::new(None);
    label.set_wrap(true);
    label.set_xalign(0.0);
    label.set_selectable(true);
    label.set_margin_top(8);
    label.set_margin_bottom(8);
    label.set_margin_start(8);
    label.set_margin_end(8);
    label
}

pub fn language_model(languages: &[&Language]) -> gtk4::StringList {
    let names: Vec<&str> = languages.iter().map(|l| l.name).collect();
    gtk4::StringList::new(&names)
}

pub fn language_index(languages: &[&Language], code: &str) -> u32 {
    languages
        .iter()
        .position(|l| l.code == code)
        .unwrap_or(0) as u32
}

pub fn language_at(languages: &[&Language], index: u32) -> Option<&'static str> {
    languages.get(index as usize).map(|l| l.code)
}

pub fn combo_row(title: &str, names: &[&str], selected: u32) -> libadwaita::ComboRow {
    let row = libadwaita::ComboRow::builder()
        .title(title)
        .model(&gtk4::StringList::new(names))
        .build();
    row.set_selected(selected);
    row
}

pub fn copy_button() -> gtk4::Button {
    let button = gtk4::Button::from_icon_name("edit-copy-symbolic");
    button.set_valign(gtk4::Align::Center);
    button.set_tooltip_text(Some("Copy to clipboard"));
    button.add_css_class("flat");
    button
}

/// Copy, logging failures. Returns whether the text reached the clipboard.
pub fn copy_text(text: &str) -> bool {
    match newsdesk::clipboard::copy_to_clipboard(text) {
        Ok(()) => true,
        Err(e) => {
            log::error!("Failed to copy text: {e}");
            false
        }
    }
}

/// Run `f` once after the "Copied" feedback has been visible long enough.
pub fn after_copied_timeout<F: FnOnce() + 'static>(f: F) {
    glib::timeout_add_local_once(Duration::from_secs(2), f);
}

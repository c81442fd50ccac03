use std::rc::Rc;

use chrono::Local;
use gtk4::glib;
use gtk4::prelude::*;
use libadwaita::prelude::*;

use newsdesk::activity::{relative_time, ActivityLog};
use newsdesk::navigation::Tab;

use super::widgets;

/// Handles returned from building the dashboard page.
pub struct DashboardView {
    pub root: gtk4::ScrolledWindow,
}

/// Build the dashboard from this session's activity.
pub fn build_dashboard(activity: &ActivityLog, on_navigate: Rc<dyn Fn(Tab)>) -> DashboardView {
    let content = widgets::page();
    content.append(&widgets::page_header(
        "Dashboard",
        "Your newsroom activity for this session",
    ));

    // --- Statistics group ---
    let stats_group = libadwaita::PreferencesGroup::new();
    stats_group.set_title("Statistics");

    let counters = [
        ("Reports Submitted", activity.reports, "document-edit-symbolic"),
        ("Translations", activity.translations, "preferences-desktop-locale-symbolic"),
        ("Transcriptions", activity.transcriptions, "audio-input-microphone-symbolic"),
        ("Summaries", activity.summaries, "view-list-bullet-symbolic"),
        ("OCR Extractions", activity.extractions, "camera-photo-symbolic"),
    ];
    for (title, count, icon) in counters {
        let row = libadwaita::ActionRow::builder().title(title).build();
        row.add_prefix(&gtk4::Image::from_icon_name(icon));
        let value = gtk4::Label::new(Some(&count.to_string()));
        value.add_css_class("stat-value");
        row.add_suffix(&value);
        stats_group.add(&row);
    }
    content.append(&stats_group);

    // --- Recent activity ---
    let recent_group = libadwaita::PreferencesGroup::new();
    recent_group.set_title("Recent Activity");

    let now = Local::now();
    let mut any = false;
    for record in activity.recent().take(10) {
        any = true;
        let row = libadwaita::ActionRow::builder()
            .title(glib::markup_escape_text(&record.title).as_str())
            .subtitle(record.kind.label())
            .build();
        let when = gtk4::Label::new(Some(&relative_time(record.at, now)));
        when.add_css_class("dim-label");
        when.add_css_class("caption");
        row.add_suffix(&when);
        recent_group.add(&row);
    }
    if !any {
        let empty = libadwaita::ActionRow::builder()
            .title("No activity yet")
            .subtitle("Finished reports, translations and extractions show up here")
            .build();
        empty.add_css_class("dim-label");
        recent_group.add(&empty);
    }
    content.append(&recent_group);

    // --- Quick start ---
    let quick_group = libadwaita::PreferencesGroup::new();
    quick_group.set_title("Quick Start");

    for tab in Tab::ALL.into_iter().filter(|t| *t != Tab::Dashboard) {
        let row = libadwaita::ActionRow::builder()
            .title(tab.name())
            .activatable(true)
            .build();
        row.add_prefix(&gtk4::Image::from_icon_name(tab.icon_name()));
        row.add_suffix(&gtk4::Image::from_icon_name("go-next-symbolic"));

        let on_navigate = on_navigate.clone();
        row.connect_activated(move |_| {
            // Leave the signal handler before this page is torn down.
            let on_navigate = on_navigate.clone();
            glib::idle_add_local_once(move || on_navigate(tab));
        });
        quick_group.add(&row);
    }
    content.append(&quick_group);

    let root = gtk4::ScrolledWindow::builder()
        .hscrollbar_policy(gtk4::PolicyType::Never)
        .child(&content)
        .build();

    DashboardView { root }
}

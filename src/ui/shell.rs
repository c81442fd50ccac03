use std::rc::Rc;

use chrono::Local;
use gtk4::glib;
use gtk4::prelude::*;
use libadwaita::prelude::*;

use newsdesk::navigation::Tab;

const CLOCK_FORMAT: &str = "%a %b %-d, %-I:%M:%S %p";

/// Handles returned from building the main window.
pub struct ShellWidgets {
    pub window: libadwaita::ApplicationWindow,
    pub toast_overlay: libadwaita::ToastOverlay,
    pub content: libadwaita::Bin,
    pub sidebar: gtk4::ListBox,
}

impl ShellWidgets {
    /// Highlight `tab` in the sidebar without re-emitting navigation for the same tab.
    pub fn select_tab(&self, tab: Tab) {
        let index = Tab::ALL.iter().position(|t| *t == tab).unwrap_or(0);
        let current = self.sidebar.selected_row().map(|r| r.index());
        if current != Some(index as i32) {
            self.sidebar
                .select_row(self.sidebar.row_at_index(index as i32).as_ref());
        }
    }

    pub fn set_content(&self, widget: &gtk4::Widget) {
        self.content.set_child(Some(widget));
    }
}

/// Build the application window: header with clock, navigation sidebar, content area.
pub fn build_shell(app: &libadwaita::Application, on_navigate: Rc<dyn Fn(Tab)>) -> ShellWidgets {
    load_css();

    let window = libadwaita::ApplicationWindow::builder()
        .application(app)
        .title("AI Journalism Platform")
        .default_width(1100)
        .default_height(760)
        .build();

    // --- Sidebar ---
    let sidebar = gtk4::ListBox::new();
    sidebar.add_css_class("navigation-sidebar");
    sidebar.set_selection_mode(gtk4::SelectionMode::Single);
    for tab in Tab::ALL {
        sidebar.append(&build_nav_row(tab));
    }
    sidebar.connect_row_selected(move |_, row| {
        if let Some(row) = row {
            on_navigate(Tab::from_id(&row.widget_name()));
        }
    });

    let sidebar_scrolled = gtk4::ScrolledWindow::builder()
        .hscrollbar_policy(gtk4::PolicyType::Never)
        .child(&sidebar)
        .build();
    let sidebar_page = libadwaita::NavigationPage::new(&sidebar_scrolled, "Navigation");

    // --- Content ---
    let content = libadwaita::Bin::new();
    content.set_hexpand(true);
    content.set_vexpand(true);

    let toolbar_view = libadwaita::ToolbarView::new();
    let header = libadwaita::HeaderBar::new();

    let sidebar_button = gtk4::ToggleButton::new();
    sidebar_button.set_icon_name("sidebar-show-symbolic");
    sidebar_button.set_tooltip_text(Some("Toggle sidebar"));
    sidebar_button.set_active(true);
    header.pack_start(&sidebar_button);

    let title = libadwaita::WindowTitle::new("AI Journalism Platform", "Newsroom assistant");
    header.set_title_widget(Some(&title));

    let clock_label = gtk4::Label::new(Some(&Local::now().format(CLOCK_FORMAT).to_string()));
    clock_label.add_css_class("dim-label");
    clock_label.add_css_class("numeric");
    header.pack_end(&clock_label);

    toolbar_view.add_top_bar(&header);
    toolbar_view.set_content(Some(&content));

    let toast_overlay = libadwaita::ToastOverlay::new();
    toast_overlay.set_child(Some(&toolbar_view));
    let content_page = libadwaita::NavigationPage::new(&toast_overlay, "Content");

    let split_view = libadwaita::OverlaySplitView::new();
    split_view.set_sidebar(Some(&sidebar_page));
    split_view.set_content(Some(&content_page));
    split_view
        .bind_property("show-sidebar", &sidebar_button, "active")
        .bidirectional()
        .sync_create()
        .build();

    window.set_content(Some(&split_view));

    // Live clock
    {
        let clock_label = clock_label.clone();
        glib::timeout_add_seconds_local(1, move || {
            clock_label.set_text(&Local::now().format(CLOCK_FORMAT).to_string());
            glib::ControlFlow::Continue
        });
    }

    ShellWidgets {
        window,
        toast_overlay,
        content,
        sidebar,
    }
}

fn build_nav_row(tab: Tab) -> gtk4::ListBoxRow {
    let hbox = gtk4::Box::new(gtk4::Orientation::Horizontal, 12);
    hbox.set_margin_top(8);
    hbox.set_margin_bottom(8);
    hbox.set_margin_start(6);
    hbox.set_margin_end(6);

    hbox.append(&gtk4::Image::from_icon_name(tab.icon_name()));
    let label = gtk4::Label::new(Some(tab.name()));
    label.set_xalign(0.0);
    hbox.append(&label);

    let row = gtk4::ListBoxRow::new();
    row.set_child(Some(&hbox));
    row.set_widget_name(tab.id());
    row
}

fn load_css() {
    let Some(display) = gtk4::gdk::Display::default() else {
        log::warn!("No display available, skipping stylesheet");
        return;
    };

    let css_provider = gtk4::CssProvider::new();
    css_provider.load_from_string(
        "
        .upload-zone {
            border: 2px dashed alpha(@borders, 0.9);
            border-radius: 12px;
            padding: 32px 24px;
            background-color: alpha(@card_bg_color, 0.6);
        }
        .upload-zone.drag-over {
            border-color: @accent_bg_color;
            background-color: alpha(@accent_bg_color, 0.12);
        }
        .upload-zone.upload-error {
            border-color: @error_color;
        }
        .stat-value {
            font-size: 24px;
            font-weight: bold;
        }
        .submitted-time {
            font-family: monospace;
        }
        ",
    );

    gtk4::style_context_add_provider_for_display(
        &display,
        &css_provider,
        gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
    );
}

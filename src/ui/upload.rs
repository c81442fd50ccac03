use std::rc::Rc;

use gtk4::prelude::*;
use gtk4::{gdk, gio};

use newsdesk::upload::{UploadCandidate, UploadConfig, UploadWidget};

use super::widgets;

/// What the drop zone reports to its host panel.
#[derive(Debug)]
pub enum UploadEvent {
    DragEnter,
    DragLeave,
    Dropped(Vec<UploadCandidate>),
    Picked(UploadCandidate),
    DismissError,
}

/// Feed a zone event to the state machine. Returns the file it accepted, if any.
pub fn apply(widget: &mut UploadWidget, event: UploadEvent) -> Option<UploadCandidate> {
    match event {
        UploadEvent::DragEnter => {
            widget.drag_enter();
            None
        }
        UploadEvent::DragLeave => {
            widget.drag_leave();
            None
        }
        UploadEvent::Dropped(files) => widget.drop_files(files),
        UploadEvent::Picked(candidate) => widget.submit(candidate),
        UploadEvent::DismissError => {
            widget.dismiss_error();
            None
        }
    }
}

/// Handles returned from building a drop zone.
pub struct UploadZone {
    pub root: gtk4::Box,
    zone: gtk4::Box,
    drop_hint: gtk4::Label,
    banner: libadwaita::Banner,
}

impl UploadZone {
    /// An insensitive zone takes neither drops nor clicks.
    pub fn set_enabled(&self, enabled: bool) {
        self.root.set_sensitive(enabled);
    }

    /// Mirror the state machine: highlight while dragging, banner on error.
    pub fn render(&self, widget: &UploadWidget) {
        if widget.is_highlighted() {
            self.zone.add_css_class("drag-over");
        } else {
            self.zone.remove_css_class("drag-over");
        }
        self.drop_hint.set_visible(widget.is_highlighted());

        let error = widget.error().map(|e| e.to_string());
        if error.is_some() {
            self.zone.add_css_class("upload-error");
        } else {
            self.zone.remove_css_class("upload-error");
        }
        widgets::show_error(&self.banner, error);
    }
}

/// Build a drag-and-drop / click-to-select file zone.
pub fn build_upload_zone(
    config: &UploadConfig,
    icon_name: &str,
    on_event: Rc<dyn Fn(UploadEvent)>,
) -> UploadZone {
    let root = gtk4::Box::new(gtk4::Orientation::Vertical, 8);

    let zone = gtk4::Box::new(gtk4::Orientation::Vertical, 6);
    zone.add_css_class("upload-zone");
    zone.set_cursor_from_name(Some("pointer"));

    let icon = gtk4::Image::from_icon_name(icon_name);
    icon.set_pixel_size(48);
    icon.add_css_class("dim-label");
    zone.append(&icon);

    let title = gtk4::Label::new(Some(config.label.as_str()));
    title.add_css_class("title-3");
    zone.append(&title);

    let description = gtk4::Label::new(Some(config.description.as_str()));
    description.add_css_class("dim-label");
    description.set_wrap(true);
    description.set_justify(gtk4::Justification::Center);
    zone.append(&description);

    let hint = gtk4::Label::new(Some(config.hint().as_str()));
    hint.add_css_class("caption");
    hint.add_css_class("dim-label");
    zone.append(&hint);

    let drop_hint = gtk4::Label::new(Some("Drop your file here"));
    drop_hint.add_css_class("accent");
    drop_hint.set_visible(false);
    zone.append(&drop_hint);

    // Drag and drop
    let drop_target = gtk4::DropTarget::new(gdk::FileList::static_type(), gdk::DragAction::COPY);
    {
        let on_event = on_event.clone();
        drop_target.connect_enter(move |_, _, _| {
            on_event(UploadEvent::DragEnter);
            gdk::DragAction::COPY
        });
    }
    {
        let on_event = on_event.clone();
        drop_target.connect_leave(move |_| on_event(UploadEvent::DragLeave));
    }
    {
        let on_event = on_event.clone();
        drop_target.connect_drop(move |_, value, _, _| {
            let candidates = match value.get::<gdk::FileList>() {
                // Only the first file counts, even when it cannot be described.
                Ok(list) => list
                    .files()
                    .first()
                    .and_then(candidate_from_file)
                    .into_iter()
                    .collect(),
                Err(e) => {
                    log::warn!("Unexpected drop payload: {e}");
                    Vec::new()
                }
            };
            on_event(UploadEvent::Dropped(candidates));
            true
        });
    }
    zone.add_controller(drop_target);

    // Click to select
    let click = gtk4::GestureClick::new();
    {
        let on_event = on_event.clone();
        let zone_for_click = zone.clone();
        let config = config.clone();
        click.connect_released(move |_, _, _, _| {
            open_file_dialog(&zone_for_click, &config, on_event.clone());
        });
    }
    zone.add_controller(click);

    root.append(&zone);

    let banner = widgets::error_banner();
    banner.connect_button_clicked(move |_| on_event(UploadEvent::DismissError));
    root.append(&banner);

    UploadZone {
        root,
        zone,
        drop_hint,
        banner,
    }
}

fn open_file_dialog(anchor: &gtk4::Box, config: &UploadConfig, on_event: Rc<dyn Fn(UploadEvent)>) {
    let dialog = gtk4::FileDialog::builder()
        .title(config.label.as_str())
        .modal(true)
        .build();

    if !config.accepted_types.is_empty() {
        let filter = gtk4::FileFilter::new();
        filter.set_name(Some(config.accepted_types.join(", ").as_str()));
        for pattern in &config.accepted_types {
            match pattern.strip_prefix('.') {
                Some(suffix) => filter.add_suffix(suffix),
                None => filter.add_mime_type(pattern),
            }
        }
        dialog.set_default_filter(Some(&filter));
    }

    let parent = anchor
        .root()
        .and_then(|root| root.downcast::<gtk4::Window>().ok());

    dialog.open(parent.as_ref(), gio::Cancellable::NONE, move |result| match result {
        Ok(file) => match candidate_from_file(&file) {
            Some(candidate) => on_event(UploadEvent::Picked(candidate)),
            None => log::warn!("Could not read file info for {}", file.uri()),
        },
        Err(e) if e.matches(gtk4::DialogError::Dismissed) => {}
        Err(e) => log::warn!("File dialog failed: {e}"),
    });
}

/// Describe a local file the way the validator expects.
fn candidate_from_file(file: &gio::File) -> Option<UploadCandidate> {
    let path = file.path()?;
    let info = match file.query_info(
        "standard::display-name,standard::size,standard::content-type",
        gio::FileQueryInfoFlags::NONE,
        gio::Cancellable::NONE,
    ) {
        Ok(info) => info,
        Err(e) => {
            log::warn!("query_info failed for {}: {e}", path.display());
            return None;
        }
    };

    let mime_type = info
        .content_type()
        .and_then(|ct| gio::content_type_get_mime_type(&ct))
        .map(|m| m.to_string())
        .unwrap_or_default();

    Some(UploadCandidate {
        name: info.display_name().to_string(),
        size_bytes: u64::try_from(info.size()).unwrap_or(0),
        mime_type,
        path,
    })
}

/// Preview image for a picked file; decoding is left to the toolkit.
pub fn picture_for(candidate: &UploadCandidate) -> gtk4::Picture {
    let picture = gtk4::Picture::for_file(&gio::File::for_path(&candidate.path));
    picture.set_can_shrink(true);
    picture.set_content_fit(gtk4::ContentFit::Contain);
    picture.set_height_request(240);
    picture
}

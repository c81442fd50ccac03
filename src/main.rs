mod app;
mod ui;

use std::cell::RefCell;
use std::rc::Rc;

use gtk4::prelude::*;

use app::{AppState, BackendEvent};
use newsdesk::navigation::Tab;

fn main() {
    env_logger::init();
    log::info!("Newsdesk starting");

    let application = libadwaita::Application::builder()
        .application_id("com.github.newsdesk.Newsdesk")
        .build();

    application.connect_activate(on_activate);
    application.run();
}

fn on_activate(app: &libadwaita::Application) {
    if let Some(window) = app.active_window() {
        window.present();
        return;
    }

    // Channel for background task results -> UI
    let (backend_tx, backend_rx) = async_channel::unbounded::<BackendEvent>();

    let state = Rc::new(RefCell::new(AppState::new(backend_tx)));

    // Build the window; sidebar selection mounts panels
    let shell = {
        let weak = Rc::downgrade(&state);
        ui::shell::build_shell(
            app,
            Rc::new(move |tab: Tab| {
                if let Some(state) = weak.upgrade() {
                    app::navigate(&state, tab);
                }
            }),
        )
    };
    let window = shell.window.clone();
    state.borrow_mut().shell = Some(shell);

    // Attach backend event handler
    {
        let state_clone = state.clone();
        gtk4::glib::spawn_future_local(async move {
            while let Ok(event) = backend_rx.recv().await {
                app::handle_backend_event(&state_clone, event);
            }
        });
    }

    app::navigate(&state, Tab::Dashboard);
    window.present();
}

mod event_handler;
mod navigation;
mod pipeline;
mod state;

pub use event_handler::handle_backend_event;
pub use navigation::navigate;
pub use state::{AppState, BackendEvent};

pub mod commands;
pub mod errors;
pub mod models;
pub mod registry;
pub mod render;
pub mod state;
pub mod store;
pub mod util;

use std::sync::Mutex;

use state::PageState;

/// Tauri-managed application state: the one `PageState` instance behind a
/// mutex. Operations are user-initiated and serialized; the lock only
/// enforces what the event model already guarantees.
pub struct AppState {
    pub page: Mutex<PageState>,
}

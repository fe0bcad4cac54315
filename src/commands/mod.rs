pub mod notes;
pub mod settings;
pub mod shortcuts;

use tauri::State;

use crate::render::{
    ConfirmDelete, EditorView, NotesFragment, RenderSync, ShortcutsFragment,
};
use crate::AppState;

pub(crate) const LOCK_POISONED: &str = "state lock poisoned";

/// RenderSync over the webview: every fragment goes out as a window event
/// the front end subscribes to. Emission failures are ignored; rendering
/// must never block or fail a mutation that already persisted.
pub struct EventRender {
    window: tauri::Window,
}

impl EventRender {
    pub fn new(window: tauri::Window) -> Self {
        Self { window }
    }
}

impl RenderSync for EventRender {
    fn shortcuts_grid(&self, fragment: &ShortcutsFragment) {
        let _ = self.window.emit("render://shortcuts", fragment.clone());
    }

    fn main_shortcuts(&self, fragment: Option<&ShortcutsFragment>) {
        let _ = self.window.emit("render://main-shortcuts", fragment.cloned());
    }

    fn notes_list(&self, fragment: &NotesFragment) {
        let _ = self.window.emit("render://notes", fragment.clone());
    }

    fn note_title(&self, id: i64, title: &str) {
        let _ = self.window.emit(
            "render://note-title",
            serde_json::json!({ "id": id, "title": title }),
        );
    }

    fn editor(&self, view: &EditorView) {
        let _ = self.window.emit("render://editor", view.clone());
    }
}

/// Native yes/no dialog backing the deletion confirmations.
pub struct DialogConfirm {
    window: tauri::Window,
}

impl DialogConfirm {
    pub fn new(window: tauri::Window) -> Self {
        Self { window }
    }
}

impl ConfirmDelete for DialogConfirm {
    fn confirm(&self, message: &str) -> bool {
        tauri::api::dialog::blocking::ask(Some(&self.window), "确认", message)
    }
}

/// Initial full redraw, invoked by the front end once its DOM is ready.
#[tauri::command]
pub fn render_page(window: tauri::Window, state: State<AppState>) -> Result<(), String> {
    let page = state.page.lock().map_err(|_| LOCK_POISONED.to_string())?;
    page.render_all(&EventRender::new(window));
    Ok(())
}

use tauri::State;

use crate::commands::{DialogConfirm, EventRender, LOCK_POISONED};
use crate::models::NoteRecord;
use crate::AppState;

#[tauri::command]
pub fn list_notes(state: State<AppState>) -> Result<Vec<NoteRecord>, String> {
    let page = state.page.lock().map_err(|_| LOCK_POISONED.to_string())?;
    Ok(page.notes.list().to_vec())
}

#[tauri::command]
pub fn create_note(window: tauri::Window, state: State<AppState>) -> Result<i64, String> {
    let mut page = state.page.lock().map_err(|_| LOCK_POISONED.to_string())?;
    page.create_note(&EventRender::new(window))
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub fn select_note(id: i64, window: tauri::Window, state: State<AppState>) -> Result<(), String> {
    let mut page = state.page.lock().map_err(|_| LOCK_POISONED.to_string())?;
    page.select_note(id, &EventRender::new(window));
    Ok(())
}

#[tauri::command]
pub fn edit_note(
    content: String,
    window: tauri::Window,
    state: State<AppState>,
) -> Result<(), String> {
    let mut page = state.page.lock().map_err(|_| LOCK_POISONED.to_string())?;
    page.edit_note(&content, &EventRender::new(window))
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub fn remove_note(
    id: i64,
    window: tauri::Window,
    state: State<AppState>,
) -> Result<bool, String> {
    let mut page = state.page.lock().map_err(|_| LOCK_POISONED.to_string())?;
    let confirm = DialogConfirm::new(window.clone());
    page.remove_note(id, &confirm, &EventRender::new(window))
        .map_err(|e| e.to_string())
}

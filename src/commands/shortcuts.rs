use tauri::State;

use crate::commands::{DialogConfirm, EventRender, LOCK_POISONED};
use crate::models::ShortcutRecord;
use crate::AppState;

#[tauri::command]
pub fn list_shortcuts(state: State<AppState>) -> Result<Vec<ShortcutRecord>, String> {
    let page = state.page.lock().map_err(|_| LOCK_POISONED.to_string())?;
    Ok(page.shortcuts.list().to_vec())
}

#[tauri::command]
pub fn add_shortcut(
    name: String,
    url: String,
    window: tauri::Window,
    state: State<AppState>,
) -> Result<(), String> {
    let mut page = state.page.lock().map_err(|_| LOCK_POISONED.to_string())?;
    let added = page
        .add_shortcut(&name, &url, &EventRender::new(window))
        .map_err(|e| e.to_string())?;
    if !added {
        return Err("名称和网址不能为空".to_string());
    }
    Ok(())
}

#[tauri::command]
pub fn remove_shortcut(
    index: usize,
    window: tauri::Window,
    state: State<AppState>,
) -> Result<bool, String> {
    let mut page = state.page.lock().map_err(|_| LOCK_POISONED.to_string())?;
    let confirm = DialogConfirm::new(window.clone());
    page.remove_shortcut(index, &confirm, &EventRender::new(window))
        .map_err(|e| e.to_string())
}

/// Open a shortcut's url in the system browser. The url carries a scheme by
/// the add-time invariant, so the platform opener takes it as-is.
#[tauri::command]
pub fn open_shortcut(index: usize, state: State<AppState>) -> Result<(), String> {
    let page = state.page.lock().map_err(|_| LOCK_POISONED.to_string())?;
    let url = page
        .shortcuts
        .get(index)
        .map(|s| s.url.clone())
        .ok_or_else(|| "no such shortcut".to_string())?;
    open_in_browser(&url)
}

fn open_in_browser(url: &str) -> Result<(), String> {
    use std::process::Command;
    #[cfg(target_os = "windows")]
    let status = Command::new("cmd").args(["/C", "start", "", url]).status();
    #[cfg(target_os = "macos")]
    let status = Command::new("open").arg(url).status();
    #[cfg(target_os = "linux")]
    let status = Command::new("xdg-open").arg(url).status();
    status.map(|_| ()).map_err(|e| e.to_string())
}

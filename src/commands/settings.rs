use std::path::PathBuf;

use tauri::State;

use crate::commands::{EventRender, LOCK_POISONED};
use crate::models::SettingsMap;
use crate::registry::settings::{SettingKey, SettingValue};
use crate::util::wallpaper;
use crate::AppState;

#[tauri::command]
pub fn get_settings(state: State<AppState>) -> Result<SettingsMap, String> {
    let page = state.page.lock().map_err(|_| LOCK_POISONED.to_string())?;
    Ok(page.settings.map().clone())
}

#[tauri::command]
pub fn set_setting(
    key: SettingKey,
    value: SettingValue,
    window: tauri::Window,
    state: State<AppState>,
) -> Result<(), String> {
    let mut page = state.page.lock().map_err(|_| LOCK_POISONED.to_string())?;
    page.set_setting(key, value, &EventRender::new(window))
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub fn toggle_theme(state: State<AppState>) -> Result<crate::models::Theme, String> {
    let mut page = state.page.lock().map_err(|_| LOCK_POISONED.to_string())?;
    page.toggle_theme().map_err(|e| e.to_string())
}

#[tauri::command]
pub fn get_theme(state: State<AppState>) -> Result<crate::models::Theme, String> {
    let page = state.page.lock().map_err(|_| LOCK_POISONED.to_string())?;
    Ok(page.theme)
}

#[tauri::command]
pub fn cycle_engine(state: State<AppState>) -> Result<String, String> {
    let mut page = state.page.lock().map_err(|_| LOCK_POISONED.to_string())?;
    let engine = page.cycle_engine().map_err(|e| e.to_string())?;
    Ok(engine.id().to_string())
}

#[tauri::command]
pub fn get_engine(state: State<AppState>) -> Result<String, String> {
    let page = state.page.lock().map_err(|_| LOCK_POISONED.to_string())?;
    Ok(page.engine.id().to_string())
}

/// Encode a user-picked image as a data url and store it as the wallpaper.
/// Oversized files are rejected before any state changes; the returned url
/// lets the view apply the image without a second read.
#[tauri::command]
pub fn set_wallpaper_file(
    path: String,
    window: tauri::Window,
    state: State<AppState>,
) -> Result<String, String> {
    let data_url = wallpaper::file_to_data_url(&PathBuf::from(path)).map_err(|e| e.to_string())?;
    let mut page = state.page.lock().map_err(|_| LOCK_POISONED.to_string())?;
    page.set_setting(
        SettingKey::Wallpaper,
        SettingValue::Text(data_url.clone()),
        &EventRender::new(window),
    )
    .map_err(|e| e.to_string())?;
    Ok(data_url)
}

/// Approximate storage footprint for the settings panel readout.
#[tauri::command]
pub fn storage_usage(state: State<AppState>) -> Result<u64, String> {
    let page = state.page.lock().map_err(|_| LOCK_POISONED.to_string())?;
    Ok(page.store.usage())
}

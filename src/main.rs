#![cfg_attr(all(not(debug_assertions), target_os = "windows"), windows_subsystem = "windows")]

use std::path::PathBuf;
use std::sync::Mutex;

use tauri::Manager;
use tracing_subscriber::EnvFilter;

use startpage::{commands, state::PageState, AppState};

fn resolve_app_dir(app: &tauri::AppHandle) -> PathBuf {
    // Use Tauri's resolver to get per-app data directory
    app.path_resolver().app_data_dir().unwrap_or_else(|| {
        // Fallback to executable directory if resolver fails
        std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
    })
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("startpage=info")),
        )
        .init();

    tauri::Builder::default()
        .setup(|app| {
            let app_dir = resolve_app_dir(&app.app_handle());
            std::fs::create_dir_all(&app_dir).ok();
            app.manage(AppState {
                page: Mutex::new(PageState::load(app_dir)),
            });
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::render_page,
            commands::shortcuts::list_shortcuts,
            commands::shortcuts::add_shortcut,
            commands::shortcuts::remove_shortcut,
            commands::shortcuts::open_shortcut,
            commands::notes::list_notes,
            commands::notes::create_note,
            commands::notes::select_note,
            commands::notes::edit_note,
            commands::notes::remove_note,
            commands::settings::get_settings,
            commands::settings::set_setting,
            commands::settings::toggle_theme,
            commands::settings::get_theme,
            commands::settings::cycle_engine,
            commands::settings::get_engine,
            commands::settings::set_wallpaper_file,
            commands::settings::storage_usage,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

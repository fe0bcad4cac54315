use startpage::models::{NoteRecord, SearchEngine, ShortcutRecord, Theme};
use startpage::registry::notes::NOTES_KEY;
use startpage::registry::settings::{SettingKey, SettingValue};
use startpage::registry::shortcuts::SHORTCUTS_KEY;
use startpage::render::{ConfirmDelete, EditorView, NotesFragment, RenderSync, ShortcutsFragment};
use startpage::state::PageState;
use startpage::store::PersistentStore;
use tempfile::TempDir;

struct NullSink;

impl RenderSync for NullSink {
    fn shortcuts_grid(&self, _fragment: &ShortcutsFragment) {}
    fn main_shortcuts(&self, _fragment: Option<&ShortcutsFragment>) {}
    fn notes_list(&self, _fragment: &NotesFragment) {}
    fn note_title(&self, _id: i64, _title: &str) {}
    fn editor(&self, _view: &EditorView) {}
}

struct Always(bool);

impl ConfirmDelete for Always {
    fn confirm(&self, _message: &str) -> bool {
        self.0
    }
}

#[test]
fn fresh_directory_seeds_defaults_and_starts_clean() {
    let dir = TempDir::new().unwrap();
    let state = PageState::load(dir.path().to_path_buf());

    let names: Vec<_> = state.shortcuts.list().iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["Github", "翻译"]);
    assert!(state.notes.list().is_empty());
    assert_eq!(state.notes.current(), None);
    assert_eq!(state.theme, Theme::Light);
    assert_eq!(state.engine, SearchEngine::Bing);
    assert!(!state.settings.show_shortcuts());
}

#[test]
fn persisted_state_survives_reload_after_mutations() {
    let dir = TempDir::new().unwrap();
    let sink = NullSink;

    {
        let mut state = PageState::load(dir.path().to_path_buf());
        state.add_shortcut("Test", "example.com", &sink).unwrap();
        let id = state.create_note(&sink).unwrap();
        state.edit_note("Hello\nWorld", &sink).unwrap();
        state.toggle_theme().unwrap();
        state.cycle_engine().unwrap();
        state
            .set_setting(SettingKey::DarkMask, SettingValue::Bool(true), &sink)
            .unwrap();
        assert_eq!(state.notes.current(), Some(id));
    }

    let state = PageState::load(dir.path().to_path_buf());
    let added = state.shortcuts.list().last().unwrap();
    assert_eq!(added.name, "Test");
    assert_eq!(added.url, "https://example.com");
    assert_eq!(added.icon, "T");
    assert_eq!(state.notes.list().len(), 1);
    assert_eq!(state.notes.list()[0].content, "Hello\nWorld");
    // selection is in-memory only and resets across restarts
    assert_eq!(state.notes.current(), None);
    assert_eq!(state.theme, Theme::Dark);
    assert_eq!(state.engine, SearchEngine::Google);
    assert!(state.settings.map().dark_mask);
}

#[test]
fn persisted_sequence_tracks_memory_through_mixed_operations() {
    let dir = TempDir::new().unwrap();
    let store = PersistentStore::new(dir.path().to_path_buf());
    let sink = NullSink;
    let mut state = PageState::load(dir.path().to_path_buf());

    for (name, url) in [("a", "a.example"), ("b", "b.example"), ("c", "c.example")] {
        state.add_shortcut(name, url, &sink).unwrap();
        let on_disk: Vec<ShortcutRecord> = store.load(SHORTCUTS_KEY).unwrap();
        assert_eq!(on_disk, state.shortcuts.list());
    }
    state.remove_shortcut(1, &Always(true), &sink).unwrap();
    let on_disk: Vec<ShortcutRecord> = store.load(SHORTCUTS_KEY).unwrap();
    assert_eq!(on_disk, state.shortcuts.list());

    let first = state.create_note(&sink).unwrap();
    let second = state.create_note(&sink).unwrap();
    state.edit_note("note body", &sink).unwrap();
    let on_disk: Vec<NoteRecord> = store.load(NOTES_KEY).unwrap();
    assert_eq!(on_disk, state.notes.list());

    state.remove_note(second, &Always(true), &sink).unwrap();
    assert_eq!(state.notes.current(), None);
    state.select_note(first, &sink);
    assert_eq!(state.notes.current(), Some(first));
    let on_disk: Vec<NoteRecord> = store.load(NOTES_KEY).unwrap();
    assert_eq!(on_disk, state.notes.list());
}

#[test]
fn malformed_files_fall_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("notes.json"), b"{{{").unwrap();
    std::fs::write(dir.path().join("settings.json"), b"not json").unwrap();
    std::fs::write(dir.path().join("theme.json"), b"\"plaid\"").unwrap();

    let state = PageState::load(dir.path().to_path_buf());
    assert!(state.notes.list().is_empty());
    assert!(!state.settings.map().hide_logo);
    assert_eq!(state.theme, Theme::Light);
}

#[test]
fn declined_confirmations_change_nothing() {
    let dir = TempDir::new().unwrap();
    let sink = NullSink;
    let mut state = PageState::load(dir.path().to_path_buf());
    let id = state.create_note(&sink).unwrap();

    let shortcuts_before = state.shortcuts.list().to_vec();
    assert!(!state.remove_shortcut(0, &Always(false), &sink).unwrap());
    assert_eq!(state.shortcuts.list(), shortcuts_before.as_slice());

    assert!(!state.remove_note(id, &Always(false), &sink).unwrap());
    assert_eq!(state.notes.list().len(), 1);
    assert_eq!(state.notes.current(), Some(id));
}

#[test]
fn storage_usage_grows_with_content() {
    let dir = TempDir::new().unwrap();
    let sink = NullSink;
    let mut state = PageState::load(dir.path().to_path_buf());
    let before = state.store.usage();
    assert!(before > 0);
    state.create_note(&sink).unwrap();
    state
        .edit_note(&"x".repeat(2048), &sink)
        .unwrap();
    assert!(state.store.usage() > before);
}

use std::path::PathBuf;

use crate::errors::StoreResult;
use crate::models::{SearchEngine, Theme};
use crate::registry::notes::NotesRegistry;
use crate::registry::settings::{SettingKey, SettingsRegistry, SettingValue};
use crate::registry::shortcuts::ShortcutsRegistry;
use crate::render::{ConfirmDelete, EditorView, RenderSync};
use crate::store::PersistentStore;

pub const THEME_KEY: &str = "theme";
pub const ENGINE_KEY: &str = "engine";

/// The whole page state: one explicit object built once at startup and
/// passed by reference into every operation. Single in-process actor; each
/// operation runs mutate → persist → render to completion before the next
/// one starts.
pub struct PageState {
    pub store: PersistentStore,
    pub settings: SettingsRegistry,
    pub shortcuts: ShortcutsRegistry,
    pub notes: NotesRegistry,
    pub theme: Theme,
    pub engine: SearchEngine,
}

impl PageState {
    pub fn load(dir: PathBuf) -> Self {
        let store = PersistentStore::new(dir);
        let settings = SettingsRegistry::load(&store);
        let shortcuts = ShortcutsRegistry::load(&store);
        let notes = NotesRegistry::load(&store);
        let theme = store.load_or(THEME_KEY, Theme::default);
        // engine is validated against the known set at read time
        let engine = store
            .load::<String>(ENGINE_KEY)
            .and_then(|id| SearchEngine::from_id(&id))
            .unwrap_or_default();
        Self {
            store,
            settings,
            shortcuts,
            notes,
            theme,
            engine,
        }
    }

    /// Full redraw of every fragment from current memory, used once after
    /// the view finishes loading. Nothing is selected at that point so the
    /// editor starts disabled.
    pub fn render_all(&self, sink: &dyn RenderSync) {
        self.shortcuts.render(self.settings.show_shortcuts(), sink);
        self.notes.render(sink);
        sink.editor(&EditorView::disabled());
    }

    pub fn toggle_theme(&mut self) -> StoreResult<Theme> {
        let next = self.theme.toggled();
        self.store.save(THEME_KEY, &next)?;
        self.theme = next;
        Ok(next)
    }

    pub fn cycle_engine(&mut self) -> StoreResult<SearchEngine> {
        let next = self.engine.next();
        self.store.save(ENGINE_KEY, &next.id())?;
        self.engine = next;
        Ok(next)
    }

    /// Set one preference. Flipping `showShortcuts` also shows or hides the
    /// main-surface shortcuts fragment; hiding skips rendering it entirely
    /// until the toggle comes back on.
    pub fn set_setting(
        &mut self,
        key: SettingKey,
        value: SettingValue,
        sink: &dyn RenderSync,
    ) -> StoreResult<()> {
        let shortcuts = &self.shortcuts;
        self.settings.set(&self.store, key, value, |map| {
            if key == SettingKey::ShowShortcuts {
                if map.show_shortcuts {
                    sink.main_shortcuts(Some(&shortcuts.fragment()));
                } else {
                    sink.main_shortcuts(None);
                }
            }
        })
    }

    pub fn add_shortcut(
        &mut self,
        name: &str,
        raw_url: &str,
        sink: &dyn RenderSync,
    ) -> StoreResult<bool> {
        let show = self.settings.show_shortcuts();
        self.shortcuts.add(&self.store, name, raw_url, show, sink)
    }

    pub fn remove_shortcut(
        &mut self,
        index: usize,
        confirm: &dyn ConfirmDelete,
        sink: &dyn RenderSync,
    ) -> StoreResult<bool> {
        let show = self.settings.show_shortcuts();
        self.shortcuts
            .remove_at(&self.store, index, show, confirm, sink)
    }

    pub fn create_note(&mut self, sink: &dyn RenderSync) -> StoreResult<i64> {
        self.notes.create(&self.store, sink)
    }

    pub fn select_note(&mut self, id: i64, sink: &dyn RenderSync) {
        self.notes.select(id, sink);
    }

    pub fn edit_note(&mut self, content: &str, sink: &dyn RenderSync) -> StoreResult<()> {
        self.notes.edit(&self.store, content, sink)
    }

    pub fn remove_note(
        &mut self,
        id: i64,
        confirm: &dyn ConfirmDelete,
        sink: &dyn RenderSync,
    ) -> StoreResult<bool> {
        self.notes.remove(&self.store, id, confirm, sink)
    }
}

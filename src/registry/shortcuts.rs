use once_cell::sync::Lazy;
use tracing::{debug, warn};

use crate::errors::StoreResult;
use crate::models::ShortcutRecord;
use crate::render::{self, ConfirmDelete, RenderSync, ShortcutsFragment};
use crate::store::PersistentStore;

pub const SHORTCUTS_KEY: &str = "shortcuts";

/// Shipped in an early default set and later retired; persisted copies are
/// cleaned up on every load so it does not resurface for old installs.
const RETIRED_DEFAULT: &str = "bilibili";

static DEFAULT_SHORTCUTS: Lazy<Vec<ShortcutRecord>> = Lazy::new(|| {
    vec![
        ShortcutRecord {
            name: "Github".to_string(),
            url: "https://github.com".to_string(),
            icon: "G".to_string(),
        },
        ShortcutRecord {
            name: "翻译".to_string(),
            url: "https://translate.google.com".to_string(),
            icon: "翻".to_string(),
        },
    ]
});

fn normalize_url(raw: &str) -> String {
    if raw.starts_with("http://") || raw.starts_with("https://") {
        raw.to_string()
    } else {
        format!("https://{raw}")
    }
}

fn glyph_for(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default()
}

/// Ordered shortcut list. Identity is the index within `items`; every
/// mutation rewrites the whole persisted sequence before any rendering.
pub struct ShortcutsRegistry {
    items: Vec<ShortcutRecord>,
}

impl ShortcutsRegistry {
    /// Deserialize the persisted list, seeding the documented defaults when
    /// nothing usable is stored, then drop any retired default entry. The
    /// cleaned list is written back before the first render so file and
    /// memory agree from the start.
    pub fn load(store: &PersistentStore) -> Self {
        let mut items: Vec<ShortcutRecord> = store.load(SHORTCUTS_KEY).unwrap_or_else(|| {
            debug!("seeding default shortcuts");
            DEFAULT_SHORTCUTS.clone()
        });
        let before = items.len();
        items.retain(|s| s.name != RETIRED_DEFAULT);
        if items.len() != before {
            debug!(removed = before - items.len(), "dropped retired default shortcut");
        }
        if let Err(err) = store.save(SHORTCUTS_KEY, &items) {
            // No user action to attach this to; the next mutation rewrites.
            warn!(%err, "could not write back shortcuts during load");
        }
        Self { items }
    }

    pub fn list(&self) -> &[ShortcutRecord] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&ShortcutRecord> {
        self.items.get(index)
    }

    /// Append a shortcut. Empty name or url (after trimming) rejects the
    /// whole operation before any mutation; `Ok(false)` reports that. The
    /// url gains an `https://` prefix when no scheme is present and the
    /// fallback glyph is the uppercased first character of the name.
    pub fn add(
        &mut self,
        store: &PersistentStore,
        name: &str,
        raw_url: &str,
        show_on_surface: bool,
        sink: &dyn RenderSync,
    ) -> StoreResult<bool> {
        let name = name.trim();
        let raw_url = raw_url.trim();
        if name.is_empty() || raw_url.is_empty() {
            return Ok(false);
        }
        self.items.push(ShortcutRecord {
            name: name.to_string(),
            url: normalize_url(raw_url),
            icon: glyph_for(name),
        });
        if let Err(err) = store.save(SHORTCUTS_KEY, &self.items) {
            self.items.pop();
            return Err(err);
        }
        self.render(show_on_surface, sink);
        Ok(true)
    }

    /// Remove the record at `index` after interactive confirmation; a
    /// declined dialog or out-of-range index leaves everything untouched.
    /// Later records shift left by one.
    pub fn remove_at(
        &mut self,
        store: &PersistentStore,
        index: usize,
        show_on_surface: bool,
        confirm: &dyn ConfirmDelete,
        sink: &dyn RenderSync,
    ) -> StoreResult<bool> {
        if index >= self.items.len() {
            return Ok(false);
        }
        if !confirm.confirm("确定删除此捷径吗？") {
            return Ok(false);
        }
        let removed = self.items.remove(index);
        if let Err(err) = store.save(SHORTCUTS_KEY, &self.items) {
            self.items.insert(index, removed);
            return Err(err);
        }
        self.render(show_on_surface, sink);
        Ok(true)
    }

    pub fn fragment(&self) -> ShortcutsFragment {
        ShortcutsFragment {
            items: self.items.iter().map(render::tile).collect(),
        }
    }

    /// Full redraw from memory. The main-surface fragment is only pushed
    /// while its setting is on; while hidden it is skipped, not cleared.
    pub fn render(&self, show_on_surface: bool, sink: &dyn RenderSync) {
        let fragment = self.fragment();
        sink.shortcuts_grid(&fragment);
        if show_on_surface {
            sink.main_shortcuts(Some(&fragment));
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::errors::StoreResult;
use crate::models::SettingsMap;
use crate::store::PersistentStore;

pub const SETTINGS_KEY: &str = "settings";

/// The enumerated preference keys. Wire ids match the persisted camelCase
/// field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SettingKey {
    Wallpaper,
    ThemeColor,
    HideLogo,
    HideFooter,
    DarkMask,
    ShowShortcuts,
}

/// A preference value: toggles are booleans, wallpaper and accent color are
/// strings. Callers are expected to supply the right shape; the coercion
/// helpers below are the only conversion applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Bool(bool),
    Text(String),
}

impl SettingValue {
    pub fn as_flag(&self) -> bool {
        match self {
            SettingValue::Bool(b) => *b,
            SettingValue::Text(s) => s == "true",
        }
    }

    pub fn as_text(&self) -> String {
        match self {
            SettingValue::Text(s) => s.clone(),
            SettingValue::Bool(b) => b.to_string(),
        }
    }
}

/// In-memory copy of the flat preference map. Reads never touch storage;
/// every write rewrites the whole map under the `settings` key.
pub struct SettingsRegistry {
    map: SettingsMap,
}

impl SettingsRegistry {
    pub fn load(store: &PersistentStore) -> Self {
        Self {
            map: store.load_or(SETTINGS_KEY, SettingsMap::default),
        }
    }

    pub fn map(&self) -> &SettingsMap {
        &self.map
    }

    pub fn show_shortcuts(&self) -> bool {
        self.map.show_shortcuts
    }

    pub fn get(&self, key: SettingKey) -> SettingValue {
        match key {
            SettingKey::Wallpaper => SettingValue::Text(self.map.wallpaper.clone()),
            SettingKey::ThemeColor => SettingValue::Text(self.map.theme_color.clone()),
            SettingKey::HideLogo => SettingValue::Bool(self.map.hide_logo),
            SettingKey::HideFooter => SettingValue::Bool(self.map.hide_footer),
            SettingKey::DarkMask => SettingValue::Bool(self.map.dark_mask),
            SettingKey::ShowShortcuts => SettingValue::Bool(self.map.show_shortcuts),
        }
    }

    /// Update one preference, persist the whole map, then run `after`
    /// synchronously (the caller-supplied view side effect). A failed write
    /// rolls the map back and skips the callback so view, memory and
    /// storage never disagree.
    pub fn set<F: FnOnce(&SettingsMap)>(
        &mut self,
        store: &PersistentStore,
        key: SettingKey,
        value: SettingValue,
        after: F,
    ) -> StoreResult<()> {
        let previous = self.map.clone();
        match key {
            SettingKey::Wallpaper => self.map.wallpaper = value.as_text(),
            SettingKey::ThemeColor => self.map.theme_color = value.as_text(),
            SettingKey::HideLogo => self.map.hide_logo = value.as_flag(),
            SettingKey::HideFooter => self.map.hide_footer = value.as_flag(),
            SettingKey::DarkMask => self.map.dark_mask = value.as_flag(),
            SettingKey::ShowShortcuts => self.map.show_shortcuts = value.as_flag(),
        }
        if let Err(err) = store.save(SETTINGS_KEY, &self.map) {
            self.map = previous;
            return Err(err);
        }
        after(&self.map);
        Ok(())
    }
}

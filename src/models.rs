use serde::{Deserialize, Serialize};

/// A quick-access shortcut tile. Identity is positional: records carry no id
/// and deletion works on the index within the ordered list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortcutRecord {
    pub name: String,
    /// Always scheme-prefixed before it is persisted or opened.
    pub url: String,
    /// Fallback glyph shown when the favicon lookup fails at render time.
    pub icon: String,
}

/// A free-text note. `id` is the creation timestamp in unix milliseconds and
/// never changes; lookups and targeted view updates rely on its uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteRecord {
    pub id: i64,
    pub content: String,
    /// Creation time, RFC 3339.
    pub date: String,
}

pub const DEFAULT_THEME_COLOR: &str = "#a85068";

/// Flat preference map persisted as a whole under the `settings` key.
/// Unknown keys found in storage are kept in `extra` across rewrites but
/// nothing reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsMap {
    pub wallpaper: String,
    #[serde(rename = "themeColor")]
    pub theme_color: String,
    #[serde(rename = "hideLogo")]
    pub hide_logo: bool,
    #[serde(rename = "hideFooter")]
    pub hide_footer: bool,
    #[serde(rename = "darkMask")]
    pub dark_mask: bool,
    #[serde(rename = "showShortcuts")]
    pub show_shortcuts: bool,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Default for SettingsMap {
    fn default() -> Self {
        Self {
            wallpaper: String::new(),
            theme_color: DEFAULT_THEME_COLOR.to_string(),
            hide_logo: false,
            hide_footer: false,
            dark_mask: false,
            show_shortcuts: false,
            extra: serde_json::Map::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// The fixed set of search engines. Persisted as its lowercase id; anything
/// else found under the `engine` key falls back to Bing at read time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SearchEngine {
    #[default]
    Bing,
    Google,
}

impl SearchEngine {
    pub const ALL: [SearchEngine; 2] = [SearchEngine::Bing, SearchEngine::Google];

    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "bing" => Some(SearchEngine::Bing),
            "google" => Some(SearchEngine::Google),
            _ => None,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            SearchEngine::Bing => "bing",
            SearchEngine::Google => "google",
        }
    }

    /// The engine after this one in the settings cycle.
    pub fn next(self) -> Self {
        let pos = Self::ALL.iter().position(|e| *e == self).unwrap_or(0);
        Self::ALL[(pos + 1) % Self::ALL.len()]
    }
}

use serde::Serialize;
use url::Url;

use crate::models::ShortcutRecord;

const FAVICON_SERVICE: &str = "https://www.google.com/s2/favicons";

/// One shortcut as the view draws it. `favicon` is present when a host could
/// be derived from the record's url; `glyph` is always carried so the view
/// can substitute it on image load failure without asking us again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortcutTile {
    pub name: String,
    pub url: String,
    pub favicon: Option<String>,
    pub glyph: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortcutsFragment {
    pub items: Vec<ShortcutTile>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteEntry {
    pub id: i64,
    pub title: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotesFragment {
    pub items: Vec<NoteEntry>,
}

/// Editor surface: disabled while no note is selected, editing otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditorView {
    pub enabled: bool,
    pub content: String,
    pub focus: bool,
}

impl EditorView {
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            content: String::new(),
            focus: false,
        }
    }

    pub fn editing(content: &str) -> Self {
        Self {
            enabled: true,
            content: content.to_string(),
            focus: true,
        }
    }
}

/// The registries push fragments through this after every mutation. The view
/// side holds no state and performs no storage access; rendering the same
/// memory twice must produce the same fragment twice.
pub trait RenderSync {
    fn shortcuts_grid(&self, fragment: &ShortcutsFragment);
    /// `None` hides the main-surface fragment; while hidden, mutations skip
    /// it entirely instead of pushing hidden updates.
    fn main_shortcuts(&self, fragment: Option<&ShortcutsFragment>);
    fn notes_list(&self, fragment: &NotesFragment);
    /// Targeted title update for a single entry, used by note edits so the
    /// list refresh does not steal editor focus.
    fn note_title(&self, id: i64, title: &str);
    fn editor(&self, view: &EditorView);
}

/// Interactive yes/no confirmation required before any deletion. A `false`
/// return must leave all state untouched.
pub trait ConfirmDelete {
    fn confirm(&self, message: &str) -> bool;
}

/// Attempt favicon resolution, on failure substitute nothing: a malformed
/// url simply yields no favicon and the tile falls back to its glyph.
pub fn favicon_url(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?;
    Some(format!("{FAVICON_SERVICE}?domain={host}&sz=64"))
}

pub fn tile(record: &ShortcutRecord) -> ShortcutTile {
    ShortcutTile {
        name: record.name.clone(),
        url: record.url.clone(),
        favicon: favicon_url(&record.url),
        glyph: record.icon.clone(),
    }
}

#[cfg(test)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderEvent {
    Grid(ShortcutsFragment),
    Main(Option<ShortcutsFragment>),
    Notes(NotesFragment),
    Title { id: i64, title: String },
    Editor(EditorView),
}

/// Recording fake used across the registry tests.
#[cfg(test)]
#[derive(Default)]
pub struct RecordingSink {
    pub events: std::cell::RefCell<Vec<RenderEvent>>,
}

#[cfg(test)]
impl RecordingSink {
    pub fn take(&self) -> Vec<RenderEvent> {
        self.events.borrow_mut().drain(..).collect()
    }
}

#[cfg(test)]
impl RenderSync for RecordingSink {
    fn shortcuts_grid(&self, fragment: &ShortcutsFragment) {
        self.events
            .borrow_mut()
            .push(RenderEvent::Grid(fragment.clone()));
    }

    fn main_shortcuts(&self, fragment: Option<&ShortcutsFragment>) {
        self.events
            .borrow_mut()
            .push(RenderEvent::Main(fragment.cloned()));
    }

    fn notes_list(&self, fragment: &NotesFragment) {
        self.events
            .borrow_mut()
            .push(RenderEvent::Notes(fragment.clone()));
    }

    fn note_title(&self, id: i64, title: &str) {
        self.events.borrow_mut().push(RenderEvent::Title {
            id,
            title: title.to_string(),
        });
    }

    fn editor(&self, view: &EditorView) {
        self.events
            .borrow_mut()
            .push(RenderEvent::Editor(view.clone()));
    }
}

/// Canned confirmation answer for tests.
#[cfg(test)]
pub struct Answer(pub bool);

#[cfg(test)]
impl ConfirmDelete for Answer {
    fn confirm(&self, _message: &str) -> bool {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn favicon_uses_host() {
        assert_eq!(
            favicon_url("https://translate.google.com/path").as_deref(),
            Some("https://www.google.com/s2/favicons?domain=translate.google.com&sz=64")
        );
    }

    #[test]
    fn favicon_malformed_url_falls_back_to_none() {
        assert_eq!(favicon_url("not a url"), None);
        assert_eq!(favicon_url("data:text/plain,hi"), None);
    }

    #[test]
    fn tile_always_carries_glyph() {
        let record = ShortcutRecord {
            name: "Github".into(),
            url: "https://github.com".into(),
            icon: "G".into(),
        };
        let t = tile(&record);
        assert!(t.favicon.is_some());
        assert_eq!(t.glyph, "G");
    }
}

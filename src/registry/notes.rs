use crate::errors::StoreResult;
use crate::models::NoteRecord;
use crate::render::{ConfirmDelete, EditorView, NoteEntry, NotesFragment, RenderSync};
use crate::store::PersistentStore;
use crate::util::title::note_title;

pub const NOTES_KEY: &str = "notes";

/// Ordered note list, most recent first, plus the selection cursor for the
/// editor surface. Whenever the cursor is set it references an existing
/// record; every path that removes the referenced record clears it in the
/// same operation.
pub struct NotesRegistry {
    items: Vec<NoteRecord>,
    current: Option<i64>,
}

impl NotesRegistry {
    pub fn load(store: &PersistentStore) -> Self {
        Self {
            items: store.load_or(NOTES_KEY, Vec::new),
            current: None,
        }
    }

    pub fn list(&self) -> &[NoteRecord] {
        &self.items
    }

    pub fn current(&self) -> Option<i64> {
        self.current
    }

    fn now() -> (i64, String) {
        let now = time::OffsetDateTime::now_utc();
        let millis = (now.unix_timestamp_nanos() / 1_000_000) as i64;
        let date = now
            .format(&time::format_description::well_known::Rfc3339)
            .unwrap_or_else(|_| "".into());
        (millis, date)
    }

    /// Create an empty note at the front of the list and select it. Ids are
    /// creation timestamps in unix milliseconds; two creations within the
    /// same millisecond bump past the collision so ids stay unique.
    pub fn create(&mut self, store: &PersistentStore, sink: &dyn RenderSync) -> StoreResult<i64> {
        let (mut id, date) = Self::now();
        while self.items.iter().any(|n| n.id == id) {
            id += 1;
        }
        self.items.insert(
            0,
            NoteRecord {
                id,
                content: String::new(),
                date,
            },
        );
        if let Err(err) = store.save(NOTES_KEY, &self.items) {
            self.items.remove(0);
            return Err(err);
        }
        self.select(id, sink);
        Ok(id)
    }

    /// Move the cursor to `id` if such a note exists: the matching list
    /// entry becomes the single active one and the editor is enabled and
    /// focused with the note's content. An unknown id leaves the cursor
    /// untouched.
    pub fn select(&mut self, id: i64, sink: &dyn RenderSync) {
        let Some(note) = self.items.iter().find(|n| n.id == id) else {
            return;
        };
        let content = note.content.clone();
        self.current = Some(id);
        sink.notes_list(&self.fragment());
        sink.editor(&EditorView::editing(&content));
    }

    /// Overwrite the selected note's content. With no selection this is a
    /// tolerated no-op (editor events can fire while nothing is selected)
    /// and storage is not touched. Only the one list entry's title is
    /// patched so the editor keeps focus.
    pub fn edit(
        &mut self,
        store: &PersistentStore,
        content: &str,
        sink: &dyn RenderSync,
    ) -> StoreResult<()> {
        let Some(id) = self.current else {
            return Ok(());
        };
        let Some(pos) = self.items.iter().position(|n| n.id == id) else {
            return Ok(());
        };
        let previous = std::mem::replace(&mut self.items[pos].content, content.to_string());
        if let Err(err) = store.save(NOTES_KEY, &self.items) {
            self.items[pos].content = previous;
            return Err(err);
        }
        sink.note_title(id, &note_title(content));
        Ok(())
    }

    /// Remove the note with `id` after interactive confirmation, keeping the
    /// relative order of the rest. Removing the selected note clears the
    /// cursor and disables the editor in the same operation.
    pub fn remove(
        &mut self,
        store: &PersistentStore,
        id: i64,
        confirm: &dyn ConfirmDelete,
        sink: &dyn RenderSync,
    ) -> StoreResult<bool> {
        let Some(pos) = self.items.iter().position(|n| n.id == id) else {
            return Ok(false);
        };
        if !confirm.confirm("确定删除此便签吗？") {
            return Ok(false);
        }
        let removed = self.items.remove(pos);
        if let Err(err) = store.save(NOTES_KEY, &self.items) {
            self.items.insert(pos, removed);
            return Err(err);
        }
        if self.current == Some(id) {
            self.current = None;
            sink.editor(&EditorView::disabled());
        }
        sink.notes_list(&self.fragment());
        Ok(true)
    }

    pub fn fragment(&self) -> NotesFragment {
        NotesFragment {
            items: self
                .items
                .iter()
                .map(|n| NoteEntry {
                    id: n.id,
                    title: note_title(&n.content),
                    active: self.current == Some(n.id),
                })
                .collect(),
        }
    }

    pub fn render(&self, sink: &dyn RenderSync) {
        sink.notes_list(&self.fragment());
    }
}

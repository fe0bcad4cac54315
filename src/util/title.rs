/// Shown in the notes list while a note has no usable first line.
pub const EMPTY_NOTE_TITLE: &str = "新便签";

const TITLE_MAX_CHARS: usize = 20;

/// List title for a note: first line of its content, truncated to 20
/// characters (char-based, so multi-byte text never splits), or the
/// placeholder when that line is empty.
pub fn note_title(content: &str) -> String {
    let first = content.lines().next().unwrap_or("");
    let title: String = first.chars().take(TITLE_MAX_CHARS).collect();
    if title.is_empty() {
        EMPTY_NOTE_TITLE.to_string()
    } else {
        title
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_line_only() {
        assert_eq!(note_title("Hello\nWorld"), "Hello");
    }

    #[test]
    fn truncates_to_twenty_chars() {
        let long = "abcdefghijklmnopqrstuvwxyz";
        assert_eq!(note_title(long), "abcdefghijklmnopqrst");
    }

    #[test]
    fn truncation_is_char_based() {
        let cjk = "春眠不觉晓处处闻啼鸟夜来风雨声花落知多少再加几个字";
        let title = note_title(cjk);
        assert_eq!(title.chars().count(), 20);
    }

    #[test]
    fn empty_content_uses_placeholder() {
        assert_eq!(note_title(""), EMPTY_NOTE_TITLE);
    }

    #[test]
    fn leading_newline_uses_placeholder() {
        assert_eq!(note_title("\nWorld"), EMPTY_NOTE_TITLE);
    }
}

/// Single-line text buffer with a byte-offset cursor that always sits on a
/// char boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    buffer: String,
    cursor: usize,
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.buffer
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Replace the content and put the cursor at the end.
    pub fn set(&mut self, value: &str) {
        self.buffer = value.to_string();
        self.cursor = self.buffer.len();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    pub fn insert(&mut self, c: char) {
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the char before the cursor. Returns whether anything changed.
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let start = self.prev_boundary();
        self.buffer.drain(start..self.cursor);
        self.cursor = start;
        true
    }

    /// Delete the char under the cursor. Returns whether anything changed.
    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.buffer.len() {
            return false;
        }
        let end = self.next_boundary();
        self.buffer.drain(self.cursor..end);
        true
    }

    pub fn move_left(&mut self) {
        self.cursor = self.prev_boundary();
    }

    pub fn move_right(&mut self) {
        self.cursor = self.next_boundary();
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.buffer.len();
    }

    /// Move to the start of the current or previous word.
    pub fn move_word_left(&mut self) {
        let chars: Vec<(usize, char)> = self.buffer[..self.cursor].char_indices().collect();
        let mut pos = chars.len();
        while pos > 0 && !is_word_char(chars[pos - 1].1) {
            pos -= 1;
        }
        while pos > 0 && is_word_char(chars[pos - 1].1) {
            pos -= 1;
        }
        self.cursor = chars.get(pos).map(|(i, _)| *i).unwrap_or(0);
    }

    /// Move past the current word and the separators after it.
    pub fn move_word_right(&mut self) {
        let rest = &self.buffer[self.cursor..];
        let mut chars = rest.char_indices().peekable();
        while chars.next_if(|(_, c)| is_word_char(*c)).is_some() {}
        while chars.next_if(|(_, c)| !is_word_char(*c)).is_some() {}
        let offset = chars.peek().map(|(i, _)| *i).unwrap_or(rest.len());
        self.cursor += offset;
    }

    /// Text before the cursor, the char under it (if any), and the rest.
    pub fn split_at_cursor(&self) -> (&str, Option<&str>, &str) {
        let (before, after) = self.buffer.split_at(self.cursor);
        match after.chars().next() {
            Some(c) => {
                let (current, rest) = after.split_at(c.len_utf8());
                (before, Some(current), rest)
            }
            None => (before, None, ""),
        }
    }

    fn prev_boundary(&self) -> usize {
        self.buffer[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn next_boundary(&self) -> usize {
        self.buffer[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
            .unwrap_or(self.buffer.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(value: &str) -> TextInput {
        let mut input = TextInput::new();
        input.set(value);
        input
    }

    #[test]
    fn test_insert_and_backspace_multibyte() {
        let mut input = TextInput::new();
        for c in "aöb".chars() {
            input.insert(c);
        }
        assert_eq!(input.value(), "aöb");
        assert_eq!(input.cursor(), 4);

        input.move_left();
        assert_eq!(input.cursor(), 3);
        assert!(input.backspace());
        assert_eq!(input.value(), "ab");
        assert_eq!(input.cursor(), 1);
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut input = input("abc");
        input.move_home();
        assert!(!input.backspace());
        assert_eq!(input.value(), "abc");
    }

    #[test]
    fn test_delete_under_cursor() {
        let mut input = input("👋🌍");
        input.move_home();
        assert!(input.delete());
        assert_eq!(input.value(), "🌍");
        input.move_end();
        assert!(!input.delete());
    }

    #[test]
    fn test_move_right_stops_at_end() {
        let mut input = input("ab");
        input.move_right();
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn test_word_motion() {
        let mut input = input("hello world test");
        input.move_word_left();
        assert_eq!(input.cursor(), 12);
        input.move_word_left();
        assert_eq!(input.cursor(), 6);
        input.move_word_left();
        assert_eq!(input.cursor(), 0);
        input.move_word_left();
        assert_eq!(input.cursor(), 0);

        input.move_word_right();
        assert_eq!(input.cursor(), 6);
        input.move_word_right();
        assert_eq!(input.cursor(), 12);
        input.move_word_right();
        assert_eq!(input.cursor(), 16);
    }

    #[test]
    fn test_word_motion_with_punctuation() {
        let mut input = input("hello, world!");
        input.move_home();
        input.move_word_right();
        assert_eq!(input.cursor(), 7);

        input.move_end();
        input.move_word_left();
        assert_eq!(input.cursor(), 7);
    }

    #[test]
    fn test_split_at_cursor() {
        let mut input = input("aöb");
        assert_eq!(input.split_at_cursor(), ("aöb", None, ""));

        input.move_home();
        input.move_right();
        assert_eq!(input.split_at_cursor(), ("a", Some("ö"), "b"));
    }

    #[test]
    fn test_clear() {
        let mut input = input("abc");
        input.clear();
        assert!(input.is_empty());
        assert_eq!(input.cursor(), 0);
    }
}

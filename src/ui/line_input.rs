use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    Submit,
    Cancel,
}

/// Single-line editor used for translation answers, vocabulary search, and
/// the chat box. Cursor movement, word delete, and the usual emacs-style
/// control keys; no history, no completion.
///
/// The cursor is a byte offset into `text`, kept on a char boundary so
/// umlauts and ß edit as single characters.
pub struct LineInput {
    text: String,
    cursor: usize,
}

impl Default for LineInput {
    fn default() -> Self {
        Self::new("")
    }
}

impl LineInput {
    pub fn new(text: &str) -> Self {
        Self { text: text.to_string(), cursor: text.len() }
    }

    pub fn value(&self) -> &str {
        &self.text
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Returns (before_cursor, cursor_char, after_cursor) for styled
    /// rendering. When the cursor sits at the end, cursor_char is None.
    pub fn render_parts(&self) -> (&str, Option<char>, &str) {
        let (before, rest) = self.text.split_at(self.cursor);
        match rest.chars().next() {
            Some(ch) => (before, Some(ch), &rest[ch.len_utf8()..]),
            None => (before, None, ""),
        }
    }

    pub fn handle(&mut self, key: KeyEvent) -> InputResult {
        match key.code {
            KeyCode::Esc => return InputResult::Cancel,
            KeyCode::Enter => return InputResult::Submit,

            KeyCode::Left => self.cursor = self.prev_boundary(),
            KeyCode::Right => self.cursor = self.next_boundary(),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.text.len(),
            KeyCode::Backspace => {
                let start = self.prev_boundary();
                self.text.replace_range(start..self.cursor, "");
                self.cursor = start;
            }
            KeyCode::Delete => {
                let end = self.next_boundary();
                self.text.replace_range(self.cursor..end, "");
            }
            KeyCode::Char('a') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.cursor = 0;
            }
            KeyCode::Char('e') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.cursor = self.text.len();
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.clear();
            }
            KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.delete_word_back();
            }
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.text.insert(self.cursor, ch);
                self.cursor += ch.len_utf8();
            }
            _ => {}
        }
        InputResult::Continue
    }

    /// Byte offset of the char before the cursor, or the cursor itself at
    /// the start of the line.
    fn prev_boundary(&self) -> usize {
        self.text[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    /// Byte offset just past the char under the cursor, or the cursor
    /// itself at the end of the line.
    fn next_boundary(&self) -> usize {
        match self.text[self.cursor..].chars().next() {
            Some(ch) => self.cursor + ch.len_utf8(),
            None => self.cursor,
        }
    }

    /// Unix-word-rubout: skip trailing whitespace, then the word before it.
    fn delete_word_back(&mut self) {
        let head = &self.text[..self.cursor];
        let trimmed = head.trim_end();
        let start = trimmed
            .char_indices()
            .rev()
            .find(|(_, ch)| ch.is_whitespace())
            .map(|(i, ch)| i + ch.len_utf8())
            .unwrap_or(0);
        self.text.replace_range(start..self.cursor, "");
        self.cursor = start;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    #[test]
    fn insert_at_start_middle_end() {
        let mut input = LineInput::new("ac");
        input.handle(key(KeyCode::Char('d')));
        assert_eq!(input.value(), "acd");

        input.handle(key(KeyCode::Home));
        input.handle(key(KeyCode::Char('z')));
        assert_eq!(input.value(), "zacd");
        assert_eq!(input.render_parts(), ("z", Some('a'), "cd"));

        input.handle(key(KeyCode::Right));
        input.handle(key(KeyCode::Char('b')));
        assert_eq!(input.value(), "zabcd");
        assert_eq!(input.render_parts(), ("zab", Some('c'), "d"));
    }

    #[test]
    fn backspace_at_boundaries() {
        let mut input = LineInput::new("ab");
        input.handle(key(KeyCode::Backspace));
        assert_eq!(input.value(), "a");
        input.handle(key(KeyCode::Backspace));
        assert_eq!(input.value(), "");
        input.handle(key(KeyCode::Backspace));
        assert_eq!(input.value(), "");
        assert_eq!(input.render_parts(), ("", None, ""));
    }

    #[test]
    fn delete_at_boundaries() {
        let mut input = LineInput::new("ab");
        input.handle(key(KeyCode::Home));
        input.handle(key(KeyCode::Delete));
        assert_eq!(input.value(), "b");
        input.handle(key(KeyCode::End));
        input.handle(key(KeyCode::Delete));
        assert_eq!(input.value(), "b");
    }

    #[test]
    fn umlauts_edit_as_single_chars() {
        let mut input = LineInput::new("Möchtest");
        input.handle(key(KeyCode::Backspace));
        assert_eq!(input.value(), "Möchtes");
        input.handle(key(KeyCode::Home));
        input.handle(key(KeyCode::Right));
        input.handle(key(KeyCode::Delete));
        assert_eq!(input.value(), "Mchtes");
    }

    #[test]
    fn ctrl_w_word_delete() {
        let mut input = LineInput::new("foo bar  ");
        input.handle(ctrl('w'));
        assert_eq!(input.value(), "foo ");

        let mut input2 = LineInput::new("  foo");
        input2.handle(ctrl('w'));
        assert_eq!(input2.value(), "  ");

        let mut input3 = LineInput::new("");
        input3.handle(ctrl('w'));
        assert_eq!(input3.value(), "");
    }

    #[test]
    fn ctrl_a_e_u() {
        let mut input = LineInput::new("test");
        input.handle(ctrl('a'));
        assert_eq!(input.render_parts(), ("", Some('t'), "est"));
        input.handle(ctrl('e'));
        assert_eq!(input.render_parts(), ("test", None, ""));
        input.handle(ctrl('u'));
        assert_eq!(input.value(), "");
    }

    #[test]
    fn submit_and_cancel() {
        let mut input = LineInput::new("test");
        assert_eq!(input.handle(key(KeyCode::Enter)), InputResult::Submit);
        let mut input2 = LineInput::new("test");
        assert_eq!(input2.handle(key(KeyCode::Esc)), InputResult::Cancel);
    }

    #[test]
    fn render_parts_walks_the_line() {
        let mut input = LineInput::new("abc");
        input.handle(key(KeyCode::Home));
        assert_eq!(input.render_parts(), ("", Some('a'), "bc"));
        input.handle(key(KeyCode::Right));
        assert_eq!(input.render_parts(), ("a", Some('b'), "c"));
        input.handle(key(KeyCode::End));
        assert_eq!(input.render_parts(), ("abc", None, ""));
    }
}

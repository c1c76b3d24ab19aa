/// A keystroke-level edit the surface understands.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EditKey {
    Insert(String),
    Newline,
    Backspace,
    Delete,
    Left { extend: bool },
    Right { extend: bool },
    Home,
    End,
    SelectAll,
}

/// Text content with a caret and an optional selection, indexed in chars.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct EditBuffer {
    value: String,
    caret: usize,
    anchor: usize,
    selection: Option<(usize, usize)>,
}

impl EditBuffer {
    /// A buffer with the caret after the last character.
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let len = value.chars().count();
        Self {
            value,
            caret: len,
            anchor: len,
            selection: None,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn selection(&self) -> Option<(usize, usize)> {
        self.selection
    }

    pub fn len(&self) -> usize {
        self.value.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn selected_text(&self) -> String {
        let Some((start, end)) = self.selection else {
            return String::new();
        };
        self.value
            .chars()
            .skip(start)
            .take(end.saturating_sub(start))
            .collect()
    }

    /// Applies `key`, clamping the result to `max_length` characters.
    /// Returns whether the content changed.
    pub fn apply(&mut self, key: &EditKey, max_length: Option<usize>) -> bool {
        let before = self.value.clone();
        let edited = match key {
            EditKey::Insert(text) => self.insert_text(text),
            EditKey::Newline => self.insert_text("\n"),
            EditKey::Backspace => self.delete_backward(),
            EditKey::Delete => self.delete_forward(),
            EditKey::Left { extend } => {
                self.move_left(*extend);
                false
            }
            EditKey::Right { extend } => {
                self.move_right(*extend);
                false
            }
            EditKey::Home => {
                self.move_line_start();
                false
            }
            EditKey::End => {
                self.move_line_end();
                false
            }
            EditKey::SelectAll => {
                self.anchor = 0;
                self.caret = self.len();
                self.selection = Self::selection_from_anchor(self.anchor, self.caret);
                false
            }
        };
        if edited {
            self.clamp_to_max_length(max_length);
        }
        self.value != before
    }

    fn clear_selection(&mut self) {
        self.selection = None;
        self.anchor = self.caret;
    }

    fn set_caret(&mut self, next_caret: usize, extend: bool) {
        self.caret = next_caret.min(self.len());
        if extend {
            self.selection = Self::selection_from_anchor(self.anchor, self.caret);
        } else {
            self.clear_selection();
        }
    }

    fn move_left(&mut self, extend: bool) {
        if !extend && let Some((start, _)) = self.selection {
            self.set_caret(start, false);
            return;
        }
        self.set_caret(self.caret.saturating_sub(1), extend);
    }

    fn move_right(&mut self, extend: bool) {
        if !extend && let Some((_, end)) = self.selection {
            self.set_caret(end, false);
            return;
        }
        self.set_caret(self.caret + 1, extend);
    }

    fn move_line_start(&mut self) {
        let line_start = self
            .value
            .chars()
            .take(self.caret)
            .collect::<Vec<_>>()
            .iter()
            .rposition(|ch| *ch == '\n')
            .map_or(0, |index| index + 1);
        self.set_caret(line_start, false);
    }

    fn move_line_end(&mut self) {
        let remaining = self
            .value
            .chars()
            .skip(self.caret)
            .position(|ch| ch == '\n')
            .unwrap_or_else(|| self.len() - self.caret);
        self.set_caret(self.caret + remaining, false);
    }

    fn delete_backward(&mut self) -> bool {
        if let Some((start, end)) = self.selection {
            self.replace_char_range(start, end, "");
            return true;
        }
        if self.caret == 0 {
            return false;
        }
        self.replace_char_range(self.caret - 1, self.caret, "");
        true
    }

    fn delete_forward(&mut self) -> bool {
        if let Some((start, end)) = self.selection {
            self.replace_char_range(start, end, "");
            return true;
        }
        if self.caret >= self.len() {
            return false;
        }
        self.replace_char_range(self.caret, self.caret + 1, "");
        true
    }

    fn insert_text(&mut self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        match self.selection {
            Some((start, end)) => self.replace_char_range(start, end, text),
            None => self.replace_char_range(self.caret, self.caret, text),
        }
        true
    }

    fn replace_char_range(&mut self, start: usize, end: usize, insert: &str) {
        let len = self.len();
        let start = start.min(len);
        let end = end.min(len).max(start);
        let byte_start = Self::byte_index_at_char(&self.value, start);
        let byte_end = Self::byte_index_at_char(&self.value, end);
        self.value.replace_range(byte_start..byte_end, insert);
        self.caret = (start + insert.chars().count()).min(self.len());
        self.clear_selection();
    }

    fn clamp_to_max_length(&mut self, max_length: Option<usize>) {
        let Some(limit) = max_length else {
            return;
        };
        if self.len() <= limit {
            return;
        }
        self.value = self.value.chars().take(limit).collect();
        self.caret = self.caret.min(limit);
        self.clear_selection();
    }

    fn byte_index_at_char(value: &str, char_index: usize) -> usize {
        value
            .char_indices()
            .nth(char_index)
            .map_or(value.len(), |(index, _)| index)
    }

    fn selection_from_anchor(anchor: usize, caret: usize) -> Option<(usize, usize)> {
        match anchor.cmp(&caret) {
            std::cmp::Ordering::Equal => None,
            std::cmp::Ordering::Less => Some((anchor, caret)),
            std::cmp::Ordering::Greater => Some((caret, anchor)),
        }
    }
}

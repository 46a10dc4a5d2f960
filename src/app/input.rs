// Single-field text editing.
// - Tracks a char-based cursor over a String buffer.
// - Handles insert/delete/navigation without splitting multi-byte chars.
// - Used by the panel text fields and the analysis URL field.
#[derive(Debug, Clone, Default)]
pub(crate) struct TextInput {
    value: String,
    cursor: usize,
}

impl TextInput {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn value(&self) -> &str {
        &self.value
    }

    pub(crate) fn cursor(&self) -> usize {
        self.cursor
    }

    #[cfg(test)]
    pub(crate) fn set(&mut self, value: &str) {
        self.value = value.to_string();
        self.cursor = self.value.chars().count();
    }

    pub(crate) fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    pub(crate) fn insert_char(&mut self, ch: char) {
        let byte_index = byte_index_for_char(&self.value, self.cursor);
        self.value.insert(byte_index, ch);
        self.cursor += 1;
    }

    pub(crate) fn insert_str(&mut self, text: &str) {
        let byte_index = byte_index_for_char(&self.value, self.cursor);
        self.value.insert_str(byte_index, text);
        self.cursor += text.chars().count();
    }

    pub(crate) fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }

        let remove_char_index = self.cursor - 1;
        self.remove_char_at(remove_char_index);
        self.cursor -= 1;
    }

    pub(crate) fn delete(&mut self) {
        if self.cursor >= self.value.chars().count() {
            return;
        }
        self.remove_char_at(self.cursor);
    }

    pub(crate) fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub(crate) fn move_right(&mut self) {
        let max = self.value.chars().count();
        self.cursor = (self.cursor + 1).min(max);
    }

    pub(crate) fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub(crate) fn move_end(&mut self) {
        self.cursor = self.value.chars().count();
    }

    fn remove_char_at(&mut self, char_index: usize) {
        let start = byte_index_for_char(&self.value, char_index);
        let end = byte_index_for_char(&self.value, char_index + 1);
        self.value.replace_range(start..end, "");
    }
}

pub(crate) fn byte_index_for_char(input: &str, char_index: usize) -> usize {
    if char_index == 0 {
        return 0;
    }

    input
        .char_indices()
        .nth(char_index)
        .map(|(index, _)| index)
        .unwrap_or(input.len())
}

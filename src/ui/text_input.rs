use ratatui::text::{Line, Span};

use super::{Key, ViewContext};

/// Single-line text field with optional masking.
#[derive(Debug, Clone)]
pub struct TextInput {
    value: String,
    placeholder: &'static str,
    char_limit: usize,
    masked: bool,
    focused: bool,
}

impl TextInput {
    pub fn new(placeholder: &'static str, char_limit: usize) -> Self {
        Self {
            value: String::new(),
            placeholder,
            char_limit,
            masked: false,
            focused: false,
        }
    }

    /// Same as [`TextInput::new`] but echoes `*` instead of the text.
    pub fn password(placeholder: &'static str, char_limit: usize) -> Self {
        Self {
            masked: true,
            ..Self::new(placeholder, char_limit)
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Trimmed value, what most fields store.
    pub fn trimmed(&self) -> &str {
        self.value.trim()
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        if self.value.chars().count() > self.char_limit {
            self.value = self.value.chars().take(self.char_limit).collect();
        }
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Edit keys only; returns true when the value changed.
    /// Unfocused inputs ignore everything.
    pub fn handle_key(&mut self, key: Key) -> bool {
        if !self.focused {
            return false;
        }
        match key {
            Key::Char(c) if !c.is_control() => {
                if self.value.chars().count() < self.char_limit {
                    self.value.push(c);
                    return true;
                }
                false
            }
            Key::Backspace => self.value.pop().is_some(),
            _ => false,
        }
    }

    pub fn render(&self, ctx: &ViewContext) -> Line<'static> {
        let theme = ctx.theme;
        let (frame_style, prefix) = if self.focused {
            (theme.focused_input, "▌ ")
        } else {
            (theme.input, "│ ")
        };

        let mut spans = vec![Span::styled(prefix, frame_style)];
        if self.value.is_empty() && !self.focused {
            spans.push(Span::styled(self.placeholder, theme.placeholder));
        } else if self.masked {
            spans.push(Span::styled("*".repeat(self.value.chars().count()), frame_style));
        } else {
            spans.push(Span::styled(self.value.clone(), frame_style));
        }

        if self.focused && ctx.cursor_visible {
            spans.push(Span::styled("█", theme.cursor));
        }

        Line::from(spans)
    }
}

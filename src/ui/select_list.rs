use ratatui::text::{Line, Span};

use super::{Key, ViewContext};

#[derive(Debug, Clone)]
pub struct SelectItem<T> {
    pub title: &'static str,
    pub description: &'static str,
    pub value: T,
}

impl<T> SelectItem<T> {
    pub fn new(title: &'static str, description: &'static str, value: T) -> Self {
        Self {
            title,
            description,
            value,
        }
    }
}

/// Single-choice list. Up/Down (or k/j) move, Enter/Space picks.
#[derive(Debug, Clone)]
pub struct SelectList<T> {
    items: Vec<SelectItem<T>>,
    cursor: usize,
    selected: Option<usize>,
}

impl<T: Copy + PartialEq> SelectList<T> {
    pub fn new(items: Vec<SelectItem<T>>) -> Self {
        Self {
            items,
            cursor: 0,
            selected: None,
        }
    }

    /// Forget the pick; the cursor stays where it is.
    pub fn reset(&mut self) {
        self.selected = None;
    }

    /// Move the cursor onto the item holding `value`, if present.
    pub fn focus_value<Q: ?Sized>(&mut self, value: &Q)
    where
        T: PartialEq<Q>,
    {
        if let Some(idx) = self.items.iter().position(|item| item.value.eq(value)) {
            self.cursor = idx;
        }
    }

    /// Returns true when this key picked an item.
    pub fn handle_key(&mut self, key: Key) -> bool {
        match key {
            Key::Up | Key::Char('k') => {
                self.cursor = self.cursor.saturating_sub(1);
                false
            }
            Key::Down | Key::Char('j') => {
                if self.cursor + 1 < self.items.len() {
                    self.cursor += 1;
                }
                false
            }
            Key::Enter | Key::Char(' ') if !self.items.is_empty() => {
                self.selected = Some(self.cursor);
                true
            }
            _ => false,
        }
    }

    pub fn selected_item(&self) -> Option<&SelectItem<T>> {
        self.selected.and_then(|idx| self.items.get(idx))
    }

    pub fn selected_value(&self) -> Option<T> {
        self.selected_item().map(|item| item.value)
    }

    /// Picked value, or the one under the cursor when nothing was picked.
    pub fn value(&self) -> Option<T> {
        self.selected_value()
            .or_else(|| self.items.get(self.cursor).map(|item| item.value))
    }

    pub fn render(&self, ctx: &ViewContext) -> Vec<Line<'static>> {
        let theme = ctx.theme;
        let mut lines = Vec::with_capacity(self.items.len() * 2);

        for (idx, item) in self.items.iter().enumerate() {
            let (marker, style) = if idx == self.cursor {
                (Span::styled("> ", theme.cursor), theme.selected_item)
            } else {
                (Span::raw("  "), theme.item)
            };
            lines.push(Line::from(vec![marker, Span::styled(item.title, style)]));

            if !item.description.is_empty() {
                lines.push(Line::from(Span::styled(
                    format!("    {}", item.description),
                    theme.subtitle,
                )));
            }
        }

        lines
    }
}

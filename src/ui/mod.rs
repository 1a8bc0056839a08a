//! Form widgets and styling shared by the wizard steps.
//!
//! Nothing here knows about DBCA or about step ordering. Widgets keep their
//! own local state, react to [`Key`]s and render to ratatui [`Line`]s using
//! the [`Theme`] carried by a [`ViewContext`].

mod key;
mod select_list;
mod text_input;
mod theme;

pub use key::Key;
pub use select_list::{SelectItem, SelectList};
pub use text_input::TextInput;
pub use theme::Theme;

use ratatui::text::{Line, Span};

/// What a step needs to render itself besides its own state.
#[derive(Debug, Clone, Copy)]
pub struct ViewContext<'a> {
    pub theme: &'a Theme,
    /// Blink phase of the text cursor in the focused input.
    pub cursor_visible: bool,
}

impl<'a> ViewContext<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self {
            theme,
            cursor_visible: true,
        }
    }

    pub fn with_cursor(self, cursor_visible: bool) -> Self {
        Self {
            cursor_visible,
            ..self
        }
    }
}

/// `[x] label` / `[ ] label`, highlighted when focused.
pub fn checkbox(ctx: &ViewContext, checked: bool, focused: bool, label: &str) -> Line<'static> {
    let theme = ctx.theme;
    let mark = if checked {
        Span::styled("[x]", theme.checked)
    } else {
        Span::styled("[ ]", theme.unchecked)
    };
    let style = if focused { theme.selected_item } else { theme.item };
    Line::from(vec![mark, Span::raw(" "), Span::styled(label.to_string(), style)])
}

pub fn subtitle(ctx: &ViewContext, text: &str) -> Line<'static> {
    Line::from(Span::styled(text.to_string(), ctx.theme.subtitle))
}

/// Indented key hint under a toggle, e.g. "Press 'c' to toggle".
pub fn hint(ctx: &ViewContext, text: &str) -> Line<'static> {
    Line::from(Span::styled(format!("    {}", text), ctx.theme.subtitle))
}

pub fn error(ctx: &ViewContext, message: &str) -> Line<'static> {
    Line::from(Span::styled(message.to_string(), ctx.theme.error))
}

/// Label line followed by the input line.
pub fn field(ctx: &ViewContext, label: &str, input: &TextInput) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(label.to_string(), ctx.theme.label)),
        input.render(ctx),
    ]
}

/// Blank line, the validation message if any, then the footer hint.
pub fn footer(ctx: &ViewContext, err: Option<&str>, text: &str) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    if let Some(err) = err {
        lines.push(Line::default());
        lines.push(error(ctx, err));
    }
    lines.push(Line::default());
    lines.push(subtitle(ctx, text));
    lines
}

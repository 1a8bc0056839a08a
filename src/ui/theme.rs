use ratatui::style::{Color, Modifier, Style};

const ORACLE_ORANGE: Color = Color::Rgb(0xFF, 0x6B, 0x35);
const BLUE: Color = Color::Rgb(0x4A, 0x90, 0xD9);
const TEAL: Color = Color::Rgb(0x00, 0xD4, 0xAA);
const TEXT: Color = Color::Rgb(0xFA, 0xFA, 0xFA);
const MUTED: Color = Color::Rgb(0x88, 0x88, 0x88);
const RED: Color = Color::Rgb(0xFF, 0x55, 0x55);
const GREEN: Color = Color::Rgb(0x55, 0xFF, 0x55);

/// Styles used by the wizard chrome and by every step's render output.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub header: Style,
    pub title: Style,
    pub step_indicator: Style,
    pub subtitle: Style,
    pub label: Style,
    pub item: Style,
    pub selected_item: Style,
    pub cursor: Style,
    pub input: Style,
    pub focused_input: Style,
    pub placeholder: Style,
    pub checked: Style,
    pub unchecked: Style,
    pub error: Style,
    pub warning: Style,
    pub success: Style,
    pub code: Style,
    pub help: Style,
    pub border: Style,
}

impl Default for Theme {
    fn default() -> Self {
        let bold = Modifier::BOLD;
        Self {
            header: Style::default()
                .fg(ORACLE_ORANGE)
                .bg(Color::Rgb(0x1A, 0x1A, 0x1A))
                .add_modifier(bold),
            title: Style::default().fg(ORACLE_ORANGE).add_modifier(bold),
            step_indicator: Style::default().fg(BLUE).add_modifier(bold),
            subtitle: Style::default().fg(MUTED),
            label: Style::default().fg(BLUE).add_modifier(bold),
            item: Style::default().fg(TEXT),
            selected_item: Style::default().fg(TEAL).add_modifier(bold),
            cursor: Style::default().fg(TEAL).add_modifier(bold),
            input: Style::default().fg(TEXT),
            focused_input: Style::default().fg(TEAL),
            placeholder: Style::default().fg(MUTED),
            checked: Style::default().fg(TEAL),
            unchecked: Style::default().fg(MUTED),
            error: Style::default().fg(RED).add_modifier(bold),
            warning: Style::default().fg(RED).add_modifier(bold),
            success: Style::default().fg(GREEN).add_modifier(bold),
            code: Style::default().fg(Color::Rgb(0xE0, 0xE0, 0xE0)),
            help: Style::default().fg(MUTED),
            border: Style::default().fg(BLUE),
        }
    }
}

impl Theme {
    /// Monochrome theme for terminals without color (`--no-color`).
    ///
    /// Emphasis survives as bold/reversed so focus is still visible.
    pub fn plain() -> Self {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let none = Style::default();
        Self {
            header: bold,
            title: bold,
            step_indicator: bold,
            subtitle: none,
            label: bold,
            item: none,
            selected_item: Style::default().add_modifier(Modifier::REVERSED),
            cursor: bold,
            input: none,
            focused_input: Style::default().add_modifier(Modifier::UNDERLINED),
            placeholder: Style::default().add_modifier(Modifier::DIM),
            checked: bold,
            unchecked: none,
            error: bold,
            warning: bold,
            success: bold,
            code: none,
            help: none,
            border: none,
        }
    }
}

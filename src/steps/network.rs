use ratatui::text::{Line, Text};

use super::{cycle, parse_number};
use crate::model::DbConfig;
use crate::ui::{self, Key, TextInput, ViewContext};
use crate::wizard::{Action, Step, Transition};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Name,
    Port,
    CreateNew,
}

const FIELDS: &[Field] = &[Field::Name, Field::Port, Field::CreateNew];

/// Listener settings, advanced mode only.
pub struct NetworkStep {
    name: TextInput,
    port: TextInput,
    create_new: bool,
    focus: Field,
    err: Option<String>,
}

impl NetworkStep {
    pub fn new() -> Self {
        Self {
            name: TextInput::new("LISTENER", 64),
            port: TextInput::new("1521", 5),
            create_new: false,
            focus: Field::Name,
            err: None,
        }
    }

    fn input_mut(&mut self, field: Field) -> Option<&mut TextInput> {
        match field {
            Field::Name => Some(&mut self.name),
            Field::Port => Some(&mut self.port),
            Field::CreateNew => None,
        }
    }

    fn set_focus(&mut self, field: Field) -> Option<Action> {
        self.name.blur();
        self.port.blur();
        self.focus = field;
        self.input_mut(field)?.focus();
        Some(Action::Blink)
    }

    fn port(&self) -> Option<u16> {
        parse_number::<u16>(self.port.value()).filter(|port| *port >= 1)
    }

    fn validate(&mut self) -> bool {
        self.err = if self.name.trimmed().is_empty() {
            Some("Listener name is required".into())
        } else if self.port().is_none() {
            Some("Port must be between 1 and 65535".into())
        } else {
            None
        };
        self.err.is_none()
    }
}

impl Default for NetworkStep {
    fn default() -> Self {
        Self::new()
    }
}

impl Step for NetworkStep {
    fn title(&self) -> &'static str {
        "Network Configuration"
    }

    fn initialize(&mut self, config: &DbConfig) -> Option<Action> {
        self.err = None;
        self.name.set_value(config.listener_name.as_str());
        self.port.set_value(config.listener_port.to_string());
        self.create_new = config.create_new_listener;
        self.set_focus(Field::Name)
    }

    fn handle_key(&mut self, key: Key) -> (Transition, Option<Action>) {
        match key {
            Key::Esc => return (Transition::Back, None),
            Key::Enter if self.validate() => return (Transition::Continue, None),
            Key::Enter => return (Transition::Stay, None),
            k if k.is_next_field() || k.is_prev_field() => {
                let next = cycle(FIELDS, self.focus, k.is_next_field());
                return (Transition::Stay, self.set_focus(next));
            }
            k if self.focus == Field::CreateNew && (k.is_char('c') || k == Key::Char(' ')) => {
                self.create_new = !self.create_new;
            }
            _ => {}
        }

        if let Some(input) = self.input_mut(self.focus) {
            input.handle_key(key);
        }
        (Transition::Stay, None)
    }

    fn render(&self, ctx: &ViewContext) -> Text<'static> {
        let mut lines = vec![
            ui::subtitle(ctx, "Configure network settings:"),
            Line::default(),
        ];
        lines.extend(ui::field(ctx, "Listener Name", &self.name));
        lines.extend(ui::field(ctx, "Listener Port", &self.port));
        lines.push(Line::default());
        lines.push(ui::checkbox(
            ctx,
            self.create_new,
            self.focus == Field::CreateNew,
            "Create new listener",
        ));
        lines.push(ui::hint(ctx, "Press 'c' to toggle"));
        lines.extend(ui::footer(ctx, self.err.as_deref(), "Press Enter to continue"));
        Text::from(lines)
    }

    fn apply(&self, config: &mut DbConfig) {
        config.listener_name = self.name.trimmed().to_string();
        if let Some(port) = self.port() {
            config.listener_port = port;
        }
        config.create_new_listener = self.create_new;
    }

    fn should_skip(&self, config: &DbConfig) -> bool {
        !config.is_create() || !config.is_advanced()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CreationMode, Operation};
    use crate::steps::testing::{applied, clear, press, rendered, type_text};

    fn started() -> NetworkStep {
        let mut step = NetworkStep::new();
        step.initialize(&DbConfig::default());
        step
    }

    #[test]
    fn shown_only_for_advanced_create() {
        let step = NetworkStep::new();
        let advanced = DbConfig {
            creation_mode: CreationMode::Advanced,
            ..DbConfig::default()
        };
        assert!(!step.should_skip(&advanced));
        assert!(step.should_skip(&DbConfig::default()));
        assert!(step.should_skip(&DbConfig {
            operation: Operation::Delete,
            ..advanced
        }));
    }

    #[test]
    fn port_must_be_in_range() {
        let mut step = started();
        press(&mut step, Key::Tab);
        clear(&mut step, 4);
        type_text(&mut step, "0");
        assert_eq!(press(&mut step, Key::Enter), Transition::Stay);
        assert!(rendered(&step).contains("between 1 and 65535"));

        clear(&mut step, 1);
        type_text(&mut step, "70000");
        assert_eq!(press(&mut step, Key::Enter), Transition::Stay);

        clear(&mut step, 5);
        type_text(&mut step, "1522");
        assert_eq!(press(&mut step, Key::Enter), Transition::Continue);
        assert_eq!(applied(&step, &DbConfig::default()).listener_port, 1522);
    }

    #[test]
    fn listener_name_is_required() {
        let mut step = started();
        clear(&mut step, 8);
        assert_eq!(press(&mut step, Key::Enter), Transition::Stay);
        assert!(rendered(&step).contains("Listener name is required"));
    }

    #[test]
    fn create_toggle_sits_after_the_port() {
        let mut step = started();
        press(&mut step, Key::BackTab);
        press(&mut step, Key::Char('C'));
        assert!(applied(&step, &DbConfig::default()).create_new_listener);
    }
}

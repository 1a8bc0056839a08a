use ratatui::text::{Line, Text};

use super::parse_number;
use crate::model::{DbConfig, EmConfiguration};
use crate::ui::{self, Key, SelectItem, SelectList, TextInput, ViewContext};
use crate::wizard::{Action, Step, Transition};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Kind,
    /// Port, plus the agent URL for Cloud Control.
    Details,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Agent,
    Port,
}

/// Enterprise Manager options, advanced mode only.
pub struct ManagementStep {
    list: SelectList<EmConfiguration>,
    agent: TextInput,
    port: TextInput,
    phase: Phase,
    focus: Field,
    err: Option<String>,
}

impl ManagementStep {
    pub fn new() -> Self {
        Self {
            list: SelectList::new(vec![
                SelectItem::new(
                    "None",
                    "Do not configure Enterprise Manager",
                    EmConfiguration::None,
                ),
                SelectItem::new(
                    "EM Database Express",
                    "Lightweight web-based management for this database",
                    EmConfiguration::DbExpress,
                ),
                SelectItem::new(
                    "Enterprise Manager Cloud Control",
                    "Register the database with an existing Cloud Control agent",
                    EmConfiguration::Central,
                ),
            ]),
            agent: TextInput::new("https://emhost:4903/empbs/upload", 256),
            port: TextInput::new("5500", 5),
            phase: Phase::Kind,
            focus: Field::Port,
            err: None,
        }
    }

    fn kind(&self) -> EmConfiguration {
        self.list.selected_value().unwrap_or_default()
    }

    fn port(&self) -> Option<u16> {
        parse_number::<u16>(self.port.value()).filter(|port| *port >= 1)
    }

    fn set_focus(&mut self, field: Field) -> Option<Action> {
        self.focus = field;
        match field {
            Field::Agent => {
                self.port.blur();
                self.agent.focus();
            }
            Field::Port => {
                self.agent.blur();
                self.port.focus();
            }
        }
        Some(Action::Blink)
    }

    fn validate(&mut self) -> bool {
        self.err = if self.port().is_none() {
            Some("Port must be between 1 and 65535".into())
        } else if self.kind() == EmConfiguration::Central && self.agent.trimmed().is_empty() {
            Some("Cloud Control agent URL is required".into())
        } else {
            None
        };
        self.err.is_none()
    }

    fn handle_details_key(&mut self, key: Key) -> (Transition, Option<Action>) {
        match key {
            Key::Enter if self.validate() => (Transition::Continue, None),
            Key::Enter => (Transition::Stay, None),
            k if k.is_next_field() || k.is_prev_field() => {
                if self.kind() != EmConfiguration::Central {
                    return (Transition::Stay, None);
                }
                let next = match self.focus {
                    Field::Agent => Field::Port,
                    Field::Port => Field::Agent,
                };
                (Transition::Stay, self.set_focus(next))
            }
            _ => {
                match self.focus {
                    Field::Agent => self.agent.handle_key(key),
                    Field::Port => self.port.handle_key(key),
                };
                (Transition::Stay, None)
            }
        }
    }
}

impl Default for ManagementStep {
    fn default() -> Self {
        Self::new()
    }
}

impl Step for ManagementStep {
    fn title(&self) -> &'static str {
        "Management Options"
    }

    fn initialize(&mut self, config: &DbConfig) -> Option<Action> {
        self.phase = Phase::Kind;
        self.err = None;
        self.list.reset();
        self.list.focus_value(&config.em_configuration);
        self.port.set_value(config.em_port.to_string());
        self.agent.set_value(config.cloud_control_agent.as_str());
        self.port.blur();
        self.agent.blur();
        None
    }

    fn handle_key(&mut self, key: Key) -> (Transition, Option<Action>) {
        match self.phase {
            Phase::Kind => match key {
                Key::Esc => (Transition::Back, None),
                _ if self.list.handle_key(key) => match self.kind() {
                    EmConfiguration::None => (Transition::Continue, None),
                    EmConfiguration::DbExpress => {
                        self.phase = Phase::Details;
                        (Transition::Stay, self.set_focus(Field::Port))
                    }
                    EmConfiguration::Central => {
                        self.phase = Phase::Details;
                        (Transition::Stay, self.set_focus(Field::Agent))
                    }
                },
                _ => (Transition::Stay, None),
            },
            Phase::Details if key == Key::Esc => {
                self.phase = Phase::Kind;
                self.err = None;
                self.list.reset();
                self.agent.blur();
                self.port.blur();
                (Transition::Stay, None)
            }
            Phase::Details => self.handle_details_key(key),
        }
    }

    fn render(&self, ctx: &ViewContext) -> Text<'static> {
        let mut lines = Vec::new();
        if self.phase == Phase::Kind {
            lines.push(ui::subtitle(ctx, "Configure database management options:"));
            lines.push(Line::default());
            lines.extend(self.list.render(ctx));
            return Text::from(lines);
        }

        let title = self.list.selected_item().map_or("", |item| item.title);
        lines.push(ui::subtitle(ctx, title));
        lines.push(Line::default());
        if self.kind() == EmConfiguration::Central {
            lines.extend(ui::field(ctx, "Cloud Control Agent URL", &self.agent));
            lines.extend(ui::field(ctx, "Agent Port", &self.port));
        } else {
            lines.extend(ui::field(ctx, "HTTPS Port", &self.port));
            lines.push(ui::hint(ctx, "Access URL: https://hostname:PORT/em"));
        }
        lines.extend(ui::footer(ctx, self.err.as_deref(), "Press Enter to continue"));
        Text::from(lines)
    }

    fn apply(&self, config: &mut DbConfig) {
        config.em_configuration = self.kind();
        if config.em_configuration == EmConfiguration::None {
            return;
        }
        if let Some(port) = self.port() {
            config.em_port = port;
        }
        if config.em_configuration == EmConfiguration::Central {
            config.cloud_control_agent = self.agent.trimmed().to_string();
        }
    }

    fn should_skip(&self, config: &DbConfig) -> bool {
        !config.is_create() || !config.is_advanced()
    }
}

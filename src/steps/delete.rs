use ratatui::style::Modifier;
use ratatui::text::{Line, Span, Text};

use super::cycle;
use crate::model::DbConfig;
use crate::ui::{self, Key, TextInput, ViewContext};
use crate::wizard::{Action, Step, Transition};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Sid,
    Password,
    Force,
}

const FIELDS: &[Field] = &[Field::Sid, Field::Password, Field::Force];

pub struct DeleteStep {
    sid: TextInput,
    password: TextInput,
    force: bool,
    focus: Field,
    err: Option<String>,
}

impl DeleteStep {
    pub fn new() -> Self {
        Self {
            sid: TextInput::new("orcl", 12),
            password: TextInput::password("SYS password", 30),
            force: false,
            focus: Field::Sid,
            err: None,
        }
    }

    fn input_mut(&mut self, field: Field) -> Option<&mut TextInput> {
        match field {
            Field::Sid => Some(&mut self.sid),
            Field::Password => Some(&mut self.password),
            Field::Force => None,
        }
    }

    fn set_focus(&mut self, field: Field) -> Option<Action> {
        self.sid.blur();
        self.password.blur();
        self.focus = field;
        self.input_mut(field)?.focus();
        Some(Action::Blink)
    }

    fn validate(&mut self) -> bool {
        let sid = self.sid.trimmed();
        self.err = if sid.is_empty() {
            Some("Database SID is required".into())
        } else if sid.chars().count() > 12 {
            Some("SID must be 12 characters or less".into())
        } else if self.password.value().is_empty() {
            Some("SYS password is required for deletion".into())
        } else {
            None
        };
        self.err.is_none()
    }
}

impl Default for DeleteStep {
    fn default() -> Self {
        Self::new()
    }
}

impl Step for DeleteStep {
    fn title(&self) -> &'static str {
        "Delete Database"
    }

    fn initialize(&mut self, config: &DbConfig) -> Option<Action> {
        self.err = None;
        self.force = config.delete_force;
        self.sid.set_value(config.delete_sid.as_str());
        self.password.set_value(config.sys_password.as_str());
        self.set_focus(Field::Sid)
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
            k if self.focus == Field::Force && (k.is_char('f') || k == Key::Char(' ')) => {
                self.force = !self.force;
            }
            _ => {}
        }

        if let Some(input) = self.input_mut(self.focus) {
            input.handle_key(key);
        }
        (Transition::Stay, None)
    }

    fn render(&self, ctx: &ViewContext) -> Text<'static> {
        let warning = ctx.theme.error.add_modifier(Modifier::BOLD);
        let mut lines = vec![
            ui::subtitle(ctx, "Configure database deletion:"),
            Line::default(),
            Line::from(Span::styled(
                "WARNING: This will generate a command to permanently delete the database!",
                warning,
            )),
            Line::default(),
        ];
        lines.extend(ui::field(ctx, "Database SID to delete", &self.sid));
        lines.extend(ui::field(ctx, "SYS Password", &self.password));
        lines.push(Line::default());
        lines.push(ui::checkbox(
            ctx,
            self.force,
            self.focus == Field::Force,
            "Force delete (abort running database)",
        ));
        lines.push(ui::hint(ctx, "Press 'f' to toggle"));
        lines.extend(ui::footer(ctx, self.err.as_deref(), "Press Enter to continue"));
        Text::from(lines)
    }

    fn apply(&self, config: &mut DbConfig) {
        config.delete_sid = self.sid.trimmed().to_string();
        config.sys_password = self.password.value().to_string();
        config.delete_force = self.force;
    }

    fn should_skip(&self, config: &DbConfig) -> bool {
        config.is_create()
    }
}

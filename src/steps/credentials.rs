use ratatui::text::{Line, Text};

use super::cycle;
use crate::model::DbConfig;
use crate::ui::{self, Key, TextInput, ViewContext};
use crate::wizard::{Action, Step, Transition};

const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Toggle,
    Common,
    Sys,
    System,
    PdbAdmin,
}

pub struct CredentialsStep {
    common: TextInput,
    sys: TextInput,
    system: TextInput,
    pdb_admin: TextInput,
    use_common: bool,
    /// Captured from the config; decides whether PDBADMIN is asked for.
    container: bool,
    focus: Field,
    err: Option<String>,
}

impl CredentialsStep {
    pub fn new() -> Self {
        Self {
            common: TextInput::password("Enter password for all accounts", 30),
            sys: TextInput::password("SYS password", 30),
            system: TextInput::password("SYSTEM password", 30),
            pdb_admin: TextInput::password("PDB Admin password", 30),
            use_common: true,
            container: true,
            focus: Field::Toggle,
            err: None,
        }
    }

    fn fields(&self) -> &'static [Field] {
        match (self.use_common, self.container) {
            (true, _) => &[Field::Toggle, Field::Common],
            (false, true) => &[Field::Toggle, Field::Sys, Field::System, Field::PdbAdmin],
            (false, false) => &[Field::Toggle, Field::Sys, Field::System],
        }
    }

    fn input_mut(&mut self, field: Field) -> Option<&mut TextInput> {
        match field {
            Field::Common => Some(&mut self.common),
            Field::Sys => Some(&mut self.sys),
            Field::System => Some(&mut self.system),
            Field::PdbAdmin => Some(&mut self.pdb_admin),
            Field::Toggle => None,
        }
    }

    fn set_focus(&mut self, field: Field) -> Option<Action> {
        for input in [
            &mut self.common,
            &mut self.sys,
            &mut self.system,
            &mut self.pdb_admin,
        ] {
            input.blur();
        }
        self.focus = field;
        self.input_mut(field)?.focus();
        Some(Action::Blink)
    }

    fn check(&self) -> Result<(), &'static str> {
        if self.use_common {
            let password = self.common.value();
            if password.is_empty() {
                return Err("Password is required");
            }
            if password.chars().count() < MIN_PASSWORD_LEN {
                return Err("Password must be at least 8 characters");
            }
            return Ok(());
        }

        if self.sys.value().is_empty() {
            return Err("SYS password is required");
        }
        if self.system.value().is_empty() {
            return Err("SYSTEM password is required");
        }
        if self.container && self.pdb_admin.value().is_empty() {
            return Err("PDB Admin password is required");
        }
        if self.sys.value().chars().count() < MIN_PASSWORD_LEN {
            return Err("SYS password must be at least 8 characters");
        }
        Ok(())
    }
}

impl Default for CredentialsStep {
    fn default() -> Self {
        Self::new()
    }
}

impl Step for CredentialsStep {
    fn title(&self) -> &'static str {
        "Database Credentials"
    }

    fn initialize(&mut self, config: &DbConfig) -> Option<Action> {
        self.err = None;
        self.use_common = config.use_common_password;
        self.container = config.create_as_container;
        self.common.set_value(config.common_password.as_str());
        self.sys.set_value(config.sys_password.as_str());
        self.system.set_value(config.system_password.as_str());
        self.pdb_admin.set_value(config.pdb_admin_password.as_str());
        self.set_focus(Field::Toggle)
    }

    fn handle_key(&mut self, key: Key) -> (Transition, Option<Action>) {
        match key {
            Key::Esc => return (Transition::Back, None),
            Key::Enter => {
                self.err = self.check().err().map(String::from);
                let transition = if self.err.is_none() {
                    Transition::Continue
                } else {
                    Transition::Stay
                };
                return (transition, None);
            }
            k if k.is_next_field() || k.is_prev_field() => {
                let next = cycle(self.fields(), self.focus, k.is_next_field());
                return (Transition::Stay, self.set_focus(next));
            }
            k if self.focus == Field::Toggle && (k.is_char('c') || k == Key::Char(' ')) => {
                self.use_common = !self.use_common;
                let first = if self.use_common { Field::Common } else { Field::Sys };
                return (Transition::Stay, self.set_focus(first));
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
            ui::subtitle(ctx, "Configure database credentials:"),
            Line::default(),
            ui::checkbox(
                ctx,
                self.use_common,
                self.focus == Field::Toggle,
                "Use same password for all accounts",
            ),
            ui::hint(ctx, "Press 'c' to toggle"),
            Line::default(),
        ];

        if self.use_common {
            lines.extend(ui::field(
                ctx,
                "Password for all accounts (SYS, SYSTEM, PDBADMIN)",
                &self.common,
            ));
        } else {
            lines.extend(ui::field(ctx, "SYS Password", &self.sys));
            lines.extend(ui::field(ctx, "SYSTEM Password", &self.system));
            if self.container {
                lines.extend(ui::field(ctx, "PDB Admin Password", &self.pdb_admin));
            }
        }

        lines.push(Line::default());
        lines.push(ui::subtitle(ctx, "Password requirements: minimum 8 characters"));
        lines.extend(ui::footer(ctx, self.err.as_deref(), "Press Enter to continue"));
        Text::from(lines)
    }

    fn apply(&self, config: &mut DbConfig) {
        config.use_common_password = self.use_common;

        if self.use_common {
            let password = self.common.value().to_string();
            config.sys_password = password.clone();
            config.system_password = password.clone();
            config.pdb_admin_password = password.clone();
            config.common_password = password;
        } else {
            config.sys_password = self.sys.value().to_string();
            config.system_password = self.system.value().to_string();
            if self.container {
                config.pdb_admin_password = self.pdb_admin.value().to_string();
            }
        }
    }

    fn should_skip(&self, config: &DbConfig) -> bool {
        !config.is_create()
    }
}

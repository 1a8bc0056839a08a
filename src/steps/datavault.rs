use ratatui::text::{Line, Text};

use super::cycle;
use crate::model::DbConfig;
use crate::ui::{self, Key, TextInput, ViewContext};
use crate::wizard::{Action, Step, Transition};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Enable,
    Owner,
    AccountManager,
}

pub struct DataVaultStep {
    owner: TextInput,
    account_manager: TextInput,
    enabled: bool,
    focus: Field,
    err: Option<String>,
}

impl DataVaultStep {
    pub fn new() -> Self {
        Self {
            owner: TextInput::new("C##DVOWNER", 128),
            account_manager: TextInput::new("C##DVACCTMGR", 128),
            enabled: false,
            focus: Field::Enable,
            err: None,
        }
    }

    fn fields(&self) -> &'static [Field] {
        if self.enabled {
            &[Field::Enable, Field::Owner, Field::AccountManager]
        } else {
            &[Field::Enable]
        }
    }

    fn input_mut(&mut self, field: Field) -> Option<&mut TextInput> {
        match field {
            Field::Owner => Some(&mut self.owner),
            Field::AccountManager => Some(&mut self.account_manager),
            Field::Enable => None,
        }
    }

    fn set_focus(&mut self, field: Field) -> Option<Action> {
        self.owner.blur();
        self.account_manager.blur();
        self.focus = field;
        self.input_mut(field)?.focus();
        Some(Action::Blink)
    }

    fn validate(&mut self) -> bool {
        self.err = if !self.enabled {
            None
        } else if self.owner.trimmed().is_empty() {
            Some("Data Vault Owner is required".into())
        } else if self.account_manager.trimmed().is_empty() {
            Some("Data Vault Account Manager is required".into())
        } else {
            None
        };
        self.err.is_none()
    }
}

impl Default for DataVaultStep {
    fn default() -> Self {
        Self::new()
    }
}

impl Step for DataVaultStep {
    fn title(&self) -> &'static str {
        "Data Vault Configuration"
    }

    fn initialize(&mut self, config: &DbConfig) -> Option<Action> {
        self.err = None;
        self.enabled = config.enable_data_vault;
        self.owner.set_value(config.data_vault_owner.as_str());
        self.account_manager
            .set_value(config.data_vault_account_manager.as_str());
        self.set_focus(Field::Enable)
    }

    fn handle_key(&mut self, key: Key) -> (Transition, Option<Action>) {
        match key {
            Key::Esc => return (Transition::Back, None),
            Key::Enter if self.validate() => return (Transition::Continue, None),
            Key::Enter => return (Transition::Stay, None),
            k if k.is_next_field() || k.is_prev_field() => {
                let next = cycle(self.fields(), self.focus, k.is_next_field());
                return (Transition::Stay, self.set_focus(next));
            }
            k if self.focus == Field::Enable && (k.is_char('d') || k == Key::Char(' ')) => {
                self.enabled = !self.enabled;
                if self.enabled {
                    return (Transition::Stay, self.set_focus(Field::Owner));
                }
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
            ui::subtitle(ctx, "Configure Oracle Data Vault:"),
            Line::default(),
            ui::subtitle(
                ctx,
                "Oracle Data Vault provides controls to prevent unauthorized access",
            ),
            ui::subtitle(ctx, "to data by privileged database users."),
            Line::default(),
            ui::checkbox(
                ctx,
                self.enabled,
                self.focus == Field::Enable,
                "Enable Oracle Data Vault",
            ),
            ui::hint(ctx, "Press 'd' to toggle"),
        ];

        if self.enabled {
            lines.push(Line::default());
            lines.extend(ui::field(ctx, "Data Vault Owner", &self.owner));
            lines.extend(ui::field(ctx, "Data Vault Account Manager", &self.account_manager));
        }

        lines.extend(ui::footer(ctx, self.err.as_deref(), "Press Enter to continue"));
        Text::from(lines)
    }

    fn apply(&self, config: &mut DbConfig) {
        config.enable_data_vault = self.enabled;
        if self.enabled {
            config.data_vault_owner = self.owner.trimmed().to_string();
            config.data_vault_account_manager = self.account_manager.trimmed().to_string();
        }
    }

    fn should_skip(&self, config: &DbConfig) -> bool {
        !config.is_create() || !config.is_advanced()
    }
}

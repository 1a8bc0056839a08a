use ratatui::text::{Line, Text};

use super::{cycle, parse_number};
use crate::model::DbConfig;
use crate::ui::{self, Key, TextInput, ViewContext};
use crate::wizard::{Action, Step, Transition};

const MAX_PDBS: u32 = 252;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    GlobalName,
    Sid,
    Container,
    PdbCount,
    PdbName,
}

pub struct IdentificationStep {
    global_name: TextInput,
    sid: TextInput,
    pdb_count: TextInput,
    pdb_name: TextInput,
    container: bool,
    focus: Field,
    err: Option<String>,
}

impl IdentificationStep {
    pub fn new() -> Self {
        Self {
            global_name: TextInput::new("orcl.example.com", 128),
            sid: TextInput::new("orcl", 12),
            pdb_count: TextInput::new("1", 3),
            pdb_name: TextInput::new("orclpdb", 30),
            container: true,
            focus: Field::GlobalName,
            err: None,
        }
    }

    fn fields(&self) -> &'static [Field] {
        if self.container {
            &[
                Field::GlobalName,
                Field::Sid,
                Field::Container,
                Field::PdbCount,
                Field::PdbName,
            ]
        } else {
            &[Field::GlobalName, Field::Sid, Field::Container]
        }
    }

    fn input_mut(&mut self, field: Field) -> Option<&mut TextInput> {
        match field {
            Field::GlobalName => Some(&mut self.global_name),
            Field::Sid => Some(&mut self.sid),
            Field::PdbCount => Some(&mut self.pdb_count),
            Field::PdbName => Some(&mut self.pdb_name),
            Field::Container => None,
        }
    }

    fn set_focus(&mut self, field: Field) -> Option<Action> {
        for input in [
            &mut self.global_name,
            &mut self.sid,
            &mut self.pdb_count,
            &mut self.pdb_name,
        ] {
            input.blur();
        }
        self.focus = field;
        let input = self.input_mut(field)?;
        input.focus();
        Some(Action::Blink)
    }

    fn validate(&mut self) -> bool {
        self.err = match self.check() {
            Ok(()) => None,
            Err(msg) => Some(msg.to_string()),
        };
        self.err.is_none()
    }

    fn check(&self) -> Result<(), &'static str> {
        if self.global_name.trimmed().is_empty() {
            return Err("Global Database Name is required");
        }
        let sid = self.sid.trimmed();
        if sid.is_empty() {
            return Err("SID is required");
        }
        if sid.chars().count() > 12 {
            return Err("SID must be 12 characters or less");
        }
        if self.container {
            let count = parse_number::<u32>(self.pdb_count.value())
                .filter(|n| *n <= MAX_PDBS)
                .ok_or("Number of PDBs must be between 0 and 252")?;
            if count > 0 && self.pdb_name.trimmed().is_empty() {
                return Err("PDB Name/Prefix is required when creating PDBs");
            }
        }
        Ok(())
    }
}

impl Default for IdentificationStep {
    fn default() -> Self {
        Self::new()
    }
}

impl Step for IdentificationStep {
    fn title(&self) -> &'static str {
        "Database Identification"
    }

    fn initialize(&mut self, config: &DbConfig) -> Option<Action> {
        self.err = None;
        self.global_name.set_value(config.global_db_name.as_str());
        self.sid.set_value(config.sid.as_str());
        self.pdb_count.set_value(config.number_of_pdbs.to_string());
        self.pdb_name.set_value(config.pdb_name.as_str());
        self.container = config.create_as_container;
        self.set_focus(Field::GlobalName)
    }

    fn handle_key(&mut self, key: Key) -> (Transition, Option<Action>) {
        match key {
            Key::Esc => return (Transition::Back, None),
            Key::Enter => {
                let transition = if self.validate() {
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
            k if self.focus == Field::Container && (k.is_char('c') || k == Key::Char(' ')) => {
                self.container = !self.container;
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
            ui::subtitle(ctx, "Configure database identification:"),
            Line::default(),
        ];
        lines.extend(ui::field(ctx, "Global Database Name", &self.global_name));
        lines.extend(ui::field(ctx, "Oracle SID", &self.sid));
        lines.push(Line::default());
        lines.push(ui::checkbox(
            ctx,
            self.container,
            self.focus == Field::Container,
            "Create as Container Database (CDB)",
        ));
        lines.push(ui::hint(ctx, "Press 'c' to toggle"));

        if self.container {
            lines.push(Line::default());
            lines.extend(ui::field(ctx, "Number of PDBs", &self.pdb_count));
            lines.extend(ui::field(ctx, "PDB Name/Prefix", &self.pdb_name));
        }

        lines.extend(ui::footer(ctx, self.err.as_deref(), "Press Enter to continue"));
        Text::from(lines)
    }

    fn apply(&self, config: &mut DbConfig) {
        config.global_db_name = self.global_name.trimmed().to_string();
        config.sid = self.sid.trimmed().to_string();
        config.create_as_container = self.container;

        if self.container {
            config.number_of_pdbs = parse_number(self.pdb_count.value()).unwrap_or(0);
            config.pdb_name = self.pdb_name.trimmed().to_string();
            config.pdb_prefix = config.pdb_name.clone();
        } else {
            config.number_of_pdbs = 0;
            config.pdb_name.clear();
            config.pdb_prefix.clear();
        }
    }

    fn should_skip(&self, config: &DbConfig) -> bool {
        !config.is_create()
    }
}

use ratatui::text::{Line, Text};

use super::cycle;
use crate::model::{DbConfig, StorageType};
use crate::ui::{self, Key, SelectItem, SelectList, TextInput, ViewContext};
use crate::wizard::{Action, Step, Transition};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Type,
    Paths,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Datafile,
    RedoLog,
    DiskGroup,
    Omf,
}

const FS_FIELDS: &[Field] = &[Field::Datafile, Field::RedoLog, Field::Omf];
const ASM_FIELDS: &[Field] = &[Field::DiskGroup, Field::Omf];

pub struct StorageStep {
    list: SelectList<StorageType>,
    datafile: TextInput,
    redo_log: TextInput,
    disk_group: TextInput,
    use_omf: bool,
    phase: Phase,
    focus: Field,
    err: Option<String>,
}

impl StorageStep {
    pub fn new() -> Self {
        Self {
            list: SelectList::new(vec![
                SelectItem::new(
                    "File System",
                    "Store database files on a standard file system",
                    StorageType::FileSystem,
                ),
                SelectItem::new(
                    "Automatic Storage Management (ASM)",
                    "Store database files using Oracle ASM",
                    StorageType::Asm,
                ),
            ]),
            datafile: TextInput::new("/u01/app/oracle/oradata", 256),
            redo_log: TextInput::new("/u01/app/oracle/oradata", 256),
            disk_group: TextInput::new("+DATA", 30),
            use_omf: true,
            phase: Phase::Type,
            focus: Field::Datafile,
            err: None,
        }
    }

    fn storage_type(&self) -> StorageType {
        self.list.selected_value().unwrap_or_default()
    }

    fn fields(&self) -> &'static [Field] {
        match self.storage_type() {
            StorageType::FileSystem => FS_FIELDS,
            StorageType::Asm => ASM_FIELDS,
        }
    }

    fn input_mut(&mut self, field: Field) -> Option<&mut TextInput> {
        match field {
            Field::Datafile => Some(&mut self.datafile),
            Field::RedoLog => Some(&mut self.redo_log),
            Field::DiskGroup => Some(&mut self.disk_group),
            Field::Omf => None,
        }
    }

    fn set_focus(&mut self, field: Field) -> Option<Action> {
        self.datafile.blur();
        self.redo_log.blur();
        self.disk_group.blur();
        self.focus = field;
        self.input_mut(field)?.focus();
        Some(Action::Blink)
    }

    fn validate(&mut self) -> bool {
        self.err = match self.storage_type() {
            StorageType::Asm if self.disk_group.trimmed().is_empty() => {
                Some("ASM Disk Group is required".into())
            }
            StorageType::FileSystem if self.datafile.trimmed().is_empty() => {
                Some("Datafile destination is required".into())
            }
            _ => None,
        };
        self.err.is_none()
    }

    fn handle_paths_key(&mut self, key: Key) -> (Transition, Option<Action>) {
        match key {
            Key::Esc => {
                self.phase = Phase::Type;
                self.err = None;
                self.list.reset();
                self.set_focus(Field::Omf);
                return (Transition::Stay, None);
            }
            Key::Enter if self.validate() => return (Transition::Continue, None),
            Key::Enter => return (Transition::Stay, None),
            k if k.is_next_field() || k.is_prev_field() => {
                let next = cycle(self.fields(), self.focus, k.is_next_field());
                return (Transition::Stay, self.set_focus(next));
            }
            k if self.focus == Field::Omf && (k.is_char('o') || k == Key::Char(' ')) => {
                self.use_omf = !self.use_omf;
            }
            _ => {}
        }

        if let Some(input) = self.input_mut(self.focus) {
            input.handle_key(key);
        }
        (Transition::Stay, None)
    }
}

impl Default for StorageStep {
    fn default() -> Self {
        Self::new()
    }
}

impl Step for StorageStep {
    fn title(&self) -> &'static str {
        "Storage Configuration"
    }

    fn initialize(&mut self, config: &DbConfig) -> Option<Action> {
        self.phase = Phase::Type;
        self.err = None;
        self.list.reset();
        self.list.focus_value(&config.storage_type);

        self.datafile.set_value(config.datafile_destination.as_str());
        self.redo_log.set_value(config.redo_log_destination.as_str());
        self.disk_group.set_value(config.asm_disk_group.as_str());
        self.use_omf = config.use_omf;
        self.set_focus(Field::Omf);
        None
    }

    fn handle_key(&mut self, key: Key) -> (Transition, Option<Action>) {
        match self.phase {
            Phase::Type => match key {
                Key::Esc => (Transition::Back, None),
                _ if self.list.handle_key(key) => {
                    self.phase = Phase::Paths;
                    let first = self.fields()[0];
                    (Transition::Stay, self.set_focus(first))
                }
                _ => (Transition::Stay, None),
            },
            Phase::Paths => self.handle_paths_key(key),
        }
    }

    fn render(&self, ctx: &ViewContext) -> Text<'static> {
        let mut lines = Vec::new();
        if self.phase == Phase::Type {
            lines.push(ui::subtitle(ctx, "Select storage type:"));
            lines.push(Line::default());
            lines.extend(self.list.render(ctx));
            return Text::from(lines);
        }

        match self.storage_type() {
            StorageType::Asm => {
                lines.push(ui::subtitle(ctx, "Configure ASM storage:"));
                lines.push(Line::default());
                lines.extend(ui::field(ctx, "ASM Disk Group", &self.disk_group));
            }
            StorageType::FileSystem => {
                lines.push(ui::subtitle(ctx, "Configure file system storage:"));
                lines.push(Line::default());
                lines.extend(ui::field(ctx, "Database Files Location", &self.datafile));
                lines.extend(ui::field(ctx, "Redo Log Files Location", &self.redo_log));
            }
        }

        lines.push(Line::default());
        lines.push(ui::checkbox(
            ctx,
            self.use_omf,
            self.focus == Field::Omf,
            "Use Oracle Managed Files (OMF)",
        ));
        lines.push(ui::hint(ctx, "Press 'o' to toggle"));
        lines.extend(ui::footer(
            ctx,
            self.err.as_deref(),
            "Press Enter to continue, Esc to go back",
        ));
        Text::from(lines)
    }

    fn apply(&self, config: &mut DbConfig) {
        config.storage_type = self.storage_type();
        config.use_omf = self.use_omf;

        match config.storage_type {
            StorageType::Asm => {
                let disk_group = self.disk_group.trimmed().to_string();
                config.datafile_destination = disk_group.clone();
                config.redo_log_destination = disk_group.clone();
                config.asm_disk_group = disk_group;
            }
            StorageType::FileSystem => {
                config.datafile_destination = self.datafile.trimmed().to_string();
                config.redo_log_destination = match self.redo_log.trimmed() {
                    "" => config.datafile_destination.clone(),
                    redo => redo.to_string(),
                };
            }
        }
    }

    fn should_skip(&self, config: &DbConfig) -> bool {
        !config.is_create()
    }
}

use ratatui::text::{Line, Text};

use super::parse_number;
use crate::model::{ConnectionMode, DbConfig, MemoryManagement};
use crate::ui::{self, Key, SelectItem, SelectList, TextInput, ViewContext};
use crate::wizard::{Action, Step, Transition};

const MIN_MEMORY_MB: u32 = 256;
const NATIONAL_CHARACTER_SET: &str = "AL16UTF16";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Memory,
    MemorySize,
    Charset,
    /// Advanced mode only.
    Connection,
}

impl Phase {
    fn previous(self) -> Option<Phase> {
        match self {
            Phase::Memory => None,
            Phase::MemorySize => Some(Phase::Memory),
            Phase::Charset => Some(Phase::MemorySize),
            Phase::Connection => Some(Phase::Charset),
        }
    }
}

/// Memory, character set and connection mode.
pub struct OptionsStep {
    memory: SelectList<MemoryManagement>,
    memory_size: TextInput,
    charset: SelectList<&'static str>,
    connection: SelectList<ConnectionMode>,
    sample_schemas: bool,
    advanced: bool,
    phase: Phase,
    err: Option<String>,
}

impl OptionsStep {
    pub fn new() -> Self {
        Self {
            memory: SelectList::new(vec![
                SelectItem::new(
                    "Automatic Memory Management",
                    "Let Oracle automatically manage memory allocation (recommended)",
                    MemoryManagement::Auto,
                ),
                SelectItem::new(
                    "Automatic Shared Memory Management",
                    "Manually set total SGA, let Oracle manage PGA",
                    MemoryManagement::AutoSga,
                ),
                SelectItem::new(
                    "Manual Memory Management",
                    "Manually configure SGA and PGA sizes",
                    MemoryManagement::Manual,
                ),
            ]),
            memory_size: TextInput::new("2048", 10),
            charset: SelectList::new(vec![
                SelectItem::new(
                    "AL32UTF8 (Recommended)",
                    "Unicode UTF-8 Universal character set, supports all languages",
                    "AL32UTF8",
                ),
                SelectItem::new("UTF8", "Unicode 3.0 UTF-8 Universal character set", "UTF8"),
                SelectItem::new("US7ASCII", "US 7-bit ASCII character set", "US7ASCII"),
                SelectItem::new(
                    "WE8ISO8859P1",
                    "ISO 8859-1 West European character set",
                    "WE8ISO8859P1",
                ),
            ]),
            connection: SelectList::new(vec![
                SelectItem::new(
                    "Dedicated Server Mode",
                    "Each client connection gets a dedicated server process",
                    ConnectionMode::Dedicated,
                ),
                SelectItem::new(
                    "Shared Server Mode",
                    "Multiple client connections share server processes",
                    ConnectionMode::Shared,
                ),
            ]),
            sample_schemas: false,
            advanced: false,
            phase: Phase::Memory,
            err: None,
        }
    }

    fn enter_phase(&mut self, phase: Phase) -> Option<Action> {
        self.phase = phase;
        self.err = None;
        if phase == Phase::MemorySize {
            self.memory_size.focus();
            return Some(Action::Blink);
        }
        self.memory_size.blur();
        None
    }

    fn handle_phase_key(&mut self, key: Key) -> (Transition, Option<Action>) {
        match self.phase {
            Phase::Memory => {
                if self.memory.handle_key(key) {
                    return (Transition::Stay, self.enter_phase(Phase::MemorySize));
                }
            }
            Phase::MemorySize => {
                if key == Key::Enter {
                    let valid = parse_number::<u32>(self.memory_size.value())
                        .is_some_and(|mb| mb >= MIN_MEMORY_MB);
                    if !valid {
                        self.err = Some(format!("Memory size must be at least {MIN_MEMORY_MB} MB"));
                        return (Transition::Stay, None);
                    }
                    return (Transition::Stay, self.enter_phase(Phase::Charset));
                }
                self.memory_size.handle_key(key);
            }
            Phase::Charset => {
                if self.charset.handle_key(key) {
                    if !self.advanced {
                        return (Transition::Continue, None);
                    }
                    return (Transition::Stay, self.enter_phase(Phase::Connection));
                }
            }
            Phase::Connection => {
                if key.is_char('s') {
                    self.sample_schemas = !self.sample_schemas;
                } else if self.connection.handle_key(key) {
                    return (Transition::Continue, None);
                }
            }
        }
        (Transition::Stay, None)
    }
}

impl Default for OptionsStep {
    fn default() -> Self {
        Self::new()
    }
}

impl Step for OptionsStep {
    fn title(&self) -> &'static str {
        "Configuration Options"
    }

    fn initialize(&mut self, config: &DbConfig) -> Option<Action> {
        self.advanced = config.is_advanced();
        self.sample_schemas = config.enable_sample_schemas;

        self.memory.reset();
        self.charset.reset();
        self.connection.reset();
        self.memory.focus_value(&config.memory_management);
        self.charset.focus_value(&config.character_set);
        self.connection.focus_value(&config.connection_mode);
        self.memory_size.set_value(config.total_memory.to_string());

        self.enter_phase(Phase::Memory)
    }

    fn handle_key(&mut self, key: Key) -> (Transition, Option<Action>) {
        if key == Key::Esc {
            return match self.phase.previous() {
                Some(phase) => {
                    match self.phase {
                        Phase::MemorySize => self.memory.reset(),
                        Phase::Connection => self.charset.reset(),
                        _ => {}
                    }
                    (Transition::Stay, self.enter_phase(phase))
                }
                None => (Transition::Back, None),
            };
        }
        self.handle_phase_key(key)
    }

    fn render(&self, ctx: &ViewContext) -> Text<'static> {
        let mut lines = Vec::new();
        match self.phase {
            Phase::Memory => {
                lines.push(ui::subtitle(ctx, "Select memory management mode:"));
                lines.push(Line::default());
                lines.extend(self.memory.render(ctx));
            }
            Phase::MemorySize => {
                let mode = self.memory.selected_item().map_or("", |item| item.title);
                lines.push(ui::subtitle(ctx, &format!("Memory Management: {mode}")));
                lines.push(Line::default());
                lines.extend(ui::field(ctx, "Total Memory (MB)", &self.memory_size));
                lines.push(ui::hint(ctx, "Recommended: At least 2048 MB"));
                lines.extend(ui::footer(ctx, self.err.as_deref(), "Press Enter to continue"));
            }
            Phase::Charset => {
                lines.push(ui::subtitle(ctx, "Select database character set:"));
                lines.push(Line::default());
                lines.extend(self.charset.render(ctx));
            }
            Phase::Connection => {
                lines.push(ui::subtitle(ctx, "Select connection mode:"));
                lines.push(Line::default());
                lines.extend(self.connection.render(ctx));
                lines.push(Line::default());
                lines.push(ui::checkbox(
                    ctx,
                    self.sample_schemas,
                    false,
                    "Install sample schemas (HR, OE, etc.)",
                ));
                lines.push(ui::hint(ctx, "Press 's' to toggle"));
            }
        }
        Text::from(lines)
    }

    fn apply(&self, config: &mut DbConfig) {
        if let Some(mode) = self.memory.value() {
            config.memory_management = mode;
        }
        if let Some(mb) = parse_number(self.memory_size.value()) {
            config.total_memory = mb;
        }
        if let Some(charset) = self.charset.value() {
            config.character_set = charset.to_string();
        }
        config.national_character_set = NATIONAL_CHARACTER_SET.to_string();

        if self.advanced {
            config.connection_mode = self.connection.value().unwrap_or_default();
            config.enable_sample_schemas = self.sample_schemas;
        } else {
            config.connection_mode = ConnectionMode::Dedicated;
            config.enable_sample_schemas = false;
        }
    }

    fn should_skip(&self, config: &DbConfig) -> bool {
        !config.is_create()
    }
}

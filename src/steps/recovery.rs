use ratatui::text::{Line, Span, Text};

use super::{cycle, parse_number};
use crate::model::DbConfig;
use crate::ui::{self, Key, TextInput, ViewContext};
use crate::wizard::{Action, Step, Transition};

const MIN_FRA_SIZE_MB: u32 = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Archive,
    Fra,
    Destination,
    Size,
}

pub struct RecoveryStep {
    destination: TextInput,
    size: TextInput,
    enable_archive: bool,
    enable_fra: bool,
    focus: Field,
    err: Option<String>,
}

impl RecoveryStep {
    pub fn new() -> Self {
        Self {
            destination: TextInput::new("/u01/app/oracle/fast_recovery_area", 256),
            size: TextInput::new("10240", 10),
            enable_archive: false,
            enable_fra: true,
            focus: Field::Archive,
            err: None,
        }
    }

    fn fields(&self) -> &'static [Field] {
        if self.enable_fra {
            &[Field::Archive, Field::Fra, Field::Destination, Field::Size]
        } else {
            &[Field::Archive, Field::Fra]
        }
    }

    fn input_mut(&mut self, field: Field) -> Option<&mut TextInput> {
        match field {
            Field::Destination => Some(&mut self.destination),
            Field::Size => Some(&mut self.size),
            Field::Archive | Field::Fra => None,
        }
    }

    fn set_focus(&mut self, field: Field) -> Option<Action> {
        self.destination.blur();
        self.size.blur();
        self.focus = field;
        self.input_mut(field)?.focus();
        Some(Action::Blink)
    }

    fn validate(&mut self) -> bool {
        self.err = None;
        if !self.enable_fra {
            return true;
        }
        if self.destination.trimmed().is_empty() {
            self.err = Some("Fast Recovery Area location is required".into());
        } else if !parse_number::<u32>(self.size.value()).is_some_and(|mb| mb >= MIN_FRA_SIZE_MB) {
            self.err = Some(format!("FRA size must be at least {MIN_FRA_SIZE_MB} MB"));
        }
        self.err.is_none()
    }
}

impl Default for RecoveryStep {
    fn default() -> Self {
        Self::new()
    }
}

impl Step for RecoveryStep {
    fn title(&self) -> &'static str {
        "Recovery & Archive Log"
    }

    fn initialize(&mut self, config: &DbConfig) -> Option<Action> {
        self.err = None;
        self.enable_archive = config.enable_archive_log;
        self.enable_fra = config.enable_fra;
        self.destination.set_value(config.fra_destination.as_str());
        self.size.set_value(config.fra_size.to_string());
        self.set_focus(Field::Archive)
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
            k if self.focus == Field::Archive && (k.is_char('a') || k == Key::Char(' ')) => {
                self.enable_archive = !self.enable_archive;
            }
            k if self.focus == Field::Fra && (k.is_char('f') || k == Key::Char(' ')) => {
                self.enable_fra = !self.enable_fra;
                if self.enable_fra {
                    return (Transition::Stay, self.set_focus(Field::Destination));
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
        let archive_label = if self.enable_archive {
            "Enable Archive Log Mode (ARCHIVELOG)"
        } else {
            "Enable Archive Log Mode (NOARCHIVELOG)"
        };

        let mut lines = vec![
            ui::subtitle(ctx, "Configure Recovery and Archive Log Settings:"),
            Line::default(),
            ui::checkbox(
                ctx,
                self.enable_archive,
                self.focus == Field::Archive,
                archive_label,
            ),
            ui::hint(
                ctx,
                "Press 'a' to toggle - Required for online backups and point-in-time recovery",
            ),
            Line::default(),
            Line::from(Span::styled("─".repeat(41), ctx.theme.border)),
            Line::default(),
            ui::checkbox(
                ctx,
                self.enable_fra,
                self.focus == Field::Fra,
                "Enable Fast Recovery Area (FRA)",
            ),
            ui::hint(
                ctx,
                "Press 'f' to toggle - Stores backups, archive logs, and flashback logs",
            ),
        ];

        if self.enable_fra {
            lines.push(Line::default());
            lines.extend(ui::field(ctx, "FRA Location", &self.destination));
            lines.extend(ui::field(ctx, "FRA Size (MB)", &self.size));
        }

        lines.extend(ui::footer(ctx, self.err.as_deref(), "Press Enter to continue"));
        Text::from(lines)
    }

    fn apply(&self, config: &mut DbConfig) {
        config.enable_archive_log = self.enable_archive;
        config.enable_fra = self.enable_fra;
        if self.enable_fra {
            config.fra_destination = self.destination.trimmed().to_string();
            config.fra_size = parse_number(self.size.value()).unwrap_or(config.fra_size);
        }
    }

    fn should_skip(&self, config: &DbConfig) -> bool {
        !config.is_create()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::steps::testing::{applied, clear, press, rendered, type_text};

    fn started() -> RecoveryStep {
        let mut step = RecoveryStep::new();
        step.initialize(&DbConfig::default());
        step
    }

    #[test]
    fn archive_toggle_on_first_field() {
        let mut step = started();
        press(&mut step, Key::Char('a'));
        assert!(rendered(&step).contains("(ARCHIVELOG)"));
        assert_eq!(press(&mut step, Key::Enter), Transition::Continue);
        assert!(applied(&step, &DbConfig::default()).enable_archive_log);
    }

    #[test]
    fn enabling_fra_focuses_the_location() {
        let config = DbConfig {
            enable_fra: false,
            ..DbConfig::default()
        };
        let mut step = RecoveryStep::new();
        step.initialize(&config);
        assert!(!rendered(&step).contains("FRA Location"));

        press(&mut step, Key::Tab);
        let (_, action) = step.handle_key(Key::Char('f'));
        assert_eq!(action, Some(Action::Blink));
        assert_eq!(step.focus, Field::Destination);
        assert!(rendered(&step).contains("FRA Location"));
    }

    #[test]
    fn fra_size_has_a_floor() {
        let mut step = started();
        for _ in 0..3 {
            press(&mut step, Key::Tab);
        }
        clear(&mut step, 10);
        type_text(&mut step, "512");
        assert_eq!(press(&mut step, Key::Enter), Transition::Stay);
        assert!(rendered(&step).contains("at least 1024 MB"));

        clear(&mut step, 3);
        type_text(&mut step, "4096");
        assert_eq!(press(&mut step, Key::Enter), Transition::Continue);
        assert_eq!(applied(&step, &DbConfig::default()).fra_size, 4096);
    }

    #[test]
    fn disabled_fra_keeps_previous_location() {
        let mut step = started();
        press(&mut step, Key::Tab);
        press(&mut step, Key::Char('f'));
        assert_eq!(press(&mut step, Key::Enter), Transition::Continue);

        let config = applied(&step, &DbConfig::default());
        assert!(!config.enable_fra);
        assert_eq!(config.fra_destination, DbConfig::default().fra_destination);
    }
}

use ratatui::text::{Line, Span, Text};

use crate::generator::{self, Secrets};
use crate::model::DbConfig;
use crate::ui::{self, Key, ViewContext};
use crate::wizard::{Action, Step, Transition};

/// Last stop: shows what will be generated. Never skipped.
pub struct ReviewStep {
    summary: String,
    command: String,
}

impl ReviewStep {
    pub fn new() -> Self {
        Self {
            summary: String::new(),
            command: String::new(),
        }
    }
}

impl Default for ReviewStep {
    fn default() -> Self {
        Self::new()
    }
}

impl Step for ReviewStep {
    fn title(&self) -> &'static str {
        "Review"
    }

    fn initialize(&mut self, config: &DbConfig) -> Option<Action> {
        self.summary = generator::summary(config);
        self.command = generator::command(config, Secrets::Masked);
        None
    }

    fn handle_key(&mut self, key: Key) -> (Transition, Option<Action>) {
        let transition = match key {
            Key::Enter => Transition::Continue,
            Key::Esc => Transition::Back,
            k if k.is_char('p') => Transition::PrintAndQuit,
            k if k.is_char('q') => Transition::Quit,
            _ => Transition::Stay,
        };
        (transition, None)
    }

    fn render(&self, ctx: &ViewContext) -> Text<'static> {
        let theme = ctx.theme;
        let mut lines: Vec<Line<'static>> = self
            .summary
            .lines()
            .map(|line| Line::from(Span::styled(line.to_string(), theme.item)))
            .collect();

        lines.push(Line::default());
        lines.push(Line::from(Span::styled("Generated command:", theme.label)));
        lines.extend(
            self.command
                .lines()
                .map(|line| Line::from(Span::styled(line.to_string(), theme.code))),
        );

        lines.push(Line::default());
        lines.push(ui::subtitle(
            ctx,
            "Enter: finish and print  p: print command and quit  q: quit  Esc: back",
        ));
        Text::from(lines)
    }

    fn apply(&self, _config: &mut DbConfig) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Operation;
    use crate::steps::testing::{applied, press, rendered};

    #[test]
    fn shows_summary_and_masked_command() {
        let mut step = ReviewStep::new();
        let config = DbConfig {
            sys_password: "Welcome123".into(),
            ..DbConfig::default()
        };
        step.initialize(&config);

        let text = rendered(&step);
        assert!(text.contains("Database Configuration Summary"));
        assert!(text.contains("-createDatabase"));
        assert!(text.contains("<PASSWORD>"));
        assert!(!text.contains("Welcome123"));
    }

    #[test]
    fn reflects_delete_operation() {
        let mut step = ReviewStep::new();
        step.initialize(&DbConfig {
            operation: Operation::Delete,
            delete_sid: "prod".into(),
            ..DbConfig::default()
        });
        assert!(rendered(&step).contains("-sourceDB prod"));
    }

    #[test]
    fn keys_map_to_exits() {
        let mut step = ReviewStep::new();
        step.initialize(&DbConfig::default());
        assert_eq!(press(&mut step, Key::Enter), Transition::Continue);
        assert_eq!(press(&mut step, Key::Char('p')), Transition::PrintAndQuit);
        assert_eq!(press(&mut step, Key::Char('q')), Transition::Quit);
        assert_eq!(press(&mut step, Key::Esc), Transition::Back);
        assert_eq!(press(&mut step, Key::Char('x')), Transition::Stay);
    }

    #[test]
    fn apply_changes_nothing() {
        let step = ReviewStep::new();
        assert_eq!(applied(&step, &DbConfig::default()), DbConfig::default());
    }
}

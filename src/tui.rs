use crate::ui::{Key, Theme, ViewContext};
use crate::wizard::{Action, Wizard};
use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io::{stdout, Stdout};
use std::time::{Duration, Instant};
use tracing::debug;

const APP_TITLE: &str = "Oracle DBCA - Database Configuration Assistant";
const HELP: &str = "Enter: confirm | Tab/Shift+Tab: move | Esc: back | Ctrl+C: quit";
const BLINK_INTERVAL: Duration = Duration::from_millis(530);

/// Text-cursor blink phase, restarted whenever an input takes focus.
struct Blink {
    visible: bool,
    since: Instant,
}

impl Blink {
    fn new() -> Self {
        Self {
            visible: true,
            since: Instant::now(),
        }
    }

    fn reset(&mut self) {
        self.visible = true;
        self.since = Instant::now();
    }

    /// How long the event poll may block before the next toggle is due.
    fn timeout(&self) -> Duration {
        BLINK_INTERVAL.saturating_sub(self.since.elapsed())
    }

    fn tick(&mut self) {
        if self.since.elapsed() >= BLINK_INTERVAL {
            self.visible = !self.visible;
            self.since = Instant::now();
        }
    }

    fn apply(&mut self, actions: impl IntoIterator<Item = Action>) {
        for action in actions {
            match action {
                Action::Blink => self.reset(),
            }
        }
    }
}

/// Run the wizard in the alternate screen until it completes or quits.
pub fn run_tui(wizard: &mut Wizard, theme: &Theme) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run(&mut terminal, wizard, theme);

    // Restore terminal.
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        crossterm::cursor::Show
    )?;
    terminal.show_cursor()?;

    res
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    wizard: &mut Wizard,
    theme: &Theme,
) -> Result<()> {
    let mut blink = Blink::new();
    blink.apply(wizard.start());

    while !wizard.is_completed() && !wizard.is_quitting() {
        terminal.draw(|f| {
            let ctx = ViewContext::new(theme).with_cursor(blink.visible);
            ui(f, wizard, &ctx)
        })?;

        if event::poll(blink.timeout())? {
            if let Event::Key(event) = event::read()? {
                match Key::from_event(&event) {
                    Some(Key::Interrupt) => {
                        debug!("interrupted");
                        wizard.quit();
                    }
                    Some(key) => blink.apply(wizard.dispatch(key)),
                    None => {}
                }
            }
        }
        blink.tick();
    }

    Ok(())
}

fn ui(f: &mut Frame, wizard: &Wizard, ctx: &ViewContext) {
    let theme = ctx.theme;

    let root_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Min(5),    // body
            Constraint::Length(1), // help bar
        ])
        .split(f.area());

    let Some(step) = wizard.current_step() else {
        return;
    };
    let (position, total) = wizard.progress();

    let header = Paragraph::new(vec![
        Line::from(Span::styled(APP_TITLE, theme.header)),
        Line::from(vec![
            Span::styled(step.title(), theme.title),
            Span::raw("  "),
            Span::styled(format!("Step {position} of {total}"), theme.step_indicator),
        ]),
    ])
    .block(Block::default().borders(Borders::BOTTOM).border_style(theme.border));
    f.render_widget(header, root_chunks[0]);

    let body_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(30), Constraint::Min(20)])
        .split(root_chunks[1]);

    let items: Vec<ListItem> = wizard
        .outline()
        .into_iter()
        .map(|(title, current)| {
            if current {
                ListItem::new(Line::from(vec![
                    Span::styled("➤ ", theme.cursor),
                    Span::styled(title, theme.selected_item),
                ]))
            } else {
                ListItem::new(Line::from(Span::styled(format!("  {title}"), theme.item)))
            }
        })
        .collect();
    let steps_list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border)
            .title("Steps"),
    );
    f.render_widget(steps_list, body_chunks[0]);

    let body = Paragraph::new(step.render(ctx))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(body, body_chunks[1]);

    let help = Paragraph::new(Line::from(Span::styled(HELP, theme.help)));
    f.render_widget(help, root_chunks[2]);
}

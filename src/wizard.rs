//! Step sequencing.
//!
//! A [`Wizard`] owns an ordered list of [`Step`]s and the single [`DbConfig`]
//! they fill in. Only the step under the cursor sees input. When it reports
//! [`Transition::Continue`] its draft is applied to the config *before* the
//! cursor moves, so skip predicates further down always see fresh answers.
//! [`Transition::Back`] never applies anything.

use ratatui::text::Text;
use tracing::{debug, info};

use crate::model::DbConfig;
use crate::ui::{Key, ViewContext};

/// What a step wants the wizard to do after handling a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Draft is valid; apply it and move forward.
    Continue,
    /// Drop the draft and return to the previous visible step.
    Back,
    Quit,
    /// Nothing for the wizard to do, the step may have changed internally.
    Stay,
    /// Quit, but the host should print the command first.
    PrintAndQuit,
}

/// Deferred work a step hands to the host loop. The wizard never interprets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Restart the cursor blink cycle, a text input just took focus.
    Blink,
}

/// One question group of the wizard.
///
/// Steps keep a private draft. `initialize` reseeds it from the config each
/// time the cursor lands on the step; `apply` is the only way the draft
/// reaches the config and runs once per `Continue`.
pub trait Step {
    fn title(&self) -> &'static str;

    fn initialize(&mut self, config: &DbConfig) -> Option<Action>;

    /// Internal phases are unwound with `Stay`; `Back` is only returned from
    /// the outermost one.
    fn handle_key(&mut self, key: Key) -> (Transition, Option<Action>);

    fn render(&self, ctx: &ViewContext) -> Text<'static>;

    fn apply(&self, config: &mut DbConfig);

    /// Must only look at `config`: it is called on steps that were never
    /// initialized.
    fn should_skip(&self, _config: &DbConfig) -> bool {
        false
    }
}

pub struct Wizard {
    steps: Vec<Box<dyn Step>>,
    cursor: usize,
    config: DbConfig,
    completed: bool,
    quitting: bool,
    print_requested: bool,
}

impl Wizard {
    pub fn new(steps: Vec<Box<dyn Step>>, config: DbConfig) -> Self {
        Self {
            steps,
            cursor: 0,
            config,
            completed: false,
            quitting: false,
            print_requested: false,
        }
    }

    /// Land on the first visible step and initialize it.
    pub fn start(&mut self) -> Option<Action> {
        self.cursor = 0;
        self.skip_forward();
        self.enter_current()
    }

    /// Feed one key to the current step and act on its answer.
    pub fn dispatch(&mut self, key: Key) -> Vec<Action> {
        let mut actions = Vec::new();
        if self.quitting || self.cursor >= self.steps.len() {
            return actions;
        }

        let (transition, action) = self.steps[self.cursor].handle_key(key);
        actions.extend(action);

        match transition {
            Transition::Continue => {
                let step = &self.steps[self.cursor];
                step.apply(&mut self.config);
                info!(step = step.title(), index = self.cursor, "step applied");

                self.cursor += 1;
                self.skip_forward();
                actions.extend(self.enter_current());
            }
            Transition::Back => {
                debug!(from = self.cursor, "going back");
                self.cursor = self.cursor.saturating_sub(1);
                self.skip_backward();
                actions.extend(self.enter_current());
            }
            Transition::Quit => {
                info!("wizard cancelled");
                self.quitting = true;
            }
            Transition::PrintAndQuit => {
                info!("wizard quit with print requested");
                self.quitting = true;
                self.print_requested = true;
            }
            Transition::Stay => {}
        }

        actions
    }

    /// Host-level interrupt (Ctrl+C).
    pub fn quit(&mut self) {
        self.quitting = true;
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn is_quitting(&self) -> bool {
        self.quitting
    }

    pub fn should_print(&self) -> bool {
        self.print_requested
    }

    pub fn config(&self) -> &DbConfig {
        &self.config
    }

    pub fn current_step(&self) -> Option<&dyn Step> {
        self.steps.get(self.cursor).map(|step| step.as_ref())
    }

    /// 1-based position of the current step among the visible ones, and how
    /// many are visible for the config as it stands.
    pub fn progress(&self) -> (usize, usize) {
        let mut position = 0;
        let mut total = 0;
        for (idx, step) in self.steps.iter().enumerate() {
            if step.should_skip(&self.config) {
                continue;
            }
            total += 1;
            if idx <= self.cursor {
                position += 1;
            }
        }
        (position, total)
    }

    /// Titles of the currently visible steps, each flagged when it is the
    /// one under the cursor.
    pub fn outline(&self) -> Vec<(&'static str, bool)> {
        self.steps
            .iter()
            .enumerate()
            .filter(|(_, step)| !step.should_skip(&self.config))
            .map(|(idx, step)| (step.title(), idx == self.cursor))
            .collect()
    }

    fn skip_forward(&mut self) {
        while self.cursor < self.steps.len() && self.steps[self.cursor].should_skip(&self.config) {
            debug!(step = self.steps[self.cursor].title(), "skipping");
            self.cursor += 1;
        }
    }

    fn skip_backward(&mut self) {
        while self.cursor > 0 && self.steps[self.cursor].should_skip(&self.config) {
            debug!(step = self.steps[self.cursor].title(), "skipping back");
            self.cursor -= 1;
        }
        // Index 0 is the floor. If it is hidden, settle on the first visible
        // step instead so a hidden step is never shown.
        if self.cursor == 0
            && self
                .steps
                .first()
                .is_some_and(|step| step.should_skip(&self.config))
        {
            self.skip_forward();
        }
    }

    fn enter_current(&mut self) -> Option<Action> {
        match self.steps.get_mut(self.cursor) {
            Some(step) => {
                debug!(step = step.title(), index = self.cursor, "entering step");
                step.initialize(&self.config)
            }
            None => {
                if !self.completed {
                    info!("wizard completed");
                }
                self.completed = true;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CreationMode, Operation};
    use ratatui::text::Line;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Skip = fn(&DbConfig) -> bool;
    type Log = Rc<RefCell<Vec<String>>>;

    /// Minimal step: Enter continues, Esc goes back, 'q' quits, 'p' prints,
    /// 't' toggles `create_as_container` in its draft.
    struct Probe {
        name: &'static str,
        skip: Skip,
        draft: bool,
        // 0 = outer, 1 = inner; Esc unwinds inner first.
        phase: u8,
        log: Log,
    }

    impl Probe {
        fn boxed(name: &'static str, skip: Skip, log: &Log) -> Box<dyn Step> {
            Box::new(Probe {
                name,
                skip,
                draft: false,
                phase: 0,
                log: Rc::clone(log),
            })
        }
    }

    impl Step for Probe {
        fn title(&self) -> &'static str {
            self.name
        }

        fn initialize(&mut self, config: &DbConfig) -> Option<Action> {
            self.draft = config.create_as_container;
            self.phase = 0;
            self.log.borrow_mut().push(format!("init {}", self.name));
            Some(Action::Blink)
        }

        fn handle_key(&mut self, key: Key) -> (Transition, Option<Action>) {
            match key {
                Key::Enter => (Transition::Continue, None),
                Key::Esc if self.phase > 0 => {
                    self.phase -= 1;
                    (Transition::Stay, None)
                }
                Key::Esc => (Transition::Back, None),
                Key::Tab => {
                    self.phase = 1;
                    (Transition::Stay, None)
                }
                Key::Char('t') => {
                    self.draft = !self.draft;
                    (Transition::Stay, None)
                }
                Key::Char('q') => (Transition::Quit, None),
                Key::Char('p') => (Transition::PrintAndQuit, None),
                _ => (Transition::Stay, None),
            }
        }

        fn render(&self, _ctx: &ViewContext) -> Text<'static> {
            Text::from(Line::from(format!(
                "{} draft={} phase={}",
                self.name, self.draft, self.phase
            )))
        }

        fn apply(&self, config: &mut DbConfig) {
            self.log.borrow_mut().push(format!("apply {}", self.name));
            config.create_as_container = self.draft;
        }

        fn should_skip(&self, config: &DbConfig) -> bool {
            (self.skip)(config)
        }
    }

    fn never(_: &DbConfig) -> bool {
        false
    }

    fn always(_: &DbConfig) -> bool {
        true
    }

    fn typical(config: &DbConfig) -> bool {
        config.creation_mode == CreationMode::Typical
    }

    fn not_container(config: &DbConfig) -> bool {
        !config.create_as_container
    }

    fn wizard(skips: &[Skip]) -> (Wizard, Log) {
        const NAMES: [&str; 6] = ["s1", "s2", "s3", "s4", "s5", "s6"];
        let log: Log = Rc::default();
        let steps = skips
            .iter()
            .zip(NAMES)
            .map(|(skip, name)| Probe::boxed(name, *skip, &log))
            .collect();
        (Wizard::new(steps, DbConfig::default()), log)
    }

    fn title(w: &Wizard) -> Option<&'static str> {
        w.current_step().map(|s| s.title())
    }

    #[test]
    fn typical_mode_skips_step_two_in_both_directions() {
        let (mut w, _) = wizard(&[never, typical, never, never, never]);
        w.start();
        assert_eq!(title(&w), Some("s1"));

        w.dispatch(Key::Enter);
        assert_eq!(title(&w), Some("s3"));

        w.dispatch(Key::Esc);
        assert_eq!(title(&w), Some("s1"));
    }

    #[test]
    fn apply_runs_before_next_skip_check() {
        let (mut w, _) = wizard(&[never, not_container, never]);
        w.start();
        // Draft starts true (default), toggle it off and continue.
        w.dispatch(Key::Char('t'));
        w.dispatch(Key::Enter);
        assert!(!w.config().create_as_container);
        assert_eq!(title(&w), Some("s3"));
    }

    #[test]
    fn back_discards_draft_and_leaves_config_untouched() {
        let (mut w, log) = wizard(&[never, never]);
        w.start();
        w.dispatch(Key::Enter);
        let snapshot = w.config().clone();

        w.dispatch(Key::Char('t'));
        w.dispatch(Key::Esc);

        assert_eq!(w.config(), &snapshot);
        assert_eq!(title(&w), Some("s1"));
        assert_eq!(
            log.borrow().iter().filter(|l| l.starts_with("apply")).count(),
            1
        );
    }

    #[test]
    fn toggled_value_is_merged_not_entry_value() {
        let (mut w, _) = wizard(&[never]);
        w.start();
        w.dispatch(Key::Char('t'));
        w.dispatch(Key::Char('t'));
        w.dispatch(Key::Char('t'));
        w.dispatch(Key::Enter);
        assert!(!w.config().create_as_container);
        assert!(w.is_completed());
    }

    #[test]
    fn inner_phase_unwinds_before_back() {
        let (mut w, _) = wizard(&[never, never]);
        w.start();
        w.dispatch(Key::Enter);
        w.dispatch(Key::Tab);

        w.dispatch(Key::Esc);
        assert_eq!(title(&w), Some("s2"));
        w.dispatch(Key::Esc);
        assert_eq!(title(&w), Some("s1"));
    }

    #[test]
    fn back_from_first_visible_step_stays_put() {
        let (mut w, _) = wizard(&[always, always, never, never]);
        w.start();
        assert_eq!(title(&w), Some("s3"));
        for _ in 0..4 {
            w.dispatch(Key::Esc);
            assert_eq!(title(&w), Some("s3"));
        }
        assert!(!w.is_completed());
        assert!(!w.is_quitting());
    }

    #[test]
    fn back_from_step_zero_reinitializes_it() {
        let (mut w, log) = wizard(&[never, never]);
        w.start();
        w.dispatch(Key::Esc);
        assert_eq!(title(&w), Some("s1"));
        assert_eq!(log.borrow().as_slice(), ["init s1", "init s1"]);
    }

    #[test]
    fn completes_when_remaining_steps_are_hidden() {
        let (mut w, _) = wizard(&[never, never, always, always]);
        w.start();
        w.dispatch(Key::Enter);
        assert!(!w.is_completed());
        w.dispatch(Key::Enter);
        assert!(w.is_completed());
        assert!(w.current_step().is_none());

        // Further input is ignored once past the end.
        assert!(w.dispatch(Key::Enter).is_empty());
    }

    #[test]
    fn empty_or_fully_hidden_wizard_completes_on_start() {
        let (mut w, _) = wizard(&[]);
        assert_eq!(w.start(), None);
        assert!(w.is_completed());

        let (mut w, log) = wizard(&[always, always]);
        w.start();
        assert!(w.is_completed());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn quit_and_print_flags() {
        let (mut w, _) = wizard(&[never, never]);
        w.start();
        w.dispatch(Key::Char('q'));
        assert!(w.is_quitting());
        assert!(!w.should_print());
        // No more dispatching after quitting.
        w.dispatch(Key::Enter);
        assert_eq!(title(&w), Some("s1"));

        let (mut w, _) = wizard(&[never]);
        w.start();
        w.dispatch(Key::Char('p'));
        assert!(w.is_quitting());
        assert!(w.should_print());
        assert!(!w.is_completed());
    }

    #[test]
    fn reinitializing_twice_renders_the_same() {
        let theme = crate::ui::Theme::plain();
        let ctx = ViewContext::new(&theme);
        let log: Log = Rc::default();
        let mut step = Probe::boxed("s1", never, &log);
        let config = DbConfig::default();

        step.initialize(&config);
        let first = step.render(&ctx);
        step.initialize(&config);
        assert_eq!(step.render(&ctx), first);
    }

    #[test]
    fn forward_and_backward_skips_agree() {
        // Every combination of hidden middle steps over a 5 step list.
        let choices: [Skip; 2] = [never, always];
        for mask in 0..8u8 {
            let skips = [
                never,
                choices[(mask & 1) as usize],
                choices[((mask >> 1) & 1) as usize],
                choices[((mask >> 2) & 1) as usize],
                never,
            ];
            let (mut w, _) = wizard(&skips);
            w.start();
            let mut visited = vec![w.cursor];
            while !w.is_completed() {
                w.dispatch(Key::Enter);
                if !w.is_completed() {
                    visited.push(w.cursor);
                }
            }

            let (mut w, _) = wizard(&skips);
            w.start();
            for _ in 1..visited.len() {
                w.dispatch(Key::Enter);
            }
            let mut back = vec![w.cursor];
            while w.cursor > 0 {
                w.dispatch(Key::Esc);
                back.push(w.cursor);
            }
            back.reverse();
            assert_eq!(visited, back, "mask {mask:03b}");
        }
    }

    #[test]
    fn actions_from_step_and_init_are_returned() {
        let (mut w, _) = wizard(&[never, never]);
        assert_eq!(w.start(), Some(Action::Blink));
        assert_eq!(w.dispatch(Key::Enter), vec![Action::Blink]);
        assert!(w.dispatch(Key::Char('x')).is_empty());
    }

    #[test]
    fn progress_counts_visible_steps() {
        let (mut w, _) = wizard(&[never, typical, never]);
        w.start();
        assert_eq!(w.progress(), (1, 2));
        w.dispatch(Key::Enter);
        assert_eq!(w.progress(), (2, 2));
        assert_eq!(w.config().operation, Operation::Create);
    }

    #[test]
    fn outline_lists_visible_steps_and_marks_cursor() {
        let (mut w, _) = wizard(&[never, typical, never]);
        w.start();
        assert_eq!(w.outline(), [("s1", true), ("s3", false)]);
        w.dispatch(Key::Enter);
        assert_eq!(w.outline(), [("s1", false), ("s3", true)]);
    }
}

use ratatui::text::{Line, Text};

use crate::model::{CreationMode, DatabaseTemplate, DbConfig, Operation};
use crate::ui::{self, Key, SelectItem, SelectList, ViewContext};
use crate::wizard::{Action, Step, Transition};

/// A step that is a single list: pick one value and move on.
pub struct ChoiceStep<T> {
    title: &'static str,
    prompt: &'static str,
    list: SelectList<T>,
    /// What Esc means here; the first step quits instead of going back.
    on_escape: Transition,
    read: fn(&DbConfig) -> T,
    write: fn(&mut DbConfig, T),
    skip: fn(&DbConfig) -> bool,
}

impl ChoiceStep<Operation> {
    pub fn operation() -> Self {
        Self {
            title: "Select Operation",
            prompt: "What would you like to do?",
            list: SelectList::new(vec![
                SelectItem::new(
                    "Create a Database",
                    "Create a new Oracle database with the DBCA wizard",
                    Operation::Create,
                ),
                SelectItem::new(
                    "Delete a Database",
                    "Generate command to delete an existing Oracle database",
                    Operation::Delete,
                ),
            ]),
            on_escape: Transition::Quit,
            read: |c| c.operation,
            write: |c, v| {
                c.operation = v;
                if v == Operation::Create {
                    c.reset_delete_answers();
                }
            },
            skip: |_| false,
        }
    }
}

impl ChoiceStep<CreationMode> {
    pub fn creation_mode() -> Self {
        Self {
            title: "Database Creation Mode",
            prompt: "Select the database creation mode:",
            list: SelectList::new(vec![
                SelectItem::new(
                    "Typical Configuration",
                    "Create a database with minimal configuration using best practice defaults",
                    CreationMode::Typical,
                ),
                SelectItem::new(
                    "Advanced Configuration",
                    "Create a database with full control over all configuration options",
                    CreationMode::Advanced,
                ),
            ]),
            on_escape: Transition::Back,
            read: |c| c.creation_mode,
            write: |c, v| {
                c.creation_mode = v;
                if v == CreationMode::Typical {
                    c.reset_advanced_answers();
                }
            },
            skip: |c| !c.is_create(),
        }
    }
}

impl ChoiceStep<DatabaseTemplate> {
    pub fn template() -> Self {
        Self {
            title: "Database Template",
            prompt: "Select a database template:",
            list: SelectList::new(vec![
                SelectItem::new(
                    "General Purpose / Transaction Processing",
                    "A pre-configured database template optimized for general purpose or OLTP workloads",
                    DatabaseTemplate::GeneralPurpose,
                ),
                SelectItem::new(
                    "Data Warehouse",
                    "A pre-configured database template optimized for data warehousing workloads",
                    DatabaseTemplate::DataWarehouse,
                ),
                SelectItem::new(
                    "Custom Database",
                    "Create a database with custom configuration (no template)",
                    DatabaseTemplate::Custom,
                ),
            ]),
            on_escape: Transition::Back,
            read: |c| c.template,
            write: |c, v| {
                c.template = v;
                c.database_type = v.database_type();
            },
            skip: |c| !c.is_create(),
        }
    }
}

impl<T: Copy + PartialEq> Step for ChoiceStep<T> {
    fn title(&self) -> &'static str {
        self.title
    }

    fn initialize(&mut self, config: &DbConfig) -> Option<Action> {
        self.list.reset();
        self.list.focus_value(&(self.read)(config));
        None
    }

    fn handle_key(&mut self, key: Key) -> (Transition, Option<Action>) {
        match key {
            Key::Esc => (self.on_escape, None),
            Key::Char('q') if self.on_escape == Transition::Quit => (Transition::Quit, None),
            _ if self.list.handle_key(key) => (Transition::Continue, None),
            _ => (Transition::Stay, None),
        }
    }

    fn render(&self, ctx: &ViewContext) -> Text<'static> {
        let mut lines = vec![ui::subtitle(ctx, self.prompt), Line::default()];
        lines.extend(self.list.render(ctx));
        Text::from(lines)
    }

    fn apply(&self, config: &mut DbConfig) {
        if let Some(value) = self.list.selected_value() {
            (self.write)(config, value);
        }
    }

    fn should_skip(&self, config: &DbConfig) -> bool {
        (self.skip)(config)
    }
}

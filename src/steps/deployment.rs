use ratatui::text::{Line, Text};

use crate::model::{DbConfig, DeploymentType};
use crate::ui::{self, Key, SelectItem, SelectList, TextInput, ViewContext};
use crate::wizard::{Action, Step, Transition};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Type,
    /// Cluster node list, RAC flavours only.
    Nodes,
}

pub struct DeploymentStep {
    list: SelectList<DeploymentType>,
    nodes: TextInput,
    phase: Phase,
    err: Option<String>,
}

impl DeploymentStep {
    pub fn new() -> Self {
        Self {
            list: SelectList::new(vec![
                SelectItem::new(
                    "Oracle Single Instance Database",
                    "A single database instance running on one server",
                    DeploymentType::SingleInstance,
                ),
                SelectItem::new(
                    "Oracle RAC Database",
                    "A clustered database with multiple instances across multiple nodes",
                    DeploymentType::Rac,
                ),
                SelectItem::new(
                    "Oracle RAC One Node Database",
                    "A single instance on one node with failover capability to other cluster nodes",
                    DeploymentType::RacOneNode,
                ),
            ]),
            nodes: TextInput::new("node1,node2", 256),
            phase: Phase::Type,
            err: None,
        }
    }

    fn selected(&self) -> DeploymentType {
        self.list.selected_value().unwrap_or_default()
    }

    fn validate(&mut self) -> bool {
        self.err = None;
        let nodes = normalize_nodes(self.nodes.value());

        if self.selected() == DeploymentType::Rac && nodes.is_empty() {
            self.err = Some("At least one cluster node is required for RAC".into());
            return false;
        }
        if nodes.split(',').any(|n| n.contains(char::is_whitespace)) {
            self.err = Some("Node names cannot contain spaces".into());
            return false;
        }
        true
    }
}

/// "a, b,,c " -> "a,b,c"
fn normalize_nodes(raw: &str) -> String {
    raw.split(',')
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .collect::<Vec<_>>()
        .join(",")
}

impl Default for DeploymentStep {
    fn default() -> Self {
        Self::new()
    }
}

impl Step for DeploymentStep {
    fn title(&self) -> &'static str {
        "Deployment Type"
    }

    fn initialize(&mut self, config: &DbConfig) -> Option<Action> {
        self.phase = Phase::Type;
        self.err = None;
        self.list.reset();
        self.list.focus_value(&config.deployment_type);
        self.nodes.set_value(config.node_list.as_str());
        self.nodes.blur();
        None
    }

    fn handle_key(&mut self, key: Key) -> (Transition, Option<Action>) {
        match self.phase {
            Phase::Type => match key {
                Key::Esc => (Transition::Back, None),
                _ if self.list.handle_key(key) => {
                    if self.selected() == DeploymentType::SingleInstance {
                        return (Transition::Continue, None);
                    }
                    self.phase = Phase::Nodes;
                    self.nodes.focus();
                    (Transition::Stay, Some(Action::Blink))
                }
                _ => (Transition::Stay, None),
            },
            Phase::Nodes => match key {
                Key::Esc => {
                    self.phase = Phase::Type;
                    self.err = None;
                    self.nodes.blur();
                    self.list.reset();
                    (Transition::Stay, None)
                }
                Key::Enter if self.validate() => (Transition::Continue, None),
                Key::Enter => (Transition::Stay, None),
                _ => {
                    self.nodes.handle_key(key);
                    (Transition::Stay, None)
                }
            },
        }
    }

    fn render(&self, ctx: &ViewContext) -> Text<'static> {
        let mut lines = Vec::new();
        match self.phase {
            Phase::Type => {
                lines.push(ui::subtitle(ctx, "Select the database deployment type:"));
                lines.push(Line::default());
                lines.extend(self.list.render(ctx));
            }
            Phase::Nodes => {
                let title = self.list.selected_item().map_or("", |item| item.title);
                lines.push(ui::subtitle(ctx, title));
                lines.push(Line::default());
                lines.extend(ui::field(ctx, "Cluster Nodes (comma-separated)", &self.nodes));
                if self.selected() == DeploymentType::RacOneNode {
                    lines.push(ui::hint(ctx, "Optional for RAC One Node"));
                }
                lines.extend(ui::footer(
                    ctx,
                    self.err.as_deref(),
                    "Press Enter to continue, Esc to go back",
                ));
            }
        }
        Text::from(lines)
    }

    fn apply(&self, config: &mut DbConfig) {
        config.deployment_type = self.selected();
        config.node_list = match config.deployment_type {
            DeploymentType::SingleInstance => String::new(),
            _ => normalize_nodes(self.nodes.value()),
        };
    }

    fn should_skip(&self, config: &DbConfig) -> bool {
        !config.is_create()
    }
}

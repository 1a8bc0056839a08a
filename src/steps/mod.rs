//! The DBCA question groups, in the order the wizard walks them.

mod choice;
mod credentials;
mod datavault;
mod delete;
mod deployment;
mod identification;
mod management;
mod network;
mod options;
mod recovery;
mod review;
mod storage;

pub use choice::ChoiceStep;
pub use credentials::CredentialsStep;
pub use datavault::DataVaultStep;
pub use delete::DeleteStep;
pub use deployment::DeploymentStep;
pub use identification::IdentificationStep;
pub use management::ManagementStep;
pub use network::NetworkStep;
pub use options::OptionsStep;
pub use recovery::RecoveryStep;
pub use review::ReviewStep;
pub use storage::StorageStep;

use crate::wizard::Step;

/// The full DBCA step list.
pub fn dbca_steps() -> Vec<Box<dyn Step>> {
    vec![
        Box::new(ChoiceStep::operation()),
        Box::new(ChoiceStep::creation_mode()),
        Box::new(DeploymentStep::new()),
        Box::new(ChoiceStep::template()),
        Box::new(IdentificationStep::new()),
        Box::new(StorageStep::new()),
        Box::new(RecoveryStep::new()),
        Box::new(NetworkStep::new()),
        Box::new(DataVaultStep::new()),
        Box::new(OptionsStep::new()),
        Box::new(ManagementStep::new()),
        Box::new(CredentialsStep::new()),
        Box::new(DeleteStep::new()),
        Box::new(ReviewStep::new()),
    ]
}

/// Next (or previous) entry of `order` after `current`, wrapping around.
/// Falls back to the first entry when `current` is no longer in the order.
fn cycle<F: Copy + PartialEq>(order: &[F], current: F, forward: bool) -> F {
    let Some(pos) = order.iter().position(|f| *f == current) else {
        return order[0];
    };
    let len = order.len();
    let next = if forward {
        (pos + 1) % len
    } else {
        (pos + len - 1) % len
    };
    order[next]
}

/// Parse a whole number field, `None` if blank or not a number.
fn parse_number<T: std::str::FromStr>(text: &str) -> Option<T> {
    text.trim().parse().ok()
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{self, Secrets};
    use crate::model::{CreationMode, DbConfig, EmConfiguration, Operation};
    use crate::ui::Key;
    use crate::wizard::{Step, Wizard};

    fn title(wizard: &Wizard) -> Option<&'static str> {
        wizard.current_step().map(|s| s.title())
    }

    fn type_keys(wizard: &mut Wizard, text: &str) {
        for c in text.chars() {
            wizard.dispatch(Key::Char(c));
        }
    }

    fn back_to(wizard: &mut Wizard, target: &str) {
        for _ in 0..20 {
            if title(wizard) == Some(target) {
                return;
            }
            wizard.dispatch(Key::Esc);
        }
        panic!("never reached {target}");
    }

    fn visible_titles(config: &DbConfig) -> Vec<&'static str> {
        dbca_steps()
            .iter()
            .filter(|step| !step.should_skip(config))
            .map(|step| step.title())
            .collect()
    }

    #[test]
    fn cycle_wraps_both_ways() {
        let order = [1, 2, 3];
        assert_eq!(cycle(&order, 3, true), 1);
        assert_eq!(cycle(&order, 1, false), 3);
        assert_eq!(cycle(&order, 7, true), 1);
    }

    #[test]
    fn typical_create_path() {
        let config = DbConfig::default();
        assert_eq!(
            visible_titles(&config),
            [
                "Select Operation",
                "Database Creation Mode",
                "Deployment Type",
                "Database Template",
                "Database Identification",
                "Storage Configuration",
                "Recovery & Archive Log",
                "Configuration Options",
                "Database Credentials",
                "Review",
            ]
        );
    }

    #[test]
    fn advanced_create_path_adds_network_vault_and_management() {
        let config = DbConfig {
            creation_mode: CreationMode::Advanced,
            ..DbConfig::default()
        };
        let titles = visible_titles(&config);
        assert_eq!(titles.len(), 13);
        assert!(titles.contains(&"Network Configuration"));
        assert!(titles.contains(&"Data Vault Configuration"));
        assert!(titles.contains(&"Management Options"));
        assert!(!titles.contains(&"Delete Database"));
    }

    #[test]
    fn delete_path_is_short() {
        let config = DbConfig {
            operation: Operation::Delete,
            ..DbConfig::default()
        };
        assert_eq!(
            visible_titles(&config),
            ["Select Operation", "Delete Database", "Review"]
        );
    }

    #[test]
    fn choosing_delete_jumps_straight_to_delete_step() {
        let mut wizard = Wizard::new(dbca_steps(), DbConfig::default());
        wizard.start();
        wizard.dispatch(Key::Down);
        wizard.dispatch(Key::Enter);
        assert_eq!(wizard.config().operation, Operation::Delete);
        assert_eq!(wizard.current_step().map(|s| s.title()), Some("Delete Database"));
        assert_eq!(wizard.progress(), (2, 3));

        // Back skips every create-only step.
        wizard.dispatch(Key::Esc);
        assert_eq!(wizard.current_step().map(|s| s.title()), Some("Select Operation"));
    }

    #[test]
    fn typical_run_with_defaults_completes() {
        let mut wizard = Wizard::new(dbca_steps(), DbConfig::default());
        wizard.start();

        // Operation, creation mode, deployment (SI), template.
        for _ in 0..4 {
            wizard.dispatch(Key::Enter);
        }
        // Identification with defaults.
        wizard.dispatch(Key::Enter);
        // Storage: pick FS, then confirm paths.
        wizard.dispatch(Key::Enter);
        wizard.dispatch(Key::Enter);
        // Recovery with defaults.
        wizard.dispatch(Key::Enter);
        // Options: memory mode, size, character set.
        wizard.dispatch(Key::Enter);
        wizard.dispatch(Key::Enter);
        wizard.dispatch(Key::Enter);
        assert_eq!(
            wizard.current_step().map(|s| s.title()),
            Some("Database Credentials")
        );

        // Focus the common password field and type one.
        wizard.dispatch(Key::Tab);
        for c in "Welcome123".chars() {
            wizard.dispatch(Key::Char(c));
        }
        wizard.dispatch(Key::Enter);
        assert_eq!(wizard.current_step().map(|s| s.title()), Some("Review"));

        wizard.dispatch(Key::Enter);
        assert!(wizard.is_completed());
        let config = wizard.config();
        assert_eq!(config.sys_password, "Welcome123");
        assert_eq!(config.pdb_admin_password, "Welcome123");
        assert_eq!(config.redo_log_destination, "/u01/app/oracle/oradata");
    }

    #[test]
    fn switching_to_typical_drops_advanced_answers() {
        let mut wizard = Wizard::new(dbca_steps(), DbConfig::default());
        wizard.start();

        // Create, advanced, SI, template, identification.
        wizard.dispatch(Key::Enter);
        wizard.dispatch(Key::Down);
        wizard.dispatch(Key::Enter);
        for _ in 0..3 {
            wizard.dispatch(Key::Enter);
        }
        // Storage (two phases), recovery, network.
        for _ in 0..4 {
            wizard.dispatch(Key::Enter);
        }
        assert_eq!(title(&wizard), Some("Data Vault Configuration"));
        wizard.dispatch(Key::Char('d'));
        type_keys(&mut wizard, "DVO");
        wizard.dispatch(Key::Tab);
        type_keys(&mut wizard, "DVA");
        wizard.dispatch(Key::Enter);

        // Options: memory, size, charset, connection.
        for _ in 0..4 {
            wizard.dispatch(Key::Enter);
        }
        assert_eq!(title(&wizard), Some("Management Options"));
        wizard.dispatch(Key::Down);
        wizard.dispatch(Key::Enter);
        wizard.dispatch(Key::Enter);
        assert_eq!(title(&wizard), Some("Database Credentials"));
        assert!(wizard.config().enable_data_vault);
        assert_eq!(wizard.config().em_configuration, EmConfiguration::DbExpress);

        back_to(&mut wizard, "Database Creation Mode");
        wizard.dispatch(Key::Up);
        wizard.dispatch(Key::Enter);
        assert!(!wizard.config().is_advanced());

        // Deployment, template, identification, storage x2, recovery, options x3.
        for _ in 0..9 {
            wizard.dispatch(Key::Enter);
        }
        assert_eq!(title(&wizard), Some("Database Credentials"));
        wizard.dispatch(Key::Tab);
        type_keys(&mut wizard, "Welcome123");
        wizard.dispatch(Key::Enter);
        wizard.dispatch(Key::Enter);
        assert!(wizard.is_completed());

        let config = wizard.config();
        assert!(!config.enable_data_vault);
        assert!(config.data_vault_owner.is_empty());
        assert_eq!(config.em_configuration, EmConfiguration::None);

        let command = generator::command(config, Secrets::Masked);
        assert!(!command.contains("-enableDV"));
        assert!(!command.contains("-dvOwnerName"));
        assert!(!command.contains("-dbExpressPort"));
        assert!(command.contains("-emConfiguration NONE"));
        assert!(!generator::summary(config).contains("Data Vault"));
    }

    #[test]
    fn switching_to_delete_prints_only_the_delete_command() {
        let mut wizard = Wizard::new(dbca_steps(), DbConfig::default());
        wizard.start();

        // Create, typical, then change our mind.
        wizard.dispatch(Key::Enter);
        wizard.dispatch(Key::Enter);
        assert_eq!(title(&wizard), Some("Deployment Type"));
        back_to(&mut wizard, "Select Operation");
        wizard.dispatch(Key::Down);
        wizard.dispatch(Key::Enter);
        assert_eq!(title(&wizard), Some("Delete Database"));

        type_keys(&mut wizard, "olddb");
        wizard.dispatch(Key::Tab);
        type_keys(&mut wizard, "secret123");
        wizard.dispatch(Key::Enter);
        assert_eq!(title(&wizard), Some("Review"));
        wizard.dispatch(Key::Enter);
        assert!(wizard.is_completed());

        let config = wizard.config();
        let summary = generator::summary(config);
        assert!(summary.starts_with("Database Deletion Summary"));
        assert!(!summary.contains("Creation Mode"));

        let command = generator::command(config, Secrets::Masked);
        assert!(command.starts_with("dbca \\\n  -silent \\\n  -deleteDatabase"));
        assert!(command.contains("-sourceDB olddb"));
        assert!(!command.contains("-createDatabase"));
        assert!(!command.contains("-gdbname"));
    }

    #[test]
    fn returning_to_create_clears_delete_answers() {
        let mut config = DbConfig {
            operation: Operation::Delete,
            delete_sid: "olddb".into(),
            delete_force: true,
            ..DbConfig::default()
        };
        let mut step = ChoiceStep::operation();
        step.initialize(&config);
        step.handle_key(Key::Up);
        step.handle_key(Key::Enter);
        step.apply(&mut config);
        assert!(config.is_create());
        assert!(config.delete_sid.is_empty());
        assert!(!config.delete_force);
    }
}

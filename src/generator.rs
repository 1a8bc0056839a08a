//! Turns a finished [`DbConfig`] into a `dbca -silent` command line and a
//! human-readable summary.

use crate::model::{
    DatabaseTemplate, DbConfig, DeploymentType, EmConfiguration, MemoryManagement, StorageType,
};

/// Printed in place of every password unless secrets are revealed.
pub const PASSWORD_MASK: &str = "<PASSWORD>";

const ARG_SEPARATOR: &str = " \\\n  ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Secrets {
    Masked,
    Revealed,
}

impl Secrets {
    fn show<'a>(&self, password: &'a str) -> &'a str {
        match self {
            Secrets::Masked => PASSWORD_MASK,
            Secrets::Revealed => password,
        }
    }
}

/// The DBCA invocation for `config`, one flag per continuation line.
pub fn command(config: &DbConfig, secrets: Secrets) -> String {
    let args = if config.is_create() {
        create_args(config, secrets)
    } else {
        delete_args(config, secrets)
    };
    args.join(ARG_SEPARATOR)
}

fn create_args(config: &DbConfig, secrets: Secrets) -> Vec<String> {
    let mut args: Vec<String> = vec!["dbca".into(), "-silent".into(), "-createDatabase".into()];

    if config.template != DatabaseTemplate::Custom {
        args.push(format!("-templateName {}", config.template.as_str()));
    }

    args.push(format!("-gdbname {}", config.global_db_name));
    args.push(format!("-sid {}", config.sid));

    if config.create_as_container {
        args.push("-createAsContainerDatabase true".into());
        if config.number_of_pdbs > 0 {
            args.push(format!("-numberOfPDBs {}", config.number_of_pdbs));
            args.push(format!("-pdbName {}", config.pdb_name));
            args.push(format!(
                "-pdbAdminPassword '{}'",
                secrets.show(&config.pdb_admin_password)
            ));
        }
    } else {
        args.push("-createAsContainerDatabase false".into());
    }

    args.push(format!("-sysPassword '{}'", secrets.show(&config.sys_password)));
    args.push(format!(
        "-systemPassword '{}'",
        secrets.show(&config.system_password)
    ));

    args.push(format!("-characterSet {}", config.character_set));
    args.push(format!(
        "-nationalCharacterSet {}",
        config.national_character_set
    ));

    args.push(format!("-totalMemory {}", config.total_memory));
    // DBCA spells manual memory management CUSTOM.
    let memory_type = match config.memory_management {
        MemoryManagement::Manual => "CUSTOM",
        other => other.as_str(),
    };
    args.push(format!("-memoryMgmtType {memory_type}"));

    args.push(format!("-databaseType {}", config.database_type.as_str()));

    args.push(format!("-storageType {}", config.storage_type.as_str()));
    match config.storage_type {
        StorageType::Asm => args.push(format!("-diskGroupName {}", config.asm_disk_group)),
        StorageType::FileSystem => args.push(format!(
            "-datafileDestination '{}'",
            config.datafile_destination
        )),
    }

    if config.use_omf {
        args.push("-useOMF true".into());
    }

    if config.enable_fra {
        args.push(format!(
            "-recoveryAreaDestination '{}'",
            config.fra_destination
        ));
        args.push(format!("-recoveryAreaSize {}", config.fra_size));
    }

    if config.redo_log_file_size > 0 {
        args.push(format!("-redoLogFileSize {}", config.redo_log_file_size));
    }

    if !config.listener_name.is_empty() && config.listener_name != "LISTENER" {
        args.push(format!("-listeners {}", config.listener_name));
    }

    args.push(format!(
        "-emConfiguration {}",
        config.em_configuration.as_str()
    ));
    if config.em_configuration == EmConfiguration::DbExpress {
        args.push(format!("-dbExpressPort {}", config.em_port));
    }

    if config.enable_sample_schemas {
        args.push("-sampleSchema true".into());
    }

    if config.enable_archive_log {
        args.push("-archiveLogMode true".into());
    }

    if config.enable_data_vault {
        args.push("-enableDV true".into());
        args.push(format!("-dvOwnerName {}", config.data_vault_owner));
        args.push(format!(
            "-dvAccountManagerName {}",
            config.data_vault_account_manager
        ));
    }

    args.push(format!(
        "-databaseConfigType {}",
        config.deployment_type.as_str()
    ));
    if config.deployment_type == DeploymentType::Rac && !config.node_list.is_empty() {
        args.push(format!("-nodelist {}", config.node_list));
    }

    if !config.init_params.is_empty() {
        let params = config
            .init_params
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join(",");
        args.push(format!("-initParams {params}"));
    }

    if config.ignore_prereqs {
        args.push("-ignorePreReqs".into());
    }

    args
}

fn delete_args(config: &DbConfig, secrets: Secrets) -> Vec<String> {
    let mut args: Vec<String> = vec!["dbca".into(), "-silent".into(), "-deleteDatabase".into()];
    args.push(format!("-sourceDB {}", config.delete_sid));
    args.push("-sysDBAUserName sys".into());
    args.push(format!(
        "-sysDBAPassword '{}'",
        secrets.show(&config.sys_password)
    ));
    if config.delete_force {
        args.push("-forceArchiveLogDeletion".into());
    }
    args
}

/// Multi-line description of what the command will do.
pub fn summary(config: &DbConfig) -> String {
    let mut lines: Vec<String> = Vec::new();

    if !config.is_create() {
        lines.push("Database Deletion Summary".into());
        lines.push("=========================".into());
        lines.push(String::new());
        lines.push(format!("SID: {}", config.delete_sid));
        let force = if config.delete_force { "Yes" } else { "No" };
        lines.push(format!("Force Delete: {force}"));
        return lines.join("\n") + "\n";
    }

    lines.push("Database Configuration Summary".into());
    lines.push("==============================".into());
    lines.push(String::new());

    let mode = if config.is_advanced() { "Advanced" } else { "Typical" };
    lines.push(format!("Creation Mode: {mode}"));
    let deployment = match config.deployment_type {
        DeploymentType::SingleInstance => "Single Instance",
        DeploymentType::Rac => "RAC",
        DeploymentType::RacOneNode => "RAC One Node",
    };
    lines.push(format!("Deployment: {deployment}"));
    if !config.node_list.is_empty() {
        lines.push(format!("Cluster Nodes: {}", config.node_list));
    }
    lines.push(String::new());

    lines.push(format!("Global Database Name: {}", config.global_db_name));
    lines.push(format!("SID: {}", config.sid));
    if config.create_as_container {
        lines.push("Container Database: Yes".into());
        lines.push(format!("Number of PDBs: {}", config.number_of_pdbs));
        if config.number_of_pdbs > 0 {
            lines.push(format!("PDB Name: {}", config.pdb_name));
        }
    } else {
        lines.push("Container Database: No".into());
    }
    lines.push(String::new());

    match config.storage_type {
        StorageType::Asm => lines.push(format!("Storage Type: ASM ({})", config.asm_disk_group)),
        StorageType::FileSystem => {
            lines.push("Storage Type: File System".into());
            lines.push(format!("Data Files: {}", config.datafile_destination));
        }
    }
    if config.enable_fra {
        lines.push(format!(
            "Fast Recovery Area: {} ({} MB)",
            config.fra_destination, config.fra_size
        ));
    }
    let archive = if config.enable_archive_log {
        "ARCHIVELOG"
    } else {
        "NOARCHIVELOG"
    };
    lines.push(format!("Archive Log Mode: {archive}"));
    lines.push(String::new());

    lines.push(format!(
        "Memory: {} MB ({})",
        config.total_memory,
        config.memory_management.as_str()
    ));
    lines.push(format!("Character Set: {}", config.character_set));
    lines.push(format!("Connection Mode: {}", config.connection_mode.as_str()));
    if config.em_configuration != EmConfiguration::None {
        lines.push(format!(
            "Enterprise Manager: {}",
            config.em_configuration.as_str()
        ));
    }
    if config.enable_data_vault {
        lines.push(format!("Data Vault Owner: {}", config.data_vault_owner));
    }

    lines.join("\n") + "\n"
}

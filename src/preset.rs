//! YAML presets that seed the wizard's answers.
//!
//! A preset is a partial [`DbConfig`]: any key it leaves out keeps its
//! default. Values are checked with the rules the steps enforce on their own
//! fields. Passwords are the exception: a preset may leave them empty because
//! the credentials and delete steps always ask for them.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::model::{DbConfig, DeploymentType, EmConfiguration, StorageType};

#[derive(Debug, Error)]
pub enum PresetError {
    #[error("Failed to read preset {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse preset {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("Invalid preset value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

pub fn load_preset(path: &Path) -> Result<DbConfig, PresetError> {
    let content = fs::read_to_string(path).map_err(|source| PresetError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let config: DbConfig = serde_yaml::from_str(&content).map_err(|source| PresetError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    validate(&config)?;
    info!(path = %path.display(), "preset loaded");
    Ok(config)
}

fn invalid(field: &'static str, reason: impl Into<String>) -> PresetError {
    PresetError::Invalid {
        field,
        reason: reason.into(),
    }
}

pub fn validate(config: &DbConfig) -> Result<(), PresetError> {
    if config.global_db_name.trim().is_empty() {
        return Err(invalid("global_db_name", "must not be empty"));
    }
    let sid = config.sid.trim();
    if sid.is_empty() {
        return Err(invalid("sid", "must not be empty"));
    }
    if sid.chars().count() > 12 {
        return Err(invalid("sid", "must be 12 characters or less"));
    }
    if config.delete_sid.trim().chars().count() > 12 {
        return Err(invalid("delete_sid", "must be 12 characters or less"));
    }
    if config.number_of_pdbs > 252 {
        return Err(invalid("number_of_pdbs", "must be between 0 and 252"));
    }
    if config.create_as_container
        && config.number_of_pdbs > 0
        && config.pdb_name.trim().is_empty()
    {
        return Err(invalid("pdb_name", "is required when creating PDBs"));
    }
    if config.deployment_type == DeploymentType::Rac && config.node_list.trim().is_empty() {
        return Err(invalid("node_list", "is required for RAC"));
    }
    match config.storage_type {
        StorageType::FileSystem if config.datafile_destination.trim().is_empty() => {
            return Err(invalid("datafile_destination", "must not be empty"));
        }
        StorageType::Asm if config.asm_disk_group.trim().is_empty() => {
            return Err(invalid("asm_disk_group", "is required for ASM"));
        }
        _ => {}
    }
    if config.enable_fra && config.fra_destination.trim().is_empty() {
        return Err(invalid("fra_destination", "is required when FRA is enabled"));
    }
    if config.listener_name.trim().is_empty() {
        return Err(invalid("listener_name", "must not be empty"));
    }
    if config.enable_data_vault {
        if config.data_vault_owner.trim().is_empty() {
            return Err(invalid("data_vault_owner", "is required when Data Vault is enabled"));
        }
        if config.data_vault_account_manager.trim().is_empty() {
            return Err(invalid(
                "data_vault_account_manager",
                "is required when Data Vault is enabled",
            ));
        }
    }
    if config.em_configuration == EmConfiguration::Central
        && config.cloud_control_agent.trim().is_empty()
    {
        return Err(invalid("cloud_control_agent", "is required for Cloud Control"));
    }
    if config.listener_port == 0 {
        return Err(invalid("listener_port", "must be between 1 and 65535"));
    }
    if config.em_port == 0 {
        return Err(invalid("em_port", "must be between 1 and 65535"));
    }
    if config.enable_fra && config.fra_size < 1024 {
        return Err(invalid("fra_size", "must be at least 1024 MB"));
    }
    if config.total_memory < 256 {
        return Err(invalid("total_memory", "must be at least 256 MB"));
    }
    Ok(())
}

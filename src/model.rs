use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    #[default]
    #[serde(rename = "create")]
    Create,
    #[serde(rename = "delete")]
    Delete,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CreationMode {
    #[default]
    #[serde(rename = "typical")]
    Typical,
    #[serde(rename = "advanced")]
    Advanced,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeploymentType {
    #[default]
    #[serde(rename = "SI")]
    SingleInstance,
    #[serde(rename = "RAC")]
    Rac,
    #[serde(rename = "RACONENODE")]
    RacOneNode,
}

impl DeploymentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeploymentType::SingleInstance => "SI",
            DeploymentType::Rac => "RAC",
            DeploymentType::RacOneNode => "RACONENODE",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatabaseTemplate {
    #[default]
    #[serde(rename = "General_Purpose.dbt")]
    GeneralPurpose,
    #[serde(rename = "Data_Warehouse.dbt")]
    DataWarehouse,
    #[serde(rename = "Custom")]
    Custom,
}

impl DatabaseTemplate {
    pub fn as_str(&self) -> &'static str {
        match self {
            DatabaseTemplate::GeneralPurpose => "General_Purpose.dbt",
            DatabaseTemplate::DataWarehouse => "Data_Warehouse.dbt",
            DatabaseTemplate::Custom => "Custom",
        }
    }

    /// Workload type DBCA expects alongside this template.
    pub fn database_type(&self) -> DatabaseType {
        match self {
            DatabaseTemplate::DataWarehouse => DatabaseType::DataWarehouse,
            DatabaseTemplate::GeneralPurpose | DatabaseTemplate::Custom => {
                DatabaseType::Multipurpose
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatabaseType {
    #[default]
    #[serde(rename = "MULTIPURPOSE")]
    Multipurpose,
    #[serde(rename = "DATA_WAREHOUSING")]
    DataWarehouse,
    #[serde(rename = "OLTP")]
    Oltp,
}

impl DatabaseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DatabaseType::Multipurpose => "MULTIPURPOSE",
            DatabaseType::DataWarehouse => "DATA_WAREHOUSING",
            DatabaseType::Oltp => "OLTP",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StorageType {
    #[default]
    #[serde(rename = "FS")]
    FileSystem,
    #[serde(rename = "ASM")]
    Asm,
}

impl StorageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageType::FileSystem => "FS",
            StorageType::Asm => "ASM",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmConfiguration {
    #[default]
    #[serde(rename = "NONE")]
    None,
    #[serde(rename = "DBEXPRESS")]
    DbExpress,
    #[serde(rename = "CENTRAL")]
    Central,
}

impl EmConfiguration {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmConfiguration::None => "NONE",
            EmConfiguration::DbExpress => "DBEXPRESS",
            EmConfiguration::Central => "CENTRAL",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemoryManagement {
    #[default]
    #[serde(rename = "AUTO")]
    Auto,
    #[serde(rename = "AUTO_SGA")]
    AutoSga,
    #[serde(rename = "MANUAL")]
    Manual,
}

impl MemoryManagement {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemoryManagement::Auto => "AUTO",
            MemoryManagement::AutoSga => "AUTO_SGA",
            MemoryManagement::Manual => "MANUAL",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnectionMode {
    #[default]
    #[serde(rename = "DEDICATED")]
    Dedicated,
    #[serde(rename = "SHARED")]
    Shared,
}

impl ConnectionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectionMode::Dedicated => "DEDICATED",
            ConnectionMode::Shared => "SHARED",
        }
    }
}

/// Every answer the wizard collects.
///
/// Steps read it when they are initialized or asked whether to skip, and
/// write it only from `Step::apply`. Fields a skipped step would have set
/// keep the values below (or whatever a preset file provided).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DbConfig {
    pub operation: Operation,
    pub creation_mode: CreationMode,

    pub deployment_type: DeploymentType,
    /// Comma-separated cluster nodes, RAC only.
    pub node_list: String,

    pub template: DatabaseTemplate,
    pub database_type: DatabaseType,

    pub global_db_name: String,
    pub sid: String,
    pub create_as_container: bool,
    pub number_of_pdbs: u32,
    pub pdb_name: String,
    pub pdb_prefix: String,

    pub storage_type: StorageType,
    pub datafile_destination: String,
    pub redo_log_destination: String,
    pub asm_disk_group: String,
    pub use_omf: bool,

    pub enable_fra: bool,
    pub fra_destination: String,
    /// MB
    pub fra_size: u32,
    pub enable_archive_log: bool,

    pub listener_name: String,
    pub listener_port: u16,
    pub create_new_listener: bool,

    pub enable_data_vault: bool,
    pub data_vault_owner: String,
    pub data_vault_account_manager: String,

    pub memory_management: MemoryManagement,
    /// MB
    pub total_memory: u32,
    pub sga_size: u32,
    pub pga_size: u32,
    pub character_set: String,
    pub national_character_set: String,
    pub connection_mode: ConnectionMode,
    pub enable_sample_schemas: bool,

    pub em_configuration: EmConfiguration,
    pub em_port: u16,
    pub cloud_control_agent: String,

    pub use_common_password: bool,
    pub common_password: String,
    pub sys_password: String,
    pub system_password: String,
    pub pdb_admin_password: String,

    /// MB
    pub redo_log_file_size: u32,
    pub ignore_prereqs: bool,
    pub init_params: BTreeMap<String, String>,

    pub delete_sid: String,
    pub delete_force: bool,
    pub delete_express: bool,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            operation: Operation::Create,
            creation_mode: CreationMode::Typical,
            deployment_type: DeploymentType::SingleInstance,
            node_list: String::new(),
            template: DatabaseTemplate::GeneralPurpose,
            database_type: DatabaseType::Multipurpose,
            global_db_name: "orcl".into(),
            sid: "orcl".into(),
            create_as_container: true,
            number_of_pdbs: 1,
            pdb_name: "orclpdb".into(),
            pdb_prefix: String::new(),
            storage_type: StorageType::FileSystem,
            datafile_destination: "/u01/app/oracle/oradata".into(),
            redo_log_destination: String::new(),
            asm_disk_group: String::new(),
            use_omf: true,
            enable_fra: true,
            fra_destination: "/u01/app/oracle/fast_recovery_area".into(),
            fra_size: 10240,
            enable_archive_log: false,
            listener_name: "LISTENER".into(),
            listener_port: 1521,
            create_new_listener: false,
            enable_data_vault: false,
            data_vault_owner: String::new(),
            data_vault_account_manager: String::new(),
            memory_management: MemoryManagement::Auto,
            total_memory: 2048,
            sga_size: 0,
            pga_size: 0,
            character_set: "AL32UTF8".into(),
            national_character_set: "AL16UTF16".into(),
            connection_mode: ConnectionMode::Dedicated,
            enable_sample_schemas: false,
            em_configuration: EmConfiguration::None,
            em_port: 5500,
            cloud_control_agent: String::new(),
            use_common_password: true,
            common_password: String::new(),
            sys_password: String::new(),
            system_password: String::new(),
            pdb_admin_password: String::new(),
            redo_log_file_size: 50,
            ignore_prereqs: false,
            init_params: BTreeMap::new(),
            delete_sid: String::new(),
            delete_force: false,
            delete_express: false,
        }
    }
}

impl DbConfig {
    pub fn is_create(&self) -> bool {
        self.operation == Operation::Create
    }

    pub fn is_advanced(&self) -> bool {
        self.creation_mode == CreationMode::Advanced
    }

    /// Put the answers only advanced mode asks for back to their defaults.
    pub fn reset_advanced_answers(&mut self) {
        let defaults = DbConfig::default();

        self.listener_name = defaults.listener_name;
        self.listener_port = defaults.listener_port;
        self.create_new_listener = defaults.create_new_listener;

        self.enable_data_vault = defaults.enable_data_vault;
        self.data_vault_owner = defaults.data_vault_owner;
        self.data_vault_account_manager = defaults.data_vault_account_manager;

        self.connection_mode = defaults.connection_mode;
        self.enable_sample_schemas = defaults.enable_sample_schemas;

        self.em_configuration = defaults.em_configuration;
        self.em_port = defaults.em_port;
        self.cloud_control_agent = defaults.cloud_control_agent;
    }

    /// Put the delete-only answers back to their defaults.
    pub fn reset_delete_answers(&mut self) {
        let defaults = DbConfig::default();
        self.delete_sid = defaults.delete_sid;
        self.delete_force = defaults.delete_force;
        self.delete_express = defaults.delete_express;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_a_typical_single_instance_cdb() {
        let config = DbConfig::default();
        assert!(config.is_create());
        assert!(!config.is_advanced());
        assert_eq!(config.deployment_type, DeploymentType::SingleInstance);
        assert!(config.create_as_container);
        assert_eq!(config.number_of_pdbs, 1);
        assert_eq!(config.listener_port, 1521);
        assert_eq!(config.fra_size, 10240);
        assert!(config.init_params.is_empty());
    }

    #[test]
    fn template_implies_database_type() {
        assert_eq!(
            DatabaseTemplate::DataWarehouse.database_type(),
            DatabaseType::DataWarehouse
        );
        assert_eq!(
            DatabaseTemplate::Custom.database_type(),
            DatabaseType::Multipurpose
        );
    }

    #[test]
    fn advanced_reset_leaves_typical_answers_alone() {
        let mut config = DbConfig {
            creation_mode: CreationMode::Advanced,
            sid: "prod".into(),
            listener_name: "LSNR2".into(),
            listener_port: 1600,
            enable_data_vault: true,
            data_vault_owner: "DVO".into(),
            connection_mode: ConnectionMode::Shared,
            em_configuration: EmConfiguration::Central,
            cloud_control_agent: "https://oms:4903".into(),
            ..DbConfig::default()
        };
        config.reset_advanced_answers();

        let defaults = DbConfig::default();
        assert_eq!(config.listener_name, defaults.listener_name);
        assert_eq!(config.listener_port, 1521);
        assert!(!config.enable_data_vault);
        assert!(config.data_vault_owner.is_empty());
        assert_eq!(config.connection_mode, ConnectionMode::Dedicated);
        assert_eq!(config.em_configuration, EmConfiguration::None);
        assert!(config.cloud_control_agent.is_empty());
        assert_eq!(config.sid, "prod");
        assert!(config.is_advanced());
    }

    #[test]
    fn delete_reset_clears_delete_answers() {
        let mut config = DbConfig {
            delete_sid: "old".into(),
            delete_force: true,
            ..DbConfig::default()
        };
        config.reset_delete_answers();
        assert!(config.delete_sid.is_empty());
        assert!(!config.delete_force);
    }

    #[test]
    fn enums_use_dbca_tokens_in_yaml() {
        let yaml = serde_yaml::to_string(&StorageType::Asm).unwrap();
        assert_eq!(yaml.trim(), "ASM");
        let parsed: MemoryManagement = serde_yaml::from_str("AUTO_SGA").unwrap();
        assert_eq!(parsed, MemoryManagement::AutoSga);
        assert_eq!(parsed.as_str(), "AUTO_SGA");
    }
}

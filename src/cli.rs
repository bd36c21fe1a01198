use crate::domain::constants::{DEFAULT_VAULT_ROOT_TOKEN, DEFAULT_VAULT_VERSION};
use crate::domain::models::InventoryConfig;
use clap::{ArgGroup, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "vault-inventory",
    version,
    about = "Ansible dynamic inventory sourced from terraform output"
)]
#[command(group(ArgGroup::new("mode").required(true).multiple(false)))]
pub struct Cli {
    #[arg(long, group = "mode", help = "Print the full inventory document")]
    pub list: bool,
    #[arg(
        long,
        group = "mode",
        value_name = "HOSTNAME",
        help = "Print variables for a single host (always {}; hostvars are inlined in --list)"
    )]
    pub host: Option<String>,
    #[arg(
        long,
        value_name = "DIR",
        help = "Directory to run terraform in (defaults to the parent of this binary's directory)"
    )]
    pub terraform_dir: Option<PathBuf>,
    #[arg(
        long,
        default_value = DEFAULT_VAULT_VERSION,
        help = "Vault version advertised to the vault_servers group"
    )]
    pub vault_version: String,
    #[arg(
        long,
        default_value = DEFAULT_VAULT_ROOT_TOKEN,
        help = "Bootstrap root token advertised to the vault_servers group"
    )]
    pub vault_root_token: String,
}

/// Invocation mode decoded from the argument shape. The mode arg group is
/// required and exclusive, so exactly one variant applies per run.
#[derive(Debug)]
pub enum Mode {
    List,
    Host(String),
}

impl Cli {
    pub fn mode(&self) -> Mode {
        match &self.host {
            Some(name) => Mode::Host(name.clone()),
            None => Mode::List,
        }
    }

    pub fn inventory_config(&self) -> InventoryConfig {
        InventoryConfig {
            vault_version: self.vault_version.clone(),
            vault_root_token: self.vault_root_token.clone(),
        }
    }
}

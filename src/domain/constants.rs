//! Stable literals for the single-node Vault topology.

pub const VAULT_GROUP: &str = "vault_servers";
pub const VAULT_HOST: &str = "vault_server";

pub const ANSIBLE_USER: &str = "ubuntu";
pub const SSH_PRIVATE_KEY_FILE: &str = "../vault-ssh-key.pem";
pub const SSH_COMMON_ARGS: &str = "-o StrictHostKeyChecking=no";

pub const DEFAULT_VAULT_DOMAIN: &str = "vault.example.com";
pub const DEFAULT_VAULT_VERSION: &str = "1.15.6";
pub const DEFAULT_VAULT_ROOT_TOKEN: &str = "vault-dev-root-token";

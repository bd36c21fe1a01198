use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Parsed `terraform output -json` document: output name → record.
pub type TerraformOutput = BTreeMap<String, OutputValue>;

/// A single terraform output record. Terraform also emits `sensitive` and
/// `type` siblings; only `value` matters here, the rest is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputValue {
    #[serde(default)]
    pub value: serde_json::Value,
}

/// The document ansible's dynamic-inventory protocol expects from `--list`:
/// group records keyed by name, plus the reserved `_meta.hostvars` block.
#[derive(Debug, Serialize, Deserialize)]
pub struct InventoryDocument {
    #[serde(flatten)]
    pub groups: BTreeMap<String, Group>,
    #[serde(rename = "_meta")]
    pub meta: Meta,
}

impl InventoryDocument {
    /// Valid-but-empty sentinel: no groups, no hostvars. Emitted when the
    /// upstream terraform output is unusable, so ansible sees zero hosts
    /// instead of a crashed inventory script.
    pub fn empty() -> Self {
        Self {
            groups: BTreeMap::new(),
            meta: Meta {
                hostvars: BTreeMap::new(),
            },
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Group {
    pub hosts: Vec<String>,
    pub vars: GroupVars,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GroupVars {
    pub vault_version: String,
    pub vault_domain: String,
    pub vault_root_token: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Meta {
    pub hostvars: BTreeMap<String, HostVars>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HostVars {
    pub ansible_host: String,
    pub ansible_user: String,
    pub ansible_ssh_private_key_file: String,
    pub ansible_ssh_common_args: String,
}

/// Group-level values that are injectable rather than derived from terraform
/// output. Defaults come from the CLI flags in `cli.rs`.
pub struct InventoryConfig {
    pub vault_version: String,
    pub vault_root_token: String,
}

/// Why a run degraded to the empty inventory. Every variant is recovered
/// locally: the reason goes to stderr and stdout still carries a well-formed
/// (empty) document, so the invoking pipeline never sees a hard failure.
#[derive(thiserror::Error, Debug)]
pub enum DegradeReason {
    #[error("error running terraform output: {0}")]
    CommandFailed(String),
    #[error("error parsing terraform output: {0}")]
    ParseFailed(String),
    #[error("could not get EC2 public IP from terraform output")]
    MissingAddress,
    #[error("unexpected shape for terraform output key {0}")]
    UnexpectedShape(String),
}

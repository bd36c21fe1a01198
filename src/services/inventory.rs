use crate::domain::constants::{
    ANSIBLE_USER, DEFAULT_VAULT_DOMAIN, SSH_COMMON_ARGS, SSH_PRIVATE_KEY_FILE, VAULT_GROUP,
    VAULT_HOST,
};
use crate::domain::models::{
    DegradeReason, Group, GroupVars, HostVars, InventoryConfig, InventoryDocument, Meta,
    TerraformOutput,
};
use std::collections::BTreeMap;

/// Builds the single-group inventory from parsed terraform outputs.
///
/// `ec2_public_ip` is required; a missing key, null or empty value yields
/// `MissingAddress`, and a non-string value yields `UnexpectedShape`. The
/// caller renders either as the empty sentinel. `vault_domain` is optional
/// and falls back to the placeholder domain.
pub fn build(
    output: &TerraformOutput,
    cfg: &InventoryConfig,
) -> Result<InventoryDocument, DegradeReason> {
    let address = match output.get("ec2_public_ip") {
        None => return Err(DegradeReason::MissingAddress),
        Some(entry) if entry.value.is_null() => return Err(DegradeReason::MissingAddress),
        Some(entry) => match entry.value.as_str() {
            Some(ip) if !ip.is_empty() => ip.to_string(),
            Some(_) => return Err(DegradeReason::MissingAddress),
            None => return Err(DegradeReason::UnexpectedShape("ec2_public_ip".to_string())),
        },
    };

    let domain = output
        .get("vault_domain")
        .and_then(|entry| entry.value.as_str())
        .unwrap_or(DEFAULT_VAULT_DOMAIN)
        .to_string();

    let mut groups = BTreeMap::new();
    groups.insert(
        VAULT_GROUP.to_string(),
        Group {
            hosts: vec![VAULT_HOST.to_string()],
            vars: GroupVars {
                vault_version: cfg.vault_version.clone(),
                vault_domain: domain,
                vault_root_token: cfg.vault_root_token.clone(),
            },
        },
    );

    let mut hostvars = BTreeMap::new();
    hostvars.insert(
        VAULT_HOST.to_string(),
        HostVars {
            ansible_host: address,
            ansible_user: ANSIBLE_USER.to_string(),
            ansible_ssh_private_key_file: SSH_PRIVATE_KEY_FILE.to_string(),
            ansible_ssh_common_args: SSH_COMMON_ARGS.to_string(),
        },
    );

    Ok(InventoryDocument {
        groups,
        meta: Meta { hostvars },
    })
}

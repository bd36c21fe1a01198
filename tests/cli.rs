use predicates::str::contains;

mod common;
use common::TestEnv;

#[test]
fn list_emits_vault_group() {
    let env = TestEnv::new();
    env.stub_terraform_json(r#"{"ec2_public_ip": {"value": "198.51.100.7"}}"#);
    env.cmd()
        .arg("--list")
        .assert()
        .success()
        .stdout(contains("vault_servers"))
        .stdout(contains("198.51.100.7"));
}

#[test]
fn host_emits_empty_object() {
    let env = TestEnv::new();
    env.stub_terraform_json("{}");
    env.cmd()
        .args(["--host", "vault_server"])
        .assert()
        .success()
        .stdout("{}\n");
}

#[test]
fn host_ignores_unknown_hostname() {
    let env = TestEnv::new();
    env.stub_terraform_json("{}");
    env.cmd()
        .args(["--host", "nonexistent"])
        .assert()
        .success()
        .stdout("{}\n");
}

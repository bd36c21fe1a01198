use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use tempfile::TempDir;

/// Isolated environment with a stub `terraform` executable on PATH and a
/// scratch directory to run it in. The stub is the mock seam for the one
/// external call the binary makes.
pub struct TestEnv {
    _tmp: TempDir,
    pub terraform_dir: PathBuf,
    bin_dir: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let terraform_dir = tmp.path().join("infra");
        let bin_dir = tmp.path().join("bin");
        fs::create_dir_all(&terraform_dir).expect("create terraform dir");
        fs::create_dir_all(&bin_dir).expect("create stub bin dir");

        Self {
            _tmp: tmp,
            terraform_dir,
            bin_dir,
        }
    }

    /// Stub `terraform output -json` to print `payload` and exit 0.
    pub fn stub_terraform_json(&self, payload: &str) {
        self.stub_terraform_script(&format!("#!/bin/sh\ncat <<'EOF'\n{payload}\nEOF\n"));
    }

    pub fn stub_terraform_script(&self, body: &str) {
        let path = self.bin_dir.join("terraform");
        fs::write(&path, body).expect("write terraform stub");
        let mut perms = fs::metadata(&path).expect("stub metadata").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).expect("mark stub executable");
    }

    pub fn cmd(&self) -> Command {
        let path = format!(
            "{}:{}",
            self.bin_dir.display(),
            std::env::var("PATH").unwrap_or_default()
        );
        let mut cmd = cargo_bin_cmd!("vault-inventory");
        cmd.env("PATH", path)
            .arg("--terraform-dir")
            .arg(&self.terraform_dir);
        cmd
    }

    pub fn run_list_json(&self) -> Value {
        let out = self
            .cmd()
            .arg("--list")
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }
}

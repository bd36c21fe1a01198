use crate::domain::models::{DegradeReason, TerraformOutput};
use std::path::{Path, PathBuf};

/// Default directory to run terraform in: the parent of the directory
/// holding this binary. The inventory binary is expected to live one level
/// below the terraform project root (e.g. `<root>/ansible/vault-inventory`).
pub fn default_project_dir() -> anyhow::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    let dir = exe.parent().and_then(Path::parent).ok_or_else(|| {
        anyhow::anyhow!("cannot resolve terraform directory from {}", exe.display())
    })?;
    Ok(dir.to_path_buf())
}

/// Runs `terraform output -json` in `dir` and parses stdout.
///
/// Both failure classes are reported as a `DegradeReason` rather than a hard
/// error; the caller substitutes an empty output map so the run still emits
/// a well-formed document.
pub fn fetch_output(dir: &Path) -> Result<TerraformOutput, DegradeReason> {
    let out = std::process::Command::new("terraform")
        .args(["output", "-json"])
        .current_dir(dir)
        .output()
        .map_err(|e| DegradeReason::CommandFailed(e.to_string()))?;

    if !out.status.success() {
        let stderr = String::from_utf8_lossy(&out.stderr);
        return Err(DegradeReason::CommandFailed(format!(
            "{}: {}",
            out.status,
            stderr.trim()
        )));
    }

    serde_json::from_slice(&out.stdout).map_err(|e| DegradeReason::ParseFailed(e.to_string()))
}

use crate::cli::{Cli, Mode};
use crate::domain::models::{InventoryDocument, TerraformOutput};
use crate::services::{inventory, output, terraform};

pub fn handle_command(cli: &Cli) -> anyhow::Result<()> {
    match cli.mode() {
        Mode::List => output::print_document(&assemble_inventory(cli))?,
        Mode::Host(_) => output::print_empty_object(),
    }
    Ok(())
}

/// Degrade-to-empty wiring: every upstream failure is reported on stderr and
/// replaced by an empty value, so `--list` always exits 0 with a well-formed
/// document. A failed terraform run surfaces two diagnostics (the command
/// failure, then the missing address on the empty map).
fn assemble_inventory(cli: &Cli) -> InventoryDocument {
    let terraform_dir = match &cli.terraform_dir {
        Some(dir) => dir.clone(),
        None => match terraform::default_project_dir() {
            Ok(dir) => dir,
            Err(err) => {
                eprintln!("error resolving terraform directory: {err}");
                return InventoryDocument::empty();
            }
        },
    };

    let tf_output = match terraform::fetch_output(&terraform_dir) {
        Ok(parsed) => parsed,
        Err(reason) => {
            eprintln!("{reason}");
            TerraformOutput::default()
        }
    };

    match inventory::build(&tf_output, &cli.inventory_config()) {
        Ok(doc) => doc,
        Err(reason) => {
            eprintln!("{reason}");
            InventoryDocument::empty()
        }
    }
}

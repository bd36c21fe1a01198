//! Shared data model layer (structs/constants only).
//!
//! ## Files
//! - `models.rs` — terraform output, inventory document, degrade reason.
//! - `constants.rs` — stable literals (group/host names, defaults, SSH opts).
//!
//! ## Rule of thumb
//! Domain types should be data-only: no subprocess/filesystem side effects.
//!
//! ## Compatibility note
//! The structs in `models.rs` define the JSON emitted on stdout, which is a
//! contract consumed by ansible. Keep schema-impacting changes synchronized
//! with `docs/contracts/inventory.schema.json`.

pub mod constants;
pub mod models;

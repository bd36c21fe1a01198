//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `terraform.rs` — runs `terraform output -json` and parses the result.
//! - `inventory.rs` — maps terraform outputs into the inventory document.
//! - `output.rs` — stdout serialization helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible (`inventory.rs` is pure).
//! - Side effects should be explicit and localized (`terraform.rs` owns the
//!   only subprocess call in the crate).
//! - Keep command handlers thin; delegate to services.

pub mod inventory;
pub mod output;
pub mod terraform;

//! Command handler layer.
//!
//! ## Principles
//! - Match decoded CLI modes here.
//! - Delegate terraform/builder logic to `services/*`.
//! - Keep the stdout schema stable; it is consumed by ansible.

pub mod runtime;

pub use runtime::handle_command;

// crates/semsig-cli/src/commands/mod.rs
//
// Subcommand implementations.

pub mod sign;
pub mod similar;
pub mod status;

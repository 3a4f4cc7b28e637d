//! Subcommand implementations.

pub mod init;
pub mod list_rules;
pub mod output;
pub mod resolve;
pub mod validate;

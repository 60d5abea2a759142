//! CLI subcommand implementations for the phishscope binary.

pub mod batch_cmd;
pub mod check_cmd;
pub mod output;

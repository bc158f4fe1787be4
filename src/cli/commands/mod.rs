//! Implementations of the individual CLI subcommands.

pub mod add;
pub mod backup;
pub mod completions;
pub mod delete;
pub mod generate;
pub mod get;
pub mod list;
pub mod stats;

//! Subcommand implementations.

pub mod new;

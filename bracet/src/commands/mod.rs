//! Command modules for the bracet CLI.
//!
//! Each subcommand is implemented in its own file following a standardized pattern.

pub mod common;
pub mod traits;

pub mod check;
pub mod init;
pub mod tokens;

pub use check::{CheckArgs, CheckCommand};
pub use init::{InitArgs, InitCommand};
pub use tokens::{TokensArgs, TokensCommand};
pub use traits::run_command;

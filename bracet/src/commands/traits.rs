//! Command trait and common types for the bracet CLI.
//!
//! This module defines the standard command traits that all commands
//! must implement to ensure consistency across the application.

use std::time::Instant;

use crate::error::Result;

/// Standard command trait that all bracet commands implement.
pub trait Command {
    /// The arguments type for this command.
    type Args;

    /// The output type returned by this command.
    type Output;

    /// Create a new command instance with the given arguments.
    fn new(args: Self::Args) -> Self;

    /// Execute the command.
    fn execute(&self) -> Result<Self::Output>;

    /// Get the command name.
    fn name() -> &'static str;
}

/// Builds and executes a command, logging its name and duration.
pub fn run_command<C: Command>(args: C::Args) -> Result<C::Output> {
    let start = Instant::now();
    tracing::debug!("running `{}`", C::name());
    let output = C::new(args).execute();
    tracing::debug!(
        "`{}` finished in {:.3}s",
        C::name(),
        start.elapsed().as_secs_f64()
    );
    output
}

/// Common output type for commands that don't return data.
pub type NoOutput = ();

/// Command execution result with metadata.
#[derive(Debug, Clone)]
pub struct CommandResult<T = NoOutput> {
    /// The command output data.
    pub data: T,

    /// Number of items processed (files, directories, etc.).
    pub items_processed: usize,

    /// Number of items failed.
    pub items_failed: usize,

    /// Warning messages collected during execution.
    pub warnings: Vec<String>,
}

impl<T: Default> Default for CommandResult<T> {
    fn default() -> Self {
        Self::success(T::default())
    }
}

impl<T> CommandResult<T> {
    /// Create a new successful command result.
    pub fn success(data: T) -> Self {
        Self {
            data,
            items_processed: 0,
            items_failed: 0,
            warnings: Vec::new(),
        }
    }

    /// True when no item failed.
    pub fn is_success(&self) -> bool {
        self.items_failed == 0
    }

    /// Set the number of items processed.
    pub fn with_items_processed(mut self, count: usize) -> Self {
        self.items_processed = count;
        self
    }

    /// Set the number of items failed.
    pub fn with_items_failed(mut self, count: usize) -> Self {
        self.items_failed = count;
        self
    }

    /// Add a warning message.
    pub fn with_warning(mut self, warning: String) -> Self {
        self.warnings.push(warning);
        self
    }
}

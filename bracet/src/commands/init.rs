//! Init command implementation.
//!
//! Writes a `bracet.toml` with every option at its default value.

use std::path::{Path, PathBuf};

use crate::commands::common::error_messages;
use crate::commands::traits::{Command, CommandResult};
use crate::config::{Config, CONFIG_FILE_NAME};
use crate::error::{BracetError, Result};

/// Arguments for the init command.
#[derive(Debug, Clone, Default)]
pub struct InitArgs {
    /// Overwrite an existing configuration file.
    pub force: bool,
    /// Directory to write into (default: current directory).
    pub path: Option<PathBuf>,
}

/// Init command handler.
pub struct InitCommand {
    args: InitArgs,
}

impl InitCommand {
    fn target_dir(&self) -> PathBuf {
        self.args.path.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    /// Validate that the target directory can hold the configuration file.
    fn validate_directory(path: &Path) -> Result<()> {
        if !path.exists() {
            tracing::info!("Creating directory: {}", path.display());
            std::fs::create_dir_all(path)?;
            return Ok(());
        }

        if !path.is_dir() {
            return Err(BracetError::Validation(format!(
                "{} {}",
                error_messages::TARGET_NOT_DIR,
                path.display()
            )));
        }

        Ok(())
    }
}

impl Command for InitCommand {
    type Args = InitArgs;
    type Output = CommandResult<PathBuf>;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        let target = self.target_dir();
        Self::validate_directory(&target)?;

        let config_path = target.join(CONFIG_FILE_NAME);
        if config_path.exists() && !self.args.force {
            return Err(BracetError::Validation(format!(
                "{} {}",
                error_messages::CONFIG_EXISTS,
                config_path.display()
            )));
        }

        Config::default().save_to_path(&config_path)?;
        tracing::info!("Created {}", config_path.display());

        Ok(CommandResult::success(config_path).with_items_processed(1))
    }

    fn name() -> &'static str {
        "init"
    }
}

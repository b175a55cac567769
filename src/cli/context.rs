//! Command execution context

use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

use crate::cli::args::Cli;
use crate::model::{locate_rc_file, Config, ShellType};

/// Everything a run needs besides the target directory
pub struct Context {
    pub config: Config,
    pub shell_type: ShellType,
    pub rc_file: PathBuf,
    pub dry_run: bool,
}

impl Context {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = Config::load()?;

        let shell = std::env::var("SHELL").ok();
        let (shell_type, rc_file) = locate_rc_file(dirs::home_dir(), shell.as_deref())?;
        log::debug!("{} rc file: {}", shell_type, rc_file.display());

        Ok(Self {
            config,
            shell_type,
            rc_file,
            dry_run: cli.dry_run,
        })
    }

    /// Print a success message
    pub fn print_success(&self, message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print a warning message
    pub fn print_warning(&self, message: &str) {
        println!("{} {}", "⚠".yellow(), message);
    }

    /// Print reload hint after modifying configuration
    pub fn print_reload_hint(&self) {
        let reload_cmd = self.shell_type.reload_command(&self.rc_file);
        println!(
            "{} {}",
            "→".cyan(),
            format!("Run '{}' to apply changes", reload_cmd).dimmed()
        );
    }
}

//! Shell type detection and configuration paths

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Supported shell types
///
/// Only zsh rc files are edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellType {
    Zsh,
}

impl ShellType {
    /// Detect the shell from the value of `$SHELL`
    pub fn from_shell_var(shell: Option<&str>) -> Result<Self> {
        match shell {
            Some(sh) if sh.contains("zsh") => Ok(ShellType::Zsh),
            other => Err(Error::UnsupportedShell {
                shell: other.unwrap_or_default().to_string(),
            }),
        }
    }

    /// File name of the rc file inside the home directory
    pub fn rc_file_name(&self) -> &'static str {
        match self {
            ShellType::Zsh => ".zshrc",
        }
    }

    /// Get the configuration file path for this shell below `home`
    pub fn rc_path(&self, home: &Path) -> PathBuf {
        home.join(self.rc_file_name())
    }

    /// Command that reloads the rc file in a running shell
    pub fn reload_command(&self, rc_file: &Path) -> String {
        match self {
            ShellType::Zsh => format!("source {}", rc_file.display()),
        }
    }

    /// Get shell name as string
    pub fn name(&self) -> &'static str {
        match self {
            ShellType::Zsh => "zsh",
        }
    }
}

impl std::fmt::Display for ShellType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Resolve the rc file to edit from the home directory and the `$SHELL` value.
pub fn locate_rc_file(
    home: Option<PathBuf>,
    shell: Option<&str>,
) -> Result<(ShellType, PathBuf)> {
    let home = home.ok_or(Error::UserLookupFailure)?;
    let shell_type = ShellType::from_shell_var(shell)?;
    let rc_file = shell_type.rc_path(&home);
    Ok((shell_type, rc_file))
}

//! Data model

pub mod config;
pub mod shell;

pub use config::{BackupConfig, Config, TargetConfig};
pub use shell::{locate_rc_file, ShellType};

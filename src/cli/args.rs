//! CLI argument definitions using Clap

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gos")]
#[command(about = "Point the GOPATH export in ~/.zshrc at a directory")]
#[command(version)]
pub struct Cli {
    /// New GOPATH directory
    pub path: Option<PathBuf>,

    /// Show the change without writing anything
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Print debug logs to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

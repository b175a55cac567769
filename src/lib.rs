//! gos - point the GOPATH export of your shell rc file at a directory
//!
//! A run is a straight pipeline, aborting on the first error:
//!
//! 1. validate the target directory ([`utils::path`])
//! 2. locate the rc file of the current shell ([`model::shell`])
//! 3. back the rc file up next to itself ([`backup`])
//! 4. replace the first `export GOPATH=` line ([`rewrite`])

pub mod backup;
pub mod cli;
pub mod error;
pub mod logging;
pub mod model;
pub mod rewrite;
pub mod utils;

pub use error::{Error, Result};
pub use model::{Config, ShellType};
pub use rewrite::{ExportLine, Rewrite};

//! Error types

use std::path::PathBuf;
use thiserror::Error;

/// Every way a run can fail. All of them abort the run.
#[derive(Error, Debug)]
pub enum Error {
    #[error("missing gopath")]
    MissingArgument,

    #[error("{}: {reason}", .path.display())]
    InvalidPath { path: PathBuf, reason: String },

    #[error("cannot determine home directory of the current user")]
    UserLookupFailure,

    #[error("{shell} is not supported")]
    UnsupportedShell { shell: String },

    #[error("{}: {source}", .path.display())]
    BackupIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{variable} not found")]
    TargetNotFound { variable: String },

    #[error("{}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: {reason}", .path.display())]
    Config { path: PathBuf, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;

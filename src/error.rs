//! Error types for stampbuild.

use std::process::ExitStatus;
use thiserror::Error;

/// Exit code for every failure: blocked gate, failed query, failed build.
pub const FAILURE_EXIT_CODE: i32 = 2;

#[derive(Error, Debug)]
pub enum GuardError {
    #[error("failed to start `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` failed: {status}")]
    Failed { command: String, status: ExitStatus },

    #[error("`{command}` produced no output")]
    EmptyOutput { command: String },

    #[error("cannot determine current directory: {0}")]
    CurrentDir(#[source] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GuardError {
    pub fn exit_code(&self) -> i32 {
        FAILURE_EXIT_CODE
    }
}

//! Subprocess execution for the guard pipeline.
//!
//! Every external tool (git for the queries, the build tool for the build)
//! goes through [`CommandRunner`], so the pipeline can be driven by a fake in
//! tests. All calls are synchronous: the child is waited on before returning.

use crate::error::GuardError;
use log::debug;
use std::process::{Command, Stdio};

/// Runs external programs on behalf of the pipeline.
pub trait CommandRunner {
    /// Run `program args...` and return its stdout.
    ///
    /// Stderr goes straight to the caller's stderr. A non-zero exit is an error.
    fn capture(&mut self, program: &str, args: &[String]) -> Result<String, GuardError>;

    /// Run `program args...` with stdout and stderr inherited, so output
    /// streams live. A non-zero exit is an error.
    fn stream(&mut self, program: &str, args: &[String]) -> Result<(), GuardError>;
}

/// [`CommandRunner`] backed by `std::process::Command`.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn capture(&mut self, program: &str, args: &[String]) -> Result<String, GuardError> {
        let command = command_line(program, args);
        debug!("Running {}", command);

        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|source| GuardError::Spawn { command: command.clone(), source })?;

        if !output.status.success() {
            debug!("{} exited with {}", command, output.status);
            return Err(GuardError::Failed { command, status: output.status });
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }

    fn stream(&mut self, program: &str, args: &[String]) -> Result<(), GuardError> {
        let command = command_line(program, args);
        debug!("Running {} (streaming)", command);

        let status = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| GuardError::Spawn { command: command.clone(), source })?;

        if !status.success() {
            debug!("{} exited with {}", command, status);
            return Err(GuardError::Failed { command, status });
        }

        Ok(())
    }
}

/// Format a command for logs and error messages.
pub fn command_line(program: &str, args: &[String]) -> String {
    let mut line = program.to_string();
    for arg in args {
        line.push(' ');
        if arg.is_empty() || arg.contains(char::is_whitespace) {
            line.push_str(&format!("{:?}", arg));
        } else {
            line.push_str(arg);
        }
    }
    line
}

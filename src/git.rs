/// Git repository queries
///
/// This module handles:
/// - Locating the repository root
/// - Getting the current commit hash
/// - Listing uncommitted changes from `git status --porcelain`

use crate::error::GuardError;
use crate::process::{CommandRunner, command_line};
use crate::types::Change;
use log::debug;

const GIT: &str = "git";

/// Absolute path of the repository root (`git rev-parse --show-toplevel`)
pub fn repo_root(runner: &mut dyn CommandRunner) -> Result<String, GuardError> {
    query_last_line(runner, &["rev-parse", "--show-toplevel"])
}

/// Full hash of the checked-out commit (`git rev-parse HEAD`)
pub fn commit_hash(runner: &mut dyn CommandRunner) -> Result<String, GuardError> {
    query_last_line(runner, &["rev-parse", "HEAD"])
}

/// Every uncommitted change in the repository, in the order git lists them
pub fn working_tree_changes(runner: &mut dyn CommandRunner) -> Result<Vec<Change>, GuardError> {
    let args = to_args(&["status", "--porcelain"]);
    let output = runner.capture(GIT, &args)?;
    let changes = parse_porcelain(&output);
    debug!("git status reported {} change(s)", changes.len());
    Ok(changes)
}

/// Parse porcelain v1 output into changes, one per line
pub fn parse_porcelain(output: &str) -> Vec<Change> {
    output.lines().filter_map(parse_porcelain_line).collect()
}

/// Parse one `"XY path"` line: two status characters, one separator, the path.
///
/// Rename entries (`R  old -> new`) keep `old -> new` as their path. Lines too
/// short to carry a path are skipped.
pub fn parse_porcelain_line(line: &str) -> Option<Change> {
    let (Some(status), Some(path)) = (line.get(..2), line.get(3..)) else {
        if !line.is_empty() {
            debug!("Skipping malformed status line {:?}", line);
        }
        return None;
    };

    if path.is_empty() {
        debug!("Skipping status line without a path {:?}", line);
        return None;
    }

    Some(Change::new(status, path))
}

/// Last non-empty line of `text`, trimmed of trailing line endings
pub fn last_non_empty_line(text: &str) -> Option<&str> {
    text.lines().map(|l| l.trim_end_matches('\r')).filter(|l| !l.trim().is_empty()).last()
}

fn query_last_line(runner: &mut dyn CommandRunner, args: &[&str]) -> Result<String, GuardError> {
    let args = to_args(args);
    let output = runner.capture(GIT, &args)?;
    last_non_empty_line(&output)
        .map(|s| s.to_string())
        .ok_or_else(|| GuardError::EmptyOutput { command: command_line(GIT, &args) })
}

fn to_args(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}

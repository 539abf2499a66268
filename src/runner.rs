use crate::config::BuildSettings;
use crate::error::GuardError;
use crate::git;
use crate::process::CommandRunner;
use crate::report;
use crate::scope;
use crate::stamp::{self, BuildStamp};
use crate::types::*;
use log::debug;
use std::io::Write;
use std::path::Path;

/// Run the guard pipeline once
///
/// Steps run strictly in order and the first failure ends the run:
/// repository root, working-tree status, scope filter, gate, commit hash, build.
/// The gate report is written to `out`; the build tool writes to the inherited
/// streams through `runner`.
pub fn run(
    settings: &BuildSettings,
    cwd: &Path,
    runner: &mut dyn CommandRunner,
    out: &mut dyn Write,
) -> Result<Outcome, GuardError> {
    // Step 1: Where is the repository?
    let root = git::repo_root(runner)?;
    debug!("Repository root: {}", root);

    // Step 2: What is uncommitted anywhere in it?
    let changes = git::working_tree_changes(runner)?;

    // Step 3: Narrow to the subtree we were invoked from
    let blocking = scope::filter_in_scope(Path::new(&root), cwd, &changes, settings.scope);

    // Step 4: Gate
    if !blocking.is_empty() {
        if settings.json {
            report::write_blocked_json(out, &blocking)?;
        } else {
            report::write_blocked_text(out, &blocking)?;
        }
        out.flush()?;
        return Ok(Outcome::Blocked(blocking));
    }

    if settings.check_only {
        debug!("No uncommitted changes under {}, skipping build", cwd.display());
        return Ok(Outcome::Clean);
    }

    // Step 5: Stamp and build
    let hash = git::commit_hash(runner)?;
    let stamp = BuildStamp::now(&hash);
    stamp::run_build(settings, &stamp, runner)?;

    Ok(Outcome::Built)
}

#[cfg(test)]
#[path = "runner_test.rs"]
mod runner_test;

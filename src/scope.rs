/// Scope filtering: which changes live under the invoking directory
use crate::types::Change;
use log::debug;
use std::path::Path;

/// How a change's absolute path is compared against the current directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ScopeMode {
    /// Plain string prefix. `/repo/foobar/x` counts as inside `/repo/foo`.
    #[default]
    Textual,
    /// Whole path components only.
    Segment,
}

/// Keep the changes whose `root`-joined path falls under `cwd`, in order
pub fn filter_in_scope(root: &Path, cwd: &Path, changes: &[Change], mode: ScopeMode) -> Vec<Change> {
    let in_scope: Vec<Change> = changes.iter().filter(|c| is_in_scope(root, cwd, c, mode)).cloned().collect();
    debug!("{} of {} change(s) under {} ({:?})", in_scope.len(), changes.len(), cwd.display(), mode);
    in_scope
}

/// Test a single change against `cwd`
pub fn is_in_scope(root: &Path, cwd: &Path, change: &Change, mode: ScopeMode) -> bool {
    let absolute = root.join(&change.path);
    match mode {
        ScopeMode::Textual => absolute.to_string_lossy().starts_with(cwd.to_string_lossy().as_ref()),
        ScopeMode::Segment => absolute.starts_with(cwd),
    }
}

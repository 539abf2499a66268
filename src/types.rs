/// Core data structures shared by the guard pipeline
///
/// A `Change` is one line of `git status --porcelain` output. The status code
/// is never interpreted, only echoed back to the user.

use crate::error::FAILURE_EXIT_CODE;

/// One working-tree entry reported by the status query
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Change {
    pub status: String, // "M ", "??", "A ", ...
    pub path: String,   // repository-relative, as git printed it
}

impl Change {
    pub fn new(status: &str, path: &str) -> Self {
        Change { status: status.to_string(), path: path.to_string() }
    }

    /// Render as `"<status> <path>"`
    pub fn display(&self) -> String {
        format!("{} {}", self.status, self.path)
    }
}

/// How a pipeline run ended when no error occurred
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// In-scope uncommitted changes were found; nothing was built
    Blocked(Vec<Change>),
    /// Gate passed and `--check-only` stopped the run before building
    Clean,
    /// Gate passed and the build tool exited successfully
    Built,
}

impl Outcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Blocked(_) => FAILURE_EXIT_CODE,
            Outcome::Clean | Outcome::Built => 0,
        }
    }
}

use crate::config::{DEFAULT_DATE_VAR, DEFAULT_HASH_VAR, DEFAULT_SUBCOMMAND, DEFAULT_TOOL};
use crate::scope::ScopeMode;
use clap::Parser;

const RESERVED_FLAGS_HELP: &str = "Reserved flags: -h, --help, -V, --version and the options above are read by \
stampbuild itself when they come before the build arguments. Put `--` first to forward them to the build tool.";

#[derive(Parser, Debug, Clone)]
#[command(name = "stampbuild")]
#[command(about = "Refuse to build with uncommitted changes below the current directory, \
                   otherwise build with the commit hash and build date stamped in")]
#[command(version)]
#[command(after_help = RESERVED_FLAGS_HELP)]
pub struct CliArgs {
    /// Build tool to invoke
    #[arg(long, value_name = "PROGRAM", default_value = DEFAULT_TOOL)]
    pub tool: String,

    /// Build subcommand passed as the tool's first argument
    #[arg(long, value_name = "NAME", default_value = DEFAULT_SUBCOMMAND)]
    pub subcommand: String,

    /// Linker symbol that receives the UTC build date (RFC3339)
    #[arg(long, value_name = "SYMBOL", default_value = DEFAULT_DATE_VAR)]
    pub date_var: String,

    /// Linker symbol that receives the commit hash
    #[arg(long, value_name = "SYMBOL", default_value = DEFAULT_HASH_VAR)]
    pub hash_var: String,

    /// How changed paths are matched against the current directory
    /// textual: plain string prefix (a sibling like foo/ vs foobar/ also matches)
    /// segment: whole path components only
    #[arg(long, value_enum, default_value_t = ScopeMode::Textual)]
    pub scope: ScopeMode,

    /// Only check for uncommitted changes, do not build
    #[arg(long)]
    pub check_only: bool,

    /// Report blocking changes as JSON
    #[arg(long)]
    pub json: bool,

    /// Arguments forwarded verbatim to the build tool, after the stamped ldflags
    #[arg(value_name = "BUILD_ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
    pub build_args: Vec<String>,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        CliArgs::parse()
    }

    /// Validate argument values
    pub fn validate(&self) -> Result<(), String> {
        if self.tool.trim().is_empty() {
            return Err("--tool must not be empty".to_string());
        }

        if self.subcommand.trim().is_empty() {
            return Err("--subcommand must not be empty".to_string());
        }

        for (flag, symbol) in [("--date-var", &self.date_var), ("--hash-var", &self.hash_var)] {
            if symbol.is_empty() || symbol.contains(char::is_whitespace) {
                return Err(format!("{} must be a non-empty symbol without whitespace, got {:?}", flag, symbol));
            }
        }

        Ok(())
    }
}

/// Configuration resolution module
///
/// This module handles:
/// - Building immutable `BuildSettings` from CLI arguments
/// - Defaults for the build tool and the stamped linker symbols
use crate::cli::CliArgs;
use crate::scope::ScopeMode;
use log::debug;

pub const DEFAULT_TOOL: &str = "go";
pub const DEFAULT_SUBCOMMAND: &str = "build";
pub const DEFAULT_DATE_VAR: &str = "main.buildDate";
pub const DEFAULT_HASH_VAR: &str = "main.commitHash";

/// Fully resolved settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSettings {
    pub tool: String,
    pub subcommand: String,
    pub date_var: String,
    pub hash_var: String,
    pub scope: ScopeMode,
    pub check_only: bool,
    pub json: bool,
    pub build_args: Vec<String>,
}

impl Default for BuildSettings {
    fn default() -> Self {
        BuildSettings {
            tool: DEFAULT_TOOL.to_string(),
            subcommand: DEFAULT_SUBCOMMAND.to_string(),
            date_var: DEFAULT_DATE_VAR.to_string(),
            hash_var: DEFAULT_HASH_VAR.to_string(),
            scope: ScopeMode::Textual,
            check_only: false,
            json: false,
            build_args: Vec::new(),
        }
    }
}

/// Build settings from CLI arguments, validating them first
pub fn build_settings(args: &CliArgs) -> Result<BuildSettings, String> {
    args.validate()?;

    let settings = BuildSettings {
        tool: args.tool.clone(),
        subcommand: args.subcommand.clone(),
        date_var: args.date_var.clone(),
        hash_var: args.hash_var.clone(),
        scope: args.scope,
        check_only: args.check_only,
        json: args.json,
        build_args: args.build_args.clone(),
    };

    debug!("Resolved settings: {:?}", settings);
    Ok(settings)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

//! Build metadata stamping and the delegated build invocation.
//!
//! The build tool receives `-ldflags "-X <date_var>=<date> -X <hash_var>=<hash>"`
//! followed by the caller's passthrough arguments.

use crate::config::BuildSettings;
use crate::error::GuardError;
use crate::process::CommandRunner;
use chrono::{DateTime, SecondsFormat, Utc};
use log::debug;

/// Values injected into the built binary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildStamp {
    pub build_date: String,
    pub commit_hash: String,
}

impl BuildStamp {
    /// Stamp with the current UTC time
    pub fn now(commit_hash: &str) -> Self {
        Self::at(Utc::now(), commit_hash)
    }

    pub fn at(time: DateTime<Utc>, commit_hash: &str) -> Self {
        BuildStamp { build_date: format_build_date(time), commit_hash: commit_hash.to_string() }
    }

    /// The linker flag string, e.g. `-X main.buildDate=2024-01-02T03:04:05Z -X main.commitHash=abc`
    pub fn ldflags(&self, date_var: &str, hash_var: &str) -> String {
        format!("-X {}={} -X {}={}", date_var, self.build_date, hash_var, self.commit_hash)
    }
}

/// RFC3339 in UTC with whole seconds and a `Z` suffix
pub fn format_build_date(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Arguments handed to the build tool: subcommand, ldflags, then passthrough
pub fn build_invocation(settings: &BuildSettings, stamp: &BuildStamp) -> Vec<String> {
    let mut args = vec![
        settings.subcommand.clone(),
        "-ldflags".to_string(),
        stamp.ldflags(&settings.date_var, &settings.hash_var),
    ];
    args.extend(settings.build_args.iter().cloned());
    args
}

/// Run the build tool once, streaming its output to ours
pub fn run_build(
    settings: &BuildSettings,
    stamp: &BuildStamp,
    runner: &mut dyn CommandRunner,
) -> Result<(), GuardError> {
    let args = build_invocation(settings, stamp);
    debug!("Building {} at {}", stamp.commit_hash, stamp.build_date);
    runner.stream(&settings.tool, &args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_stamp() -> BuildStamp {
        let time = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        BuildStamp::at(time, "0123456789abcdef0123456789abcdef01234567")
    }

    #[test]
    fn test_format_build_date_is_rfc3339_utc() {
        let time = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(format_build_date(time), "2024-01-02T03:04:05Z");
    }

    #[test]
    fn test_now_parses_back_as_rfc3339() {
        let stamp = BuildStamp::now("abc");
        let parsed = DateTime::parse_from_rfc3339(&stamp.build_date).unwrap();
        assert_eq!(parsed.offset().local_minus_utc(), 0);
        assert_eq!(stamp.commit_hash, "abc");
    }

    #[test]
    fn test_ldflags_layout() {
        let flags = fixed_stamp().ldflags("main.buildDate", "main.commitHash");
        assert_eq!(
            flags,
            "-X main.buildDate=2024-01-02T03:04:05Z -X main.commitHash=0123456789abcdef0123456789abcdef01234567"
        );
    }

    #[test]
    fn test_build_invocation_appends_passthrough_after_flags() {
        let settings = BuildSettings {
            build_args: vec!["-o".to_string(), "bin/app".to_string(), "./cmd/app".to_string()],
            ..BuildSettings::default()
        };
        let args = build_invocation(&settings, &fixed_stamp());
        assert_eq!(args.len(), 6);
        assert_eq!(args[0], "build");
        assert_eq!(args[1], "-ldflags");
        assert!(args[2].contains("main.commitHash=0123456789abcdef"));
        assert_eq!(&args[3..], &["-o", "bin/app", "./cmd/app"]);
    }

    #[test]
    fn test_build_invocation_custom_symbols_and_subcommand() {
        let settings = BuildSettings {
            subcommand: "install".to_string(),
            date_var: "example.com/app/version.Date".to_string(),
            hash_var: "example.com/app/version.Commit".to_string(),
            ..BuildSettings::default()
        };
        let args = build_invocation(&settings, &fixed_stamp());
        assert_eq!(args[0], "install");
        assert!(args[2].starts_with("-X example.com/app/version.Date=2024-01-02T03:04:05Z "));
        assert_eq!(args.len(), 3);
    }
}

//! Gate report: what the user sees when uncommitted changes block the build.

use crate::types::Change;
use std::io::{self, Write};

pub const BLOCKED_HEADER: &str = "The following changes must be committed prior to build:";

#[derive(Debug, serde::Serialize)]
struct BlockedReport<'a> {
    blocked: bool,
    changes: &'a [Change],
}

/// Header, blank line, one `"<status> <path>"` per change, blank line
pub fn write_blocked_text(out: &mut dyn Write, changes: &[Change]) -> io::Result<()> {
    writeln!(out, "{}", BLOCKED_HEADER)?;
    writeln!(out)?;
    for change in changes {
        writeln!(out, "{}", change.display())?;
    }
    writeln!(out)?;
    Ok(())
}

/// Pretty JSON object `{"blocked": true, "changes": [...]}`
pub fn write_blocked_json(out: &mut dyn Write, changes: &[Change]) -> Result<(), serde_json::Error> {
    let report = BlockedReport { blocked: true, changes };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out).map_err(serde_json::Error::io)?;
    Ok(())
}

/// User-facing error output
///
/// This module handles:
/// - Colored terminal text on stderr
/// - Error message formatting

use std::io::{self, IsTerminal, Write};

/// Print colored text to stderr, plain when stderr is not a terminal
fn eprint_color(s: &str, fg: term::color::Color) {
    if !really_print_color(s, fg) {
        eprint!("{}", s);
    }

    fn really_print_color(s: &str, fg: term::color::Color) -> bool {
        if !io::stderr().is_terminal() {
            return false;
        }
        let Some(mut t) = term::stderr() else {
            return false;
        };
        if t.fg(fg).is_err() {
            return false;
        }
        let _ = t.attr(term::Attr::Bold);
        if write!(t, "{}", s).is_err() {
            return false;
        }
        let _ = t.reset();
        true
    }
}

/// Print an error message with colored "error" prefix to stderr
pub fn print_error(msg: &str) {
    eprint!("stampbuild: ");
    eprint_color("error", term::color::BRIGHT_RED);
    eprintln!(": {}", msg);
}

// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

mod cli;
mod config;
mod error;
mod git;
mod process;
mod report;
mod runner;
mod scope;
mod stamp;
mod types;
mod ui;

use error::{FAILURE_EXIT_CODE, GuardError};
use log::debug;
use process::SystemRunner;
use std::env;
use std::io;

fn main() {
    env_logger::init();

    // Parse CLI arguments
    let args = cli::CliArgs::parse_args();

    // Resolve settings
    let settings = match config::build_settings(&args) {
        Ok(s) => s,
        Err(e) => {
            ui::print_error(&format!("Configuration error: {}", e));
            std::process::exit(FAILURE_EXIT_CODE);
        }
    };

    let cwd = match env::current_dir().map_err(GuardError::CurrentDir) {
        Ok(dir) => dir,
        Err(e) => fail(e),
    };

    let mut system = SystemRunner;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match runner::run(&settings, &cwd, &mut system, &mut out) {
        Ok(outcome) => std::process::exit(outcome.exit_code()),
        Err(e) => fail(e),
    }
}

fn fail(e: GuardError) -> ! {
    debug!("Fatal: {:?}", e);
    ui::print_error(&e.to_string());
    std::process::exit(e.exit_code());
}

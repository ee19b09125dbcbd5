//! FILENAME: app/cli/src/main.rs
// PURPOSE: Command line entry point.

use std::process::ExitCode;

fn main() -> ExitCode {
    mathexpr_cli::run()
}

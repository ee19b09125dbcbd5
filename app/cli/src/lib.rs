//! FILENAME: app/cli/src/lib.rs
// PURPOSE: Library entry point for the evaluator binary.
// CONTEXT: Wires configuration, logging and the REPL session together.
// The expression core lives in the `mathexpr-parser` crate.

use std::io::{self, Write};
use std::process::ExitCode;
use std::thread;

use clap::Parser;

pub mod config;
pub mod error;
pub mod logging;
pub mod session;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use session::{format_value, LineOutcome, Session};

/// Stack size of the evaluation thread. Parser recursion depth grows with
/// parenthesis nesting, so the default main thread stack is too small for
/// deeply nested input.
pub const EVAL_STACK_SIZE: usize = 512 * 1024 * 1024;

/// Runs `f` on a thread with an `EVAL_STACK_SIZE` stack and waits for it.
pub fn on_eval_stack<F, T>(f: F) -> AppResult<T>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    let handle = thread::Builder::new()
        .name("eval".to_string())
        .stack_size(EVAL_STACK_SIZE)
        .spawn(f)?;
    match handle.join() {
        Ok(value) => Ok(value),
        Err(panic) => std::panic::resume_unwind(panic),
    }
}

/// Runs with an already parsed configuration on the process stdin/stdout.
pub fn run_with(config: Config) -> AppResult<bool> {
    logging::init(&config.log_level)?;
    log::debug!("starting with {:?}", config);
    on_eval_stack(move || run_session(config))?
}

fn run_session(config: Config) -> AppResult<bool> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut session = Session::new(config.clone());

    if config.is_batch() {
        return session.run_batch(&config.exprs, &mut out);
    }

    let stdin = io::stdin();
    session.run(stdin.lock(), &mut out)?;
    out.flush()?;
    Ok(true)
}

/// Parses the command line and runs the evaluator.
pub fn run() -> ExitCode {
    match run_with(Config::parse()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("mathexpr: {}", e);
            ExitCode::FAILURE
        }
    }
}

//! FILENAME: tests/common/mod.rs
//! Test harness for driving a REPL session with in-memory input.

use std::io::Cursor;

use mathexpr_cli::{Config, Session};

/// Test harness holding a session and everything it printed.
pub struct TestHarness {
    pub session: Session,
    pub output: Vec<u8>,
}

impl TestHarness {
    /// Create a harness with quiet defaults and an empty prompt.
    pub fn new() -> Self {
        Self::with_config(Config {
            quiet: true,
            prompt: String::new(),
            ..Config::default()
        })
    }

    pub fn with_config(config: Config) -> Self {
        TestHarness {
            session: Session::new(config),
            output: Vec::new(),
        }
    }

    /// Feed `script` to the interactive loop and return the printed lines.
    pub fn run_script(&mut self, script: &str) -> Vec<String> {
        self.session
            .run(Cursor::new(script.as_bytes()), &mut self.output)
            .unwrap();
        self.lines()
    }

    /// Feed raw bytes, which need not be valid UTF-8, to the interactive loop.
    pub fn run_bytes(&mut self, script: &[u8]) -> Vec<String> {
        self.session
            .run(Cursor::new(script), &mut self.output)
            .unwrap();
        self.lines()
    }

    /// Evaluate expressions in batch mode. Returns the success flag.
    pub fn run_batch(&mut self, exprs: &[&str]) -> bool {
        let exprs: Vec<String> = exprs.iter().map(|s| s.to_string()).collect();
        self.session.run_batch(&exprs, &mut self.output).unwrap()
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.output.clone()).unwrap()
    }

    pub fn lines(&self) -> Vec<String> {
        self.text().lines().map(|l| l.to_string()).collect()
    }
}

//! FILENAME: app/cli/src/session.rs
//! PURPOSE: Read-evaluate-print loop around the expression parser.
//! CONTEXT: The loop owns all I/O. Each line gets a fresh parser, so a bad
//! expression only produces an error line and the session continues.

use std::io::{BufRead, Write};

use mathexpr_parser::{parse, tokenize, ParseError};

use crate::config::Config;
use crate::error::AppResult;

// ============================================================================
// LINE OUTCOME
// ============================================================================

/// What a single input line turned into.
#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome {
    /// Blank line, nothing to do.
    Skip,
    /// The exit command was entered.
    Exit,
    /// The expression evaluated to this number.
    Value(f64),
    /// Token listing produced in `--tokens` mode.
    Tokens(String),
    Error(ParseError),
}

impl LineOutcome {
    /// The text printed for this outcome, if any.
    pub fn render(&self) -> Option<String> {
        match self {
            LineOutcome::Skip | LineOutcome::Exit => None,
            LineOutcome::Value(v) => Some(format_value(*v)),
            LineOutcome::Tokens(listing) => Some(listing.clone()),
            LineOutcome::Error(e) => Some(format!("Error: {}", e)),
        }
    }
}

/// Formats a result for display.
/// Integral values print without a fractional part.
pub fn format_value(value: f64) -> String {
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value.fract() == 0.0 && value.abs() < 1e15 {
        // Avoid printing "-0"
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Renders the token stream of `line` as `Kind(text) Kind(text) ...`.
fn describe_tokens(line: &str) -> Result<String, ParseError> {
    let tokens = tokenize(line)?;
    let parts: Vec<String> = tokens
        .iter()
        .map(|t| format!("{:?}({})", t.kind, t.text))
        .collect();
    Ok(parts.join(" "))
}

// ============================================================================
// SESSION
// ============================================================================

pub struct Session {
    config: Config,
    evaluated: u64,
    failed: u64,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Session {
            config,
            evaluated: 0,
            failed: 0,
        }
    }

    /// Number of lines handed to the parser so far.
    pub fn evaluated(&self) -> u64 {
        self.evaluated
    }

    /// Number of those lines that failed.
    pub fn failed(&self) -> u64 {
        self.failed
    }

    /// Classifies and evaluates one raw input line.
    pub fn handle_line(&mut self, raw: &str) -> LineOutcome {
        let line = raw.trim();

        if line.eq_ignore_ascii_case(&self.config.exit_command) {
            return LineOutcome::Exit;
        }
        if line.is_empty() {
            return LineOutcome::Skip;
        }

        self.evaluated += 1;

        let result = if self.config.tokens {
            describe_tokens(line).map(LineOutcome::Tokens)
        } else {
            parse(line).map(LineOutcome::Value)
        };

        match result {
            Ok(outcome) => outcome,
            Err(e) => {
                self.failed += 1;
                log::debug!(target: e.kind_name(), "{:?}: {}", line, e);
                LineOutcome::Error(e)
            }
        }
    }

    /// Writes the banner unless quiet mode is on.
    pub fn write_banner<W: Write>(&self, out: &mut W) -> AppResult<()> {
        if self.config.quiet {
            return Ok(());
        }
        writeln!(out, "=== Mini Math Interpreter ===")?;
        writeln!(out, "Supported: +, -, *, /, parentheses")?;
        writeln!(out, "Type '{}' to quit.", self.config.exit_command)?;
        writeln!(out)?;
        Ok(())
    }

    /// Runs the interactive loop until the exit command or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, out: &mut W) -> AppResult<()> {
        self.write_banner(out)?;

        let mut buf = Vec::new();
        loop {
            write!(out, "{}", self.config.prompt)?;
            out.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                log::debug!("end of input");
                break;
            }

            // Invalid UTF-8 becomes U+FFFD, which the lexer rejects
            let line = String::from_utf8_lossy(&buf);
            let outcome = self.handle_line(&line);
            if outcome == LineOutcome::Exit {
                break;
            }
            if let Some(text) = outcome.render() {
                writeln!(out, "{}", text)?;
            }
        }

        log::info!(
            "session finished: {} evaluated, {} failed",
            self.evaluated,
            self.failed
        );
        Ok(())
    }

    /// Evaluates each expression once, printing one line per expression.
    /// Blank expressions and the exit command count as failures here.
    /// Returns true when every expression succeeded.
    pub fn run_batch<W: Write>(&mut self, exprs: &[String], out: &mut W) -> AppResult<bool> {
        let mut nothing_evaluated = 0;
        for expr in exprs {
            match self.handle_line(expr) {
                LineOutcome::Skip | LineOutcome::Exit => {
                    nothing_evaluated += 1;
                    log::debug!("batch expression {:?} has nothing to evaluate", expr);
                    writeln!(out, "Error: Nothing to evaluate in {:?}", expr)?;
                }
                outcome => {
                    if let Some(text) = outcome.render() {
                        writeln!(out, "{}", text)?;
                    }
                }
            }
        }
        Ok(self.failed == 0 && nothing_evaluated == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(Config::default())
    }

    #[test]
    fn format_value_drops_integral_fraction() {
        assert_eq!(format_value(14.0), "14");
        assert_eq!(format_value(-3.0), "-3");
        assert_eq!(format_value(-0.0), "0");
        assert_eq!(format_value(0.25), "0.25");
        assert_eq!(format_value(1.0 / 3.0), "0.3333333333333333");
    }

    #[test]
    fn format_value_handles_huge_and_infinite() {
        assert_eq!(format_value(1e15), "1000000000000000");
        assert_eq!(format_value(f64::INFINITY), "Infinity");
        assert_eq!(format_value(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn exit_is_case_insensitive() {
        let mut s = session();
        assert_eq!(s.handle_line("exit"), LineOutcome::Exit);
        assert_eq!(s.handle_line("  EXIT \n"), LineOutcome::Exit);
        assert_eq!(s.handle_line("Exit"), LineOutcome::Exit);
        assert_eq!(s.evaluated(), 0);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let mut s = session();
        assert_eq!(s.handle_line(""), LineOutcome::Skip);
        assert_eq!(s.handle_line(" \t "), LineOutcome::Skip);
        assert_eq!(s.evaluated(), 0);
    }

    #[test]
    fn errors_are_counted_and_rendered() {
        let mut s = session();
        let outcome = s.handle_line("5 / 0");
        assert_eq!(outcome, LineOutcome::Error(ParseError::DivisionByZero));
        assert_eq!(outcome.render().unwrap(), "Error: Division by zero");
        assert_eq!(s.handle_line("2 + 3 * 4"), LineOutcome::Value(14.0));
        assert_eq!((s.evaluated(), s.failed()), (2, 1));
    }

    #[test]
    fn tokens_mode_lists_tokens() {
        let mut s = Session::new(Config {
            tokens: true,
            ..Config::default()
        });
        assert_eq!(
            s.handle_line("(12+3)"),
            LineOutcome::Tokens(
                "LeftParen(() Number(12) Plus(+) Number(3) RightParen())".to_string()
            )
        );
        assert!(matches!(
            s.handle_line("1 $"),
            LineOutcome::Error(ParseError::Lexical { ch: '$', .. })
        ));
    }

    /// Records (level, target) of every log call made in this test binary.
    struct CaptureLogger;

    static CAPTURED: std::sync::Mutex<Vec<(log::Level, String)>> = std::sync::Mutex::new(Vec::new());
    static CAPTURE_INIT: std::sync::Once = std::sync::Once::new();

    impl log::Log for CaptureLogger {
        fn enabled(&self, _: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            CAPTURED
                .lock()
                .unwrap()
                .push((record.level(), record.target().to_string()));
        }

        fn flush(&self) {}
    }

    #[test]
    fn failed_lines_log_below_default_filter() {
        CAPTURE_INIT.call_once(|| {
            log::set_logger(&CaptureLogger).unwrap();
            log::set_max_level(log::LevelFilter::Trace);
        });

        let mut s = session();
        s.handle_line("5 / 0");

        let captured = CAPTURED.lock().unwrap();
        let levels: Vec<log::Level> = captured
            .iter()
            .filter(|(_, target)| target == "division-by-zero")
            .map(|(level, _)| *level)
            .collect();
        assert!(!levels.is_empty());
        assert!(levels.iter().all(|level| *level == log::Level::Debug));
    }
}

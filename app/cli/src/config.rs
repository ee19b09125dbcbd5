//! FILENAME: app/cli/src/config.rs
//! PURPOSE: Command line configuration for the evaluator binary.

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "mathexpr", version, about = "Evaluate arithmetic expressions", long_about = None)]
pub struct Config {
    /// Evaluate EXPR and exit instead of starting the interactive loop (repeatable)
    #[arg(short, long = "expr", value_name = "EXPR")]
    pub exprs: Vec<String>,

    /// Prompt printed before each line
    #[arg(long, default_value = "> ")]
    pub prompt: String,

    /// Do not print the banner
    #[arg(short, long)]
    pub quiet: bool,

    /// Print the token stream of each line instead of evaluating it
    #[arg(long)]
    pub tokens: bool,

    /// Default log filter; RUST_LOG takes precedence
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Word that ends the interactive loop (case-insensitive)
    #[arg(long, default_value = "exit")]
    pub exit_command: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            exprs: Vec::new(),
            prompt: "> ".to_string(),
            quiet: false,
            tokens: false,
            log_level: "warn".to_string(),
            exit_command: "exit".to_string(),
        }
    }
}

impl Config {
    /// True when the command line asked for one-shot evaluation.
    pub fn is_batch(&self) -> bool {
        !self.exprs.is_empty()
    }
}

//! Command-line arguments

use clap::Parser;

/// Run Trio scripts, inline code or an interactive session
#[derive(Debug, Parser)]
#[command(name = "trio", version)]
pub struct Cli {
    /// Script file to execute
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<String>,

    /// Inline code to evaluate
    #[arg(short, long, value_name = "CODE", conflicts_with = "file")]
    pub eval: Option<String>,

    /// Start the interactive REPL
    #[arg(short, long)]
    pub repl: bool,

    /// Print the parsed program before running it
    #[arg(long)]
    pub print_ast: bool,

    /// Print the token stream before parsing
    #[arg(long)]
    pub print_tokens: bool,
}

impl Cli {
    /// Arguments for running a single file with no extra output
    pub fn with_file(file: impl Into<String>) -> Self {
        Self {
            file: Some(file.into()),
            eval: None,
            repl: false,
            print_ast: false,
            print_tokens: false,
        }
    }
}

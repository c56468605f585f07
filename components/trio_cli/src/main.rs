//! Trio CLI
//!
//! Entry point for the `trio` binary. Parses CLI arguments and delegates to
//! the Runtime for execution.

use clap::Parser as ClapParser;
use std::process::ExitCode;
use trio_cli::logging::init_tracing;
use trio_cli::repl::format_error;
use trio_cli::{Cli, CliResult, Runtime};

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", format_error(&e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let mut runtime = Runtime::new()?
        .with_print_ast(cli.print_ast)
        .with_print_tokens(cli.print_tokens);

    if let Some(file) = &cli.file {
        let result = runtime.execute_file(file)?;
        if !result.is_null() {
            println!("{}", result);
        }
    } else if let Some(code) = &cli.eval {
        let result = runtime.execute_string(code)?;
        if !result.is_null() {
            println!("{}", result);
        }
    } else if cli.repl {
        runtime.repl()?;
    } else {
        // Default: show usage
        println!("Trio v{}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Usage:");
        println!("  trio --file <FILE>     Execute a Trio script");
        println!("  trio --eval <CODE>     Evaluate inline Trio code");
        println!("  trio --repl            Start interactive REPL");
        println!();
        println!("Run 'trio --help' for more options.");
    }

    Ok(())
}

//! # Footing CLI
//!
//! Command-line front end for the isolated footing calculator: one-shot
//! design reports (text or JSON), the concrete grade table, and an
//! interactive terminal form with live results.

mod cli;
mod report;
mod tui;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, Commands, DesignArgs, OutputFormat};
use footing_core::file_io::load_input;
use footing_core::{calculate, CalcError, CalcResult, FootingInput};

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

fn run_design(args: &DesignArgs) -> CalcResult<()> {
    let input = args.resolve_input()?;
    for warning in input.warnings() {
        tracing::warn!("{}", warning);
    }

    let result = calculate(&input);
    match args.format {
        OutputFormat::Text => {
            let date = chrono::Local::now().format("%Y-%m-%d").to_string();
            print!("{}", report::render_text(&input, &result, args.trace, &date));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report::render_json(&input, &result))?;
            println!("{}", json);
        }
    }
    Ok(())
}

fn run_interactive(path: Option<&std::path::Path>) -> CalcResult<()> {
    let input = match path {
        Some(path) => load_input(path)?,
        None => FootingInput::default(),
    };
    tui::run(&input).map_err(|e| CalcError::file_error("terminal", "<tty>", e.to_string()))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let command = cli.command();

    // The terminal form owns the screen; log lines would corrupt it
    if !matches!(command, Commands::Interactive { .. }) {
        init_tracing(cli.verbose);
    }

    let outcome = match &command {
        Commands::Design(args) => run_design(args),
        Commands::Grades => {
            print!("{}", report::render_grades());
            Ok(())
        }
        Commands::Interactive { input } => run_interactive(input.as_deref()),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!("{}", json);
            }
            ExitCode::FAILURE
        }
    }
}

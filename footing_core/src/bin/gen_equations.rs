//! Write the equation reference table for the footing design.
//!
//! ```bash
//! cargo run -p footing_core --bin gen_equations -- docs/EQUATIONS.md
//! ```
//!
//! Without an argument the table goes to stdout.

use std::process::ExitCode;

use footing_core::equations::generate_equations_markdown;

fn main() -> ExitCode {
    let table = format!(
        "# Isolated Footing Equations\n\nGrouped by design step, each with its variables and implementing function.\n\n{}",
        generate_equations_markdown()
    );

    let Some(path) = std::env::args().nth(1) else {
        print!("{}", table);
        return ExitCode::SUCCESS;
    };

    match std::fs::write(&path, &table) {
        Ok(()) => {
            eprintln!("wrote {} equations to {}", footing_core::equations::ALL_EQUATIONS.len(), path);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error writing {}: {}", path, e);
            ExitCode::FAILURE
        }
    }
}

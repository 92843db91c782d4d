//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use footing_core::file_io::load_input;
use footing_core::{CalcResult, ConcreteGrade, FootingInput};

#[derive(Parser, Debug)]
#[command(name = "footing", version, about = "Isolated footing design calculator")]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Design arguments when no subcommand is given
    #[command(flatten)]
    pub design: DesignArgs,
}

impl Cli {
    /// The command to run; without a subcommand the top-level design flags apply
    pub fn command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or_else(|| Commands::Design(self.design.clone()))
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Run one design and print the result (default)
    Design(DesignArgs),

    /// List the concrete strength classes
    Grades,

    /// Edit a design in a terminal form with live results
    Interactive {
        /// JSON input file to start from
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

#[derive(Args, Debug, Clone)]
pub struct DesignArgs {
    /// JSON input file; flags below override its values
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Concrete grade (25, C25 or C25/30)
    #[arg(long, value_parser = parse_grade)]
    pub fck: Option<ConcreteGrade>,

    /// Design moment about X (kNm)
    #[arg(long, allow_negative_numbers = true)]
    pub msdx: Option<f64>,

    /// Design moment about Y (kNm)
    #[arg(long, allow_negative_numbers = true)]
    pub msdy: Option<f64>,

    /// Footing width B (mm)
    #[arg(long, allow_negative_numbers = true)]
    pub b: Option<f64>,

    /// Footing length L (mm)
    #[arg(long, allow_negative_numbers = true)]
    pub l: Option<f64>,

    /// Overall depth H (mm)
    #[arg(long = "total-h", visible_alias = "totalH", allow_negative_numbers = true)]
    pub total_h: Option<f64>,

    /// Concrete cover (mm)
    #[arg(long, allow_negative_numbers = true)]
    pub cover: Option<f64>,

    /// Bar diameter (mm)
    #[arg(long, allow_negative_numbers = true)]
    pub phi: Option<f64>,

    /// Steel yield strength (MPa)
    #[arg(long, allow_negative_numbers = true)]
    pub fyk: Option<f64>,

    /// Design shear (kN)
    #[arg(long, allow_negative_numbers = true)]
    pub vsd: Option<f64>,

    /// Column dimension a (mm)
    #[arg(long = "col-a", allow_negative_numbers = true)]
    pub col_a: Option<f64>,

    /// Column dimension b (mm)
    #[arg(long = "col-b", allow_negative_numbers = true)]
    pub col_b: Option<f64>,

    /// Output format
    #[arg(short, long, value_enum, env = "FOOTING_FORMAT", default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Show every intermediate quantity with its formula
    #[arg(long)]
    pub trace: bool,
}

impl DesignArgs {
    /// Build the calculation input: defaults, then the input file, then flags
    pub fn resolve_input(&self) -> CalcResult<FootingInput> {
        let mut input = match &self.input {
            Some(path) => load_input(path)?,
            None => FootingInput::default(),
        };

        if let Some(fck) = self.fck {
            input.fck = fck;
        }
        let overrides = [
            (self.msdx, &mut input.msdx),
            (self.msdy, &mut input.msdy),
            (self.b, &mut input.b),
            (self.l, &mut input.l),
            (self.total_h, &mut input.total_h),
            (self.cover, &mut input.cover),
            (self.phi, &mut input.phi),
            (self.fyk, &mut input.fyk),
            (self.vsd, &mut input.vsd),
            (self.col_a, &mut input.col_a),
            (self.col_b, &mut input.col_b),
        ];
        for (flag, slot) in overrides {
            if let Some(value) = flag {
                *slot = value;
            }
        }

        Ok(input)
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable report
    Text,
    /// JSON object with input, result and display record
    Json,
}

fn parse_grade(s: &str) -> Result<ConcreteGrade, String> {
    ConcreteGrade::from_str_flexible(s).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_invocation_is_default_design() {
        let cli = Cli::try_parse_from(["footing"]).unwrap();
        let Commands::Design(args) = cli.command() else {
            panic!("expected design command");
        };
        assert_eq!(args.resolve_input().unwrap(), FootingInput::default());
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "footing", "design", "--fck", "C30/37", "--msdx", "410", "--total-h", "650", "--col-a", "300",
        ])
        .unwrap();
        let Commands::Design(args) = cli.command() else {
            panic!("expected design command");
        };
        let input = args.resolve_input().unwrap();
        assert_eq!(input.fck, ConcreteGrade::C30);
        assert_eq!(input.msdx, 410.0);
        assert_eq!(input.total_h, 650.0);
        assert_eq!(input.col_a, 300.0);
        assert_eq!(input.col_b, 400.0);
    }

    #[test]
    fn test_top_level_flags_without_subcommand() {
        let cli = Cli::try_parse_from(["footing", "--vsd", "400", "--format", "json"]).unwrap();
        let Commands::Design(args) = cli.command() else {
            panic!("expected design command");
        };
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.resolve_input().unwrap().vsd, 400.0);
    }

    #[test]
    fn test_negative_values_accepted() {
        let cli = Cli::try_parse_from(["footing", "design", "--msdy", "-120"]).unwrap();
        let Commands::Design(args) = cli.command() else {
            panic!("expected design command");
        };
        assert_eq!(args.resolve_input().unwrap().msdy, -120.0);
    }

    #[test]
    fn test_unknown_grade_rejected() {
        assert!(Cli::try_parse_from(["footing", "design", "--fck", "22"]).is_err());
    }

    #[test]
    fn test_subcommands() {
        let cli = Cli::try_parse_from(["footing", "-v", "grades"]).unwrap();
        assert!(matches!(cli.command(), Commands::Grades));
        assert_eq!(cli.verbose, 1);

        let cli = Cli::try_parse_from(["footing", "interactive"]).unwrap();
        assert!(matches!(cli.command(), Commands::Interactive { input: None }));
    }

    #[test]
    fn test_verbose_before_any_subcommand() {
        let cli = Cli::try_parse_from(["footing", "-vv", "interactive", "-i", "pad.json"]).unwrap();
        assert_eq!(cli.verbose, 2);
        let Commands::Interactive { input } = cli.command() else {
            panic!("expected interactive command");
        };
        assert_eq!(input, Some(PathBuf::from("pad.json")));

        let cli = Cli::try_parse_from(["footing", "-v", "design", "--vsd", "400"]).unwrap();
        assert_eq!(cli.verbose, 1);
        let Commands::Design(args) = cli.command() else {
            panic!("expected design command");
        };
        assert_eq!(args.resolve_input().unwrap().vsd, 400.0);

        let cli = Cli::try_parse_from(["footing", "grades", "-v"]).unwrap();
        assert_eq!(cli.verbose, 1);
    }

    #[test]
    fn test_subcommand_flags_win_over_top_level() {
        let cli = Cli::try_parse_from(["footing", "design", "--msdx", "700"]).unwrap();
        let Commands::Design(args) = cli.command() else {
            panic!("expected design command");
        };
        assert_eq!(args.resolve_input().unwrap().msdx, 700.0);
        assert_eq!(cli.design.msdx, None);
    }
}

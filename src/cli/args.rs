//! Command line argument parsing for Hikari CLI using clap.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

/// Default word list read when no input file is given.
pub const DEFAULT_TEXT_INPUT: &str = "words.txt";

/// Default export read when no input file is given together with `--jpdb`.
pub const DEFAULT_JPDB_INPUT: &str = "reviews.json";

/// Hikari - Highlight connections between kanji compounds by shared component kanji
#[derive(Parser, Debug, Clone)]
#[command(name = "hikari")]
#[command(about = "Highlight connections between kanji compounds by shared component kanji")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct HikariArgs {
    /// Path to input file (default 'words.txt', or 'reviews.json' if --jpdb is set)
    #[arg(value_name = "INPUT_FILE")]
    pub input_file: Option<PathBuf>,

    /// Treat the input file as a jpdb review export (JSON)
    #[arg(short = 'j', long)]
    pub jpdb: bool,

    /// Delimiter between words in a text file (default: any whitespace)
    #[arg(short, long, conflicts_with = "jpdb")]
    pub delimiter: Option<String>,

    /// Path to the output JSON file
    #[arg(
        short,
        long = "output-file",
        value_name = "OUTPUT_FILE",
        env = "HIKARI_OUTPUT",
        default_value = "output.json"
    )]
    pub output_file: PathBuf,

    /// Sort words before indexing instead of keeping input order
    #[arg(long)]
    pub sort: bool,

    /// Pretty-print JSON (the output file, and the summary with --format json)
    #[arg(long)]
    pub pretty: bool,

    /// Format of the run summary printed to stdout
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug output (same as -vvv)
    #[arg(short = 'D', long)]
    pub debug: bool,
}

impl HikariArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.debug {
            3
        } else if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// Input file, falling back to the default for the selected input kind.
    pub fn input_path(&self) -> PathBuf {
        match &self.input_file {
            Some(path) => path.clone(),
            None if self.jpdb => PathBuf::from(DEFAULT_JPDB_INPUT),
            None => PathBuf::from(DEFAULT_TEXT_INPUT),
        }
    }
}

/// Output formats for the run summary
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

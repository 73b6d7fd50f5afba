//! Haiku Meter CLI - Bridge interface for scripts
//!
//! Commands: count, check
//! Outputs JSON to stdout
//! Returns non-zero on validation failure

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use haikumeter_core::{count_syllables, Haiku, HaikuValidator, ENGINE_VERSION, METER};

#[derive(Parser)]
#[command(name = "haikumeter-cli")]
#[command(about = "Haiku Meter CLI - Syllable Estimation Engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Count the estimated syllables in one line of text
    Count {
        /// The line to analyze
        #[arg(short, long)]
        line: String,
    },

    /// Check a haiku against the 5-7-5 meter and field rules
    Check {
        /// JSON payload (Haiku)
        #[arg(short, long)]
        payload: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Count { line } => {
            let output = serde_json::json!({
                "line": line,
                "syllables": count_syllables(&line),
                "engine_version": ENGINE_VERSION,
            });
            println!("{}", serde_json::to_string_pretty(&output).unwrap());
            ExitCode::SUCCESS
        }

        Commands::Check { payload } => {
            let haiku = match Haiku::from_json(&payload) {
                Ok(h) => h,
                Err(e) => {
                    println!(r#"{{"valid": false, "error": "{}"}}"#, e);
                    return ExitCode::FAILURE;
                }
            };

            let result = HaikuValidator::new().validate(&haiku);
            let output = serde_json::json!({
                "meter": METER,
                "result": &result,
            });
            println!("{}", serde_json::to_string_pretty(&output).unwrap());

            if result.valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(2)  // Validation failure
            }
        }
    }
}

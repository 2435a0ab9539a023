//! Command implementations for the AVILIGHT CLI.
//!
//! Provides subcommands for exporting the bundled Metro Manila survey
//! datasets to CSV and for printing quick summaries of them.

use clap::Subcommand;

pub mod export;
pub mod summary;

#[derive(Subcommand)]
pub enum Command {
    /// Export the bundled datasets to CSV files
    Export {
        /// Output directory for the exported files
        #[arg(short, long, default_value = "avilight-export")]
        output: String,
    },

    /// Print dataset counts and the yearly richness trend to stdout
    Summary {
        /// Also print per-year tolerance and migration totals
        #[arg(long)]
        trends: bool,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Export { output } => export::run_export(&output),
        Command::Summary { trends } => summary::run_summary(trends),
    }
}

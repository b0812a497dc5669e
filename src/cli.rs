use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "agecalc", version, about = "Check your age in one-click.")]
pub struct Cli {
    /// Date of birth, e.g. 1992-06-14
    #[arg(value_name = "DOB")]
    pub dob: Option<String>,

    /// Reference date instead of the local clock
    #[arg(long, value_name = "DATE")]
    pub today: Option<NaiveDate>,

    /// Print the full report as JSON
    #[arg(long)]
    pub json: bool,

    /// TOML config file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

/// Quotes a paper bag order: pattern size, plano layout, production cost and selling price
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Order to quote (JSON)
    #[arg(short, long, value_name = "FILE")]
    pub input_file: PathBuf,
    /// Folder in which the quote and the plano layout are written
    #[arg(short, long, value_name = "FOLDER")]
    pub solution_folder: PathBuf,
    /// Seller configuration (JSON): plano, margins, cost items and profit margin
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}

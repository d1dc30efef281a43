use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser, Debug)]
#[clap(name = "trivia-dashboard")]
#[clap(about = "OpenTriviaDB questions aggregated by category and difficulty", long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of ~/trivia-dashboard/config.toml
    #[clap(long, global = true)]
    pub config: Option<std::path::PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}

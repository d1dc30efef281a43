use clap::Subcommand;
use crate::enums::output_format::OutputFormat;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a sample configuration file
    Init,
    /// Load questions once and render the dashboard
    Load {
        #[clap(short, long, value_parser = clap::value_parser!(u32).range(1..))]
        amount: Option<u32>,
        #[clap(short, long)]
        category: Option<String>,
        #[clap(short, long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// List the available trivia categories
    Categories {
        #[clap(short, long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Reload the dashboard periodically
    Watch {
        #[clap(short, long, value_parser = clap::value_parser!(u32).range(1..))]
        amount: Option<u32>,
        #[clap(short, long)]
        interval: Option<u64>,
        #[clap(long)]
        iterations: Option<usize>,
        #[clap(short, long)]
        category: Option<String>,
    },
    /// Check the configuration file for problems
    Validate,
}

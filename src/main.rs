use std::process::ExitCode;
use clap::Parser;
use trivia_dashboard::errors::ErrorHandler;
use trivia_dashboard::structs::cli::Cli;
use trivia_dashboard::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut runner = CommandRunner::new(cli.config);

    match runner.run_command(cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ErrorHandler::handle_error(&e);
            ExitCode::FAILURE
        }
    }
}

use std::fs;
use tempfile::TempDir;
use trivia_dashboard::config::config_manager::ConfigManager;
use trivia_dashboard::enums::commands::Commands;
use trivia_dashboard::errors::DashboardError;
use trivia_dashboard::services::opentdb_client::OpenTdbClient;
use trivia_dashboard::workers::command_runner::CommandRunner;

#[tokio::test]
async fn init_then_validate_through_the_runner() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("trivia").join("config.toml");

    let mut runner = CommandRunner::new(Some(path.clone()));
    runner.run_command(Commands::Init).await.expect("init succeeds");
    assert!(path.exists());

    runner.run_command(Commands::Validate).await.expect("sample config is valid");
    assert!(runner.run_command(Commands::Init).await.is_err());
}

#[tokio::test]
async fn validate_reports_bad_values() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "[api]\ndefault_amount = 500\n[output]\nformat = \"xml\"\n").expect("write");

    let mut runner = CommandRunner::new(Some(path));
    match runner.run_command(Commands::Validate).await {
        Err(DashboardError::MultipleErrors { errors, .. }) => assert_eq!(errors.len(), 2),
        other => panic!("expected two validation errors, got {:?}", other),
    }
}

#[test]
fn client_builds_from_config_file() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "[api]\nbase_url = \"http://localhost:8099/\"\nrequest_timeout_secs = 3\nmin_request_interval_secs = 5\n",
    )
    .expect("write");

    let config = ConfigManager::load_from(&path).expect("parses");
    ConfigManager::validate_config(&config).expect("valid");
    let client = OpenTdbClient::from_config(&config.api).expect("client");
    assert_eq!(client.base_url(), "http://localhost:8099");
}

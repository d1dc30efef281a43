use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use crate::config::config_manager::ConfigManager;
use crate::config::constants::{sleep_duration_secs, LOADING_MESSAGE};
use crate::enums::commands::Commands;
use crate::enums::dashboard_view::DashboardView;
use crate::enums::output_format::OutputFormat;
use crate::errors::{DashboardError, DashboardResult};
use crate::logger::animated_logger::AnimatedLogger;
use crate::logger::dashboard_printer::DashboardPrinter;
use crate::services::dashboard_loader::load_trivia_data;
use crate::services::opentdb_client::OpenTdbClient;
use crate::structs::config::config::Config;
use crate::structs::dashboard_state::DashboardState;
use crate::structs::load_ticket::LoadTicket;
use crate::structs::trivia::trivia_data_result::TriviaDataResult;
use crate::structs::watch_report::WatchReport;
use crate::traits::trivia_source::TriviaSource;

pub struct CommandRunner {
    start_time: Option<Instant>,
    config_path: Option<PathBuf>,
}

impl CommandRunner {
    pub fn new(config_path: Option<PathBuf>) -> Self {
        Self {
            start_time: None,
            config_path,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> DashboardResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command(),
            Commands::Load { amount, category, format } => self.load_command(amount, category, format).await,
            Commands::Categories { format } => self.categories_command(format).await,
            Commands::Watch { amount, interval, iterations, category } => {
                self.watch_command(amount, interval, iterations, category).await
            }
            Commands::Validate => self.validate_command(),
        };

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::debug!("⏱️  Command completed in {:.2}s", duration.as_secs_f64());
        }

        result
    }

    fn config_path(&self) -> PathBuf {
        self.config_path.clone().unwrap_or_else(ConfigManager::config_path)
    }

    fn load_config(&self) -> DashboardResult<Config> {
        let config = ConfigManager::load_from(&self.config_path())?;
        ConfigManager::validate_config(&config)?;
        Ok(config)
    }

    fn resolve_format(requested: Option<OutputFormat>, config: &Config) -> OutputFormat {
        requested.unwrap_or_else(|| OutputFormat::from_str(&config.output.format).unwrap_or_default())
    }

    fn init_command(&self) -> DashboardResult<()> {
        log::info!("🚀 Initializing trivia-dashboard configuration...");

        let path = self.config_path();
        match ConfigManager::create_sample_config_at(&path) {
            Ok(()) => {
                log::info!("✅ Configuration file created successfully!");
                log::info!("🔧 Run 'trivia-dashboard validate' to check your configuration.");
                Ok(())
            }
            Err(e) => {
                log::error!("❌ Failed to create configuration: {}", e);
                Err(e)
            }
        }
    }

    fn validate_command(&self) -> DashboardResult<()> {
        let path = self.config_path();
        log::info!("🔍 Validating configuration at {}", path.display());

        let config = ConfigManager::load_from(&path)?;
        ConfigManager::validate_config(&config)?;

        log::info!("✅ Configuration is valid");
        Ok(())
    }

    async fn load_command(
        &self,
        amount: Option<u32>,
        category: Option<String>,
        format: Option<OutputFormat>,
    ) -> DashboardResult<()> {
        let config = self.load_config()?;
        let format = Self::resolve_format(format, &config);
        let amount = amount.unwrap_or(config.api.default_amount);
        let source = OpenTdbClient::from_config(&config.api)?;

        let mut state = DashboardState::new();
        let ticket = state.begin_load();

        let show_spinner = config.output.show_spinner && format == OutputFormat::Text;
        let result = Self::fetch_with_spinner(&source, amount, show_spinner).await;
        state.apply_load(ticket, result);

        if let Some(name) = category {
            if state.error().is_none() {
                state.select_category(Some(name))?;
            }
        }

        Self::render(&state.view(), format, config.output.bar_width)
    }

    async fn categories_command(&self, format: Option<OutputFormat>) -> DashboardResult<()> {
        let config = self.load_config()?;
        let source = OpenTdbClient::from_config(&config.api)?;
        let categories = source.fetch_categories().await;

        match Self::resolve_format(format, &config) {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&categories)?),
            OutputFormat::Text => println!("{}", DashboardPrinter::render_categories(&categories)),
        }
        Ok(())
    }

    async fn watch_command(
        &self,
        amount: Option<u32>,
        interval: Option<u64>,
        iterations: Option<usize>,
        category: Option<String>,
    ) -> DashboardResult<()> {
        let config = self.load_config()?;
        let amount = amount.unwrap_or(config.api.default_amount);
        let interval_secs = interval.unwrap_or(config.watch.interval_secs);
        if interval_secs == 0 {
            return Err(DashboardError::validation_error("interval", "0", "must be positive", None));
        }

        let source: Arc<dyn TriviaSource> = Arc::new(OpenTdbClient::from_config(&config.api)?);
        let printer = DashboardPrinter::new(config.output.bar_width);

        log::info!("👀 Reloading every {}s (Ctrl-C to stop)", interval_secs);
        let report = Self::run_watch_loop(
            source,
            amount,
            sleep_duration_secs(interval_secs),
            iterations,
            category.as_deref(),
            |view| printer.print(view),
        )
        .await;

        log::info!(
            "✅ Watch finished: {} loads started, {} applied, {} superseded",
            report.started,
            report.applied,
            report.finished - report.applied
        );
        Ok(())
    }

    /// Starts a load on every tick and renders each result that is still the
    /// newest. With `iterations` set, exactly that many loads are started and
    /// the loop ends once all of them have come back, so superseded results
    /// still count toward the limit.
    pub async fn run_watch_loop<F>(
        source: Arc<dyn TriviaSource>,
        amount: u32,
        interval: Duration,
        iterations: Option<usize>,
        category: Option<&str>,
        mut render: F,
    ) -> WatchReport
    where
        F: FnMut(&DashboardView),
    {
        let (tx, mut rx) = mpsc::unbounded_channel::<(LoadTicket, TriviaDataResult)>();
        let mut state = DashboardState::new();
        let (mut started, mut finished, mut applied) = (0usize, 0usize, 0usize);
        if iterations == Some(0) {
            return WatchReport { started, finished, applied, state };
        }

        let mut ticker = tokio::time::interval(interval);

        loop {
            let may_start = iterations.map_or(true, |max| started < max);

            tokio::select! {
                _ = ticker.tick(), if may_start => {
                    let ticket = state.begin_load();
                    started += 1;
                    log::info!("🔄 Starting load #{}", ticket.sequence());

                    let source = Arc::clone(&source);
                    let tx = tx.clone();
                    tokio::spawn(async move {
                        let result = load_trivia_data(source.as_ref(), amount).await;
                        let _ = tx.send((ticket, result));
                    });
                }
                Some((ticket, result)) = rx.recv() => {
                    finished += 1;
                    Self::warn_if_rate_limited(&result);

                    if state.apply_load(ticket, result) {
                        applied += 1;

                        if let Some(name) = category {
                            if state.error().is_none() && state.selected_category().is_none() {
                                if let Err(e) = state.select_category(Some(name.to_string())) {
                                    log::warn!("⚠️ {}", e);
                                }
                            }
                        }

                        render(&state.view());
                    }

                    if iterations.is_some_and(|max| finished >= max) {
                        break;
                    }
                }
                _ = tokio::signal::ctrl_c() => {
                    log::info!("🛑 Stopping watch");
                    break;
                }
            }
        }

        WatchReport { started, finished, applied, state }
    }

    fn warn_if_rate_limited(result: &TriviaDataResult) {
        if result.error.as_ref().is_some_and(|e| e.is_rate_limited()) {
            log::warn!("🚦 OpenTDB is rate limiting; set api.min_request_interval_secs = 5 to pace requests");
        }
    }

    async fn fetch_with_spinner(source: &dyn TriviaSource, amount: u32, show_spinner: bool) -> TriviaDataResult {
        if !show_spinner {
            let result = load_trivia_data(source, amount).await;
            Self::warn_if_rate_limited(&result);
            return result;
        }

        let mut spinner = AnimatedLogger::new(LOADING_MESSAGE);
        spinner.start();
        let result = load_trivia_data(source, amount).await;
        Self::warn_if_rate_limited(&result);

        match &result.error {
            Some(error) => spinner.error(&error.message).await,
            None => spinner.stop(&format!("Loaded {} questions", result.questions.len())).await,
        }
        result
    }

    fn render(view: &DashboardView, format: OutputFormat, bar_width: usize) -> DashboardResult<()> {
        match format {
            OutputFormat::Json => println!("{}", view.to_json()?),
            OutputFormat::Text => DashboardPrinter::new(bar_width).print(view),
        }
        Ok(())
    }
}

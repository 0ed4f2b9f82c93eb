use clap::Parser;
use fetch_display::utils::error::ErrorSeverity;
use fetch_display::utils::{logger, validation::Validate};
use fetch_display::{
    CliConfig, ConfiguredSurface, ConsoleNotifier, DisplayOutcome,
    FetchAndDisplay, HttpJsonSource,
};

const EXIT_FETCH_ERROR: i32 = 1;
const EXIT_HTTP_FAILURE: i32 = 2;
const EXIT_CONFIG_ERROR: i32 = 3;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let settings = match cli.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(EXIT_CONFIG_ERROR);
        }
    };

    if cli.log_json {
        logger::init_json_logger(cli.verbose, settings.log_level.as_deref());
    } else {
        logger::init_cli_logger(cli.verbose, settings.log_level.as_deref());
    }

    tracing::debug!("Settings: {:?}", settings);

    if let Err(e) = settings.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(EXIT_CONFIG_ERROR);
    }

    let source = HttpJsonSource::from_config(&settings);
    let notifier = ConsoleNotifier::from_config(&settings);
    let surface = ConfiguredSurface::from_config(&settings);
    tracing::info!("Fetching {}", source.endpoint());

    let engine = FetchAndDisplay::new(source, notifier, surface);

    match engine.run().await {
        Ok(DisplayOutcome::Displayed { .. }) => Ok(()),
        Ok(DisplayOutcome::Failed { status }) => {
            tracing::debug!("Exiting after HTTP status {}", status);
            std::process::exit(EXIT_HTTP_FAILURE);
        }
        Err(e) => {
            tracing::error!("❌ Run failed: {} (Severity: {:?})", e, e.severity());
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());

            let exit_code = match e.severity() {
                ErrorSeverity::High => EXIT_FETCH_ERROR,
                ErrorSeverity::Critical => EXIT_CONFIG_ERROR,
            };
            std::process::exit(exit_code);
        }
    }
}

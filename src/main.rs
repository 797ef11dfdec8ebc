use subnet_matcher::build_report;
use subnet_matcher::config::{self, Settings};
use subnet_matcher::output::print_lines;
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    log4rs::init_file(config::LOG_CONFIG_FILE, Default::default())
        .map_err(|e| format!("Error initializing log4rs from {}: {e}", config::LOG_CONFIG_FILE))?;
    dotenv::dotenv().ok();
    log::info!("#Start main()");

    let settings = Settings::from_env_args().map_err(|e| {
        log::error!("ABORTING: {e}");
        e
    })?;
    log::debug!("settings: {settings:?}");

    let lines = build_report(&settings).await?;
    print_lines(&lines);

    Ok(())
}

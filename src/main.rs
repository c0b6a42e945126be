use anyhow::{anyhow, Context, Result};
use log::{info, warn};

use newsroom::text::FilterRegistry;
use newsroom::{utils, AppConfig, BrowseLimits, BrowseService, Database, Presenter};

fn main() -> Result<()> {
    // Set up logging
    env_logger::init();
    info!("Starting newsroom...");

    let config = AppConfig::from_env().context("Failed to load configuration")?;

    let page = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse::<usize>()
            .map_err(|_| anyhow!("Page number must be a positive integer, got '{}'", arg))?,
        None => 1,
    };

    // Ensure the data directory exists before trying to open the database file
    utils::ensure_directory_exists(&config.database_path)?;
    let database = Database::new(&config.database_path)?;

    // Filters are registered once and shared by every render call
    let presenter = Presenter::new(FilterRegistry::with_builtin_filters(), config.excerpt_words);
    let browse = BrowseService::from_database(&database, BrowseLimits::from(&config));

    let Some(home) = browse.home(page)? else {
        warn!("Home page {} does not exist", page);
        return Err(anyhow!("Page {} not found", page));
    };

    if home.articles.total == 0 {
        warn!("No published articles yet. Nothing to display.");
    }

    let cards = presenter.cards(home.articles);
    println!("{}", serde_json::to_string_pretty(&cards)?);
    Ok(())
}

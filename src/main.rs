use clap::Parser;
use grocery_pricer::core::ConfigProvider;
use grocery_pricer::utils::monitor::SystemMonitor;
use grocery_pricer::utils::{logger, validation::Validate};
use grocery_pricer::{create_router, AppState, CatalogLoader, CliConfig, LocalStorage};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting grocery-pricer");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration resolution failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }
    let monitor = SystemMonitor::new(monitor_enabled);

    // Catalog load failure is fatal: never start serving without prices.
    let storage = LocalStorage::new(".".to_string());
    let loader = CatalogLoader::new(storage);
    let catalog = match loader.load(config.catalog_path()).await {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!(
                "❌ Catalog load failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());

            let exit_code = match e.severity() {
                grocery_pricer::utils::error::ErrorSeverity::Low => 0,
                grocery_pricer::utils::error::ErrorSeverity::Medium => 2,
                grocery_pricer::utils::error::ErrorSeverity::High => 1,
                grocery_pricer::utils::error::ErrorSeverity::Critical => 3,
            };
            std::process::exit(exit_code);
        }
    };

    tracing::info!(
        "📦 Loaded {} catalog entries across {} stores from {}",
        catalog.len(),
        catalog.store_count(),
        config.catalog_path()
    );
    monitor.log_stats("Catalog loaded");

    let state = AppState::new(catalog, &config, monitor);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("🚀 Listening on http://{}", config.bind_addr());
    println!("🚀 Grocery price calculator running on http://{}", config.bind_addr());

    axum::serve(listener, app).await?;

    Ok(())
}

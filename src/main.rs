use clap::Parser;
use sales_dashboard::adapters::http;
use sales_dashboard::utils::monitor::SystemMonitor;
use sales_dashboard::utils::{logger, validation::Validate};
use sales_dashboard::{load_dataset, AppState, CliConfig, SalesEngine};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting sales-dashboard");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 載入並驗證配置
    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Failed to load configuration: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    // 載入資料集 (失敗時自動改用 mock 資料)
    let monitor = Arc::new(SystemMonitor::new());
    let dataset = load_dataset(&config).await;
    tracing::info!(
        "✅ System ready with {} records ({})",
        dataset.records.len(),
        dataset.origin.label()
    );
    monitor.log_stats("Data loaded");

    let engine = SalesEngine::new(dataset);
    let state = AppState::new(engine, monitor, &config);

    if let Err(e) = http::serve(&config, state).await {
        tracing::error!("❌ Server error: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(2);
    }

    Ok(())
}

use clap::Parser;
use customer_etl::config::toml_config::TomlConfig;
use customer_etl::core::ConfigProvider;
use customer_etl::utils::{logger, validation::Validate};
use customer_etl::{CustomerPipeline, EtlEngine, LocalStorage, RunOutcome};

#[derive(Parser)]
#[command(name = "toml-etl")]
#[command(about = "Customer sort driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "customer-etl.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: Option<bool>,

    /// Dry run - show what would be processed without executing
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // 載入 TOML 配置
    let config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 設定檔 log_level = "debug" 等同 --verbose
    let verbose = args.verbose || config.log_level() == Some("debug");
    logger::init_cli_logger(verbose);

    tracing::info!("🚀 Starting TOML-based customer sort");
    tracing::info!("📁 Configuration loaded from: {}", args.config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    display_config_summary(&config);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No reports will be written");
        return Ok(());
    }

    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());

    let storage = LocalStorage::new(config.base_path().to_string());
    let pipeline = CustomerPipeline::new(storage, config)?;
    let engine = EtlEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(RunOutcome::Completed(summary)) => {
            for report in summary.failed() {
                eprintln!("⚠️ Failed to export {}", report.path);
            }
            println!("✅ Processing complete");
        }
        Ok(RunOutcome::NothingToSort) => println!("Nothing to sort"),
        Ok(RunOutcome::InputMissing { path }) => println!("Input file does not exist: {}", path),
        Err(e) => {
            tracing::error!("❌ Processing failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(2);
        }
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig) {
    tracing::info!("📋 Pipeline: {}", config.pipeline.name);
    if !config.pipeline.description.is_empty() {
        tracing::info!("   {}", config.pipeline.description);
    }
    tracing::info!("   Base path: {}", config.base_path());
    tracing::info!("   Input: {}", config.input_path());
    tracing::info!("   Names report: {}", config.names_output_path());
    tracing::info!("   Addresses report: {}", config.addresses_output_path());
    if let Some(path) = config.customers_output_path() {
        tracing::info!("   Customers CSV: {}", path);
    }
    tracing::info!("   Phone pattern: {}", config.phone_pattern());
}

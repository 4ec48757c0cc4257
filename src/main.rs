use clap::Parser;
use customer_etl::utils::{logger, validation::Validate};
use customer_etl::{CliConfig, CustomerPipeline, EtlEngine, LocalStorage, RunOutcome};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting customer-etl");
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let monitor_enabled = config.monitor;

    let storage = LocalStorage::new(config.base_path.clone());
    let pipeline = match CustomerPipeline::new(storage, config) {
        Ok(pipeline) => pipeline,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let engine = EtlEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(RunOutcome::Completed(summary)) => {
            for report in summary.failed() {
                eprintln!("⚠️ Failed to export {}", report.path);
            }
            println!("✅ Processing complete");
            for report in summary.reports.iter().filter(|r| r.written) {
                println!("📁 {} ({} lines)", report.path, report.lines);
            }
        }
        Ok(RunOutcome::NothingToSort) => {
            println!("Nothing to sort");
        }
        Ok(RunOutcome::InputMissing { path }) => {
            println!(
                "Input file does not exist. Make sure it is in the same folder as the executable: {}",
                path
            );
        }
        Err(e) => {
            tracing::error!("❌ Processing failed: {}", e);
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(if e.is_config_error() { 1 } else { 2 });
        }
    }

    Ok(())
}

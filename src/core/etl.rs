use crate::core::{LoadSummary, Pipeline};
use crate::utils::error::{EtlError, Result};
use crate::utils::monitor::SystemMonitor;

/// How a run ended when no unrecoverable error occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Completed(LoadSummary),
    /// No structurally valid customer lines; nothing was written.
    NothingToSort,
    InputMissing { path: String },
}

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<RunOutcome> {
        tracing::info!("Starting customer sort...");
        if self.monitor.is_enabled() {
            tracing::info!("🔍 System monitoring enabled");
        }

        // Extract
        let lines = match self.pipeline.extract().await {
            Ok(lines) => lines,
            Err(EtlError::InputNotFound { path }) => {
                tracing::warn!("Input file does not exist: {}", path);
                return Ok(RunOutcome::InputMissing { path });
            }
            Err(e) => return Err(e),
        };
        tracing::info!("Read {} lines", lines.len());
        self.monitor.log_stats("Extract");

        // Transform
        let result = self.pipeline.transform(lines).await?;
        tracing::info!("Parsed {} customers", result.customers.len());
        self.monitor.log_stats("Transform");

        if result.customers.is_empty() {
            tracing::info!("Nothing to sort");
            self.monitor.log_final_stats();
            return Ok(RunOutcome::NothingToSort);
        }

        // Load
        let summary = self.pipeline.load(result).await?;
        for report in &summary.reports {
            if report.written {
                tracing::info!("Wrote {} lines to {}", report.lines, report.path);
            } else {
                tracing::warn!("Report {} was not written", report.path);
            }
        }
        self.monitor.log_stats("Load");
        self.monitor.log_final_stats();

        Ok(RunOutcome::Completed(summary))
    }
}

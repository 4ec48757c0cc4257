pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{toml_config::TomlConfig, LocalStorage};

pub use app::pipelines::CustomerPipeline;
pub use crate::core::etl::{EtlEngine, RunOutcome};
pub use domain::model::{Customer, LoadSummary, NameCount, NameField, ReportStatus};
pub use domain::services::{
    group_and_sort_by_name, is_phone_number, is_valid_line, parse_data, sort_by_street_name,
};
pub use utils::error::{EtlError, Result};

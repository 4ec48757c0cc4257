use crate::core::ConfigProvider;
use crate::domain::services::DEFAULT_PHONE_PATTERN;
use crate::utils::error::{EtlError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

const REQUIRED_SECTIONS: [&str; 3] = ["pipeline", "source", "load"];

fn parse_error(e: toml::de::Error) -> EtlError {
    EtlError::ConfigValidationError {
        field: "toml_parsing".to_string(),
        message: format!("TOML parsing error: {}", e),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub pipeline: PipelineConfig,
    pub source: SourceConfig,
    #[serde(default)]
    pub validation: ValidationConfig,
    pub load: LoadConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub input_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    #[serde(default = "default_phone_pattern")]
    pub phone_pattern: String,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            phone_pattern: default_phone_pattern(),
        }
    }
}

fn default_phone_pattern() -> String {
    DEFAULT_PHONE_PATTERN.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    /// 相對路徑的根目錄
    pub base_path: Option<String>,
    pub names_report: String,
    pub addresses_report: String,
    pub customers_csv: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
    pub log_level: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(EtlError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        let table: toml::Table = toml::from_str(&processed_content).map_err(parse_error)?;
        if let Some(section) = REQUIRED_SECTIONS.iter().find(|s| !table.contains_key(**s)) {
            return Err(EtlError::MissingConfigError {
                field: format!("[{}]", section),
            });
        }

        toml::Value::Table(table).try_into().map_err(parse_error)
    }

    /// 替換環境變數 (例如 ${DATA_DIR})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("pipeline.name", &self.pipeline.name)?;
        validation::validate_path("source.input_path", &self.source.input_path)?;
        validation::validate_path("load.names_report", &self.load.names_report)?;
        validation::validate_path("load.addresses_report", &self.load.addresses_report)?;
        if let Some(base_path) = &self.load.base_path {
            validation::validate_path("load.base_path", base_path)?;
        }
        if let Some(path) = &self.load.customers_csv {
            validation::validate_path("load.customers_csv", path)?;
        }
        validation::validate_phone_pattern("validation.phone_pattern", &self.validation.phone_pattern)?;

        let mut paths = vec![
            ("source.input_path", self.source.input_path.as_str()),
            ("load.names_report", self.load.names_report.as_str()),
            ("load.addresses_report", self.load.addresses_report.as_str()),
        ];
        if let Some(path) = self.load.customers_csv.as_deref() {
            paths.push(("load.customers_csv", path));
        }
        validation::validate_distinct_paths(&paths)
    }

    pub fn base_path(&self) -> &str {
        self.load.base_path.as_deref().unwrap_or(".")
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }

    pub fn log_level(&self) -> Option<&str> {
        self.monitoring.as_ref().and_then(|m| m.log_level.as_deref())
    }
}

impl ConfigProvider for TomlConfig {
    fn input_path(&self) -> &str {
        &self.source.input_path
    }

    fn names_output_path(&self) -> &str {
        &self.load.names_report
    }

    fn addresses_output_path(&self) -> &str {
        &self.load.addresses_report
    }

    fn customers_output_path(&self) -> Option<&str> {
        self.load.customers_csv.as_deref()
    }

    fn phone_pattern(&self) -> &str {
        &self.validation.phone_pattern
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

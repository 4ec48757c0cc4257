use crate::core::ConfigProvider;
use crate::domain::services::DEFAULT_PHONE_PATTERN;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "customer-etl")]
#[command(about = "Sorts customer records into name frequency and street name reports")]
pub struct CliConfig {
    /// Comma separated customer file: FirstName,LastName,Address,PhoneNumber
    #[arg(long, default_value = super::DEFAULT_INPUT_PATH)]
    pub input: String,

    #[arg(long, default_value = super::DEFAULT_NAMES_OUTPUT_PATH)]
    pub names_output: String,

    #[arg(long, default_value = super::DEFAULT_ADDRESSES_OUTPUT_PATH)]
    pub addresses_output: String,

    /// Also write the cleaned customer records as CSV
    #[arg(long)]
    pub customers_output: Option<String>,

    /// Directory that relative paths are resolved against
    #[arg(long, default_value = ".")]
    pub base_path: String,

    #[arg(long, default_value = DEFAULT_PHONE_PATTERN)]
    pub phone_pattern: String,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log as JSON lines on stderr")]
    pub json_logs: bool,

    #[arg(long, help = "Log CPU and memory usage per phase")]
    pub monitor: bool,
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input
    }

    fn names_output_path(&self) -> &str {
        &self.names_output
    }

    fn addresses_output_path(&self) -> &str {
        &self.addresses_output
    }

    fn customers_output_path(&self) -> Option<&str> {
        self.customers_output.as_deref()
    }

    fn phone_pattern(&self) -> &str {
        &self.phone_pattern
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("input", &self.input)?;
        validation::validate_path("names_output", &self.names_output)?;
        validation::validate_path("addresses_output", &self.addresses_output)?;
        validation::validate_path("base_path", &self.base_path)?;
        if let Some(path) = &self.customers_output {
            validation::validate_path("customers_output", path)?;
        }
        validation::validate_phone_pattern("phone_pattern", &self.phone_pattern)?;

        let mut outputs = vec![
            ("input", self.input.as_str()),
            ("names_output", self.names_output.as_str()),
            ("addresses_output", self.addresses_output.as_str()),
        ];
        if let Some(path) = self.customers_output.as_deref() {
            outputs.push(("customers_output", path));
        }
        validation::validate_distinct_paths(&outputs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::parse_from(["customer-etl"]);

        assert_eq!(config.input_path(), "./data.csv");
        assert_eq!(config.names_output_path(), "./output1.txt");
        assert_eq!(config.addresses_output_path(), "./output2.txt");
        assert_eq!(config.customers_output_path(), None);
        assert_eq!(config.phone_pattern(), DEFAULT_PHONE_PATTERN);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides_and_validation() {
        let config = CliConfig::parse_from([
            "customer-etl",
            "--input",
            "customers.txt",
            "--customers-output",
            "clean.csv",
            "--phone-pattern",
            "^[0-9",
        ]);

        assert_eq!(config.input_path(), "customers.txt");
        assert_eq!(config.customers_output_path(), Some("clean.csv"));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_same_output_twice_is_rejected() {
        let config = CliConfig::parse_from([
            "customer-etl",
            "--names-output",
            "out.txt",
            "--addresses-output",
            "out.txt",
        ]);

        assert!(config.validate().is_err());
    }
}

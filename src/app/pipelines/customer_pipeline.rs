use crate::core::report::{export_customers, export_list};
use crate::core::{ConfigProvider, LoadSummary, Pipeline, ReportStatus, Storage, TransformResult};
use crate::domain::services::{group_and_sort_by_name, parse_data, sort_by_street_name, PhoneValidator};
use crate::utils::error::Result;

/// Reads the customer file, builds the name and street reports and writes them.
pub struct CustomerPipeline<S: Storage, C: ConfigProvider> {
    pub(crate) storage: S,
    pub(crate) config: C,
    phone_validator: PhoneValidator,
}

impl<S: Storage, C: ConfigProvider> CustomerPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Result<Self> {
        let phone_validator = PhoneValidator::new(config.phone_pattern())?;
        Ok(Self {
            storage,
            config,
            phone_validator,
        })
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for CustomerPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<String>> {
        let path = self.config.input_path();
        tracing::debug!("Reading customers from: {}", path);

        let data = self.storage.read_file(path).await?;
        let content = String::from_utf8_lossy(&data);
        let content = content.strip_prefix('\u{feff}').unwrap_or(&content);

        Ok(split_lines(content))
    }

    async fn transform(&self, lines: Vec<String>) -> Result<TransformResult> {
        let customers = parse_data(&lines);
        tracing::debug!(
            "{} of {} lines were valid customer records",
            customers.len(),
            lines.len()
        );

        let invalid_phone_numbers = customers
            .iter()
            .filter(|c| !self.phone_validator.is_match(&c.phone_number))
            .inspect(|c| {
                tracing::debug!(
                    "Unrecognised phone number '{}' for {} {}",
                    c.phone_number,
                    c.first_name,
                    c.last_name
                )
            })
            .count();
        if invalid_phone_numbers > 0 {
            tracing::warn!(
                "{} customers have a phone number not matching {}",
                invalid_phone_numbers,
                self.phone_validator.pattern()
            );
        }

        let name_report = group_and_sort_by_name(&customers);
        let address_report = sort_by_street_name(&customers)
            .into_iter()
            .map(|c| c.address)
            .collect();

        Ok(TransformResult {
            customers,
            name_report,
            address_report,
            invalid_phone_numbers,
        })
    }

    async fn load(&self, result: TransformResult) -> Result<LoadSummary> {
        let mut summary = LoadSummary::default();

        let names_path = self.config.names_output_path();
        summary.reports.push(ReportStatus {
            path: names_path.to_string(),
            lines: result.name_report.len(),
            written: export_list(&self.storage, &result.name_report, names_path).await,
        });

        let addresses_path = self.config.addresses_output_path();
        summary.reports.push(ReportStatus {
            path: addresses_path.to_string(),
            lines: result.address_report.len(),
            written: export_list(&self.storage, &result.address_report, addresses_path).await,
        });

        if let Some(customers_path) = self.config.customers_output_path() {
            summary.reports.push(ReportStatus {
                path: customers_path.to_string(),
                lines: result.customers.len(),
                written: export_customers(&self.storage, &result.customers, customers_path).await,
            });
        }

        Ok(summary)
    }
}

/// Splits on `\n`, `\r\n` or a lone `\r`. A trailing terminator does not
/// produce an extra empty line.
fn split_lines(content: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = content;
    while !rest.is_empty() {
        match rest.find(['\r', '\n']) {
            Some(end) => {
                lines.push(rest[..end].to_string());
                let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[end + terminator..];
            }
            None => {
                lines.push(rest.to_string());
                break;
            }
        }
    }
    lines
}

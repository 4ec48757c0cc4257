use serde::Serialize;
use std::fmt;

/// One customer row. Absent values are represented by empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Customer {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub phone_number: String,
}

impl Customer {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        address: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            address: address.into(),
            phone_number: phone_number.into(),
        }
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[")?;
        writeln!(f, "  FirstName : {}", self.first_name)?;
        writeln!(f, "  LastName : {}", self.last_name)?;
        writeln!(f, "  Address : {}", self.address)?;
        writeln!(f, "  PhoneNumber : {}", self.phone_number)?;
        write!(f, "]")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameField {
    First,
    Last,
}

/// Occurrence count of a name within a single grouping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameCount {
    pub name: String,
    pub count: usize,
    pub field: NameField,
}

impl fmt::Display for NameCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.name, self.count)
    }
}

#[derive(Debug, Clone, Default)]
pub struct TransformResult {
    pub customers: Vec<Customer>,
    pub name_report: Vec<String>,
    pub address_report: Vec<String>,
    pub invalid_phone_numbers: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportStatus {
    pub path: String,
    pub lines: usize,
    pub written: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub reports: Vec<ReportStatus>,
}

impl LoadSummary {
    pub fn all_written(&self) -> bool {
        self.reports.iter().all(|r| r.written)
    }

    pub fn failed(&self) -> impl Iterator<Item = &ReportStatus> {
        self.reports.iter().filter(|r| !r.written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_display_block() {
        let customer = Customer::new("First", "Last", "1 Main Street", "0123456");
        assert_eq!(
            customer.to_string(),
            "[\n  FirstName : First\n  LastName : Last\n  Address : 1 Main Street\n  PhoneNumber : 0123456\n]"
        );
    }

    #[test]
    fn test_name_count_renders_empty_name() {
        let entry = NameCount {
            name: String::new(),
            count: 2,
            field: NameField::Last,
        };
        assert_eq!(entry.to_string(), " : 2");
    }
}

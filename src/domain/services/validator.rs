use crate::utils::error::Result;
use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

/// Seven or eight digits and nothing else.
pub const DEFAULT_PHONE_PATTERN: &str = "^[0-9]{7,8}$";

/// Number of comma separated fields in a customer line.
pub const FIELD_COUNT: usize = 4;

static DEFAULT_VALIDATOR: LazyLock<PhoneValidator> = LazyLock::new(PhoneValidator::default);

#[derive(Debug, Clone)]
pub struct PhoneValidator {
    pattern: Regex,
}

impl PhoneValidator {
    pub fn new(pattern: &str) -> Result<Self> {
        let pattern = RegexBuilder::new(pattern).case_insensitive(true).build()?;
        Ok(Self { pattern })
    }

    pub fn is_match(&self, phone_number: &str) -> bool {
        self.pattern.is_match(phone_number)
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Default for PhoneValidator {
    fn default() -> Self {
        Self::new(DEFAULT_PHONE_PATTERN).expect("default phone pattern is valid")
    }
}

pub fn is_phone_number(phone_number: &str) -> bool {
    DEFAULT_VALIDATOR.is_match(phone_number)
}

/// Structural check only; field contents are not inspected.
pub fn is_valid_line<S: AsRef<str>>(fields: &[S]) -> bool {
    fields.len() == FIELD_COUNT
}

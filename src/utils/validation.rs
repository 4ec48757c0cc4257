use crate::domain::services::PhoneValidator;
use crate::utils::error::{EtlError, Result};
use std::path::{Component, Path, PathBuf};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_phone_pattern(field_name: &str, pattern: &str) -> Result<()> {
    validate_non_empty_string(field_name, pattern)?;
    PhoneValidator::new(pattern).map_err(|e| EtlError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: pattern.to_string(),
        reason: format!("Invalid regular expression: {}", e),
    })?;
    Ok(())
}

/// Reports written to the same file would overwrite each other.
/// `./a.txt`, `a.txt` and `a//b/./c` style spellings compare equal.
pub fn validate_distinct_paths(paths: &[(&str, &str)]) -> Result<()> {
    let normalized: Vec<PathBuf> = paths.iter().map(|(_, p)| normalize_path(p)).collect();
    for (i, (field, path)) in paths.iter().enumerate() {
        if let Some(j) = normalized[..i].iter().position(|p| *p == normalized[i]) {
            let other = paths[j].0;
            return Err(EtlError::InvalidConfigValueError {
                field: field.to_string(),
                value: path.to_string(),
                reason: format!("Same path as '{}'", other),
            });
        }
    }
    Ok(())
}

fn normalize_path(path: &str) -> PathBuf {
    Path::new(path)
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

use crate::utils::error::{BankError, Result};
use rust_decimal::Decimal;
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(BankError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(BankError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(BankError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| BankError::MissingConfigError {
        field: field_name.to_string(),
    })
}

/// 不分大小寫，前後空白忽略
pub fn validate_allowed_values(field_name: &str, values: &[String], allowed: &[&str]) -> Result<()> {
    let allowed_set: HashSet<String> = allowed.iter().map(|a| a.to_ascii_lowercase()).collect();

    for value in values {
        if !allowed_set.contains(&value.trim().to_ascii_lowercase()) {
            return Err(BankError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: value.clone(),
                reason: format!("Unsupported value. Allowed values: {}", allowed.join(", ")),
            });
        }
    }

    Ok(())
}

/// 負數金額不會被拒絕，只記錄警告
pub fn warn_if_negative(field_name: &str, amount: Decimal) {
    if amount.is_sign_negative() && !amount.is_zero() {
        tracing::warn!(
            "⚠️ {} is negative ({}); it will be applied as given",
            field_name,
            amount
        );
    }
}

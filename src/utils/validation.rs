use crate::utils::error::{Result, VoucherError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(VoucherError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(VoucherError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_negative_amount(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(VoucherError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a finite number greater than or equal to 0".to_string(),
        });
    }
    Ok(())
}

// Request-level checks below report `ValidationError`, not config errors.

pub fn validate_code(code: &str) -> Result<()> {
    if code.trim().is_empty() {
        return Err(VoucherError::validation(
            "code",
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

pub fn validate_discount(discount: u32) -> Result<()> {
    validate_range("discount", discount, 0, 100)
}

pub fn validate_purchase_amount(amount: f64) -> Result<()> {
    if !amount.is_finite() {
        return Err(VoucherError::validation(
            "amount",
            format!("{} is not a valid purchase amount", amount),
        ));
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(VoucherError::validation(
            field_name,
            format!("{} must be between {} and {}", value, min, max),
        ));
    }
    Ok(())
}

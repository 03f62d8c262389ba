use serde::Serialize;
use thiserror::Error;

pub const VOUCHER_ALREADY_EXISTS: &str = "Voucher already exist.";
pub const VOUCHER_DOES_NOT_EXIST: &str = "Voucher does not exist.";

#[derive(Error, Debug)]
pub enum VoucherError {
    #[error("{message}")]
    Conflict { message: String },

    #[error("Validation error on '{field}': {message}")]
    ValidationError { field: String, message: String },

    #[error("Voucher '{code}' not found in store")]
    NotFound { code: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error on '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Conflict,
    Validation,
    NotFound,
    Config,
    Storage,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Conflict => "conflict",
            ErrorKind::Validation => "validation",
            ErrorKind::NotFound => "not_found",
            ErrorKind::Config => "config",
            ErrorKind::Storage => "storage",
        }
    }
}

/// Caller-facing error payload, `{ "message": ..., "type": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl VoucherError {
    pub fn already_exists() -> Self {
        VoucherError::Conflict {
            message: VOUCHER_ALREADY_EXISTS.to_string(),
        }
    }

    pub fn does_not_exist() -> Self {
        VoucherError::Conflict {
            message: VOUCHER_DOES_NOT_EXIST.to_string(),
        }
    }

    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        VoucherError::ValidationError {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            VoucherError::Conflict { .. } => ErrorKind::Conflict,
            VoucherError::ValidationError { .. } => ErrorKind::Validation,
            VoucherError::NotFound { .. } => ErrorKind::NotFound,
            VoucherError::ConfigError { .. }
            | VoucherError::ConfigValidationError { .. }
            | VoucherError::InvalidConfigValueError { .. } => ErrorKind::Config,
            VoucherError::IoError(_) | VoucherError::SerializationError(_) => ErrorKind::Storage,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            VoucherError::Conflict { message } => message.clone(),
            VoucherError::ValidationError { field, message } => {
                format!("Invalid {}: {}", field, message)
            }
            VoucherError::NotFound { code } => format!("Voucher '{}' is not stored", code),
            VoucherError::IoError(e) => format!("Could not access the voucher store: {}", e),
            VoucherError::SerializationError(e) => {
                format!("The voucher store is corrupted: {}", e)
            }
            other => other.to_string(),
        }
    }

    pub fn to_body(&self) -> ErrorBody {
        ErrorBody {
            message: self.user_friendly_message(),
            kind: self.kind().as_str().to_string(),
        }
    }

    /// Process exit code used by the CLI.
    pub fn exit_code(&self) -> i32 {
        match self.kind() {
            ErrorKind::Conflict | ErrorKind::Validation => 1,
            ErrorKind::Config => 2,
            ErrorKind::NotFound | ErrorKind::Storage => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, VoucherError>;

use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BankError {
    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds { requested: Decimal, available: Decimal },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid operation '{input}': {reason}")]
    InvalidOperation { input: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Domain,
    Configuration,
    Input,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl BankError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            BankError::InsufficientFunds { .. } => ErrorCategory::Domain,
            BankError::ConfigError { .. }
            | BankError::ConfigValidationError { .. }
            | BankError::InvalidConfigValueError { .. }
            | BankError::MissingConfigError { .. } => ErrorCategory::Configuration,
            BankError::InvalidOperation { .. } => ErrorCategory::Input,
            BankError::IoError(_) | BankError::CsvError(_) | BankError::SerializationError(_) => {
                ErrorCategory::System
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Domain => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            BankError::InsufficientFunds { available, .. } => {
                format!("Withdraw at most {} or deposit more funds first", available)
            }
            BankError::IoError(_) => {
                "Check that the path exists and that you have permission to write it".to_string()
            }
            BankError::CsvError(_) | BankError::SerializationError(_) => {
                "The statement could not be rendered; re-run with --verbose for details".to_string()
            }
            BankError::ConfigError { .. } | BankError::ConfigValidationError { .. } => {
                "Check the configuration file syntax against the documented layout".to_string()
            }
            BankError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' and try again", field)
            }
            BankError::MissingConfigError { field } => {
                format!("Add '{}' to the configuration", field)
            }
            BankError::InvalidOperation { .. } => {
                "Use deposit:<amount>, withdraw:<amount> or balance".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            BankError::InsufficientFunds {
                requested,
                available,
            } => format!(
                "Cannot withdraw {}: only {} available",
                requested, available
            ),
            BankError::IoError(e) => format!("File operation failed: {}", e),
            BankError::MissingConfigError { field } => {
                format!("Required setting '{}' is missing", field)
            }
            other => other.to_string(),
        }
    }

    /// 根據錯誤嚴重程度決定退出碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn is_insufficient_funds(&self) -> bool {
        matches!(self, BankError::InsufficientFunds { .. })
    }
}

pub type Result<T> = std::result::Result<T, BankError>;

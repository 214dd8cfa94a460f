use thiserror::Error;

#[derive(Error, Debug)]
pub enum SalesError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid query parameter {field}='{value}': {reason}")]
    InvalidParameter {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Data loading error: {message}")]
    DataLoadError { message: String },

    #[error("Internal error: {message}")]
    InternalError { message: String },
}

impl SalesError {
    pub fn invalid_parameter(field: &str, value: &str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// 由呼叫端輸入造成的錯誤 (HTTP 400)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. })
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::CsvError(_) => "The sales CSV file could not be parsed".to_string(),
            Self::IoError(_) => "An I/O operation failed".to_string(),
            Self::ConfigValidationError { field, .. }
            | Self::InvalidConfigValueError { field, .. } => {
                format!("Please check the '{}' configuration setting", field)
            }
            Self::InvalidParameter { field, reason, .. } => {
                format!("Invalid '{}' parameter: {}", field, reason)
            }
            Self::DataLoadError { .. } => "Sales data could not be loaded".to_string(),
            Self::InternalError { .. } => "An unexpected error occurred".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SalesError>;

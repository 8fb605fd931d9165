use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatrixError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Client error: HTTP {status} from {url}")]
    ClientError { status: u16, url: String },

    #[error("Server error: HTTP {status} from {url}")]
    ServerError { status: u16, url: String },

    #[error("There is problem with connection to {url}: {message}")]
    ConnectionError { url: String, message: String },

    #[error("Timeout error while fetching {url}: {message}")]
    TimeoutError { url: String, message: String },

    #[error("Malformed row at line {line}: {reason}")]
    MalformedRow { line: usize, reason: String },

    #[error("Matrix is not squared: {rows} rows but row {row} has {columns} columns")]
    NotSquare {
        rows: usize,
        row: usize,
        columns: usize,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Config,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl MatrixError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            MatrixError::ApiError(_)
            | MatrixError::ClientError { .. }
            | MatrixError::ServerError { .. }
            | MatrixError::ConnectionError { .. }
            | MatrixError::TimeoutError { .. } => ErrorCategory::Network,
            MatrixError::MalformedRow { .. } | MatrixError::NotSquare { .. } => {
                ErrorCategory::Data
            }
            MatrixError::ConfigError { .. }
            | MatrixError::InvalidConfigValueError { .. } => ErrorCategory::Config,
            MatrixError::IoError(_) | MatrixError::SerializationError(_) => {
                ErrorCategory::System
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Config | ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            MatrixError::ClientError { .. } => "Check that the URL points to an existing grid file",
            MatrixError::ServerError { .. } => "The remote server failed, try again later",
            MatrixError::ConnectionError { .. } | MatrixError::ApiError(_) => {
                "Check the network connection and the host name"
            }
            MatrixError::TimeoutError { .. } => "Increase --timeout-seconds or retry later",
            MatrixError::MalformedRow { .. } => {
                "Every data row must look like '| 1 | 2 |' with integer cells"
            }
            MatrixError::NotSquare { .. } => "The grid must have as many columns as rows",
            MatrixError::IoError(_) => "Check that the file exists and is readable",
            MatrixError::SerializationError(_) => "Report this as a bug",
            MatrixError::ConfigError { .. } | MatrixError::InvalidConfigValueError { .. } => {
                "Fix the command line flags or the TOML config file"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Could not download the matrix: {}", self),
            ErrorCategory::Data => format!("The downloaded grid is invalid: {}", self),
            ErrorCategory::Config => format!("Invalid configuration: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, MatrixError>;

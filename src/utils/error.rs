use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Invalid argument '{field}' = {value}: {reason}")]
    InvalidArgument {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Out-of-domain value supplied by the caller.
    Input,
    Configuration,
    System,
}

impl CalcError {
    pub fn invalid_argument(
        field: impl Into<String>,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidArgument {
            field: field.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidArgument { .. } => ErrorCategory::Input,
            Self::Config { .. } | Self::TomlParse(_) => ErrorCategory::Configuration,
            Self::Io(_) | Self::Serialization(_) => ErrorCategory::System,
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Short message suitable for showing next to an input field.
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidArgument { field, reason, .. } => format!("{}: {}", field, reason),
            Self::Config { message } => format!("Invalid configuration: {}", message),
            Self::TomlParse(e) => format!("Configuration file is not valid TOML: {}", e.message()),
            Self::Io(e) => format!("Could not read file: {}", e),
            Self::Serialization(e) => format!("Could not render output: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => "Check that dimensions and amounts are non-negative and percentages are between 0 and 100",
            ErrorCategory::Configuration => "Fix the configuration file or pass the value on the command line",
            ErrorCategory::System => "Check file permissions and retry; report the problem if it persists",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Input => 1,
            ErrorCategory::Configuration => 2,
            ErrorCategory::System => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = CalcError::invalid_argument("length", -5.0, "must be non-negative");
        assert_eq!(
            err.to_string(),
            "Invalid argument 'length' = -5: must be non-negative"
        );
        assert_eq!(err.category(), ErrorCategory::Input);
        assert!(err.is_invalid_argument());
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_io_error_category() {
        let err: CalcError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert_eq!(err.category(), ErrorCategory::System);
        assert_eq!(err.exit_code(), 3);
        assert!(!err.is_invalid_argument());
    }

    #[test]
    fn test_config_error_message() {
        let err = CalcError::config("currency.suffix cannot be empty");
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(err
            .user_friendly_message()
            .contains("currency.suffix cannot be empty"));
    }
}

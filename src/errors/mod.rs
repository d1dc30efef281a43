use std::fmt;
use std::error::Error as StdError;

/// Failures outside the trivia API itself. API failures are data
/// (`ApiError`) and are rendered, not raised.
#[derive(Debug, Clone)]
pub enum DashboardError {
    ConfigurationError {
        message: String,
        suggestion: Option<String>,
    },
    ConfigurationFileError {
        path: String,
        reason: String,
    },
    ParseError {
        format: String,
        line: Option<usize>,
        reason: String,
    },
    ValidationError {
        field: String,
        value: String,
        constraint: String,
        suggestion: Option<String>,
    },
    IoError {
        reason: String,
    },
    ClientSetupError {
        reason: String,
    },
    // Configuration validation reports every problem at once
    MultipleErrors {
        errors: Vec<DashboardError>,
        context: String,
    },
}

impl DashboardError {
    pub fn config_error(message: &str, suggestion: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            suggestion: suggestion.map(|s| s.to_string()),
        }
    }

    pub fn config_file_error(path: &str, reason: &str) -> Self {
        Self::ConfigurationFileError {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn validation_error(field: &str, value: &str, constraint: &str, suggestion: Option<&str>) -> Self {
        Self::ValidationError {
            field: field.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
            suggestion: suggestion.map(|s| s.to_string()),
        }
    }

    /// True when editing the config file or the command line fixes it.
    pub fn is_input_error(&self) -> bool {
        match self {
            Self::IoError { .. } | Self::ClientSetupError { .. } => false,
            Self::MultipleErrors { errors, .. } => errors.iter().all(|e| e.is_input_error()),
            _ => true,
        }
    }
}

fn write_suggestion(f: &mut fmt::Formatter<'_>, suggestion: &Option<String>) -> fmt::Result {
    match suggestion {
        Some(suggestion) => write!(f, "\n💡 Suggestion: {}", suggestion),
        None => Ok(()),
    }
}

impl fmt::Display for DashboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigurationError { message, suggestion } => {
                write!(f, "Configuration error: {}", message)?;
                write_suggestion(f, suggestion)
            }
            Self::ConfigurationFileError { path, reason } => {
                write!(f, "Cannot read configuration file '{}': {}", path, reason)
            }
            Self::ParseError { format, line, reason } => {
                write!(f, "Invalid {}: {}", format, reason)?;
                if let Some(line) = line {
                    write!(f, " (line {})", line)?;
                }
                Ok(())
            }
            Self::ValidationError { field, value, constraint, suggestion } => {
                write!(f, "Invalid value '{}' for '{}': {}", value, field, constraint)?;
                write_suggestion(f, suggestion)
            }
            Self::IoError { reason } => write!(f, "I/O error: {}", reason),
            Self::ClientSetupError { reason } => write!(f, "Cannot create HTTP client: {}", reason),
            Self::MultipleErrors { errors, context } => {
                write!(f, "{} problems found during {}:", errors.len(), context)?;
                for (i, error) in errors.iter().enumerate() {
                    write!(f, "\n  {}. {}", i + 1, error.to_string().replace('\n', "\n     "))?;
                }
                Ok(())
            }
        }
    }
}

impl StdError for DashboardError {}

pub type DashboardResult<T> = Result<T, DashboardError>;

pub struct ErrorHandler;

impl ErrorHandler {
    pub fn handle_error(error: &DashboardError) {
        log::debug!("{:?}", error);
        eprintln!("❌ {}", error);

        if error.is_input_error() {
            eprintln!("🔧 Fix the input above, then run 'trivia-dashboard validate' to check the configuration");
        }
    }
}

impl From<std::io::Error> for DashboardError {
    fn from(error: std::io::Error) -> Self {
        DashboardError::IoError {
            reason: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for DashboardError {
    fn from(error: serde_json::Error) -> Self {
        DashboardError::ParseError {
            format: "JSON".to_string(),
            line: Some(error.line()),
            reason: error.to_string(),
        }
    }
}

impl From<toml::de::Error> for DashboardError {
    fn from(error: toml::de::Error) -> Self {
        DashboardError::ParseError {
            format: "TOML".to_string(),
            line: None,
            reason: error.message().to_string(),
        }
    }
}

impl From<reqwest::Error> for DashboardError {
    fn from(error: reqwest::Error) -> Self {
        DashboardError::ClientSetupError {
            reason: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiple_errors_list_every_problem() {
        let error = DashboardError::MultipleErrors {
            errors: vec![
                DashboardError::validation_error("api.default_amount", "0", "must be between 1 and 50", None),
                DashboardError::validation_error("watch.interval_secs", "0", "must be positive", Some("Use 30")),
            ],
            context: "configuration validation".to_string(),
        };
        let message = error.to_string();
        assert!(message.starts_with("2 problems found during configuration validation:"));
        assert!(message.contains("  1. Invalid value '0' for 'api.default_amount'"));
        assert!(message.contains("\n     💡 Suggestion: Use 30"));
        assert!(error.is_input_error());
    }

    #[test]
    fn io_failures_are_not_input_errors() {
        let error = DashboardError::from(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"));
        assert!(!error.is_input_error());
        assert_eq!(error.to_string(), "I/O error: denied");
    }

    #[test]
    fn validation_message_includes_suggestion() {
        let error = DashboardError::validation_error("category", "Nope", "must have questions", Some("Pick another"));
        let message = error.to_string();
        assert!(message.contains("'category'"));
        assert!(message.contains("Pick another"));
    }
}

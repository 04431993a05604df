use thiserror::Error;

#[derive(Error, Debug)]
pub enum VocabError {
    #[error("Workbook not found: {path}")]
    WorkbookNotFound { path: String },

    #[error("Failed to read workbook {path}: {source}")]
    Workbook {
        path: String,
        #[source]
        source: calamine::Error,
    },

    #[error("IO operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to serialize vocabulary: {source}")]
    Serialization {
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write output file {path}: {message}")]
    OutputWrite { path: String, message: String },
}

pub trait UserFriendlyError {
    fn user_message(&self) -> String;
    fn suggestion(&self) -> Option<String>;
}

impl UserFriendlyError for VocabError {
    fn user_message(&self) -> String {
        match self {
            VocabError::WorkbookNotFound { path } => {
                format!("Workbook not found: {}", path)
            }
            VocabError::Workbook { path, source } => {
                format!("Could not read workbook {}: {}", path, source)
            }
            VocabError::Config { message } => {
                format!("Configuration error: {}", message)
            }
            VocabError::Serialization { source } => {
                format!("Could not serialize vocabulary to JSON: {}", source)
            }
            VocabError::OutputWrite { path, message } => {
                format!("Could not write {}: {}", path, message)
            }
            _ => self.to_string(),
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            VocabError::WorkbookNotFound { .. } => Some(
                "Pass the workbook path as the first argument or set `workbook` under [input] in the configuration file.".to_string()
            ),
            VocabError::Workbook { .. } => Some(
                "Make sure the file is a valid .xlsx, .xls, .xlsb or .ods workbook and is not open in another program.".to_string()
            ),
            VocabError::Config { .. } => Some(
                "Check your configuration file syntax. Run with --generate-config to get a complete sample.".to_string()
            ),
            VocabError::OutputWrite { .. } => Some(
                "Ensure the output directory exists and is writable.".to_string()
            ),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for VocabError {
    fn from(error: toml::de::Error) -> Self {
        VocabError::Config {
            message: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for VocabError {
    fn from(source: serde_json::Error) -> Self {
        VocabError::Serialization { source }
    }
}

pub type Result<T> = std::result::Result<T, VocabError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_friendly_messages() {
        let error = VocabError::WorkbookNotFound {
            path: "missing.xlsx".to_string(),
        };
        assert!(error.user_message().contains("missing.xlsx"));
        assert!(error.suggestion().is_some());
    }

    #[test]
    fn test_io_error_has_no_suggestion() {
        let error = VocabError::from(std::io::Error::from(std::io::ErrorKind::Other));
        assert!(error.user_message().starts_with("IO operation failed"));
        assert!(error.suggestion().is_none());
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_error = toml::from_str::<toml::Value>("not = [valid").unwrap_err();
        let error = VocabError::from(toml_error);
        assert!(matches!(error, VocabError::Config { .. }));
    }
}

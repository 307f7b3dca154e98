use serde::{Deserialize, Serialize};

const ERROR_PREFIX: &str = "Error: ";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ErrorInfo {
    pub message: String,
}

impl ErrorInfo {
    /// Builds the error from a raw failure, dropping a leading `"Error: "`.
    pub fn from_raw<E: std::fmt::Display>(raw: E) -> Self {
        let raw = raw.to_string();

        ErrorInfo {
            message: raw.strip_prefix(ERROR_PREFIX).unwrap_or(&raw).to_string(),
        }
    }
}

impl std::fmt::Display for ErrorInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ErrorInfo {}

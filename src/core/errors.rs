//! Shared error types for the engine and its loaders

use thiserror::Error;

/// Main error type for recoveriq operations
#[derive(Debug, Error)]
pub enum Error {
    /// A required column is present but holds a value of the wrong type
    #[error("Schema error in column '{column}' (row {row}): expected {expected}, found '{value}'")]
    Schema {
        column: String,
        row: usize,
        value: String,
        expected: &'static str,
    },

    /// Required columns are absent from the input header
    #[error("Missing columns: {}", .columns.join(", "))]
    MissingColumns { columns: Vec<String> },

    /// The input table has no data rows
    #[error("Input table is empty: at least one lead row is required")]
    EmptyInput,

    /// Policy configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// CSV reader errors
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// TOML parse errors
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Create a schema error for a malformed cell
    pub fn schema(
        column: impl Into<String>,
        row: usize,
        value: impl Into<String>,
        expected: &'static str,
    ) -> Self {
        Self::Schema {
            column: column.into(),
            row,
            value: value.into(),
            expected,
        }
    }

    /// Create a missing-columns error; the list is sorted so messages are stable
    pub fn missing_columns<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        columns.sort();
        columns.dedup();
        Self::MissingColumns { columns }
    }

    /// Whether the error stems from the shape or content of the input table
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::Schema { .. } | Self::MissingColumns { .. } | Self::EmptyInput
        )
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_error_names_column() {
        let err = Error::schema("AI_Attempted_Calls", 3, "three", "a non-negative integer");
        let message = err.to_string();
        assert!(message.contains("AI_Attempted_Calls"));
        assert!(message.contains("row 3"));
        assert!(message.contains("three"));
        assert!(err.is_input_error());
    }

    #[test]
    fn test_missing_columns_are_sorted_and_deduplicated() {
        let err = Error::missing_columns(["Lead_State", "AI_Connected_Calls", "Lead_State"]);
        assert_eq!(
            err.to_string(),
            "Missing columns: AI_Connected_Calls, Lead_State"
        );
    }

    #[test]
    fn test_io_and_config_errors_are_not_input_errors() {
        assert!(Error::EmptyInput.is_input_error());
        let io = Error::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert!(!io.is_input_error());
        assert!(!Error::Configuration("weights".to_string()).is_input_error());
    }
}

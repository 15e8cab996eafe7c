use std::io;
use std::path::PathBuf;
use thiserror::Error;

/* ============================================================
 * Crate-wide error type
 * ============================================================
 */

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("Unknown demo '{name}' (try one of: {available})")]
    UnknownDemo { name: String, available: String },

    #[error("Failed to parse config at line {line}, column {col}: {message}")]
    ConfigParse {
        line: usize,
        col: usize,
        message: String,
    },

    #[error("Failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid date '{input}': expected YYYY-MM-DD")]
    InvalidDate { input: String },

    #[error("Output error: {0}")]
    Io(#[from] io::Error),
}

impl PatternError {
    pub fn config_parse(line: usize, col: usize, message: impl Into<String>) -> Self {
        Self::ConfigParse {
            line,
            col,
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for PatternError {
    fn from(err: serde_json::Error) -> Self {
        PatternError::config_parse(err.line(), err.column(), err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PatternError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_keeps_location() {
        let err = serde_json::from_str::<serde_json::Value>("{\n  \"a\": }").unwrap_err();
        match PatternError::from(err) {
            PatternError::ConfigParse { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_demo_message_lists_choices() {
        let err = PatternError::UnknownDemo {
            name: "visitor".into(),
            available: "iterator, strategy".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("visitor"));
        assert!(msg.contains("iterator, strategy"));
    }
}

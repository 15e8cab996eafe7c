//! Run configuration for the `patterns` binary, read from TOML or JSON.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PatternError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Demo names to run in order; `all` expands to every demo.
    pub demos: Vec<String>,
    /// Print a colored banner before each demo.
    pub banner: bool,
    /// Items for the iterator demo.
    pub words: Option<Vec<String>>,
    /// Items for the strategy demo.
    pub strategy_input: Option<Vec<String>>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            demos: vec!["iterator".to_string()],
            banner: true,
            words: None,
            strategy_input: None,
        }
    }
}

impl RunConfig {
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(PatternError::from)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|err| {
            let (line, col) = err
                .span()
                .map(|span| line_col(content, span.start))
                .unwrap_or((0, 0));
            PatternError::config_parse(line, col, err.message())
        })
    }

    /// Demos named on the command line win over the file; an empty list keeps
    /// whatever the file (or the default) selected.
    pub fn with_cli_demos(mut self, demos: Vec<String>) -> Self {
        if !demos.is_empty() {
            self.demos = demos;
        }
        self
    }

    /// Picks the parser from the extension, falling back to sniffing the content.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| PatternError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match format.as_deref() {
            Some("json") => Self::from_json(&content),
            Some("toml") => Self::from_toml(&content),
            _ => {
                let trimmed = content.trim_start();
                if trimmed.starts_with('{') {
                    Self::from_json(&content)
                } else {
                    Self::from_toml(&content)
                }
            }
        }
    }
}

/// 1-based line and column of a byte offset.
fn line_col(content: &str, offset: usize) -> (usize, usize) {
    let before = &content[..offset.min(content.len())];
    let line = before.matches('\n').count() + 1;
    let col = before.rsplit('\n').next().map_or(0, |tail| tail.chars().count()) + 1;
    (line, col)
}

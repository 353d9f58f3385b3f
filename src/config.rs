use crate::error::RegexpExtractError;
use serde::Deserialize;

/// What an extraction does when its pattern fails to compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidPatternMode {
    Error,
    Null,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(default)]
pub struct RegexpExtractConfig {
    pub cache_size: usize,
    pub invalid_pattern_mode: InvalidPatternMode,
}

impl Default for RegexpExtractConfig {
    fn default() -> Self {
        Self {
            cache_size: 64,
            invalid_pattern_mode: InvalidPatternMode::Error,
        }
    }
}

impl RegexpExtractConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON object; missing keys keep their defaults.
    pub fn from_json(s: &str) -> Result<Self, RegexpExtractError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn cache_size(mut self, n: usize) -> Self {
        self.cache_size = n;
        self
    }

    pub fn invalid_pattern_mode(mut self, m: InvalidPatternMode) -> Self {
        self.invalid_pattern_mode = m;
        self
    }
}

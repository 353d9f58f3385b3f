use crate::re::RegexError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegexpExtractError {
    #[error("regexp_extract: invalid regex pattern: {0}")]
    InvalidPattern(#[from] Box<RegexError>),

    #[error("regexp_extract: idx must be >= 0, got {0}")]
    NegativeIndex(i32),

    #[error("regexp_extract: idx {index} out of range, pattern has {groups} group(s)")]
    GroupOutOfRange { index: i32, groups: usize },

    #[error("regexp_extract: match error: {0}")]
    MatchError(String),

    #[error("regexp_extract: invalid config: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<RegexError> for RegexpExtractError {
    fn from(e: RegexError) -> Self {
        Self::InvalidPattern(Box::new(e))
    }
}

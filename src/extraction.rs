//! Extraction chains: a column reference plus an ordered list of cheap value
//! transforms, and the evaluator that applies them.

use crate::config::{InvalidPatternMode, RegexpExtractConfig};
use crate::error::RegexpExtractError;
use crate::pattern_cache::PatternCache;
use crate::re;
use serde::{Deserialize, Serialize};

/// Regex extraction: the first match of `expr`, narrowed to capture group `index`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegexExtraction {
    pub expr: String,
    pub index: i32,
    pub replace_missing_value: bool,
    pub replace_missing_value_with: Option<String>,
}

impl RegexExtraction {
    /// Case-sensitive extraction that yields null when nothing matches.
    pub fn new(expr: impl Into<String>, index: i32) -> Self {
        Self {
            expr: expr.into(),
            index,
            replace_missing_value: true,
            replace_missing_value_with: None,
        }
    }

    /// Passes the input through unchanged when nothing matches.
    pub fn keep_unmatched(mut self) -> Self {
        self.replace_missing_value = false;
        self.replace_missing_value_with = None;
        self
    }

    pub fn replace_missing_with(mut self, v: impl Into<String>) -> Self {
        self.replace_missing_value = true;
        self.replace_missing_value_with = Some(v.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ExtractionTransform {
    Regex(RegexExtraction),
}

/// A column reference annotated with transforms, applied in order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SimpleExtraction {
    column: String,
    transforms: Vec<ExtractionTransform>,
}

impl SimpleExtraction {
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            transforms: Vec::new(),
        }
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn transforms(&self) -> &[ExtractionTransform] {
        &self.transforms
    }

    /// Returns a new chain with `transform` appended; `self` is unchanged.
    pub fn cascade(&self, transform: ExtractionTransform) -> Self {
        let mut transforms = Vec::with_capacity(self.transforms.len() + 1);
        transforms.extend_from_slice(&self.transforms);
        transforms.push(transform);
        Self {
            column: self.column.clone(),
            transforms,
        }
    }
}

/// Applies extraction chains to single values, caching compiled patterns.
pub struct ExtractionEvaluator {
    cache: PatternCache,
    invalid_pattern_mode: InvalidPatternMode,
}

impl ExtractionEvaluator {
    pub fn new(cfg: &RegexpExtractConfig) -> Self {
        Self {
            cache: PatternCache::new(cfg.cache_size),
            invalid_pattern_mode: cfg.invalid_pattern_mode,
        }
    }

    pub fn evaluate(
        &mut self,
        extraction: &SimpleExtraction,
        value: Option<&str>,
    ) -> Result<Option<String>, RegexpExtractError> {
        let mut current = value.map(str::to_owned);
        for transform in extraction.transforms() {
            current = self.apply(transform, current.as_deref())?;
        }
        Ok(current)
    }

    pub fn apply(
        &mut self,
        transform: &ExtractionTransform,
        value: Option<&str>,
    ) -> Result<Option<String>, RegexpExtractError> {
        match transform {
            ExtractionTransform::Regex(rx) => self.apply_regex(rx, value),
        }
    }

    pub fn apply_regex(
        &mut self,
        rx: &RegexExtraction,
        value: Option<&str>,
    ) -> Result<Option<String>, RegexpExtractError> {
        if rx.index < 0 {
            return Err(RegexpExtractError::NegativeIndex(rx.index));
        }

        let compiled = match self.cache.get_or_compile(&rx.expr) {
            Ok(compiled) => compiled,
            Err(e) => {
                return match self.invalid_pattern_mode {
                    InvalidPatternMode::Error => Err(e),
                    InvalidPatternMode::Null => Ok(None),
                };
            }
        };

        let groups = re::group_count(compiled);
        let index = rx.index as usize;
        if index > groups {
            return Err(RegexpExtractError::GroupOutOfRange {
                index: rx.index,
                groups,
            });
        }

        // null input is matched as the empty string
        let subject = value.unwrap_or("");
        let found = re::first_group(compiled, subject, index)
            .map_err(|e| RegexpExtractError::MatchError(e.to_string()))?;

        let out = match found {
            Some(group) => group.map(str::to_owned),
            None if rx.replace_missing_value => rx.replace_missing_value_with.clone(),
            None => value.map(str::to_owned),
        };
        // empty results are reported as null
        Ok(out.filter(|v| !v.is_empty()))
    }
}

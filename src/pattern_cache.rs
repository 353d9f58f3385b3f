use crate::error::RegexpExtractError;
use crate::re::{self, Regex};
use lru::LruCache;
use std::num::NonZeroUsize;

/// Bounded cache of compiled patterns, keyed by pattern text.
pub struct PatternCache {
    lru: LruCache<String, Regex>,
}

impl PatternCache {
    pub fn new(cap: usize) -> Self {
        // LruCache requires NonZeroUsize; clamp 0 to 1
        let cap_nz = NonZeroUsize::new(cap).unwrap_or(NonZeroUsize::MIN);
        Self {
            lru: LruCache::new(cap_nz),
        }
    }

    pub fn len(&self) -> usize {
        self.lru.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lru.is_empty()
    }

    pub fn get_or_compile(&mut self, pat: &str) -> Result<&Regex, RegexpExtractError> {
        if !self.lru.contains(pat) {
            let compiled = re::compile(pat)?;
            self.lru.put(pat.to_string(), compiled);
        }
        self.lru
            .get(pat)
            .ok_or_else(|| RegexpExtractError::MatchError(format!("pattern {pat:?} evicted")))
    }
}

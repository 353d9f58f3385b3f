//! Regex engine selection. `fancy-regex` adds look-around and backreferences.

#[cfg(feature = "fancy-regex")]
pub use fancy_regex as engine;
#[cfg(not(feature = "fancy-regex"))]
pub use regex as engine;

pub type Regex = engine::Regex;

#[cfg(feature = "fancy-regex")]
pub type RegexError = fancy_regex::Error;
#[cfg(not(feature = "fancy-regex"))]
pub type RegexError = regex::Error;

#[inline]
pub fn compile(pat: &str) -> Result<Regex, Box<RegexError>> {
    engine::Regex::new(pat).map_err(Box::new)
}

/// Number of capture groups, not counting the implicit whole-match group 0.
#[inline]
pub fn group_count(re: &Regex) -> usize {
    re.captures_len().saturating_sub(1)
}

/// Text of group `index` in the first match of `re` within `s`.
///
/// `Ok(None)` means no match; `Ok(Some(None))` means the match succeeded but
/// the group did not participate.
pub fn first_group<'a>(
    re: &Regex,
    s: &'a str,
    index: usize,
) -> Result<Option<Option<&'a str>>, Box<RegexError>> {
    #[cfg(feature = "fancy-regex")]
    let caps = re.captures(s).map_err(Box::new)?;
    #[cfg(not(feature = "fancy-regex"))]
    let caps = re.captures(s);

    Ok(caps.map(|c| c.get(index).map(|m| m.as_str())))
}

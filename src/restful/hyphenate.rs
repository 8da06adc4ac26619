//! Hyphenated resource and event names.
//!
//! A physical path may spell a multi-word resource as one hyphenated segment
//! (`/ballet-dancers/1/`) while the logical action path keeps the words as
//! separate segments (`/ballet/dancers/1/`). Actions declare such aliases so
//! the reverse direction knows which logical segments to join.

use crate::runtime_config::ConfigError;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

use crate::path::MAX_INLINE_SEGMENTS;

/// A declared hyphenated alias such as `ballet-dancers`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HyphenatedName {
    name: String,
}

impl HyphenatedName {
    /// Create an alias; it needs at least two non-empty words joined by `-`.
    pub fn new(name: impl Into<String>) -> Result<Self, ConfigError> {
        let name = name.into();
        let valid = name.contains('-') && name.split('-').all(|part| !part.is_empty()) && !name.contains('/');
        if !valid {
            return Err(ConfigError::InvalidHyphenatedName { name });
        }
        Ok(Self { name })
    }

    /// The hyphenated form used in physical paths.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// The words of the alias (`ballet`, `dancers`).
    pub fn parts(&self) -> impl Iterator<Item = &str> {
        self.name.split('-')
    }

    /// Number of logical segments the alias stands for.
    #[must_use]
    pub fn part_count(&self) -> usize {
        self.parts().count()
    }

    /// Camel-case form (`balletDancers`), as used by event method keywords.
    #[must_use]
    pub fn camel_case(&self) -> String {
        camelize(self.parts())
    }

    fn matches_at(&self, segments: &[&str]) -> bool {
        let mut parts = self.parts();
        let mut count = 0;
        for segment in segments {
            match parts.next() {
                Some(part) if part == *segment => count += 1,
                Some(_) => return false,
                None => break,
            }
        }
        parts.next().is_none() && count > 0
    }
}

impl fmt::Display for HyphenatedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl TryFrom<String> for HyphenatedName {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for HyphenatedName {
    type Error = ConfigError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<HyphenatedName> for String {
    fn from(value: HyphenatedName) -> Self {
        value.name
    }
}

/// Group logical resource segments into physical tokens.
///
/// At each position the longest declared alias whose words match the next
/// segments replaces them; unmatched segments stay as their own token.
///
/// ```
/// use restroute::restful::{group_resource_names, HyphenatedName};
///
/// let names = vec![HyphenatedName::new("ballet-dancers").unwrap()];
/// let grouped = group_resource_names(&["ballet", "dancers", "greetings"], &names);
/// assert_eq!(grouped.as_slice(), &["ballet-dancers", "greetings"]);
/// ```
#[must_use]
pub fn group_resource_names<'a>(
    segments: &[&'a str],
    names: &'a [HyphenatedName],
) -> SmallVec<[&'a str; MAX_INLINE_SEGMENTS]> {
    let mut grouped = SmallVec::new();
    let mut index = 0;
    while index < segments.len() {
        let rest = &segments[index..];
        let alias = names
            .iter()
            .filter(|name| name.matches_at(rest))
            .max_by_key(|name| name.part_count());
        match alias {
            Some(alias) => {
                grouped.push(alias.as_str());
                index += alias.part_count();
            }
            None => {
                grouped.push(segments[index]);
                index += 1;
            }
        }
    }
    grouped
}

/// Find the event-suffix alias whose camel-case form equals the keyword.
///
/// Keyword segments are camel-joined first (`["sales", "history"]` ->
/// `salesHistory`), so both split and already camel-cased keywords match
/// the alias `sales-history`.
#[must_use]
pub fn find_event_alias<'a>(keywords: &[&str], names: &'a [HyphenatedName]) -> Option<&'a HyphenatedName> {
    if keywords.is_empty() || names.is_empty() {
        return None;
    }
    let keyword = camelize(keywords.iter().copied());
    names.iter().find(|name| name.camel_case() == keyword)
}

fn camelize<'a>(words: impl Iterator<Item = &'a str>) -> String {
    let mut out = String::new();
    for (index, word) in words.enumerate() {
        if index == 0 {
            out.push_str(word);
            continue;
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

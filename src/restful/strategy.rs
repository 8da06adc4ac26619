//! Segment classification strategies.
//!
//! A strategy decides whether a split path is a RESTful pattern at all and,
//! if so, which segments are resource names and which are identifiers.
//! Classification is a heuristic: anything ambiguous is reported as not
//! RESTful so the host falls back to conventional routing.

use crate::path::is_number;
use crate::runtime_config::ConfigError;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

use crate::path::MAX_INLINE_SEGMENTS;

/// How path segments are told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RestfulStrategy {
    /// Identifiers are decimal numbers (`/products/1/purchases/2/`).
    ///
    /// Allows one named event segment directly after a resource name, before
    /// any identifier (`/products/sales/1/`), and supports the virtual list
    /// marker.
    #[default]
    #[serde(rename = "numeric", alias = "numeric_based")]
    NumericBased,
    /// Resource names and identifiers strictly alternate; identifiers may be
    /// any string (`/products/abc/purchases/xyz/`).
    #[serde(rename = "pair", alias = "pair_based")]
    PairBased,
}

/// Role of a single segment in a RESTful path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentKind {
    /// Resource name, possibly hyphenated (`ballet-dancers`)
    ResourceName,
    /// Resource identifier (`1`)
    Identifier,
    /// Named event directly after the leading resource name (`sales` in `/products/sales/1/`)
    EventSuffix,
}

impl SegmentKind {
    /// `true` for segments that end up in the resource-name group of a mapping path.
    #[inline]
    #[must_use]
    pub fn is_name(self) -> bool {
        !matches!(self, SegmentKind::Identifier)
    }
}

/// Kinds of all segments of a path that classified as RESTful.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestfulShape {
    kinds: SmallVec<[SegmentKind; MAX_INLINE_SEGMENTS]>,
}

impl RestfulShape {
    /// Segment kinds in path order.
    #[must_use]
    pub fn kinds(&self) -> &[SegmentKind] {
        &self.kinds
    }

    /// Whether the last segment is a plain resource name.
    ///
    /// This is the "list of related resources" shape (`/products/1/purchases/`).
    #[must_use]
    pub fn ends_with_resource_name(&self) -> bool {
        self.kinds.last() == Some(&SegmentKind::ResourceName)
    }
}

impl RestfulStrategy {
    /// Classify a split path.
    ///
    /// Returns `None` when the path is not RESTful: empty (root), starting
    /// with one of `reserved_prefixes`, or violating the strategy's
    /// resource/identifier alternation.
    #[must_use]
    pub fn classify<S: AsRef<str>>(
        self,
        segments: &[S],
        reserved_prefixes: &[String],
    ) -> Option<RestfulShape> {
        let first = segments.first()?.as_ref();
        if reserved_prefixes.iter().any(|p| p == first) {
            return None;
        }
        match self {
            RestfulStrategy::NumericBased => classify_numeric(segments),
            RestfulStrategy::PairBased => classify_pair(segments),
        }
    }

    /// Whether a split path is a RESTful pattern for this strategy.
    #[must_use]
    pub fn is_restful_path<S: AsRef<str>>(self, segments: &[S], reserved_prefixes: &[String]) -> bool {
        self.classify(segments, reserved_prefixes).is_some()
    }

    /// Whether a segment after the business elements of a generated URL is a parameter.
    ///
    /// Numeric strategy: numbers and the unresolved-template `placeholder`.
    /// Pair strategy: always, since pairing leaves no room for event keywords.
    #[inline]
    #[must_use]
    pub fn is_parameter(self, segment: &str, placeholder: &str) -> bool {
        match self {
            RestfulStrategy::NumericBased => is_number(segment) || segment == placeholder,
            RestfulStrategy::PairBased => true,
        }
    }

    /// Whether the virtual list marker applies to this strategy.
    #[must_use]
    pub fn supports_virtual_list(self) -> bool {
        matches!(self, RestfulStrategy::NumericBased)
    }

    /// Configuration name of the strategy.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            RestfulStrategy::NumericBased => "numeric",
            RestfulStrategy::PairBased => "pair",
        }
    }
}

impl fmt::Display for RestfulStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RestfulStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "numeric" | "numeric_based" | "numeric-based" => Ok(RestfulStrategy::NumericBased),
            "pair" | "pair_based" | "pair-based" => Ok(RestfulStrategy::PairBased),
            _ => Err(ConfigError::UnknownStrategy {
                value: s.to_string(),
            }),
        }
    }
}

/// Whether a segment can stand in the resource-name group.
///
/// Forward conversion splits names on `-`, so every hyphen-separated word
/// must be present and none may read as an identifier (`-`, `--5`).
fn is_name_segment(segment: &str) -> bool {
    let mut words = segment.split('-').filter(|w| !w.is_empty()).peekable();
    words.peek().is_some() && words.all(|w| !is_number(w))
}

// Resource names sit at resource positions and identifiers at identifier
// positions, starting with a resource. Before the first identifier, one
// non-numeric segment may take an identifier position right after a
// resource name; it becomes the event suffix and the next segment is again
// an identifier position.
fn classify_numeric<S: AsRef<str>>(segments: &[S]) -> Option<RestfulShape> {
    let mut kinds = SmallVec::with_capacity(segments.len());
    let mut expect_resource = true;
    let mut event_seen = false;
    let mut identifier_seen = false;
    for segment in segments {
        let segment = segment.as_ref();
        let numeric = is_number(segment);
        if expect_resource {
            if numeric || !is_name_segment(segment) {
                return None;
            }
            kinds.push(SegmentKind::ResourceName);
            expect_resource = false;
        } else if numeric {
            kinds.push(SegmentKind::Identifier);
            identifier_seen = true;
            expect_resource = true;
        } else {
            if event_seen || identifier_seen || !is_name_segment(segment) {
                return None;
            }
            event_seen = true;
            kinds.push(SegmentKind::EventSuffix);
        }
    }
    Some(RestfulShape { kinds })
}

fn classify_pair<S: AsRef<str>>(segments: &[S]) -> Option<RestfulShape> {
    let mut kinds = SmallVec::with_capacity(segments.len());
    for (index, segment) in segments.iter().enumerate() {
        if index % 2 == 0 {
            let segment = segment.as_ref();
            if is_number(segment) || !is_name_segment(segment) {
                return None;
            }
            kinds.push(SegmentKind::ResourceName);
        } else {
            kinds.push(SegmentKind::Identifier);
        }
    }
    Some(RestfulShape { kinds })
}

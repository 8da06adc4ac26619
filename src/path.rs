//! # Path Module
//!
//! Low-level helpers shared by both conversion directions: splitting a URL
//! path into segments, the lexical numeric test, rendering segments back into
//! a slash-wrapped path, and separating a query string or fragment from the
//! path part of a generated URL.
//!
//! Paths are assumed to be percent-decoded already. No case folding or
//! normalization happens here.

use smallvec::SmallVec;

/// Maximum number of path segments before heap allocation.
/// Most RESTful paths have ≤4 resource/identifier pairs (e.g. `/a/1/b/2/c/3/d/4/`).
pub const MAX_INLINE_SEGMENTS: usize = 8;

/// Stack-allocated segment list borrowing from the input path.
pub type Segments<'a> = SmallVec<[&'a str; MAX_INLINE_SEGMENTS]>;

/// Split a path on `/`, discarding empty segments.
///
/// Leading, trailing and doubled slashes produce no empty segments.
///
/// ```
/// use restroute::path::split_path;
///
/// assert_eq!(split_path("/products/1/purchases/").as_slice(), &["products", "1", "purchases"]);
/// assert!(split_path("/").is_empty());
/// ```
#[must_use]
pub fn split_path(path: &str) -> Segments<'_> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Lexical numeric check: one or more ASCII digits with an optional leading `-`.
///
/// This is not a parse; `99999999999999999999999` is numeric here.
#[inline]
#[must_use]
pub fn is_number(segment: &str) -> bool {
    let digits = segment.strip_prefix('-').unwrap_or(segment);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Render segments as a slash-wrapped path (`["a", "b"]` -> `/a/b/`).
///
/// An empty list renders as the root path `/`.
#[must_use]
pub fn build_path<S: AsRef<str>>(segments: &[S]) -> String {
    let capacity = segments.iter().map(|s| s.as_ref().len() + 1).sum::<usize>() + 1;
    let mut path = String::with_capacity(capacity);
    path.push('/');
    for segment in segments {
        path.push_str(segment.as_ref());
        path.push('/');
    }
    path
}

/// Split a URL into its path part and the trailing `?query` / `#fragment`.
///
/// The suffix keeps its leading `?` or `#` so it can be appended back verbatim.
/// Whichever of the two markers comes first starts the suffix.
#[must_use]
pub fn split_query(url: &str) -> (&str, &str) {
    match url.find(['?', '#']) {
        Some(idx) => url.split_at(idx),
        None => (url, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_discards_empty_segments() {
        assert_eq!(split_path("//a///b/").as_slice(), &["a", "b"]);
        assert_eq!(split_path("a/b").as_slice(), &["a", "b"]);
        assert!(split_path("").is_empty());
        assert!(split_path("///").is_empty());
    }

    #[test]
    fn test_split_keeps_case_and_encoding() {
        assert_eq!(split_path("/Ballet-Dancers/%20/").as_slice(), &["Ballet-Dancers", "%20"]);
    }

    #[test]
    fn test_is_number() {
        assert!(is_number("0"));
        assert!(is_number("1234567890123456789012345"));
        assert!(is_number("-7"));
        assert!(!is_number(""));
        assert!(!is_number("-"));
        assert!(!is_number("1a"));
        assert!(!is_number("1.5"));
        assert!(!is_number("+1"));
        assert!(!is_number("{}"));
        assert!(!is_number("１")); // full-width digit is not ASCII
    }

    #[test]
    fn test_build_path() {
        assert_eq!(build_path(&["products", "purchases", "1"]), "/products/purchases/1/");
        assert_eq!(build_path::<&str>(&[]), "/");
        assert_eq!(build_path(&[String::from("a")]), "/a/");
    }

    #[test]
    fn test_split_query() {
        assert_eq!(split_query("/products/1/"), ("/products/1/", ""));
        assert_eq!(split_query("/products/1/?sort=asc"), ("/products/1/", "?sort=asc"));
        assert_eq!(split_query("/products/1/#top"), ("/products/1/", "#top"));
        assert_eq!(
            split_query("/products/1/?sort=asc#top"),
            ("/products/1/", "?sort=asc#top")
        );
        assert_eq!(split_query("/a/#frag?x"), ("/a/", "#frag?x"));
    }
}
